pub const MINIMAL: &str = r#"[{"_id":"a1","created_at":"2023-01-01T00:00:00Z","device":"dev1","pump":{"battery":{"percent":80,"status":"normal","voltage":1.5},"reservoir":120.5,"clock":"2023-01-01T00:00:00Z","pumpID":"PMP1"},"sensor":{"sensorRemaining":5,"sensorAge":2},"uploader":{"battery":90,"timestamp":"2023-01-01T00:00:00Z","name":"phone1"},"sensorNotActive":false}]"#;

pub const WITH_LOOP: &str = r#"
[
  {
    "_id": "5f1e2d3c4b5a697887766554",
    "created_at": "2023-03-14T09:26:53.000Z",
    "device": "loop://iPhone",
    "sensorNotActive": false,
    "pump": {
      "battery": {"percent": 62, "status": "normal", "voltage": 1.38},
      "reservoir": 87.35,
      "clock": "2023-03-14T09:26:08Z",
      "iob": {"bolusiob": 1.25, "timestamp": "2023-03-14T09:25:00Z", "iob": 2.05},
      "pumpID": "554433"
    },
    "sensor": {"sensorRemaining": 6, "sensorAge": 4},
    "uploader": {"battery": 47, "timestamp": "2023-03-14T09:26:53Z", "name": "iPhone"},
    "loop": {
      "version": "3.2.1",
      "name": "Loop",
      "timestamp": "2023-03-14T09:26:50Z",
      "recommendedTempBasal": {"timestamp": "2023-03-14T09:26:50Z", "rate": 0.45, "duration": 30},
      "recommendedBolus": 0.35,
      "predicted": {"startDate": "2023-03-14T09:25:00Z", "values": [142, 140, 138, 135, 133]},
      "iob": {"timestamp": "2023-03-14T09:25:00Z", "iob": 2.15},
      "enacted": {"timestamp": "2023-03-14T09:26:51Z", "rate": 0.45, "duration": 30, "received": true},
      "cob": {"timestamp": "2023-03-14T09:25:00Z", "cob": 12.5}
    }
  },
  {
    "_id": "5f1e2d3c4b5a697887766555",
    "created_at": 1678786313000,
    "device": "loop://iPhone",
    "sensorNotActive": true,
    "pump": {
      "battery": {"percent": 61, "status": "low", "voltage": 1.21},
      "reservoir": 86.9,
      "clock": "2023-03-14T09:31:08Z",
      "pumpID": "554433"
    },
    "loop": {
      "version": "3.2.1",
      "name": "Loop",
      "timestamp": "2023-03-14T09:31:50Z",
      "failureReason": "pumpCommunicationTimeout"
    }
  }
]
"#;

pub const PERCENT_AS_STRING: &str = r#"[{"_id":"a1","created_at":"2023-01-01T00:00:00Z","device":"dev1","pump":{"battery":{"percent":"80","status":"normal","voltage":1.5},"reservoir":120.5,"clock":"2023-01-01T00:00:00Z","pumpID":"PMP1"},"sensorNotActive":false}]"#;

pub const INTEGRAL_DECIMALS: &str = r#"[{"_id":"b7","created_at":"2023-03-14T09:26:53.000Z","device":"openaps://rig","sensorNotActive":false,"pump":{"battery":{"percent":100,"status":"normal","voltage":1},"reservoir":120,"clock":"2023-03-14T09:26:08Z","iob":{"bolusiob":0,"timestamp":1678786010000,"iob":0},"pumpID":"554433"},"loop":{"timestamp":1678786010000,"recommendedTempBasal":{"timestamp":1678786010000,"rate":0,"duration":30},"recommendedBolus":629.35925880763882,"iob":{"timestamp":1678786010000,"iob":-0.25},"enacted":{"timestamp":1678786011000,"rate":0,"duration":30,"received":true},"cob":{"timestamp":1678786010000,"cob":0}}}]"#;

pub const PARTIAL_SECTIONS: &str = r#"
[
  {
    "_id": "c3",
    "created_at": "2023-03-14T10:00:00Z",
    "device": "xdrip",
    "sensorNotActive": false,
    "pump": {
      "battery": {"percent": 40, "status": "low", "voltage": 1.21},
      "reservoir": 45.5,
      "clock": "2023-03-14T09:59:30Z",
      "iob": {"timestamp": "2023-03-14T09:59:00Z", "iob": 0.5},
      "pumpID": "778899"
    },
    "sensor": {"sensorAge": 3},
    "uploader": {"battery": 55}
  }
]
"#;
