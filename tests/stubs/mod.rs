#![allow(dead_code)]
// Each test binary only uses some of these

pub mod device_status;
