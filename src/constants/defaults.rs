pub const LOG_LEVEL: &str = "INFO";

/// Input path meaning "read from stdin"
pub const STDIN_PATH: &str = "-";
