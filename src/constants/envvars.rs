pub const LOG_LEVEL: &str = "LOGGING_LEVEL";
pub const ENV_FILE: &str = "NSDOC_ENV_FILE";
