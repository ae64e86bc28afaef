use std::env;
use std::path::PathBuf;

use nsdoc::constants::envvars;

/// Load `.env` from the working directory, then the file named by
/// `NSDOC_ENV_FILE` if set. Variables already in the environment win.
///
/// Returns the files that were loaded; logging is not set up yet when this runs.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();
    if let Ok(path) = dotenv::dotenv() {
        loaded.push(path);
    }
    if let Ok(env_file) = env::var(envvars::ENV_FILE) {
        let env_file = PathBuf::from(env_file);
        if dotenv::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }
    loaded
}
