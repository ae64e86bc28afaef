use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

use nsdoc::constants::defaults;

pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == defaults::STDIN_PATH {
        log::debug!("Reading document from stdin");
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }
    log::debug!("Reading document from {}", path.display());
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}
