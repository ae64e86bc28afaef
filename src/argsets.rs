use std::path::PathBuf;

pub struct DocArgs {
    /// Document file, or "-" for stdin
    pub path: PathBuf,
    pub pretty: bool,
}
