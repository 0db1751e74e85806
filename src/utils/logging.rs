//! File logger setup. The terminal belongs to the game, so log lines go to
//! ~/.rouky-jump/rouky-jump.log instead of stderr.

use super::paths::data_path;
use env_logger::{Builder, Env, Target};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

pub const LOG_FILE_NAME: &str = "rouky-jump.log";

/// Level used when RUST_LOG is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Open the log file for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Route `log` output to the app's log file. Returns the file path.
pub fn init_file_logger() -> io::Result<PathBuf> {
    let path = data_path(LOG_FILE_NAME)?;
    let file = open_log_file(&path)?;

    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;

    log::info!("logging to {}", path.display());
    Ok(path)
}
