//! Paths under ~/.rouky-jump/.

use std::fs;
use std::io;
use std::path::PathBuf;

pub const APP_DIR_NAME: &str = ".rouky-jump";

/// Get the ~/.rouky-jump/ directory path, creating it if needed.
pub fn app_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(APP_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.rouky-jump/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(app_dir()?.join(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_dir_exists() {
        let dir = app_dir().expect("app_dir should succeed");
        assert!(dir.exists());
        assert!(dir.ends_with(APP_DIR_NAME));
    }

    #[test]
    fn test_data_path_format() {
        let path = data_path("test.log").expect("data_path should succeed");
        assert!(path.to_string_lossy().ends_with(".rouky-jump/test.log"));
    }
}
