//! Utility modules: app directory and log file.

pub mod logging;
pub mod paths;

pub use logging::init_file_logger;
pub use paths::{app_dir, data_path};
