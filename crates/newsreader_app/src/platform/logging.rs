//! File logging for the terminal UI.
//!
//! The alternate screen belongs to the UI, so log records only ever go to a file.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

/// Destination for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Truncate and write to this file.
    File(PathBuf),
    Disabled,
}

/// Installs the global logger. Failures are reported on stderr and leave logging off.
pub fn initialize(destination: &LogDestination, level: LevelFilter) {
    let path = match destination {
        LogDestination::File(path) => path,
        LogDestination::Disabled => return,
    };

    match create_log_file(path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, build_config(), file);
        }
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}
