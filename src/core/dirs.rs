use crate::core::error::StarpostError;
use std::path::PathBuf;

pub fn get_config_directory() -> Result<PathBuf, StarpostError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|_| {
                dirs::home_dir()
                    .map(|home| home.join(".config"))
                    .ok_or(StarpostError::ConfigDirectoryNotFound)
            })?,
        "macos" => dirs::home_dir()
            .map(|home| home.join("Library/Application Support"))
            .ok_or(StarpostError::ConfigDirectoryNotFound)?,
        _ => dirs::config_dir().ok_or(StarpostError::ConfigDirectoryNotFound)?,
    };

    Ok(base.join("starpost"))
}
