use std::{fs, io, path::PathBuf};

use directories::BaseDirs;

/// Creates an `alder` directory in the system's data directory if it
/// doesn't exist and returns its path.
pub fn create_alder_dir() -> io::Result<PathBuf> {
    if let Some(base_dirs) = BaseDirs::new() {
        let alder_dir = base_dirs.data_dir().join("alder");
        if !alder_dir.exists() {
            fs::create_dir_all(&alder_dir)?;
        }
        Ok(alder_dir)
    } else {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Base directories not found",
        ))
    }
}
