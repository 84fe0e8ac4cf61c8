use dirs::home_dir;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{SplitError, SplitResult};

pub fn expand_tilde(path: PathBuf) -> SplitResult<PathBuf> {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = home_dir() {
            return Ok(home.join(stripped));
        } else {
            return Err(SplitError::Config(
                "Could not determine home directory".to_string(),
            ));
        }
    }

    Ok(path)
}

/// Write `contents` to `path`, creating missing parent directories first.
pub fn write_asset(path: &Path, contents: &str) -> SplitResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
