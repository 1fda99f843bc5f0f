use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::render::Badge;

pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Writes a badge to `dir/file_name`, replacing any previous file.
pub fn write_badge(dir: &Path, file_name: &str, badge: &Badge) -> Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, badge.svg())?;

    if badge.is_generated() {
        tracing::info!("Generated {}", path.display());
    } else {
        tracing::info!("Wrote placeholder to {}", path.display());
    }
    Ok(path)
}
