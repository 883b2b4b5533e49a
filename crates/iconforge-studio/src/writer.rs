use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use iconforge_engine::icon::produce_png;

use crate::config::IconSetConfig;

/// Renders and writes every size in `config`, returning the written paths.
///
/// Each file is written to a temporary sibling and renamed into place, so a
/// failure never leaves a truncated icon behind. Stops at the first error.
pub fn write_icon_set(config: &IconSetConfig) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("creating {}", config.out_dir.display()))?;

    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let bytes = produce_png(size, config.design)?;
        let path = config.path_for(size);
        write_atomic(&path, &bytes)?;

        log::info!("created {} ({size}x{size}, {} bytes)", config.file_name(size), bytes.len());
        written.push(path);
    }
    Ok(written)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = path.with_extension("png.tmp");
    fs::write(&tmp, bytes).with_context(|| format!("writing {}", tmp.display()))?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err).with_context(|| format!("moving {} into place", path.display()));
    }
    Ok(())
}
