//! Copies selected drawings into the output directory tree.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Copy each named file from `src_dir` into `dest_dir`, creating the
/// destination as needed. A missing source or unwritable destination
/// aborts the run; files already copied are left in place.
pub fn copy_into(files: &[String], src_dir: &Path, dest_dir: &Path) -> Result<u64> {
    fs::create_dir_all(dest_dir).with_context(|| format!("creating {}", dest_dir.display()))?;

    let mut copied = 0u64;
    for name in files {
        let src = src_dir.join(name);
        let dest = dest_dir.join(name);
        fs::copy(&src, &dest)
            .with_context(|| format!("copying {} to {}", src.display(), dest.display()))?;
        copied += 1;
    }
    Ok(copied)
}
