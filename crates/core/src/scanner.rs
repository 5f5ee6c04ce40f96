//! Scans drawing pool directories and parses filenames into records.

use crate::filenames;
use crate::models::{CategoryDrawing, DelayedRecallDrawing};
use anyhow::Context;
use globset::Glob;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// List the `*.jpg` filenames in `dir`, sorted lexicographically.
///
/// The pools are flat, so only the top directory level is visited. Sorting
/// makes grouping and "first N" decisions independent of the platform's
/// directory enumeration order.
fn list_jpg_names(dir: &Path) -> anyhow::Result<Vec<String>> {
    anyhow::ensure!(dir.is_dir(), "pool directory not found: {}", dir.display());
    let matcher = Glob::new("*.jpg")?.compile_matcher();

    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let path = entry.path();
        if path.is_dir() || is_hidden(path) {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => continue,
        };
        if matcher.is_match(name) {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

pub fn scan_delayed_recall(
    dir: &Path,
    categories: &[String],
) -> anyhow::Result<Vec<DelayedRecallDrawing>> {
    let names =
        list_jpg_names(dir).with_context(|| format!("scanning delayed-recall pool {}", dir.display()))?;
    let records: Vec<DelayedRecallDrawing> = names
        .iter()
        .filter_map(|n| filenames::parse_delayed_recall(n, categories))
        .collect();
    debug!(
        "matched {} of {} jpg files in {}",
        records.len(),
        names.len(),
        dir.display()
    );
    Ok(records)
}

pub fn scan_category(dir: &Path, categories: &[String]) -> anyhow::Result<Vec<CategoryDrawing>> {
    let names =
        list_jpg_names(dir).with_context(|| format!("scanning category pool {}", dir.display()))?;
    let records: Vec<CategoryDrawing> = names
        .iter()
        .filter_map(|n| filenames::parse_category(n, categories))
        .collect();
    debug!(
        "matched {} of {} jpg files in {}",
        records.len(),
        names.len(),
        dir.display()
    );
    Ok(records)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}
