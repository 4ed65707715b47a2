//! Source file selection for one directory under one configuration
//!
//! Two selection modes exist. Without explicit `src` patterns, the immediate
//! files of the directory are scanned per recognized extension; with
//! patterns, each is expanded as a glob rooted at the directory. Both modes
//! apply the directory's exclusion set per candidate file.

use crate::error::CssBuildError;
use crate::exclusions::ExcludeSet;
use crate::result::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Non-recursive scan of `dir` for the given extensions.
///
/// Files are returned extension-group by extension-group, in the order the
/// extensions are given, so multi-dialect directories are processed
/// deterministically by dialect. Names are sorted within each group.
pub fn select_by_extension(
    dir: &Path,
    extensions: &[&str],
    excludes: &ExcludeSet,
) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    let read_dir = std::fs::read_dir(dir).map_err(|e| CssBuildError::io(dir.to_path_buf(), e))?;
    for entry in read_dir {
        let entry = entry.map_err(|e| CssBuildError::io(dir.to_path_buf(), e))?;
        let path = entry.path();
        if path.is_file() {
            entries.push(path);
        }
    }

    let mut selected = Vec::new();
    for ext in extensions {
        let mut group: Vec<PathBuf> = entries
            .iter()
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(*ext))
            .filter(|p| !excludes.contains_file(p))
            .cloned()
            .collect();
        group.sort();
        selected.extend(group);
    }

    Ok(selected)
}

/// Expand `patterns` as include globs rooted at `dir`.
///
/// All matches are combined into one lexicographically sorted, deduplicated
/// list, so overlapping patterns never select a file twice within a single
/// configuration record. An invalid pattern is fatal.
pub fn select_by_patterns(
    dir: &Path,
    patterns: &[String],
    excludes: &ExcludeSet,
) -> Result<Vec<PathBuf>> {
    let mut matches = BTreeSet::new();

    for pattern in patterns {
        let full_pattern = if Path::new(pattern).is_absolute() {
            pattern.clone()
        } else {
            format!("{}/{}", dir.display(), pattern)
        };

        let paths = glob::glob(&full_pattern).map_err(|e| CssBuildError::Pattern {
            pattern: pattern.clone(),
            source: e,
        })?;

        for entry in paths {
            match entry {
                Ok(path) => {
                    if path.is_file() {
                        matches.insert(path);
                    }
                }
                Err(e) => tracing::warn!("Skipping unreadable glob match: {e}"),
            }
        }
    }

    Ok(matches
        .into_iter()
        .filter(|p| !excludes.contains_file(p))
        .collect())
}
