//! Output routing: where a compiled result is written, and how
//!
//! The destination is derived fresh from the configuration record for every
//! dispatched file; records in the same pass may route differently.

use crate::config::{Config, OutputTarget};
use crate::error::CssBuildError;
use crate::result::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Extension given to compiled files
pub const CSS_EXTENSION: &str = "css";

/// Write compiled CSS for `source` according to `config`'s output target.
///
/// Returns the destination path. Overwrite modes replace any existing file;
/// the aggregate mode appends, accumulating results in selection order onto
/// the file truncated at normalization time.
pub fn write_css(source: &Path, css: &str, config: &Config) -> Result<PathBuf> {
    match config.output() {
        OutputTarget::SameDirectory => {
            let dest = source.with_extension(CSS_EXTENSION);
            fs::write(&dest, css).map_err(|e| CssBuildError::io(dest.clone(), e))?;
            Ok(dest)
        }
        OutputTarget::Aggregate(dest) => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(dest)
                .map_err(|e| CssBuildError::io(dest.clone(), e))?;
            file.write_all(css.as_bytes())
                .map_err(|e| CssBuildError::io(dest.clone(), e))?;
            Ok(dest.clone())
        }
        OutputTarget::Directory(prefix) => {
            let stem = source
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();
            let dest = config
                .working_dir()
                .join(prefix)
                .join(format!("{stem}.{CSS_EXTENSION}"));
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| CssBuildError::io(parent.to_path_buf(), e))?;
            }
            fs::write(&dest, css).map_err(|e| CssBuildError::io(dest.clone(), e))?;
            Ok(dest)
        }
    }
}
