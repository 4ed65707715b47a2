//! Directory-local configuration: discovery, parsing, and normalization
//!
//! Every directory may carry a `cssbuild.config.json` holding a list of
//! configuration records. Each record independently selects sources (`src`)
//! and routes output (`output`) for that directory. Absent a file, the
//! configuration inherited from the parent directory stays in effect.

use crate::error::CssBuildError;
use crate::result::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed name of the per-directory configuration file
pub const CONFIG_FILE_NAME: &str = "cssbuild.config.json";

/// Output extension that switches `output` into aggregate-file mode
pub const CSS_SUFFIX: &str = ".css";

/// A configuration record as it appears in the file, prior to normalization
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    /// Single pattern or list of patterns; absent means "all supported extensions"
    pub src: Option<SrcField>,

    /// Aggregate file (ends with `.css`) or output directory prefix
    pub output: Option<String>,
}

/// Accepted shapes of the `src` field. Anything else is a parse error.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SrcField {
    One(String),
    Many(Vec<String>),
}

/// Where a compiled file is written, derived from `output` at normalization time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Sibling `.css` next to the source, overwritten on every run
    SameDirectory,
    /// Single absolute aggregate file, truncated at normalization and
    /// appended to for every compiled source
    Aggregate(PathBuf),
    /// Directory prefix relative to the config's working directory; each
    /// source lands there under its own base name
    Directory(PathBuf),
}

/// A normalized configuration record.
///
/// `working_dir` is fixed at construction and never mutated afterwards;
/// a record inherited by a subdirectory keeps the directory it was declared
/// in, which is what anchors cascaded output routing.
#[derive(Debug, Clone)]
pub struct Config {
    working_dir: PathBuf,
    srcs: Option<Vec<String>>,
    output: OutputTarget,
}

impl Config {
    /// The implicit configuration used when no config file is in effect:
    /// scan all supported extensions, write sibling `.css` files.
    pub fn default_for(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            srcs: None,
            output: OutputTarget::SameDirectory,
        }
    }

    /// Resolve a raw record against the directory it was discovered in.
    ///
    /// An aggregate output target is prepared eagerly: parent directories
    /// are created and a pre-existing file at the path is deleted, so every
    /// run starts the aggregate empty.
    pub fn normalize(raw: RawConfig, working_dir: &Path) -> Result<Self> {
        let srcs = match raw.src {
            None => None,
            Some(SrcField::One(pattern)) => Some(vec![pattern]),
            Some(SrcField::Many(patterns)) => {
                if patterns.is_empty() {
                    return Err(CssBuildError::config(
                        working_dir.join(CONFIG_FILE_NAME),
                        "`src` must be a string or a non-empty array of strings",
                    ));
                }
                Some(patterns)
            }
        };

        let output = match raw.output {
            None => OutputTarget::SameDirectory,
            Some(output) if output.ends_with(CSS_SUFFIX) => {
                let path = working_dir.join(&output);
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)
                        .map_err(|e| CssBuildError::io(parent.to_path_buf(), e))?;
                }
                match fs::remove_file(&path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => return Err(CssBuildError::io(path, e)),
                }
                OutputTarget::Aggregate(path)
            }
            Some(output) => OutputTarget::Directory(PathBuf::from(output)),
        };

        Ok(Self {
            working_dir: working_dir.to_path_buf(),
            srcs,
            output,
        })
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Explicit source patterns, or `None` for the default extension scan
    pub fn srcs(&self) -> Option<&[String]> {
        self.srcs.as_deref()
    }

    pub fn output(&self) -> &OutputTarget {
        &self.output
    }
}

/// Load the configuration records in effect for `dir`.
///
/// Returns the parsed and normalized records of `dir`'s config file, in file
/// order, or a single-element list holding `inherited` unchanged when no
/// file is present. A file that exists but does not parse as a list of
/// records is fatal and reported with the file's path.
pub fn load_configs(dir: &Path, inherited: &Config) -> Result<Vec<Config>> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        return Ok(vec![inherited.clone()]);
    }

    tracing::debug!("Loading config file {}", config_path.display());
    let content =
        fs::read_to_string(&config_path).map_err(|e| CssBuildError::io(config_path.clone(), e))?;
    let raw: Vec<RawConfig> = serde_json::from_str(&content)
        .map_err(|e| CssBuildError::config(config_path.clone(), e.to_string()))?;

    raw.into_iter()
        .map(|r| Config::normalize(r, dir))
        .collect()
}
