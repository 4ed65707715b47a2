//! The directory walk: config resolution, selection, and compile dispatch
//!
//! The walk is single-threaded and depth-first. Every directory visited owns
//! its configuration list and its exclusion set; the only state shared
//! across directories is the immutable configuration a subtree inherits and
//! any aggregate output files it appends to.

use crate::compiler::CompilerRegistry;
use crate::config::{self, Config};
use crate::discovery;
use crate::error::CssBuildError;
use crate::exclusions::{self, ExcludeSet};
use crate::output;
use crate::result::Result;
use std::path::{Path, PathBuf};

/// Per-invocation options
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Descend into subdirectories
    pub recursive: bool,

    /// Explicit exclusion list. `None` means query git ignore state per
    /// directory; `Some` (even empty) is used verbatim at every depth.
    pub excludes: Option<Vec<String>>,
}

/// Drives one discovery-and-dispatch pass over a set of input paths.
pub struct BuildEngine {
    registry: CompilerRegistry,
    options: BuildOptions,
}

impl BuildEngine {
    pub fn new(registry: CompilerRegistry, options: BuildOptions) -> Self {
        Self { registry, options }
    }

    /// Process every input path: files dispatch directly under the implicit
    /// default configuration, directories start a walk. A path that is
    /// neither is fatal, as is any compile failure.
    pub fn run(&self, inputs: &[PathBuf]) -> Result<()> {
        for input in inputs {
            let input = std::path::absolute(input)
                .map_err(|e| CssBuildError::io(input.clone(), e))?;
            if input.is_file() {
                let parent = input.parent().unwrap_or(Path::new(".")).to_path_buf();
                self.compile_file(&input, &Config::default_for(parent))?;
            } else if input.is_dir() {
                let default = Config::default_for(&input);
                self.process_directory(&input, &default, &ExcludeSet::empty())?;
            } else {
                return Err(CssBuildError::InputNotFound { path: input });
            }
        }
        Ok(())
    }

    /// Visit one directory: honor the caller's exclusion set, resolve this
    /// directory's own, load the configs in effect, then select and dispatch
    /// per config. Records without explicit patterns cascade into
    /// subdirectories when recursion is enabled; records with patterns do
    /// not recurse, since their globs already express depth.
    fn process_directory(
        &self,
        dir: &Path,
        inherited: &Config,
        parent_excludes: &ExcludeSet,
    ) -> Result<()> {
        if parent_excludes.contains_dir(dir) {
            tracing::debug!("Skipping excluded directory {}", dir.display());
            return Ok(());
        }
        tracing::debug!("Processing directory {}", dir.display());

        let excludes = exclusions::resolve(dir, self.options.excludes.as_deref());
        let configs = config::load_configs(dir, inherited)?;

        for config in &configs {
            match config.srcs() {
                None => {
                    let files = discovery::select_by_extension(
                        dir,
                        &self.registry.extensions(),
                        &excludes,
                    )?;
                    for file in &files {
                        self.compile_file(file, config)?;
                    }
                    if self.options.recursive {
                        for sub in subdirectories(dir)? {
                            self.process_directory(&sub, config, &excludes)?;
                        }
                    }
                }
                Some(patterns) => {
                    let files = discovery::select_by_patterns(dir, patterns, &excludes)?;
                    for file in &files {
                        self.compile_file(file, config)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Compile one file and route its output. Files with no registered
    /// backend are skipped without touching any output.
    fn compile_file(&self, file: &Path, config: &Config) -> Result<()> {
        let Some(compiler) = self.registry.for_path(file) else {
            tracing::debug!("No backend for {}, skipping", file.display());
            return Ok(());
        };
        let css = compiler.compile(file)?;
        let dest = output::write_css(file, &css, config)?;
        tracing::info!("Compiled {} -> {}", file.display(), dest.display());
        Ok(())
    }
}

/// Immediate subdirectories of `dir`, sorted by name for a stable visit order
fn subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut subs = Vec::new();
    let read_dir = std::fs::read_dir(dir).map_err(|e| CssBuildError::io(dir.to_path_buf(), e))?;
    for entry in read_dir {
        let entry = entry.map_err(|e| CssBuildError::io(dir.to_path_buf(), e))?;
        let path = entry.path();
        if path.is_dir() {
            subs.push(path);
        }
    }
    subs.sort();
    Ok(subs)
}
