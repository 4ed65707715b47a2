//! Compiler backends and dispatch-by-extension
//!
//! The engine never parses stylesheet syntax itself; it hands each selected
//! source to the backend registered for its extension. Registration order
//! doubles as the extension-group priority of the default directory scan.

use crate::error::CssBuildError;
use crate::result::Result;
use std::path::Path;
use std::process::Command;

/// A stylesheet-to-CSS compiler for one or more file extensions
pub trait Compiler {
    /// Extensions (without the dot) this backend claims
    fn extensions(&self) -> &[&str];

    /// Compile one source file to CSS text
    fn compile(&self, path: &Path) -> Result<String>;
}

/// Ordered collection of compiler backends.
#[derive(Default)]
pub struct CompilerRegistry {
    compilers: Vec<Box<dyn Compiler>>,
}

impl CompilerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in LESS and Sass/SCSS backends, in the scan
    /// priority order (less, sass, scss)
    pub fn with_default_backends() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(LessCompiler));
        registry.register(Box::new(SassCompiler));
        registry
    }

    pub fn register(&mut self, compiler: Box<dyn Compiler>) {
        self.compilers.push(compiler);
    }

    /// The backend claiming `path`'s extension, if any
    pub fn for_path(&self, path: &Path) -> Option<&dyn Compiler> {
        let ext = path.extension()?.to_str()?;
        self.compilers
            .iter()
            .map(|c| c.as_ref())
            .find(|c| c.extensions().contains(&ext))
    }

    /// All recognized extensions, flattened in registration order
    pub fn extensions(&self) -> Vec<&str> {
        self.compilers
            .iter()
            .flat_map(|c| c.extensions().iter().copied())
            .collect()
    }
}

/// LESS backend: shells out to the external `lessc` executable.
///
/// There is no LESS implementation on crates.io, so this stays an external
/// collaborator like the ignore-lister. Unlike the ignore-lister, a failure
/// here is fatal.
pub struct LessCompiler;

impl Compiler for LessCompiler {
    fn extensions(&self) -> &[&str] {
        &["less"]
    }

    fn compile(&self, path: &Path) -> Result<String> {
        let output = Command::new("lessc")
            .arg(path)
            .output()
            .map_err(|e| CssBuildError::compile(path, format!("failed to run lessc: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CssBuildError::compile(
                path,
                format!("lessc exited with {}: {}", output.status, stderr.trim()),
            ));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| CssBuildError::compile(path, "lessc produced non-UTF-8 output"))
    }
}

/// Sass backend: compiles `.scss` and indented `.sass` in-process with grass.
/// The syntax is picked from the file extension; imports resolve relative to
/// the importing file.
pub struct SassCompiler;

impl Compiler for SassCompiler {
    fn extensions(&self) -> &[&str] {
        &["sass", "scss"]
    }

    fn compile(&self, path: &Path) -> Result<String> {
        grass::from_path(path, &grass::Options::default())
            .map_err(|e| CssBuildError::compile(path, e.to_string()))
    }
}
