//! cssbuild core
//!
//! Engine for compiling trees of stylesheet sources: cascading
//! per-directory configuration, pattern-based source selection,
//! version-control-aware exclusion, and output routing. Stylesheet syntax
//! itself is handled by pluggable compiler backends.

pub mod compiler;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod exclusions;
pub mod output;
pub mod result;

// Re-export commonly used types
pub use compiler::{Compiler, CompilerRegistry, LessCompiler, SassCompiler};
pub use config::{CONFIG_FILE_NAME, Config, OutputTarget, RawConfig, SrcField};
pub use engine::{BuildEngine, BuildOptions};
pub use error::CssBuildError;
pub use exclusions::ExcludeSet;
pub use result::Result;

/// Initialize the tracing subscriber for logging.
///
/// Verbosity maps to a filter directive for the cssbuild crates; the
/// `RUST_LOG` environment variable overrides it when set. Diagnostics go to
/// stderr so compiled output and logs never interleave on stdout.
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cssbuild_core={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
