//! cssbuild CLI
//!
//! Thin shim over cssbuild-core: argument parsing, logging bootstrap, and
//! exit-code plumbing.

use clap::{CommandFactory, Parser};
use cssbuild_core::{BuildEngine, BuildOptions, CompilerRegistry, Result, init_tracing};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cssbuild")]
#[command(version = cssbuild_core::VERSION)]
#[command(about = "Compile trees of LESS/Sass/SCSS sources, driven by cascading per-directory configuration")]
struct Cli {
    /// Files or directories to build
    paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Exclude these paths instead of consulting git ignore state
    /// (directory entries need a trailing separator)
    #[arg(short, long, num_args = 1.., value_name = "PATH")]
    exclude: Option<Vec<String>>,

    /// Verbose output (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.paths.is_empty() {
        let mut cmd = Cli::command();
        let _ = cmd.print_help();
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let registry = CompilerRegistry::with_default_backends();
    let options = BuildOptions {
        recursive: cli.recursive,
        excludes: cli.exclude.clone(),
    };
    BuildEngine::new(registry, options).run(&cli.paths)
}
