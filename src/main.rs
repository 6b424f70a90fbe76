//! pkgdoc command-line entry point.
//!
//! Loads configuration, validates the output format, compiles the requested
//! package and streams its documentation to stdout. Any failure is fatal.

use std::{error::Error, io, process};

use clap::Parser;
use pkgdoc::{
    DocError,
    cli::{
        Cli,
        formatting::{format_error, format_hint},
    },
    config::Config,
    docs::DocsGenerator,
    schema::{STDLIB_PATH, Sources, TomlCompiler},
    tracing_config,
};
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!(error = %e, "pkgdoc failed");
        eprintln!("{}: {}", format_error("Error"), e);
        if let Some(DocError::PackageNotFound { .. }) = e.downcast_ref::<DocError>() {
            eprintln!(
                "{}",
                format_hint(&format!(
                    "packages are local paths or live under {STDLIB_PATH} (see --stdlib)"
                ))
            );
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = Config::load(cli.config.as_deref())?;
    tracing_config::init_cli_mode(config.general.log_level)?;

    let format = config.output.resolve(cli.output.as_deref())?;

    let sources = match config.library.stdlib_root(cli.stdlib) {
        Some(root) => Sources::with_stdlib(root),
        None => Sources::new(),
    };
    info!(package = %cli.package, %format, "documenting package");

    let generator = DocsGenerator::new(format);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    generator.generate_package(&TomlCompiler::new(), &sources, &cli.package, &mut out)?;

    Ok(())
}
