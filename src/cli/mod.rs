//! Command-line interface.
//!
//! Argument parsing for the `pkgdoc` binary and the styling of its
//! diagnostics.

pub mod formatting;

use std::path::PathBuf;

use clap::{
    Parser,
    builder::styling::{AnsiColor, Effects, Styles},
};

/// Document a package's definitions, inputs and outputs.
#[derive(Debug, Parser)]
#[command(name = "pkgdoc", version, styles = styles())]
pub struct Cli {
    /// Package to document: a library import path or a local file or directory
    #[arg(value_name = "PACKAGE | PATH")]
    pub package: String,

    /// Output format (txt|md|json) [default: txt]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Configuration file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Root directory of the built-in library
    #[arg(long, value_name = "DIR")]
    pub stdlib: Option<PathBuf>,
}

/// Help styling for the CLI.
pub fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Cyan.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Yellow.on_default())
}
