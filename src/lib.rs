//! pkgdoc - documentation renderer for schema packages.
//!
//! A package compiles into a tree of values. pkgdoc lists the package's
//! struct-shaped definitions, splits each one's nested values into inputs and
//! outputs, and renders the result as plain text, Markdown or JSON.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pkgdoc::{
//!     docs::{DocsGenerator, OutputFormat},
//!     schema::{Sources, TomlCompiler},
//! };
//!
//! let sources = Sources::with_stdlib("/usr/share/pkgdoc/stdlib");
//! let generator = DocsGenerator::new(OutputFormat::Markdown);
//!
//! let mut out = std::io::stdout().lock();
//! generator.generate_package(&TomlCompiler::new(), &sources, "pkgdoc.dev/std/docker", &mut out)?;
//! # Ok::<(), pkgdoc::DocError>(())
//! ```

/// Core error types and result aliases.
pub mod core;

/// User configuration.
pub mod config;

/// Package compilation into value trees.
pub mod schema;

/// Documentation rendering.
pub mod docs;

/// Command-line interface.
pub mod cli;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{DocError, Result};
