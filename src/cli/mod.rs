//! CLI module
//!
//! Thin driver over the library.
//!
//! # Commands
//!
//! - `repos` - Search repositories (or print the web URL with `--web`)
//! - `issues` - Search issues and pull requests
//! - `url` - Render the browser URL for a query

mod commands;
mod runner;

pub use commands::{Cli, Commands, QueryArgs};
pub use runner::Runner;
