//! # CLI Layer
//!
//! **One possible UI client** for rolodex. It is the only place that knows
//! about terminal I/O, exit codes, stdin and output formatting.
//!
//! ## Behavior
//!
//! - `rolodex` with no command shows the first page of the table, like
//!   `rolodex list`.
//! - `list` and `export` take the table state as flags (`--search`, `--sort`,
//!   `--per-page`, `--page`, `--select`, `--select-all`). Defaults for sort and
//!   page size come from the config file.
//! - `export` writes data to stdout and its messages to stderr, so it can be
//!   piped; with `--output` the data goes to the file instead.
//! - `browse` keeps one view alive and reads one interaction per stdin line.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, dispatch and per-command handlers
//! - `browse`: Interactive session parsing and loop
//! - `render`: Table, contact, tag and message rendering
//! - `setup`: Argument parsing via clap, grouped help
//! - `styles`: Named terminal styles
//! - `templates`: Output templates
//! - `logging`: tracing subscriber setup

mod browse;
mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
