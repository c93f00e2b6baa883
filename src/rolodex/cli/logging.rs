//! Tracing setup for the CLI.
//!
//! Logs go to stderr so they never mix with table or export output on stdout.
//!
//!   rolodex -v ...                  # debug logging for rolodex
//!   RUST_LOG=rolodex=trace rolodex  # fine-grained control, wins over -v

use rolodex::error::{Result, RolodexError};
use tracing_subscriber::EnvFilter;

pub fn init_tracing(verbose: bool) -> Result<()> {
    let default = if verbose { "rolodex=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact()
        .try_init()
        .map_err(|err| RolodexError::Config(format!("Failed to initialise logging: {err}")))
}
