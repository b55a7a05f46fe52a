pub mod types;
pub mod validation;

pub use types::*;

use clap::Parser;

/// Parses the command line (and `PITWALL_*` environment), exiting with
/// clap's usage message on bad input.
#[must_use]
pub fn args_checks() -> CleanArgs {
    Args::parse().into_clean()
}
