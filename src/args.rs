pub mod types;
pub mod validation;

use clap::Parser;

pub use types::*;

/// Parses the command line and resolves it into [`CleanArgs`].
///
/// # Errors
///
/// Will return `Err` if the season game file is not readable.
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    args.clean()
}
