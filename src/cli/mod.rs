//! Command-line interface.
//!
//! Called early in `main()` so flags like `--version` are handled before
//! the terminal is touched:
//!
//! ```ignore
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command, &config) {
//!     result?;
//!     return Ok(());
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use version::{handle_version_command, version_line, VERSION};

use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;

use crate::auth::CredentialsManager;
use crate::startup::CrmConfig;

/// Run a non-TUI command.
///
/// Returns `None` for `RunTui`, meaning the caller should start the app.
pub fn run_cli_command(command: &CliCommand, config: &CrmConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}\n\n{}", version_line(), USAGE);
            Some(Ok(()))
        }
        CliCommand::Logout => Some(handle_logout(config)),
        CliCommand::Invalid(message) => Some(invalid(message)),
        CliCommand::RunTui { .. } => None,
    }
}

fn invalid(message: &str) -> Result<()> {
    eprintln!("{}\n", USAGE);
    bail!("{}", message)
}

/// Remove the saved session file.
pub fn handle_logout(config: &CrmConfig) -> Result<()> {
    let manager = CredentialsManager::in_dir(config.data_dir());
    manager
        .clear()
        .wrap_err_with(|| format!("removing {}", manager.credentials_path().display()))?;
    println!("Signed out.");
    Ok(())
}
