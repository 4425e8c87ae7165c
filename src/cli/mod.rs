//! CLI module for artgrid.
//!
//! Called early in main() to handle `--version` / `--help` before the
//! terminal is touched:
//!
//! ```ignore
//! use artgrid::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let overrides = run_cli_command(command);
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgError, CliCommand, CliOverrides};
pub use version::{handle_help_command, handle_version_command, VERSION};

/// Run a CLI command if applicable.
///
/// `Version` and `Help` print and exit. `Run` hands back the overrides for
/// the TUI.
pub fn run_cli_command(command: CliCommand) -> CliOverrides {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Run(overrides) => overrides,
    }
}
