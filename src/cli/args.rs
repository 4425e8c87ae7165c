//! Command-line argument parsing for artgrid.
//!
//! Flags are matched by hand; value flags accept both `--flag value` and
//! `--flag=value`.

use thiserror::Error;

/// Settings given on the command line, layered over the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub page_size: Option<u32>,
    pub base_url: Option<String>,
    pub start_page: Option<u32>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    Run(CliOverrides),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    #[error("{0} requires a value")]
    MissingValue(String),
    #[error("{flag}: '{value}' is not a valid number")]
    InvalidNumber { flag: String, value: String },
    #[error("unknown argument '{0}' (try --help)")]
    Unknown(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win as soon as they are seen.
///
/// # Examples
///
/// ```
/// use artgrid::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["artgrid".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgError>
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline_value) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--page-size" | "--base-url" | "--start-page" => {
                let value = match inline_value {
                    Some(value) => value,
                    None => args
                        .next()
                        .ok_or_else(|| ArgError::MissingValue(flag.clone()))?,
                };
                match flag.as_str() {
                    "--page-size" => overrides.page_size = Some(parse_number(&flag, &value)?),
                    "--start-page" => overrides.start_page = Some(parse_number(&flag, &value)?),
                    _ => overrides.base_url = Some(value),
                }
            }
            _ => return Err(ArgError::Unknown(arg)),
        }
    }
    Ok(CliCommand::Run(overrides))
}

fn parse_number(flag: &str, value: &str) -> Result<u32, ArgError> {
    value.parse().map_err(|_| ArgError::InvalidNumber {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}
