//! `--version` and `--help` output.

/// The current version of artgrid, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn usage() -> String {
    format!(
        "artgrid {VERSION}
Browse the Art Institute of Chicago collection and select rows across pages.

USAGE:
    artgrid [OPTIONS]

OPTIONS:
    --page-size <N>     Rows per page (1-100, env ARTGRID_PAGE_SIZE)
    --base-url <URL>    Collection API root (env ARTGRID_BASE_URL)
    --start-page <N>    Page to open on launch
    -h, --help          Print this help
    -V, --version       Print the version

Logging is controlled by ARTGRID_LOG (default: info)."
    )
}

/// Print the version string and exit successfully.
pub fn handle_version_command() -> ! {
    println!("artgrid {}", VERSION);
    std::process::exit(0)
}

/// Print usage and exit successfully.
pub fn handle_help_command() -> ! {
    println!("{}", usage());
    std::process::exit(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_usage_lists_flags() {
        let text = usage();
        for flag in ["--page-size", "--base-url", "--start-page", "--help", "--version"] {
            assert!(text.contains(flag), "usage missing {flag}");
        }
    }
}
