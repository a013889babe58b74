//! Command-line argument parsing.

/// Usage text printed for `--help` and on bad arguments.
pub const USAGE: &str = "\
Usage: crm [OPTIONS]

Options:
  --api-url <URL>  CRM backend base URL (overrides CRM_API_URL)
  --logout         Forget the saved session and exit
  -V, --version    Print version and exit
  -h, --help       Print this help and exit";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Clear stored credentials
    Logout,
    /// Run the TUI application (default)
    RunTui { api_url: Option<String> },
    /// Arguments could not be understood
    Invalid(String),
}

/// Parse command-line arguments, program name first.
///
/// ```
/// use crm::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["crm".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut api_url = None;
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--logout" => return CliCommand::Logout,
            "--api-url" => match args.next() {
                Some(url) if !url.starts_with('-') => api_url = Some(url),
                _ => return CliCommand::Invalid("--api-url requires a value".to_string()),
            },
            other => {
                if let Some(url) = other.strip_prefix("--api-url=") {
                    api_url = Some(url.to_string());
                } else {
                    return CliCommand::Invalid(format!("unknown argument '{}'", other));
                }
            }
        }
    }
    CliCommand::RunTui { api_url }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["crm".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_logout() {
        assert_eq!(parse(&["--logout"]), CliCommand::Logout);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::RunTui { api_url: None });
    }

    #[test]
    fn test_parse_api_url_forms() {
        let expected = CliCommand::RunTui {
            api_url: Some("http://crm:9000/api".to_string()),
        };
        assert_eq!(parse(&["--api-url", "http://crm:9000/api"]), expected);
        assert_eq!(parse(&["--api-url=http://crm:9000/api"]), expected);
    }

    #[test]
    fn test_parse_api_url_missing_value() {
        assert!(matches!(parse(&["--api-url"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--api-url", "--logout"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--sync"]),
            CliCommand::Invalid("unknown argument '--sync'".to_string())
        );
    }
}
