use crate::constants::APP_NAME;
use crate::error::AppError;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Username permutation generator
///
/// Reads full names from a text file, one per line, and writes candidate
/// usernames to `<stem>_permutation<.ext>` next to the input file.
///
/// For the line "James Ross" the candidates are:
/// James, Ross, James.Ross, Ross.James, jross, j.ross
///
/// Lines with fewer than two names are skipped; middle names are ignored.
#[derive(Parser, Debug)]
#[command(name = APP_NAME, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// File with one full name per line
    #[arg(value_name = "NAMES_FILE", allow_hyphen_values = true)]
    pub names_file: PathBuf,

    /// Log debug details to stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Also write logs to this file. Overrides `log_file_path` from the config file.
    #[arg(long = "log-file", value_name = "PATH", help_heading = "Debug")]
    pub log_file: Option<String>,
}

/// Parses command line arguments.
///
/// Any parse failure (no names file, more than one) becomes `AppError::Usage`
/// naming the invoked program. A hyphen-prefixed word that is not a known flag
/// is taken as the names file, so `-staff.txt` works without `--`. `--help`
/// and `--version` are printed by clap, which then exits the process
/// successfully.
pub fn parse_args<I, T>(argv: I) -> Result<Args, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let program = program_name(argv.first());

    Args::try_parse_from(&argv).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        kind => {
            tracing::debug!(?kind, "argument parsing failed");
            AppError::usage(program)
        }
    })
}

/// File name of argv[0], or the application name when it is unavailable.
fn program_name(argv0: Option<&OsString>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| APP_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_positional() {
        let args = parse_args(["userpermutation", "users.txt"]).unwrap();
        assert_eq!(args.names_file, PathBuf::from("users.txt"));
        assert!(!args.debug);
        assert_eq!(args.log_file, None);
    }

    #[test]
    fn test_parse_with_flags() {
        let args = parse_args([
            "userpermutation",
            "--debug",
            "--log-file",
            "/tmp/run.log",
            "users.txt",
        ])
        .unwrap();
        assert!(args.debug);
        assert_eq!(args.log_file, Some("/tmp/run.log".to_string()));
        assert_eq!(args.names_file, PathBuf::from("users.txt"));
    }

    #[test]
    fn test_parse_missing_argument_is_usage_error() {
        let error = parse_args(["/usr/local/bin/userpermutation"]).unwrap_err();
        assert_eq!(error.to_string(), "Usage: userpermutation <names_file>");
    }

    #[test]
    fn test_parse_extra_argument_is_usage_error() {
        let error = parse_args(["./perms", "a.txt", "b.txt"]).unwrap_err();
        assert!(matches!(error, AppError::Usage { .. }));
        assert_eq!(error.to_string(), "Usage: perms <names_file>");
    }

    #[test]
    fn test_parse_unknown_flag_is_usage_error() {
        let error = parse_args(["userpermutation", "--bogus", "users.txt"]).unwrap_err();
        assert!(matches!(error, AppError::Usage { .. }));
    }

    #[test]
    fn test_parse_names_file_starting_with_hyphen() {
        let args = parse_args(["userpermutation", "-staff.txt"]).unwrap();
        assert_eq!(args.names_file, PathBuf::from("-staff.txt"));
        assert!(!args.debug);

        let args = parse_args(["userpermutation", "--debug", "--staff.txt"]).unwrap();
        assert_eq!(args.names_file, PathBuf::from("--staff.txt"));
        assert!(args.debug);
    }

    #[test]
    fn test_program_name_fallback() {
        assert_eq!(program_name(None), APP_NAME);
        assert_eq!(
            program_name(Some(&OsString::from("bin/tool"))),
            "tool"
        );
    }
}
