use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gomodmerge",
    about = "Update the local module's dependencies by merging them from the dependencies implied by another go.mod file",
    long_about = "Update the local module's dependencies by merging them\n\
                  from the dependencies implied by the argument go.mod file.\n\n\
                  Dependencies that are older than the current module's dependencies\n\
                  will be ignored.",
    version
)]
pub struct Cli {
    /// go.mod file whose resolved dependencies should be merged in
    #[arg(value_name = "GOMODFILE")]
    pub modfile: PathBuf,

    /// Path to the local module directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Go executable used to list modules and edit go.mod
    #[arg(long, value_name = "BINARY", env = "GOMODMERGE_GO", default_value = "go")]
    pub go: String,

    /// Show the updates that would be made without editing go.mod
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_single_modfile() {
        let cli = Cli::try_parse_from(["gomodmerge", "../other/go.mod"]).unwrap();
        assert_eq!(cli.modfile, PathBuf::from("../other/go.mod"));
        assert_eq!(cli.path, PathBuf::from("."));
        assert!(!cli.dry_run);
    }

    #[test]
    fn missing_modfile_is_a_usage_error() {
        let err = Cli::try_parse_from(["gomodmerge"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn extra_positional_is_a_usage_error() {
        let err = Cli::try_parse_from(["gomodmerge", "a/go.mod", "b/go.mod"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn flags_are_recognised() {
        let cli = Cli::try_parse_from([
            "gomodmerge",
            "-n",
            "-v",
            "--path",
            "service",
            "--go",
            "/opt/go/bin/go",
            "other.mod",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert_eq!(cli.path, PathBuf::from("service"));
        assert_eq!(cli.go, "/opt/go/bin/go");
    }
}
