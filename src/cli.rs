use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "vulnscan",
    version,
    about = "Static security scanner for source trees",
    long_about = "vulnscan walks a source tree and reports hardcoded credentials and dangerous code constructs before they ship."
)]
pub struct Cli {
    /// Path to scan (file or directory)
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Write the JSON report to this file as well
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory name to skip, in addition to the built-in ignore list
    #[arg(long = "ignore-dir", value_name = "NAME")]
    pub ignore_dirs: Vec<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_basic_args() {
        let cli = Cli::try_parse_from(["vulnscan", "./src/"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("./src/"));
        assert!(!cli.verbose);
        assert!(cli.ignore_dirs.is_empty());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_parse_format_json() {
        let cli = Cli::try_parse_from(["vulnscan", "--format", "json", "./src/"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn test_parse_output_file() {
        let cli = Cli::try_parse_from(["vulnscan", "-o", "report.json", "./src/"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn test_parse_ignore_dirs_repeatable() {
        let cli = Cli::try_parse_from([
            "vulnscan",
            "--ignore-dir",
            "build",
            "--ignore-dir",
            "dist",
            "./src/",
        ])
        .unwrap();
        assert_eq!(cli.ignore_dirs, vec!["build", "dist"]);
    }

    #[test]
    fn test_parse_verbose() {
        let cli = Cli::try_parse_from(["vulnscan", "-v", "./src/"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::try_parse_from([
            "vulnscan",
            "--format",
            "json",
            "--output",
            "out.json",
            "--ignore-dir",
            "vendor",
            "--verbose",
            "./app/",
        ])
        .unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert_eq!(cli.ignore_dirs, vec!["vendor"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_default_values() {
        let cli = Cli::try_parse_from(["vulnscan", "./src/"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Terminal));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_missing_path_is_an_error() {
        assert!(Cli::try_parse_from(["vulnscan"]).is_err());
    }
}
