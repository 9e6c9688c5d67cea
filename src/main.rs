use clap::Parser;
use std::fs;
use std::process::ExitCode;
use vulnscan::{Cli, JsonReporter, OutputFormat, Reporter, Scanner, TerminalReporter, WalkConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run(&cli)
}

fn run(cli: &Cli) -> ExitCode {
    let walk_config = WalkConfig::new().with_ignore_dirs(&cli.ignore_dirs);
    let scanner = Scanner::new().with_walk_config(walk_config);

    let result = match scanner.scan_path(&cli.path) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let output = match cli.format {
        OutputFormat::Terminal => TerminalReporter::new(cli.verbose).report(&result),
        OutputFormat::Json => JsonReporter::new().report(&result),
    };
    println!("{}", output);

    if let Some(ref output_path) = cli.output {
        let report = JsonReporter::new().report(&result);
        match fs::write(output_path, &report) {
            Ok(()) => eprintln!("Report written to {}", output_path.display()),
            Err(e) => {
                eprintln!("Failed to write report to {}: {}", output_path.display(), e);
                return ExitCode::from(2);
            }
        }
    }

    if result.summary.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let default_filter = if verbose { "vulnscan=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr) // Log to stderr, report to stdout
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
