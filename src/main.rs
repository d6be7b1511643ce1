//! markhash CLI - convert a Markdown file into an HTML file

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use markhash::{ConvertError, convert_file};

#[derive(Parser)]
#[command(name = "markhash")]
#[command(version)]
#[command(about = "Convert a Markdown file to HTML")]
#[command(after_help = "\
EXAMPLES:

    # Convert README.md into README.html
    markhash README.md README.html

    # Show what was converted
    markhash -v README.md README.html

Set RUST_LOG for finer control over log output (e.g. RUST_LOG=trace).")]
struct Cli {
    /// Markdown file to read
    input: PathBuf,

    /// HTML file to write (created or truncated)
    output: PathBuf,

    /// Log conversion details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match convert_file(&cli.input, &cli.output) {
        Ok(stats) => {
            log::info!(
                "Converted {} ({} lines, {} blocks)",
                cli.input.display(),
                stats.lines,
                stats.blocks
            );
            ExitCode::SUCCESS
        }
        Err(err @ ConvertError::MissingInput(_)) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
