//! unclip - emit clipboard contents (or the fallback file) to STDOUT.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use clipway::transport::read_clipboard;
use clipway::{Config, DisplaySession, FallbackStore, PathLookup, SystemRunner};

#[derive(Parser)]
#[command(name = "unclip")]
#[command(about = "Read data from the system clipboard or the fallback file")]
#[command(version)]
struct Cli {
    /// Print diagnostic lines for every retrieval attempt
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // A broken config should not make retrieval fail; fall back to
    // defaults so the cascade can still run.
    let config = Config::load().unwrap_or_else(|e| {
        if cli.verbose {
            eprintln!("[WARNING] Using default config: {:#}", e);
        }
        Config::default()
    });

    let session = DisplaySession::detect();
    let lookup = PathLookup::new();
    let runner = SystemRunner::new();
    let store = FallbackStore::new(&config.clipboard.fallback_file);

    let data = read_clipboard(session, &lookup, &runner, &store, cli.verbose);
    if data.is_empty() && cli.verbose {
        eprintln!("[WARNING] Clipboard/fallback is empty or could not be read.");
    }

    // Raw write, no trailing newline: the payload goes out exactly as
    // recovered, and the process exits cleanly either way.
    if std::io::stdout().write_all(data.as_bytes()).is_err() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
