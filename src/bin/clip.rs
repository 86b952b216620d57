//! clip - copy text to the system clipboard from STDIN or file(s).

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use clipway::batch::{self, BatchContext, RandomRemark};
use clipway::term::TerminalKeys;
use clipway::transport::{self, Mode, ResolveError, TransportCommand, TransportName};
use clipway::walkthrough::Walkthrough;
use clipway::{ClipError, Config, DisplaySession, PathLookup, SystemRunner};

#[derive(Parser)]
#[command(name = "clip")]
#[command(about = "Copy text to the system clipboard from STDIN or file(s)")]
#[command(version)]
struct Cli {
    /// Explicitly select the clipboard utility to use
    #[arg(long, value_parser = ["wl-copy", "xclip", "xsel"])]
    utility: Option<String>,

    /// Process multiple files one-by-one with a confirmation keystroke
    #[arg(long)]
    interactive: bool,

    /// Concatenate multiple files into a single marked-up payload
    #[arg(long)]
    stream: bool,

    /// File(s) to read from; with none, text is read from STDIN
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // The flag wins over the config file; both name the same utilities.
    let preference = cli
        .utility
        .clone()
        .or_else(|| config.clipboard.preferred_tool.clone());
    let preference = match preference.as_deref().map(|s| s.parse::<TransportName>()) {
        Some(Ok(name)) => Some(name),
        Some(Err(e)) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
        None => None,
    };

    let session = DisplaySession::detect();
    let lookup = PathLookup::new();

    let cmd = match transport::resolve(preference, Mode::Write, session, &lookup) {
        Ok(cmd) => cmd,
        Err(e) => {
            let err = match e {
                ResolveError::PreferredNotFound(name) => ClipError::PreferredToolNotFound {
                    name: name.to_string(),
                },
                ResolveError::Unavailable => ClipError::NoTransportAvailable {
                    hint: transport::install_hint(session),
                },
            };
            report(&err, session);
            return ExitCode::FAILURE;
        }
    };

    let result = if cli.files.is_empty() {
        if atty::is(atty::Stream::Stdin) {
            // Invoked bare on a terminal: nothing piped in, show usage.
            let _ = Cli::command().print_help();
            return ExitCode::FAILURE;
        }
        copy_stdin(&cmd)
    } else if cli.files.len() == 1 && !cli.interactive && !cli.stream {
        copy_single_file(&cli.files[0], &cmd)
    } else if cli.interactive {
        run_interactive(&cli.files, &cmd)
    } else if cli.stream {
        run_stream(&cli.files, &cmd)
    } else {
        eprintln!(
            "Error: Multiple files provided. Use --interactive or --stream mode \
             to process multiple files."
        );
        return ExitCode::FAILURE;
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e, session);
            ExitCode::FAILURE
        }
    }
}

/// Write-path failures always come with installation guidance; file and
/// input errors do not, since installing a tool would not help.
/// `NoTransportAvailable` carries its hint in the message already.
fn report(e: &ClipError, session: DisplaySession) {
    match e {
        ClipError::PreferredToolNotFound { .. } | ClipError::TransportFailed { .. } => {
            eprintln!("Error: {}. {}", e, transport::install_hint(session));
        }
        _ => eprintln!("Error: {}", e),
    }
}

fn copy_stdin(cmd: &TransportCommand) -> Result<(), ClipError> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| ClipError::file("<stdin>", e))?;
    if text.is_empty() {
        return Err(ClipError::EmptyInput);
    }
    transport::write_payload(text.as_bytes(), cmd, &SystemRunner::new())
}

fn copy_single_file(path: &Path, cmd: &TransportCommand) -> Result<(), ClipError> {
    let text = std::fs::read_to_string(path).map_err(|e| ClipError::file(path, e))?;
    transport::write_payload(text.as_bytes(), cmd, &SystemRunner::new())
}

fn run_interactive(files: &[PathBuf], cmd: &TransportCommand) -> Result<(), ClipError> {
    let runner = SystemRunner::new();
    let mut keys = TerminalKeys::new();
    let outcome = Walkthrough::new(cmd, &runner, &mut keys).run(files)?;
    tracing::debug!(copied = outcome.copied(), "walkthrough finished");
    Ok(())
}

fn run_stream(files: &[PathBuf], cmd: &TransportCommand) -> Result<(), ClipError> {
    let ctx = BatchContext::capture();
    let buffer = batch::serialize(files, &ctx, &mut RandomRemark)?;
    transport::write_payload(buffer.as_bytes(), cmd, &SystemRunner::new())
}
