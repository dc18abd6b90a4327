use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use figures::tokens::ReaderTokens;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;
mod session;

use report::Report;
use session::Session;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Figure collection command runner")]
struct Cmd {
    /// Read commands from this file instead of stdin
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Log dispatched commands at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand, Clone, Copy)]
enum Action {
    /// Execute commands and print their responses (default)
    Run,
    /// Execute commands silently, then print a JSON summary of the collection
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
    let input = open_input(cmd.input.as_deref())?;
    match cmd.action.unwrap_or(Action::Run) {
        Action::Run => run(input),
        Action::Report => report(input),
    }
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(p) => {
            let file = File::open(p).with_context(|| format!("opening {}", p.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn run(input: Box<dyn BufRead>) -> Result<()> {
    let mut session = Session::new();
    let mut src = ReaderTokens::new(input);
    let rejected = session.run(&mut src, &mut io::stdout().lock(), &mut io::stderr())?;
    tracing::debug!(figures = session.figures().len(), rejected, "session finished");
    Ok(())
}

fn report(input: Box<dyn BufRead>) -> Result<()> {
    let mut session = Session::new();
    let mut src = ReaderTokens::new(input);
    let rejected = session.run(&mut src, &mut io::sink(), &mut io::stderr())?;
    let report = Report::new(session.figures(), rejected);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
