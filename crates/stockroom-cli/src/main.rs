//! Stockroom CLI - interactive inventory editor.

mod cli;
mod logging;
mod session;

use std::io;
use std::path::Path;

use clap::Parser;
use colored::Colorize;
use stockroom::{CsvStore, GridReporter, StockroomError};

use cli::Cli;
use session::{Console, Session, SessionConfig, files};

fn main() {
    let cli = Cli::parse();
    logging::init_logging();

    match run(cli) {
        Ok(()) | Err(StockroomError::InputClosed) => {}
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> stockroom::Result<()> {
    let config = SessionConfig::default();
    let mut console = Console::new(io::stdin().lock(), io::stdout());

    let (store, opened) = match cli.file {
        Some(path) => (CsvStore::with_config(path, config.store.clone()), true),
        None => (files::create_store(&mut console, Path::new("."), config.store.clone())?, false),
    };

    let reporter = GridReporter::with_config(config.report.clone());
    let mut session = Session::open(Box::new(store), Box::new(reporter), console)?;
    if opened {
        session.console().say("Inventory successfully imported")?;
    }

    session.run()
}
