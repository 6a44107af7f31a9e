//! jot - short tagged notes with search and tag filtering

pub mod cli;
pub mod domain;
pub mod logging;
pub mod session;
pub mod store;
pub mod view;

use anyhow::Result;
use clap::Parser;
use std::io;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{StdinConfirm, handle_completions, handle_list, handle_new, handle_rm, handle_tags},
};
use session::Session;
use store::{FileStorage, NoteStore};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args, &mut out);
    }

    let config = Config::load()?;
    let storage = FileStorage::new(config.data_dir(cli.dir.as_ref()));
    tracing::debug!(dir = %storage.dir().display(), key = config.key(), "opening note store");

    let store = NoteStore::open_with_key(storage, config.key());
    let mut session = Session::new(store);

    match &cli.command {
        Command::New(args) => handle_new(args, &mut session, &config, &mut out),
        Command::List(args) => handle_list(args, &mut session, &mut out),
        Command::Rm(args) => handle_rm(args, &mut session, &mut StdinConfirm, &mut out),
        Command::Tags(args) => handle_tags(args, &session, &mut out),
        Command::Completions(args) => handle_completions(args, &mut out),
    }
}
