//! photojournal - captioned photos kept in a local note list

pub mod capture;
pub mod cli;
pub mod domain;
pub mod export;
pub mod infra;
pub mod logging;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::debug;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_edit, handle_list, handle_remove, handle_reset, handle_save,
        handle_share, handle_show, open_store,
    },
};
use export::LocalExporter;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = Config::load()?;
    let journal_dir = config.journal_dir(cli.dir.as_ref());
    debug!("journal directory: {}", journal_dir.display());

    // Every command re-reads the stored list; nothing is cached between runs.
    let store = open_store(&journal_dir);

    match &cli.command {
        Command::Add(args) => handle_add(args, &store, &journal_dir),
        Command::List(args) => handle_list(args, &store),
        Command::Show(args) => handle_show(args, &store),
        Command::Edit(args) => handle_edit(args, &store),
        Command::Remove(args) => handle_remove(args, &store),
        Command::Save(args) => {
            let library = config.library_dir(args.to.as_ref(), &journal_dir);
            handle_save(args, &store, &LocalExporter::new(library, None))
        }
        Command::Share(args) => {
            let library = config.library_dir(None, &journal_dir);
            let share = config.share_command(args.with_command.as_deref());
            handle_share(args, &store, &LocalExporter::new(library, share))
        }
        Command::Reset(args) => handle_reset(args, &store),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "pj", &mut std::io::stdout());
            Ok(())
        }
    }
}
