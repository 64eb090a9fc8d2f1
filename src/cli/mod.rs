//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// pj - a photo journal: captioned images kept in a local note list
#[derive(Parser, Debug)]
#[command(name = "pj", version, about, long_about = None)]
pub struct Cli {
    /// Journal directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Capture an image and save it with a caption
    Add(AddArgs),

    /// List notes, newest first
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a note
    Show(ShowArgs),

    /// Change a note's caption
    Edit(EditArgs),

    /// Delete a note
    #[command(name = "rm")]
    Remove(RemoveArgs),

    /// Copy a note's image into the media library
    Save(SaveArgs),

    /// Share a note's image
    Share(ShareArgs),

    /// Replace the stored note list with an empty one
    Reset(ResetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Image file to capture
    pub image: PathBuf,

    /// Caption for the note
    #[arg(short, long)]
    pub caption: String,

    /// Reference the image where it is instead of copying it into the journal
    #[arg(long)]
    pub link: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID or unique ID prefix
    pub note: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID or unique ID prefix
    pub note: String,

    /// New caption (prompts on stdin if omitted)
    #[arg(short, long)]
    pub caption: Option<String>,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Note ID or unique ID prefix
    pub note: String,

    /// Delete without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `save` command
#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// Note ID or unique ID prefix
    pub note: String,

    /// Library directory (overrides config file)
    #[arg(long)]
    pub to: Option<PathBuf>,
}

/// Arguments for the `share` command
#[derive(Parser, Debug)]
pub struct ShareArgs {
    /// Note ID or unique ID prefix
    pub note: String,

    /// Share command to run with the image path (overrides config file)
    #[arg(long = "with")]
    pub with_command: Option<String>,
}

/// Arguments for the `reset` command
#[derive(Parser, Debug)]
pub struct ResetArgs {
    /// Reset without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
