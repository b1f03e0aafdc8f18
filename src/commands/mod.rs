pub mod add;
pub mod clear;
pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod sum;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add an entry to the hour bank")]
    Add(add::AddArgs),
    #[command(about = "List saved entries with running totals")]
    List,
    #[command(about = "Show totals for every bucket")]
    Sum,
    #[command(about = "Delete one entry by its list position")]
    Delete(delete::DeleteArgs),
    #[command(about = "Delete every entry")]
    Clear(clear::ClearArgs),
    #[command(about = "Share the hour bank through WhatsApp or mail")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List => list::cmd(),
            Commands::Sum => sum::cmd(),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Clear(args) => clear::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
