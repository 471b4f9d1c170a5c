//! modelenv - Model Profile Manager

use anyhow::Result;
use clap::Parser;

use modelenv::cli::args::Commands;
use modelenv::cli::{commands, Cli, Context};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::from_cli(&cli);

    match &cli.command {
        Commands::List => commands::list::execute(&ctx),
        Commands::Add => commands::add::execute(&ctx),
        Commands::Use { name } => commands::use_cmd::execute(&ctx, name.as_deref()),
        Commands::Remove { name, yes } => commands::remove::execute(&ctx, name.as_deref(), *yes),
        Commands::Status => commands::status::execute(&ctx),
        Commands::Backup { backup_command } => commands::backup::execute(&ctx, backup_command),
    }
}
