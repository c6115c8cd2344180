use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{
    assign::AssignArgs, assign_folder::AssignFolderArgs, generate::GenerateSubcommands,
};

mod assign;
mod assign_folder;
mod file_utils;
mod generate;
mod output;
mod parsers;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign the orders of one batch file
    Assign {
        #[command(flatten)]
        args: AssignArgs,
    },
    /// Assign every batch file found in a folder
    AssignFolder {
        #[command(flatten)]
        args: AssignFolderArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Assign { args }) => assign::run(args).await?,
        Some(Commands::AssignFolder { args }) => assign_folder::run(args).await?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {}
    }

    Ok(())
}
