use anyhow::Result;
use clap::{Parser, Subcommand};

use chipin::cli::{handle_check_command, handle_create_command, handle_view_command, CreateArgs};

#[derive(Parser)]
#[command(
    name = "chipin",
    version,
    about = "Stateless expense splitting with shareable URL tokens",
    long_about = "chipin splits a shared expense (participants, tax, tip) and \
                  packs the computed result into a URL-safe token. The token \
                  is the whole state: share the link and anyone can view the \
                  receipt with no server and no storage."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a receipt: validate, split, and print the share token
    Create(CreateArgs),

    /// Decode a token (or share URL) and display the stored receipt
    View {
        /// Share token, or a URL carrying one in its fragment
        target: String,
    },

    /// Diagnose a token: report the exact decode stage that fails
    Check {
        /// Share token, or a URL carrying one in its fragment
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Create(args) => handle_create_command(args)?,
        Commands::View { target } => handle_view_command(&target)?,
        Commands::Check { target } => handle_check_command(&target)?,
    }

    Ok(())
}
