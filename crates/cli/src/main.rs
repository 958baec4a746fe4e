//! El Navegante CLI - Database migrations and menu management.
//!
//! # Usage
//!
//! ```bash
//! # Run storefront database migrations
//! nv-cli migrate
//!
//! # Load the menu from a YAML file
//! nv-cli seed menu --file crates/cli/seed/menu.yaml
//!
//! # Replace the current menu
//! nv-cli seed menu --file crates/cli/seed/menu.yaml --clear
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed menu` - Insert menu sections and products

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "nv-cli")]
#[command(author, version, about = "El Navegante CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run storefront database migrations
    Migrate,
    /// Seed the database
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Insert menu sections and products from a YAML file
    Menu {
        /// Path to the menu YAML file
        #[arg(short, long, default_value = "crates/cli/seed/menu.yaml")]
        file: String,

        /// Delete the existing menu first
        #[arg(long)]
        clear: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::storefront().await?,
        Commands::Seed { target } => match target {
            SeedTarget::Menu { file, clear } => commands::seed::menu(&file, clear).await?,
        },
    }
    Ok(())
}
