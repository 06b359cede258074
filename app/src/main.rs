//! Family Tree application
//!
//! Owns the roster store and drives it from the command line or an
//! interactive session.

mod commands;
mod config;
mod render;
mod session;
mod state;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use roster::{NewMemberForm, RosterStore, UnlinkedAccount, DEFAULT_GENERATION};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::AppConfig;
use state::AppState;

/// Family tree grouped by generation.
#[derive(Parser, Debug)]
#[command(name = "family-tree", version, about)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Start from a previously downloaded data file instead of the built-in family
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the family tree
    Show,
    /// Add a member, then print the tree
    Add {
        #[arg(long, default_value = DEFAULT_GENERATION)]
        generation: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        role: String,
        #[arg(long)]
        year_range: String,
        /// Also write the data file into this directory
        #[arg(long)]
        download: Option<PathBuf>,
    },
    /// Write the data file into a directory, or print it when no directory is given
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Save to an external account
    SaveAccount,
    /// Print the effective configuration
    Config,
    /// Interactive session (default)
    Session,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let level = if cli.verbose { Level::DEBUG } else { config.level() };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store = match &cli.input {
        Some(path) => RosterStore::load_from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => RosterStore::seeded(),
    }
    .with_placeholder_image(config.placeholder_image.clone());

    info!(
        "Family tree ready: {} members in {} generations",
        store.member_count(),
        store.generation_count()
    );

    let state = AppState::new(store, config, Box::new(UnlinkedAccount));

    match cli.command.unwrap_or(Command::Session) {
        Command::Show => {
            let view = commands::roster::get_roster(&state).map_err(anyhow::Error::msg)?;
            print!("{}", render::render_roster(&view));
        }
        Command::Add {
            generation,
            name,
            role,
            year_range,
            download,
        } => {
            let mut form = NewMemberForm {
                name,
                role,
                year_range,
                generation,
            };
            let card =
                commands::roster::add_member(&state, &mut form).map_err(anyhow::Error::msg)?;
            println!("added {}", render::render_card(&card));

            let view = commands::roster::get_roster(&state).map_err(anyhow::Error::msg)?;
            print!("{}", render::render_roster(&view));

            if let Some(dir) = download {
                let result =
                    commands::export::download_data(&state, &dir).map_err(anyhow::Error::msg)?;
                println!("wrote {}", result.path);
            }
        }
        Command::Export { out } => match out {
            Some(dir) => {
                let result =
                    commands::export::download_data(&state, &dir).map_err(anyhow::Error::msg)?;
                println!(
                    "wrote {} members to {} ({} bytes)",
                    result.members, result.path, result.file_bytes
                );
            }
            None => {
                let document =
                    commands::export::export_document(&state).map_err(anyhow::Error::msg)?;
                println!("{document}");
            }
        },
        Command::SaveAccount => {
            let notice =
                commands::account::save_to_account(&state).map_err(anyhow::Error::msg)?;
            println!("{}", notice.message);
        }
        Command::Config => {
            let config = commands::config::get_config(&state);
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Command::Session => session::run_session(&state)?,
    }

    Ok(())
}
