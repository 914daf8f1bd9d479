//! Command-line definition.

use crate::config::{CONFIG_ENV, SECRET_ENV};

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Manage registrar contacts from the command line.
///
/// Identity and secret are read from the credential file unless both are
/// given explicitly. The endpoint always comes from the file.
#[derive(Debug, Parser)]
#[command(name = "registrar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Credential file (TOML)
    #[arg(short, long, env = CONFIG_ENV, global = true)]
    pub config: Option<PathBuf>,

    /// Account identity, overrides the file together with --secret
    #[arg(long, global = true)]
    pub identity: Option<String>,

    /// Account secret, overrides the file together with --identity
    #[arg(long, env = SECRET_ENV, hide_env_values = true, global = true)]
    pub secret: Option<String>,

    /// Also write logs to registrar.log in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that the registrar accepts the credentials
    Login,

    /// Show a contact
    Info {
        /// Contact identifier
        id: String,
    },

    /// Create a contact from a JSON file
    Create {
        /// Path to the contact JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Apply a partial update from a JSON file
    Update {
        /// Contact identifier
        id: String,

        /// Path to a JSON file holding only the fields to change
        #[arg(short, long)]
        file: PathBuf,

        /// The contact is a domain owner (changes may need holder confirmation)
        #[arg(long)]
        owner: bool,
    },

    /// Delete a contact
    Delete {
        /// Contact identifier
        id: String,
    },
}
