use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "userdesk", version)]
#[command(about = "Keep a small user registry in a flat JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $USERDESK_HOME, then the OS data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// The user form. Every field may be left empty; validation decides.
#[derive(Args, Debug, Clone, Default)]
pub struct UserForm {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub password: String,

    #[arg(long, default_value = "")]
    pub confirm_password: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all users
    #[command(alias = "ls")]
    List,

    /// Show one user
    #[command(alias = "v")]
    Show { id: String },

    /// Add a user (validated)
    #[command(alias = "n")]
    Add {
        #[command(flatten)]
        form: UserForm,
    },

    /// Replace a user's fields (validated)
    #[command(alias = "e")]
    Edit {
        id: String,

        #[command(flatten)]
        form: UserForm,
    },

    /// Delete every user with the given id
    #[command(alias = "rm")]
    Delete { id: String },

    /// Validate credentials without saving anything
    Check {
        #[command(flatten)]
        form: UserForm,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (users-file, pretty-json)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the data directory
    Init,
}
