//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jot")]
#[command(about = "Terminal notes application", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new notes workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Create a note
    New {
        /// Note title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Note content
        #[arg(short, long, default_value = "")]
        content: String,

        /// Compose the note in your editor
        #[arg(short, long)]
        edit: bool,
    },

    /// Change a note's title or content
    Edit {
        /// Id of the note to change
        id: String,

        /// New title (keeps the current one when omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// New content (keeps the current one when omitted)
        #[arg(short, long)]
        content: Option<String>,

        /// Edit the note in your editor
        #[arg(short, long)]
        edit: bool,
    },

    /// Delete a note
    Delete {
        /// Id of the note to delete
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List notes, optionally filtered by a search query
    #[command(alias = "search")]
    List {
        /// Case-insensitive text to look for in titles and contents
        query: Option<String>,
    },

    /// Show a single note
    Show {
        /// Id of the note
        id: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
