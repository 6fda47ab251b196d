//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::Site;

/// Tag hierarchy lookups for content classification
#[derive(Parser, Debug)]
#[command(name = "tagtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Site variant (overrides config)
    #[arg(long, value_enum, global = true)]
    pub site: Option<Site>,

    /// TOML tag table replacing the built-in tags (overrides config)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub tags_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show hierarchy as tree
    Tree,

    /// Show a single tag
    Show {
        /// Tag id
        id: String,
    },

    /// List all tags below a tag, in pre-order
    Descendants {
        /// Tag id
        id: String,
    },

    /// First tag of a level among ids (given order is the priority)
    Specified {
        /// Level name, e.g. "topic"
        level: String,
        /// Tag ids, most important first
        #[arg(num_args = 1..)]
        ids: Vec<String>,
        /// Show every matching tag instead of the first
        #[arg(short, long)]
        all: bool,
    },

    /// Deepest tag among ids
    Deepest {
        /// Tag ids
        #[arg(num_args = 1..)]
        ids: Vec<String>,
    },

    /// List all tags of a level
    Level {
        /// Level name, e.g. "category"
        level: String,
    },

    /// Subject the active site assigns to content with these tags
    Subject {
        /// Tag ids of the content item
        ids: Vec<String>,
    },

    /// Validate the configured hierarchy
    Check,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Print config template
    Template,

    /// Show config paths
    Path,
}
