//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

use crate::creational::{Category, Pattern};
use crate::structural::Layer;

/// Classic design patterns as runnable demonstrations
#[derive(Parser, Debug)]
#[command(name = "patterns")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available demonstrations
    List {
        /// Only show one category
        #[arg(short, long, value_enum)]
        category: Option<CategoryArg>,
    },

    /// Run one demonstration
    Run {
        /// Pattern name, e.g. composite, decorator, factory-method
        #[arg(value_parser = parse_pattern)]
        pattern: Pattern,
    },

    /// Evaluate composite price trees
    Composite {
        #[command(subcommand)]
        command: CompositeCommands,
    },

    /// Send a message through a decorated notifier
    Notify {
        /// Message to send
        message: String,
        /// Extra channels layered on top of email, innermost first
        #[arg(long = "via", value_enum)]
        via: Vec<LayerArg>,
    },

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
pub enum CompositeCommands {
    /// Print the total price of a tree
    Price {
        /// TOML tree description (default: built-in sample)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Evaluate this node instead of the root
        #[arg(short, long)]
        node: Option<String>,
    },

    /// Show the tree with per-node totals
    Tree {
        /// TOML tree description (default: built-in sample)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Print the built-in sample tree as TOML
    Sample,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a commented template
    Template,
    /// Show config file location
    Path,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryArg {
    Creational,
    Structural,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Creational => Category::Creational,
            CategoryArg::Structural => Category::Structural,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerArg {
    Slack,
    Sms,
}

impl From<LayerArg> for Layer {
    fn from(arg: LayerArg) -> Self {
        match arg {
            LayerArg::Slack => Layer::Slack,
            LayerArg::Sms => Layer::Sms,
        }
    }
}

fn parse_pattern(s: &str) -> Result<Pattern, String> {
    s.parse().map_err(|e: crate::domain::DomainError| e.to_string())
}
