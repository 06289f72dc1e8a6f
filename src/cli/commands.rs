//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: list tools in menu order
//! - show: print one tool by page id
//! - pages: print page ids only
//! - check: report blank fields and duplicate pages

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use textkit::render::OutputFormat;

/// textkit - registry of the web app's text tools
#[derive(Parser, Debug)]
#[command(name = "textkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all tools in menu order
    List {
        /// Output format (text, json, yaml)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Only tools whose page, name or description contains this text
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show a single tool
    Show {
        /// Page id of the tool
        page: String,

        /// Output format (text, json, yaml)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Print page ids, one per line
    Pages,

    /// Check the catalog for empty names/pages and duplicate pages
    Check,
}
