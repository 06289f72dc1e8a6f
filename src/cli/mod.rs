//! CLI module for textkit - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for listing, showing
//! and checking the text tool catalog.

pub mod commands;

pub use commands::Cli;
