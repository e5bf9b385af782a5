// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the glossdex command-line interface.
//!
//! Three subcommands: `search` for a one-shot query, `inspect` for index
//! statistics, and `repl` which feeds stdin lines through the debounced
//! session exactly as a search box would feed keystrokes.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "glossdex",
    about = "Forward-prefix glossary search",
    version
)]
pub struct Cli {
    /// Search settings file (JSON: limit, debounceMs, fields)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query a glossary file and print matching entries
    Search {
        /// Glossary JSON (`{"terms": [...]}` or a bare array)
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Show entry, token, and duplicate-id statistics for a glossary file
    Inspect {
        /// Glossary JSON file
        file: PathBuf,
    },

    /// Read queries from stdin, one input event per line, debounced
    Repl {
        /// Glossary JSON file
        file: PathBuf,

        /// Quiescence window before a query is dispatched
        #[arg(long)]
        debounce_ms: Option<u64>,

        /// Maximum number of results per query
        #[arg(short, long)]
        limit: Option<usize>,
    },
}
