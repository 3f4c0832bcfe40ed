// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the truckdiag command-line interface.
//!
//! Two subcommands: `search` to rank guides against a query, and `inspect` to
//! summarize a guide collection (how much searchable text it actually has).

pub mod display;
pub mod inspect;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "truckdiag",
    about = "Search truck repair diagnostic guides",
    version
)]
pub struct Cli {
    /// Log engine activity to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank guides against a free-text query
    Search {
        /// Guide file (JSON array) or directory containing manifest.json
        input: String,

        /// Search query (at least 3 characters)
        query: String,

        /// Maximum number of results to show (0 = all)
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// JSON file overriding field weights, e.g. {"topic": 12}
        #[arg(long)]
        weights: Option<String>,

        /// Score guides on all cores
        #[arg(long)]
        parallel: bool,
    },

    /// Summarize a guide collection
    Inspect {
        /// Guide file (JSON array) or directory containing manifest.json
        input: String,
    },
}
