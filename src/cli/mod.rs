// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsearch developer tool.
//!
//! `catalog` lists what the index will contain, `query` shows ranked hits with
//! scores, and `render` drives the full widget headlessly and prints the
//! dropdown it would show.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docsearch",
    about = "Client-side documentation search, from the terminal",
    version
)]
pub struct Cli {
    /// JSON file with a partial SearchConfig (widget, query, engine)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON array of {title, url, content} to use instead of the built-in catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Log index builds and queries to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List catalog titles and URLs, failing on duplicate or empty titles
    Catalog,

    /// Run a query and print ranked results with scores
    Query {
        /// Query text; supports +required, -prohibited, wild*, fuzzy~1, boost^2
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Open the widget, type the query, and print the dropdown markup
    Render {
        /// Text typed into the search box
        #[arg(num_args = 0..)]
        text: Vec<String>,

        /// Print results as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
}
