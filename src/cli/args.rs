//! Command line argument definitions.

use clap::{Parser, Subcommand};

/// CineSpace - Browse and search the movie catalog
#[derive(Parser, Debug)]
#[command(name = "cinespace")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Movie data file path or URL (overrides config and CINESPACE_DATA)
    #[arg(long, global = true, value_name = "SOURCE")]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search movies by title, director, cast, genre, year and more
    Search {
        /// Search term
        #[arg(value_name = "TERM")]
        term: String,

        /// Only search one category (title and description only)
        #[arg(short = 'c', long, value_name = "CATEGORY")]
        category: Option<String>,

        /// Maximum number of results to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Output format: table, simple, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Browse one category page by page
    Browse {
        /// Category: action, drama, comedy, sci-fi, animation, romance
        #[arg(value_name = "CATEGORY")]
        category: String,

        /// Filter: all, recent, popular, rating
        #[arg(short = 'f', long, default_value = "all")]
        filter: String,

        /// Page number (starting at 1)
        #[arg(short = 'p', long, default_value_t = 1)]
        page: usize,

        /// Movies per page (default from config)
        #[arg(long)]
        page_size: Option<usize>,

        /// Output format: table, simple, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show details of one movie and related titles
    Show {
        /// Movie ID
        #[arg(value_name = "ID")]
        id: String,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// List categories and how many movies each holds
    Categories,
}
