//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Upper bound for `--refresh`.
const MAX_REFRESH: i64 = 10;

#[derive(Parser, Debug)]
#[command(name = "ceylon", author, version, about = "Grounded Sri Lanka news topics and article drafts")]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Also write the article HTML or meta description to this file
    #[arg(long, short, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List trending Sri Lanka news topics
    Trends {
        /// Issue this many overlapping requests and keep the newest
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=MAX_REFRESH))]
        refresh: u32,
    },
    /// Generate an article on a topic
    Article {
        /// Topic or headline to write about
        topic: String,
    },
    /// Sri Lanka Railways topics and articles
    Railway {
        #[command(subcommand)]
        command: RailwayCommand,
    },
    /// Build an SEO meta description from article HTML
    Meta {
        /// Focus keyword
        keyword: String,

        /// Read the HTML from this file instead of stdin
        #[arg(long, value_name = "HTML")]
        file: Option<PathBuf>,
    },
    /// Sanitize article HTML
    Sanitize {
        /// Read the HTML from this file instead of stdin
        #[arg(long, value_name = "HTML")]
        file: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RailwayCommand {
    /// List railway topics from a randomly chosen theme
    Topics {
        /// Issue this many overlapping requests and keep the newest
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=MAX_REFRESH))]
        refresh: u32,
    },
    /// Generate a railway article on a topic
    Article {
        /// Topic to write about
        topic: String,
    },
}
