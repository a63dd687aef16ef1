//! Command-line argument parsing for actorkit
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// actorkit - Search and inspect Apify marketplace Actors
#[derive(Parser, Debug)]
#[command(name = "actorkit")]
#[command(version)]
#[command(about = "Search and inspect Apify marketplace Actors, or call them as agent tools", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress everything but results and errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print raw JSON instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full-text search over the Actor store
    Search {
        /// Keywords to search by
        search: String,

        /// Maximum number of Actors to return (1-100)
        #[arg(short, long)]
        limit: Option<u32>,

        /// Number of results to skip
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
    },

    /// Pricing currently in effect for an Actor
    Pricing {
        /// Actor ID or username/name
        actor_id: String,
    },

    /// Latest build of an Actor (default build tag)
    Build {
        /// Actor name, e.g. apify/web-scraper
        actor_name: String,
    },

    /// List versions of an Actor
    Versions { actor_name: String },

    /// List builds of an Actor
    Builds { actor_name: String },

    /// Text source files of the latest version
    Sources {
        actor_name: String,

        /// Print file contents too
        #[arg(long)]
        content: bool,
    },

    /// Directory tree of the latest version's source files
    Tree { actor_name: String },

    /// GitHub repositories linked to an Actor
    Github {
        actor_name: String,

        /// Check that each repository exists
        #[arg(long)]
        check: bool,
    },

    /// List available tools and their input schemas
    Tools,

    /// Invoke a tool with JSON arguments
    Call {
        /// Tool name
        tool: String,

        /// Arguments as a JSON object
        #[arg(default_value = "{}")]
        args: String,
    },
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Default tracing filter for this level
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "actorkit=info",
            Verbosity::VeryVerbose => "actorkit=debug",
        }
    }

    /// Check if should show progress spinners
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}
