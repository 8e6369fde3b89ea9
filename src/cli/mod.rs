//! Command-line interface for aniremap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// aniremap - AniList media remapper
/// Fetches AniList media and serves it in an integer-coded schema
#[derive(Parser)]
#[command(name = "aniremap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    #[command(alias = "daemon")]
    Serve,

    /// Fetch one media entry and print the remapped JSON
    #[command(alias = "f")]
    Fetch {
        /// AniList id or link, e.g. https://anilist.co/anime/21
        target: String,
    },

    /// Remap a raw AniList JSON document without contacting AniList
    #[command(alias = "n")]
    Normalize {
        /// File to read; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Create default config file
    Init,
}

impl Commands {
    /// `init` must work even when the existing config file is broken.
    #[must_use]
    pub const fn loads_config(&self) -> bool {
        !matches!(self, Self::Init)
    }
}
