use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tmdb2mkvtags")]
#[command(author, version, about = "Create Matroska tag files from TMDB metadata")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tag a movie
    Movie {
        /// Metadata language, e.g. "en" or "de-DE"
        language: String,

        /// Title to search for
        title: String,

        /// Output directory, "-" for stdout (defaults to the movie title)
        outdir: Option<String>,
    },

    /// Tag a TV episode
    Tv {
        /// Output directory, "-" for stdout (defaults to show/season/episode)
        #[arg(long)]
        output: Option<String>,

        /// Metadata language, e.g. "en" or "de-DE"
        language: String,

        /// Show title to search for
        title: String,

        /// Season number; prompts when missing or unknown
        season: Option<String>,

        /// Episode number; prompts when missing or unknown
        episode: Option<String>,
    },

    /// Validate the configuration and show where it was loaded from and the
    /// effective settings
    Validate,
}

/// Numeric menu preset; anything else means "ask".
pub fn number_arg(arg: Option<&str>) -> Option<u32> {
    arg.and_then(|value| value.trim().parse().ok())
}
