//! tmdb2mkvtags - Matroska tag files from TMDB metadata
//!
//! This library crate exposes the core functionality for integration testing.

pub mod artwork;
pub mod config;
pub mod error;
pub mod run;
pub mod select;
pub mod tags;
pub mod tmdb;

pub use error::{Error, Result};
