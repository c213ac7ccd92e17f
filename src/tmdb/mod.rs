//! TMDB (The Movie Database) API access.
//!
//! - [`client`] -- Authenticated request helper and typed endpoints.
//! - [`types`] -- Response payloads the tagger consumes.

pub mod client;
pub mod types;

pub use client::TmdbClient;
pub use types::*;
