//! Error type shared by every stage of a tagging run.
//!
//! Each variant is terminal: the binary reports it and exits with the
//! status code returned by [`Error::exit_code`].

use std::path::PathBuf;

/// Exit status for a successful run.
pub const EXIT_OK: i32 = 0;
/// Exit status for usage errors and failed API calls.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for configuration and filesystem errors.
pub const EXIT_CONFIG: i32 = 2;
/// Exit status when a search returned no results.
pub const EXIT_NOT_FOUND: i32 = 20;
/// Exit status when the user quit an interactive selection.
pub const EXIT_CANCELLED: i32 = 30;

/// Error type for tmdb2mkvtags.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No usable configuration was found.
    #[error("{message}{}", format_tried(.tried))]
    Config {
        message: String,
        tried: Vec<PathBuf>,
    },

    /// TMDB answered with a non-200 status.
    #[error("{}", describe_api_error(*.status, .remote.as_ref()))]
    Api {
        status: u16,
        remote: Option<RemoteStatus>,
    },

    /// The request never produced a response (connect failure, timeout).
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    /// A 200 response body was not the JSON we expected.
    #[error("Failed to parse API response")]
    Parse(#[from] serde_json::Error),

    /// A search returned zero results.
    #[error("No {0} found")]
    NotFound(String),

    /// The user quit an interactive menu.
    #[error("Cancelled by user")]
    Cancelled,

    /// The output directory path points at a regular file.
    #[error("Output directory is a file: {}", .0.display())]
    OutputIsFile(PathBuf),

    /// Reading or writing local files failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the tag document failed.
    #[error("XML error: {0}")]
    Xml(String),
}

/// Structured error payload returned by TMDB alongside a failure status.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct RemoteStatus {
    #[serde(rename = "status_code")]
    pub code: i64,
    #[serde(rename = "status_message")]
    pub message: String,
}

fn describe_api_error(status: u16, remote: Option<&RemoteStatus>) -> String {
    match remote {
        Some(remote) => format!("API error: {} {}", remote.code, remote.message),
        None => format!("Error querying API: {status}"),
    }
}

fn format_tried(tried: &[PathBuf]) -> String {
    if tried.is_empty() {
        return String::new();
    }
    let mut out = String::from("\nConfiguration files tried:");
    for path in tried {
        out.push_str("\n ");
        out.push_str(&path.display().to_string());
    }
    out
}

impl Error {
    /// Create a new Config error.
    pub fn config<S: Into<String>>(msg: S, tried: Vec<PathBuf>) -> Self {
        Self::Config {
            message: msg.into(),
            tried,
        }
    }

    /// Create a new Xml error from any displayable writer error.
    pub fn xml<E: std::fmt::Display>(err: E) -> Self {
        Self::Xml(err.to_string())
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } | Self::OutputIsFile(_) | Self::Io(_) => EXIT_CONFIG,
            Self::NotFound(_) => EXIT_NOT_FOUND,
            Self::Cancelled => EXIT_CANCELLED,
            Self::Api { .. } | Self::Http(_) | Self::Parse(_) | Self::Xml(_) => EXIT_FAILURE,
        }
    }
}

/// Result type alias using the crate Error type.
pub type Result<T> = std::result::Result<T, Error>;
