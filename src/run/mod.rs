//! End-to-end tagging runs.
//!
//! - [`movie`] -- Search a movie, tag it, fetch poster/logo/backdrop.
//! - [`tv`] -- Search a show, pick season and episode, tag it, fetch the still.
//!
//! Both runs share the output handling here: a tag document goes either to
//! stdout (no artwork) or to `mkvtags.xml` in an output directory, which is
//! created on demand.

pub mod movie;
pub mod tv;

pub use movie::{run_movie, MovieRequest};
pub use tv::{run_episode, EpisodeRequest};

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::error::{Error, Result};
use crate::select::PageSource;
use crate::tags::{write_xml, TagDocument};
use crate::tmdb::{MovieCandidate, SearchPage, ShowCandidate, TmdbClient};

/// File name of the tag document inside the output directory.
pub const TAGS_FILE_NAME: &str = "mkvtags.xml";

/// Where the tag document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write XML to stdout and skip artwork.
    Stdout,
    /// Write into this directory.
    Directory(PathBuf),
    /// Derive the directory from the selected titles.
    Default,
}

impl OutputTarget {
    /// Interpret an OUTDIR argument; `-` means stdout.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Self::Default,
            Some("-") => Self::Stdout,
            Some(dir) => Self::Directory(PathBuf::from(dir)),
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct RunReport {
    pub document: TagDocument,
    /// Directory the files went into, `None` for stdout output.
    pub outdir: Option<PathBuf>,
    /// Images downloaded during this run. Pre-existing files are not listed.
    pub images: Vec<PathBuf>,
}

/// Turn a title into a single path component.
pub fn path_component(name: &str) -> String {
    name.replace(['/', '\\'], " ").trim().to_string()
}

/// Default output directory for a movie: its title.
pub fn movie_outdir(title: &str) -> PathBuf {
    PathBuf::from(path_component(title))
}

/// Default output directory for an episode: `<show>/<season>/<episode>`.
pub fn episode_outdir(show: &str, season: &str, episode: &str) -> PathBuf {
    [show, season, episode]
        .iter()
        .map(|name| path_component(name))
        .collect()
}

/// Resolve the output directory, creating it if needed.
pub fn prepare_outdir(dir: &Path) -> Result<PathBuf> {
    if dir.is_file() {
        return Err(Error::OutputIsFile(dir.to_path_buf()));
    }
    std::fs::create_dir_all(dir)?;
    Ok(dir.to_path_buf())
}

/// Write the document to `<dir>/mkvtags.xml`, replacing any previous file.
pub fn write_document(doc: &TagDocument, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(TAGS_FILE_NAME);
    let file = std::fs::File::create(&path)?;
    write_xml(doc, BufWriter::new(file))?;
    info!(path = %path.display(), "Wrote tag document");
    Ok(path)
}

pub fn write_document_to_stdout(doc: &TagDocument) -> Result<()> {
    let stdout = std::io::stdout();
    write_xml(doc, stdout.lock())
}

/// Re-runs a movie search for a given page.
pub struct MovieSearch<'a> {
    pub client: &'a TmdbClient,
    pub query: &'a str,
    pub language: &'a str,
    pub include_adult: bool,
}

#[async_trait]
impl PageSource<MovieCandidate> for MovieSearch<'_> {
    async fn fetch_page(&self, page: u32) -> Result<SearchPage<MovieCandidate>> {
        self.client
            .search_movies(self.query, self.language, self.include_adult, page)
            .await
    }
}

/// Re-runs a show search for a given page.
pub struct ShowSearch<'a> {
    pub client: &'a TmdbClient,
    pub query: &'a str,
    pub language: &'a str,
    pub include_adult: bool,
}

#[async_trait]
impl PageSource<ShowCandidate> for ShowSearch<'_> {
    async fn fetch_page(&self, page: u32) -> Result<SearchPage<ShowCandidate>> {
        self.client
            .search_shows(self.query, self.language, self.include_adult, page)
            .await
    }
}
