//! Interactive disambiguation of search results, seasons and episodes.
//!
//! Title searches page through remote results with [`select_candidate`].
//! Seasons and episodes come from an already-fetched map and use
//! [`select_numbered`].
//!
//! Menus use global zero-based indices: on page `p` the entries are
//! numbered from `(p - 1) * page_size`, where `page_size` is the length of
//! the first full page.

pub mod prompt;

pub use prompt::{Prompt, TerminalPrompt};

#[cfg(test)]
use prompt::ScriptedPrompt;

use std::collections::BTreeMap;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{Error, Result};
use crate::tmdb::{EpisodeDetail, MovieCandidate, SearchPage, SeasonSummary, ShowCandidate};

/// Something that can be listed in a selection menu.
pub trait Candidate {
    /// One-line description shown after the menu index.
    fn label(&self) -> String;
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn label(&self) -> String {
        (**self).label()
    }
}

impl Candidate for MovieCandidate {
    fn label(&self) -> String {
        format!(
            "{} ({})",
            self.title,
            self.release_date.as_deref().unwrap_or_default()
        )
    }
}

impl Candidate for ShowCandidate {
    fn label(&self) -> String {
        format!(
            "{} ({})",
            self.name,
            self.first_air_date.as_deref().unwrap_or_default()
        )
    }
}

impl Candidate for SeasonSummary {
    fn label(&self) -> String {
        format!(
            "{} ({}) Episode Count: {}",
            self.name,
            self.air_date.as_deref().unwrap_or_default(),
            self.episode_count
        )
    }
}

impl Candidate for EpisodeDetail {
    fn label(&self) -> String {
        format!(
            "{} ({})",
            self.name,
            self.air_date.as_deref().unwrap_or_default()
        )
    }
}

/// Re-runs a search for a specific page.
#[async_trait]
pub trait PageSource<T> {
    async fn fetch_page(&self, page: u32) -> Result<SearchPage<T>>;
}

// ---------------------------------------------------------------------------
// Input handling
// ---------------------------------------------------------------------------

/// A parsed line of menu input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Index(i64),
    Next,
    Previous,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line {
        "n" => Command::Next,
        "p" => Command::Previous,
        "q" | "quit" | "exit" => Command::Quit,
        _ => match line.parse::<i64>() {
            Ok(n) => Command::Index(n),
            Err(_) => Command::Unknown(line.to_string()),
        },
    }
}

/// What the selector does next in response to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Pick the entry at this position on the current page.
    Select(usize),
    /// Load another page.
    Fetch(u32),
    /// Ask again, optionally reporting why.
    Reprompt(Option<String>),
    Cancel,
}

/// Pagination cursor for a remote result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub total_pages: u32,
    pub page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 1,
            page_size: 0,
        }
    }
}

impl Pager {
    /// Record the shape of the page currently on screen.
    pub fn observe<T>(&mut self, page: &SearchPage<T>) {
        self.total_pages = page.total_pages;
        if self.page_size == 0 && self.has_next() {
            self.page_size = page.results.len();
        }
    }

    pub fn has_next(&self) -> bool {
        self.total_pages > self.page
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Global index of the first entry on the current page.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.page_size
    }

    /// Decide the next step for `command` given `len` entries on screen.
    pub fn apply(&self, command: &Command, len: usize) -> Transition {
        match command {
            Command::Index(n) => {
                let local = *n - self.offset() as i64;
                if local >= 0 && (local as usize) < len {
                    Transition::Select(local as usize)
                } else {
                    Transition::Reprompt(Some(format!("Invalid selection {n}")))
                }
            }
            Command::Next if self.has_next() => Transition::Fetch(self.page + 1),
            Command::Previous if self.has_previous() => Transition::Fetch(self.page - 1),
            Command::Quit => Transition::Cancel,
            _ => Transition::Reprompt(None),
        }
    }
}

// ---------------------------------------------------------------------------
// Remote result selection
// ---------------------------------------------------------------------------

enum State<T> {
    Listing(SearchPage<T>),
    AwaitingInput(SearchPage<T>),
    Requerying(u32),
    Selected(T),
    Cancelled,
}

/// Pick one search result, prompting only when there is more than one.
///
/// `noun` is the plural used in messages (`"movies"`, `"shows"`).
pub async fn select_candidate<T, S, P>(
    first: SearchPage<T>,
    source: &S,
    prompt: &mut P,
    noun: &str,
) -> Result<T>
where
    T: Candidate + Send,
    S: PageSource<T> + Sync + ?Sized,
    P: Prompt + ?Sized,
{
    if first.total_results == 0 {
        return Err(Error::NotFound(noun.to_string()));
    }
    if first.total_results == 1 {
        return first
            .results
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(noun.to_string()));
    }
    if first.results.is_empty() {
        return Err(Error::NotFound(noun.to_string()));
    }

    let mut pager = Pager::default();
    let mut state = State::Listing(first);
    loop {
        state = match state {
            State::Listing(page) => {
                pager.observe(&page);
                prompt.show(&render_page(&page, &pager, noun));
                State::AwaitingInput(page)
            }
            State::AwaitingInput(page) => {
                prompt.show("Your selection: ");
                let command = match prompt.read_line()? {
                    Some(line) => parse_command(&line),
                    None => Command::Quit,
                };
                match pager.apply(&command, page.results.len()) {
                    Transition::Select(index) => {
                        let mut results = page.results;
                        State::Selected(results.swap_remove(index))
                    }
                    Transition::Fetch(next) => State::Requerying(next),
                    Transition::Reprompt(message) => {
                        if let Some(message) = message {
                            prompt.show(&format!("{message}\n"));
                        }
                        State::Listing(page)
                    }
                    Transition::Cancel => State::Cancelled,
                }
            }
            State::Requerying(number) => {
                debug!(page = number, "Fetching result page");
                let page = source.fetch_page(number).await?;
                pager.page = number;
                State::Listing(page)
            }
            State::Selected(candidate) => return Ok(candidate),
            State::Cancelled => return Err(Error::Cancelled),
        };
    }
}

fn render_page<T: Candidate>(page: &SearchPage<T>, pager: &Pager, noun: &str) -> String {
    let mut out = format!("Found {} {}\n", page.total_results, noun);
    let offset = pager.offset();
    for (i, candidate) in page.results.iter().enumerate() {
        out.push_str(&format!("[{:2}] {}\n", offset + i, candidate.label()));
    }
    if pager.has_previous() {
        out.push_str("p: previous page\n");
    }
    if pager.has_next() {
        out.push_str("n: next page\n");
    }
    out.push('\n');
    out
}

// ---------------------------------------------------------------------------
// Local numbered selection
// ---------------------------------------------------------------------------

/// Pick a key from `entries`, using `preset` without prompting when it is
/// present in the map.
///
/// `noun` is singular (`"season"`, `"episode"`).
pub fn select_numbered<T, P>(
    entries: &BTreeMap<u32, T>,
    preset: Option<u32>,
    prompt: &mut P,
    noun: &str,
) -> Result<u32>
where
    T: Candidate,
    P: Prompt + ?Sized,
{
    if entries.is_empty() {
        return Err(Error::NotFound(format!("{noun}s")));
    }

    let mut choice = preset.map(|n| n.to_string());
    loop {
        if let Some(value) = &choice {
            if let Some(number) = value.parse::<u32>().ok().filter(|n| entries.contains_key(n)) {
                return Ok(number);
            }
            prompt.show(&format!("Invalid {noun} selection {value}\n"));
        }

        let mut menu = format!("Select a {noun}:\n");
        for (number, entry) in entries {
            menu.push_str(&format!("[{:2}] {}\n", number, entry.label()));
        }
        menu.push_str("\nYour selection: ");
        prompt.show(&menu);

        let line = match prompt.read_line()? {
            Some(line) => line,
            None => return Err(Error::Cancelled),
        };
        if parse_command(&line) == Command::Quit {
            return Err(Error::Cancelled);
        }
        choice = Some(line.trim().to_string());
    }
}
