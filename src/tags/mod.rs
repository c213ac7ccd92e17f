//! Matroska tag document model.
//!
//! A [`TagDocument`] is an ordered list of [`Tag`] blocks, each scoped to a
//! [`TargetType`] level and holding ordered [`Simple`] entries. Entries can
//! nest (`ACTOR` → `CHARACTER`, `ORIGINAL` → `TITLE`).
//!
//! - [`builder`] -- Maps TMDB movie and episode data onto the tag tree.
//! - [`crew`] -- Job title to tag name lookup.
//! - [`writer`] -- XML serialization.

pub mod builder;
pub mod crew;
pub mod writer;

pub use builder::{build_episode_tags, build_movie_tags, BuildOptions, EpisodeSource};
pub use writer::{to_xml_string, write_xml};

/// Scope level of a tag block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    /// Movie collection or TV series (70).
    Collection,
    /// TV season (60).
    Season,
    /// Single movie or episode (50).
    Episode,
}

impl TargetType {
    /// Numeric `TargetType` value written to the document.
    pub fn value(self) -> u8 {
        match self {
            Self::Collection => 70,
            Self::Season => 60,
            Self::Episode => 50,
        }
    }
}

/// A single `Simple` tag entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Simple {
    pub name: String,
    pub value: Option<String>,
    pub language: Option<String>,
    pub children: Vec<Simple>,
}

impl Simple {
    /// Entry with a value and no language.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "Simple tag name must not be empty");
        Self {
            name,
            value: Some(value.into()),
            language: None,
            children: Vec::new(),
        }
    }

    /// Entry with only nested children and no value of its own.
    pub fn group(name: impl Into<String>, children: Vec<Simple>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "Simple tag name must not be empty");
        Self {
            name,
            value: None,
            language: None,
            children,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_child(mut self, child: Simple) -> Self {
        self.children.push(child);
        self
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Simple> {
        self.children.iter().find(|c| c.name == name)
    }
}

/// One `Tag` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    /// Written as an XML comment before the element.
    pub comment: Option<String>,
    pub target: TargetType,
    pub simples: Vec<Simple>,
}

impl Tag {
    pub fn new(target: TargetType) -> Self {
        Self {
            comment: None,
            target,
            simples: Vec::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn push(&mut self, simple: Simple) {
        self.simples.push(simple);
    }

    /// Names of the top-level entries, in order.
    pub fn names(&self) -> Vec<&str> {
        self.simples.iter().map(|s| s.name.as_str()).collect()
    }

    /// First top-level entry with the given name.
    pub fn get(&self, name: &str) -> Option<&Simple> {
        self.simples.iter().find(|s| s.name == name)
    }
}

/// The complete tag document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagDocument {
    pub tags: Vec<Tag>,
}

impl TagDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// First tag block at the given level.
    pub fn tag(&self, target: TargetType) -> Option<&Tag> {
        self.tags.iter().find(|t| t.target == target)
    }
}

/// Convert a TMDB vote average (0-10) to a Matroska rating (0-5).
pub fn mkv_rating(vote_average: f64) -> String {
    (vote_average / 2.0).to_string()
}
