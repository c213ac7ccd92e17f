//! TMDB v3 response types.
//!
//! Only the fields the tagger reads are declared; everything else in the
//! payload is ignored by serde. Nullable or sometimes-missing fields are
//! either `Option` or decoded with `null_as_default`, so `null` and a
//! missing key both yield the empty value.

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// One page of a paginated search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage<T> {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_results: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

fn first_page() -> u32 {
    1
}

/// A movie entry from `search/movie`.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieCandidate {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_language: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
}

/// A show entry from `search/tv`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShowCandidate {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_language: String,
    #[serde(default)]
    pub first_air_date: Option<String>,
}

// ---------------------------------------------------------------------------
// Details
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// `movie/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetail {
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub belongs_to_collection: Option<CollectionRef>,
}

/// Season summary embedded in `tv/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonSummary {
    pub season_number: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub air_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub episode_count: u32,
}

/// `tv/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ShowDetail {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub seasons: Vec<SeasonSummary>,
}

/// `tv/{id}/external_ids`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalIds {
    #[serde(default)]
    pub imdb_id: Option<String>,
}

/// An episode as listed in `tv/{id}/season/{n}`.
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeDetail {
    pub episode_number: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub air_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default)]
    pub still_path: Option<String>,
}

/// `tv/{id}/season/{n}`
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonDetail {
    pub season_number: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub air_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub episodes: Vec<EpisodeDetail>,
}

// ---------------------------------------------------------------------------
// Credits
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CastCredit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub character: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrewCredit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job: String,
}

/// Movie or episode credits. `guest_stars` is only sent for episodes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credits {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cast: Vec<CastCredit>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub crew: Vec<CrewCredit>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub guest_stars: Vec<CastCredit>,
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

/// The `images` object from `configuration`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageCatalog {
    #[serde(default, deserialize_with = "null_as_default")]
    pub secure_base_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub poster_sizes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logo_sizes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub backdrop_sizes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub still_sizes: Vec<String>,
}

/// `configuration`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfiguration {
    pub images: ImageCatalog,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageEntry {
    pub file_path: String,
    #[serde(default)]
    pub iso_639_1: Option<String>,
}

/// `movie/{id}/images`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub posters: Vec<ImageEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logos: Vec<ImageEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub backdrops: Vec<ImageEntry>,
}
