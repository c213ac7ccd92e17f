//! Builds tag documents from TMDB movie and episode data.

use tracing::warn;

use crate::tmdb::{
    CastCredit, Credits, CrewCredit, EpisodeDetail, ExternalIds, MovieCandidate, MovieDetail,
    SeasonDetail, ShowCandidate, ShowDetail,
};

use super::crew::tag_for_job;
use super::{mkv_rating, Simple, Tag, TagDocument, TargetType};

/// Options that affect document content.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Language the metadata was requested in (e.g. `"de"`).
    pub language: String,
    /// Log a warning for crew jobs without a tag mapping.
    pub warn_unknown_crew: bool,
}

impl BuildOptions {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            warn_unknown_crew: false,
        }
    }
}

/// Everything needed to tag a single TV episode.
#[derive(Debug, Clone, Copy)]
pub struct EpisodeSource<'a> {
    pub show: &'a ShowCandidate,
    pub show_detail: &'a ShowDetail,
    pub external_ids: &'a ExternalIds,
    pub season: &'a SeasonDetail,
    pub episode: &'a EpisodeDetail,
    pub credits: &'a Credits,
}

/// Build the tag document for a movie.
///
/// Emits a collection block (70) when the movie belongs to one, then the
/// movie block (50) with descriptive fields, cast and mapped crew.
pub fn build_movie_tags(
    movie: &MovieCandidate,
    detail: &MovieDetail,
    credits: &Credits,
    options: &BuildOptions,
) -> TagDocument {
    let lang = options.language.as_str();
    let mut doc = TagDocument::new();

    if let Some(collection) = &detail.belongs_to_collection {
        let mut tag = Tag::new(TargetType::Collection).with_comment("Collection information");
        tag.push(Simple::new("TITLE", &collection.name).with_language(lang));
        doc.push(tag);
    }

    let mut tag = Tag::new(TargetType::Episode).with_comment("Movie information");
    tag.push(Simple::new("TITLE", &movie.title).with_language(lang));
    if let Some(tagline) = detail.tagline.as_deref().filter(|t| !t.is_empty()) {
        tag.push(Simple::new("SUBTITLE", tagline).with_language(lang));
    }
    tag.push(Simple::new("SYNOPSIS", text(&movie.overview)).with_language(lang));
    tag.push(Simple::new("DATE_RELEASED", text(&movie.release_date)));
    for genre in &detail.genres {
        tag.push(Simple::new("GENRE", &genre.name).with_language(lang));
    }
    tag.push(Simple::new("RATING", mkv_rating(movie.vote_average)));
    tag.push(Simple::new("TMDB", format!("movie/{}", movie.id)));
    tag.push(Simple::new("IMDB", text(&detail.imdb_id)));

    if movie.original_language != lang {
        tag.push(original_title(&movie.original_title, &movie.original_language));
    }

    push_cast(&mut tag, &credits.cast);
    push_crew(&mut tag, &credits.crew, options);

    doc.push(tag);
    doc
}

/// Build the tag document for a TV episode: series (70), season (60) and
/// episode (50) blocks.
pub fn build_episode_tags(source: EpisodeSource<'_>, options: &BuildOptions) -> TagDocument {
    let lang = options.language.as_str();
    let mut doc = TagDocument::new();

    let mut series = Tag::new(TargetType::Collection).with_comment("Show information");
    series.push(Simple::new("TITLE", &source.show_detail.name).with_language(lang));
    series.push(Simple::new("TMDB", format!("tv/{}", source.show.id)));
    series.push(Simple::new("IMDB", text(&source.external_ids.imdb_id)));
    doc.push(series);

    let mut season = Tag::new(TargetType::Season).with_comment("Season information");
    season.push(Simple::new(
        "PART_NUMBER",
        source.season.season_number.to_string(),
    ));
    season.push(Simple::new("DATE_RELEASED", text(&source.season.air_date)));
    season.push(Simple::new(
        "TOTAL_PARTS",
        source.season.episodes.len().to_string(),
    ));
    doc.push(season);

    let episode = source.episode;
    let mut tag = Tag::new(TargetType::Episode).with_comment("Episode information");
    tag.push(Simple::new("TITLE", &episode.name).with_language(lang));
    tag.push(Simple::new("PART_NUMBER", episode.episode_number.to_string()));
    tag.push(Simple::new("SYNOPSIS", text(&episode.overview)).with_language(lang));
    tag.push(Simple::new("DATE_RELEASED", text(&episode.air_date)));
    tag.push(Simple::new("RATING", mkv_rating(episode.vote_average)));

    if source.show.original_language != lang {
        tag.push(original_title(
            &source.show.original_name,
            &source.show.original_language,
        ));
    }

    push_cast(&mut tag, &source.credits.cast);
    push_cast(&mut tag, &source.credits.guest_stars);
    push_crew(&mut tag, &source.credits.crew, options);

    doc.push(tag);
    doc
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

fn original_title(title: &str, language: &str) -> Simple {
    Simple::group(
        "ORIGINAL",
        vec![Simple::new("TITLE", title).with_language(language)],
    )
}

fn push_cast(tag: &mut Tag, cast: &[CastCredit]) {
    for actor in cast {
        tag.push(Simple::new("ACTOR", &actor.name).with_child(Simple::new("CHARACTER", &actor.character)));
    }
}

fn push_crew(tag: &mut Tag, crew: &[CrewCredit], options: &BuildOptions) {
    for member in crew {
        match tag_for_job(&member.job) {
            Some(name) => tag.push(Simple::new(name, &member.name)),
            None if options.warn_unknown_crew => {
                warn!(job = %member.job, name = %member.name, "Unknown crew mapping");
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tmdb::{CollectionRef, Genre, SeasonSummary};

    fn movie(original_language: &str) -> MovieCandidate {
        MovieCandidate {
            id: 603,
            title: "Matrix".into(),
            original_title: "The Matrix".into(),
            original_language: original_language.into(),
            release_date: Some("1999-03-30".into()),
            overview: Some("Ein Hacker erfährt die Wahrheit.".into()),
            vote_average: 8.2,
        }
    }

    fn detail() -> MovieDetail {
        MovieDetail {
            tagline: None,
            genres: Vec::new(),
            imdb_id: Some("tt0133093".into()),
            belongs_to_collection: None,
        }
    }

    fn crew(name: &str, job: &str) -> CrewCredit {
        CrewCredit {
            name: name.into(),
            job: job.into(),
        }
    }

    fn cast(name: &str, character: &str) -> CastCredit {
        CastCredit {
            name: name.into(),
            character: character.into(),
        }
    }

    #[test]
    fn minimal_movie_has_single_block_in_order() {
        let doc = build_movie_tags(&movie("de"), &detail(), &Credits::default(), &BuildOptions::new("de"));

        assert_eq!(doc.tags.len(), 1);
        let tag = &doc.tags[0];
        assert_eq!(tag.target, TargetType::Episode);
        assert_eq!(
            tag.names(),
            vec!["TITLE", "SYNOPSIS", "DATE_RELEASED", "RATING", "TMDB", "IMDB"]
        );
        assert_eq!(tag.get("TMDB").unwrap().value.as_deref(), Some("movie/603"));
        assert_eq!(tag.get("RATING").unwrap().value.as_deref(), Some("4.1"));
        assert_eq!(tag.get("TITLE").unwrap().language.as_deref(), Some("de"));
        assert!(tag.get("DATE_RELEASED").unwrap().language.is_none());
    }

    #[test]
    fn collection_tagline_and_genres() {
        let mut detail = detail();
        detail.belongs_to_collection = Some(CollectionRef {
            name: "Matrix Filmreihe".into(),
        });
        detail.tagline = Some("Willkommen in der realen Welt.".into());
        detail.genres = vec![
            Genre { name: "Action".into() },
            Genre {
                name: "Science Fiction".into(),
            },
        ];

        let doc = build_movie_tags(&movie("de"), &detail, &Credits::default(), &BuildOptions::new("de"));

        assert_eq!(doc.tags.len(), 2);
        let collection = doc.tag(TargetType::Collection).unwrap();
        assert_eq!(collection.names(), vec!["TITLE"]);
        assert_eq!(
            collection.simples[0].value.as_deref(),
            Some("Matrix Filmreihe")
        );

        let movie_tag = doc.tag(TargetType::Episode).unwrap();
        assert_eq!(
            movie_tag.names(),
            vec![
                "TITLE",
                "SUBTITLE",
                "SYNOPSIS",
                "DATE_RELEASED",
                "GENRE",
                "GENRE",
                "RATING",
                "TMDB",
                "IMDB"
            ]
        );
    }

    #[test]
    fn empty_tagline_is_skipped() {
        let mut detail = detail();
        detail.tagline = Some(String::new());
        let doc = build_movie_tags(&movie("de"), &detail, &Credits::default(), &BuildOptions::new("de"));
        assert!(doc.tags[0].get("SUBTITLE").is_none());
    }

    #[test]
    fn original_title_only_when_language_differs() {
        let doc = build_movie_tags(&movie("en"), &detail(), &Credits::default(), &BuildOptions::new("de"));
        let original = doc.tags[0].get("ORIGINAL").unwrap();
        assert!(original.value.is_none());
        let title = original.child("TITLE").unwrap();
        assert_eq!(title.value.as_deref(), Some("The Matrix"));
        assert_eq!(title.language.as_deref(), Some("en"));

        let doc = build_movie_tags(&movie("de"), &detail(), &Credits::default(), &BuildOptions::new("de"));
        assert!(doc.tags[0].get("ORIGINAL").is_none());
    }

    #[test]
    fn cast_then_mapped_crew() {
        let credits = Credits {
            cast: vec![
                cast("Keanu Reeves", "Neo"),
                cast("Carrie-Anne Moss", "Trinity"),
            ],
            crew: vec![
                crew("Lana Wachowski", "Director"),
                crew("Someone", "Catering"),
                crew("Don Davis", "Original Music Composer"),
                crew("Lilly Wachowski", "Screenplay"),
            ],
            guest_stars: Vec::new(),
        };
        let doc = build_movie_tags(&movie("de"), &detail(), &credits, &BuildOptions::new("de"));
        let tag = &doc.tags[0];

        let tail: Vec<&str> = tag.names().into_iter().skip(6).collect();
        assert_eq!(
            tail,
            vec!["ACTOR", "ACTOR", "DIRECTOR", "COMPOSER", "WRITTEN_BY"]
        );
        let neo = &tag.simples[6];
        assert_eq!(neo.value.as_deref(), Some("Keanu Reeves"));
        assert_eq!(neo.child("CHARACTER").unwrap().value.as_deref(), Some("Neo"));
    }

    #[test]
    fn each_mapped_crew_entry_produces_exactly_one_leaf() {
        let jobs = ["Director", "Writer", "Best Boy", "Novel", "Gaffer", "Choreographer"];
        let credits = Credits {
            crew: jobs.iter().map(|job| crew("X", job)).collect(),
            ..Credits::default()
        };
        let options = BuildOptions {
            language: "de".into(),
            warn_unknown_crew: true,
        };
        let doc = build_movie_tags(&movie("de"), &detail(), &credits, &options);
        let crew_names: Vec<&str> = doc.tags[0].names().into_iter().skip(6).collect();
        assert_eq!(
            crew_names,
            vec!["DIRECTOR", "WRITTEN_BY", "WRITTEN_BY", "CHOREGRAPHER"]
        );
    }

    #[test]
    fn episode_document_structure() {
        let show = ShowCandidate {
            id: 1399,
            name: "Game of Thrones".into(),
            original_name: "Game of Thrones".into(),
            original_language: "en".into(),
            first_air_date: Some("2011-04-17".into()),
        };
        let show_detail = ShowDetail {
            name: "Game of Thrones".into(),
            seasons: vec![SeasonSummary {
                season_number: 1,
                name: "Staffel 1".into(),
                air_date: Some("2011-04-17".into()),
                episode_count: 2,
            }],
        };
        let external_ids = ExternalIds {
            imdb_id: Some("tt0944947".into()),
        };
        let episodes = vec![
            EpisodeDetail {
                episode_number: 1,
                name: "Der Winter naht".into(),
                overview: Some("...".into()),
                air_date: Some("2011-04-17".into()),
                vote_average: 7.9,
                still_path: Some("/still1.jpg".into()),
            },
            EpisodeDetail {
                episode_number: 2,
                name: "Der Königsweg".into(),
                overview: None,
                air_date: Some("2011-04-24".into()),
                vote_average: 7.0,
                still_path: None,
            },
        ];
        let season = SeasonDetail {
            season_number: 1,
            name: "Staffel 1".into(),
            air_date: Some("2011-04-17".into()),
            episodes,
        };
        let credits = Credits {
            cast: vec![cast("Sean Bean", "Eddard Stark")],
            crew: vec![crew("Tim Van Patten", "Director")],
            guest_stars: vec![cast("Jason Momoa", "Khal Drogo")],
        };

        let doc = build_episode_tags(
            EpisodeSource {
                show: &show,
                show_detail: &show_detail,
                external_ids: &external_ids,
                season: &season,
                episode: &season.episodes[1],
                credits: &credits,
            },
            &BuildOptions::new("de"),
        );

        assert_eq!(doc.tags.len(), 3);
        let series = doc.tag(TargetType::Collection).unwrap();
        assert_eq!(series.names(), vec!["TITLE", "TMDB", "IMDB"]);
        assert_eq!(series.get("TMDB").unwrap().value.as_deref(), Some("tv/1399"));

        let season_tag = doc.tag(TargetType::Season).unwrap();
        assert_eq!(
            season_tag.names(),
            vec!["PART_NUMBER", "DATE_RELEASED", "TOTAL_PARTS"]
        );
        assert_eq!(season_tag.get("TOTAL_PARTS").unwrap().value.as_deref(), Some("2"));

        let episode = doc.tag(TargetType::Episode).unwrap();
        assert_eq!(
            episode.names(),
            vec![
                "TITLE",
                "PART_NUMBER",
                "SYNOPSIS",
                "DATE_RELEASED",
                "RATING",
                "ORIGINAL",
                "ACTOR",
                "ACTOR",
                "DIRECTOR"
            ]
        );
        assert_eq!(episode.get("PART_NUMBER").unwrap().value.as_deref(), Some("2"));
        assert_eq!(episode.get("RATING").unwrap().value.as_deref(), Some("3.5"));
        assert_eq!(episode.get("SYNOPSIS").unwrap().value.as_deref(), Some(""));
        assert_eq!(episode.simples[7].value.as_deref(), Some("Jason Momoa"));
    }
}
