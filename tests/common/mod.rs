//! Shared test harness for integration tests.
//!
//! Provides [`TmdbMock`], a `wiremock` server standing in for the TMDB API,
//! [`ScriptedPrompt`] for menu input, plus JSON fixtures for the endpoints a
//! run touches.

#![allow(dead_code)]

use std::collections::VecDeque;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tmdb2mkvtags::config::Config;
use tmdb2mkvtags::select::Prompt;
use tmdb2mkvtags::tmdb::TmdbClient;

pub const TOKEN: &str = "test-token";

/// Menu input that replays fixed answers and records what was shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub transcript: String,
    pub reads: usize,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn show(&mut self, text: &str) {
        self.transcript.push_str(text);
    }

    fn read_line(&mut self) -> tmdb2mkvtags::Result<Option<String>> {
        self.reads += 1;
        Ok(self.answers.pop_front())
    }
}

/// Mock TMDB server with a client and config pointing at it.
pub struct TmdbMock {
    pub server: MockServer,
    pub config: Config,
    pub client: TmdbClient,
}

impl TmdbMock {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let mut config = Config::with_token(TOKEN);
        config.api_base_url = server.uri();
        let client = TmdbClient::new(&config).expect("client");
        Self {
            server,
            config,
            client,
        }
    }

    /// Answer GET `route` with a 200 JSON body.
    pub async fn json(&self, route: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Serve raw image bytes under `route` and expect exactly `times` hits.
    pub async fn image(&self, route: &str, times: u64) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"IMG".to_vec()))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// `configuration` payload with the CDN rooted on this mock server.
    pub async fn mount_configuration(&self) {
        let body = configuration(&format!("{}/img/", self.server.uri()));
        self.json("/configuration", body).await;
    }
}

pub fn search_page(page: u32, total_results: u32, total_pages: u32, results: Vec<Value>) -> Value {
    json!({
        "page": page,
        "total_results": total_results,
        "total_pages": total_pages,
        "results": results,
    })
}

pub fn movie_result(id: u64, title: &str, original_language: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "original_title": format!("{title} (original)"),
        "original_language": original_language,
        "release_date": "1979-05-25",
        "overview": format!("Overview of {title}"),
        "vote_average": 7.0,
    })
}

pub fn movie_detail(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "tagline": "",
        "genres": [],
        "imdb_id": "tt0078748",
        "belongs_to_collection": null,
    })
}

pub fn empty_credits() -> Value {
    json!({ "id": 1, "cast": [], "crew": [] })
}

pub fn empty_images() -> Value {
    json!({ "id": 1, "posters": [], "logos": [], "backdrops": [] })
}

pub fn configuration(base: &str) -> Value {
    json!({
        "images": {
            "base_url": base.replacen("https", "http", 1),
            "secure_base_url": base,
            "poster_sizes": ["w92", "w500", "original"],
            "logo_sizes": ["w45", "w300", "original"],
            "backdrop_sizes": ["w300", "w1280", "original"],
            "still_sizes": ["w92", "w300", "original"],
            "profile_sizes": ["w45", "original"],
        },
        "change_keys": [],
    })
}

pub fn show_result(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "original_name": name,
        "original_language": "en",
        "first_air_date": "2015-12-14",
    })
}

pub fn show_detail(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "seasons": [
            { "season_number": 0, "name": "Specials", "air_date": null, "episode_count": 3 },
            { "season_number": 1, "name": "Season 1", "air_date": "2015-12-14", "episode_count": 2 },
        ],
    })
}

pub fn season_detail(number: u32) -> Value {
    json!({
        "season_number": number,
        "name": format!("Season {number}"),
        "air_date": "2015-12-14",
        "episodes": [
            {
                "episode_number": 1,
                "name": "Dulcinea",
                "overview": "Ceres station.",
                "air_date": "2015-12-14",
                "vote_average": 7.6,
                "still_path": "/still1.jpg",
            },
            {
                "episode_number": 2,
                "name": "The Big Empty",
                "overview": "Holden's crew drifts.",
                "air_date": "2015-12-15",
                "vote_average": 7.2,
                "still_path": null,
            },
        ],
    })
}
