//! Authenticated TMDB v3 client.
//!
//! Every call is a single GET with a 5-second timeout and a bearer token.
//! There is no retry: the first failure is returned to the caller and ends
//! the run.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, RemoteStatus, Result};

use super::types::{
    ApiConfiguration, Credits, ExternalIds, ImageSet, MovieCandidate, MovieDetail, SearchPage,
    SeasonDetail, ShowCandidate, ShowDetail,
};

/// Per-request timeout for API and image requests
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// TMDB API client.
///
/// Holds the bearer token and base URL resolved from [`Config`] at
/// construction time.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_token: String,
}

impl TmdbClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` with URL-encoded `params` and decode the JSON body.
    ///
    /// The body is read regardless of status so that TMDB's
    /// `status_code`/`status_message` payload can be surfaced in the error.
    pub async fn query<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, ?params, "TMDB request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if status != StatusCode::OK {
            let remote = serde_json::from_slice::<RemoteStatus>(&body).ok();
            debug!(status = status.as_u16(), ?remote, "TMDB request failed");
            return Err(Error::Api {
                status: status.as_u16(),
                remote,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn search_movies(
        &self,
        query: &str,
        language: &str,
        include_adult: bool,
        page: u32,
    ) -> Result<SearchPage<MovieCandidate>> {
        self.search("search/movie", query, language, include_adult, page)
            .await
    }

    pub async fn search_shows(
        &self,
        query: &str,
        language: &str,
        include_adult: bool,
        page: u32,
    ) -> Result<SearchPage<ShowCandidate>> {
        self.search("search/tv", query, language, include_adult, page)
            .await
    }

    async fn search<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
        language: &str,
        include_adult: bool,
        page: u32,
    ) -> Result<SearchPage<T>> {
        let include_adult = if include_adult { "true" } else { "false" };
        let page_param = page.to_string();
        let mut params = vec![
            ("query", query),
            ("language", language),
            ("include_adult", include_adult),
        ];
        // The first page is requested without an explicit page number.
        if page > 1 {
            params.push(("page", page_param.as_str()));
        }
        self.query(path, &params).await
    }

    pub async fn movie_detail(&self, id: u64, language: &str) -> Result<MovieDetail> {
        self.query(&format!("movie/{id}"), &[("language", language)])
            .await
    }

    pub async fn movie_credits(&self, id: u64, language: &str) -> Result<Credits> {
        self.query(&format!("movie/{id}/credits"), &[("language", language)])
            .await
    }

    /// Every image for a movie, across all languages.
    ///
    /// No `language` parameter is sent: TMDB would then drop untagged images,
    /// and those are wanted.
    pub async fn movie_images(&self, id: u64) -> Result<ImageSet> {
        self.query(&format!("movie/{id}/images"), &[]).await
    }

    pub async fn show_detail(&self, id: u64, language: &str) -> Result<ShowDetail> {
        self.query(&format!("tv/{id}"), &[("language", language)])
            .await
    }

    pub async fn show_external_ids(&self, id: u64) -> Result<ExternalIds> {
        self.query(&format!("tv/{id}/external_ids"), &[]).await
    }

    pub async fn season_detail(&self, id: u64, season: u32, language: &str) -> Result<SeasonDetail> {
        self.query(
            &format!("tv/{id}/season/{season}"),
            &[("language", language)],
        )
        .await
    }

    pub async fn episode_credits(
        &self,
        id: u64,
        season: u32,
        episode: u32,
        language: &str,
    ) -> Result<Credits> {
        self.query(
            &format!("tv/{id}/season/{season}/episode/{episode}/credits"),
            &[("language", language)],
        )
        .await
    }

    /// The image size catalog and CDN base URL.
    pub async fn configuration(&self) -> Result<ApiConfiguration> {
        self.query("configuration", &[]).await
    }

    /// Fetch raw bytes from an image CDN URL.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url = %url, "Downloading image");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                remote: None,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base: &str) -> TmdbClient {
        let mut config = Config::with_token("token");
        config.api_base_url = base.to_string();
        TmdbClient::new(&config).unwrap()
    }

    #[test]
    fn url_joins_base_and_path() {
        let client = client_for("https://api.themoviedb.org/3/");
        assert_eq!(
            client.url("/search/movie"),
            "https://api.themoviedb.org/3/search/movie"
        );
        assert_eq!(
            client.url("movie/603/credits"),
            "https://api.themoviedb.org/3/movie/603/credits"
        );
    }
}
