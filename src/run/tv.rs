use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::artwork::{self, ImageCategory, ResolveOptions};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::select::{select_candidate, select_numbered, Prompt};
use crate::tags::{build_episode_tags, BuildOptions, EpisodeSource};
use crate::tmdb::{ImageEntry, TmdbClient};

use super::{
    episode_outdir, prepare_outdir, write_document, write_document_to_stdout, OutputTarget,
    RunReport, ShowSearch,
};

/// Arguments of a TV episode run.
#[derive(Debug, Clone)]
pub struct EpisodeRequest {
    pub language: String,
    pub title: String,
    /// Season number to use without prompting, if it exists.
    pub season: Option<u32>,
    /// Episode number to use without prompting, if it exists.
    pub episode: Option<u32>,
    pub output: OutputTarget,
}

/// Search a show, pick a season and episode, tag it and fetch its still.
pub async fn run_episode<P: Prompt + ?Sized>(
    client: &TmdbClient,
    config: &Config,
    request: &EpisodeRequest,
    prompt: &mut P,
) -> Result<RunReport> {
    let language = request.language.as_str();

    let first = client
        .search_shows(&request.title, language, config.include_adult, 1)
        .await?;
    let source = ShowSearch {
        client,
        query: &request.title,
        language,
        include_adult: config.include_adult,
    };
    let show = select_candidate(first, &source, prompt, "shows").await?;
    info!(id = show.id, name = %show.name, "Selected show");

    let show_detail = client.show_detail(show.id, language).await?;
    let external_ids = client.show_external_ids(show.id).await?;

    let seasons: BTreeMap<u32, _> = show_detail
        .seasons
        .iter()
        .map(|season| (season.season_number, season))
        .collect();
    let season_number = select_numbered(&seasons, request.season, prompt, "season")?;

    let season = client
        .season_detail(show.id, season_number, language)
        .await?;
    let episodes: BTreeMap<u32, _> = season
        .episodes
        .iter()
        .map(|episode| (episode.episode_number, episode))
        .collect();
    let episode_number = select_numbered(&episodes, request.episode, prompt, "episode")?;
    let episode = episodes
        .get(&episode_number)
        .copied()
        .ok_or_else(|| Error::NotFound("episodes".to_string()))?;
    debug!(season = season_number, episode = episode_number, "Selected episode");

    let credits = client
        .episode_credits(show.id, season_number, episode_number, language)
        .await?;

    let options = BuildOptions {
        language: language.to_string(),
        warn_unknown_crew: config.warn_unknown_crew,
    };
    let document = build_episode_tags(
        EpisodeSource {
            show: &show,
            show_detail: &show_detail,
            external_ids: &external_ids,
            season: &season,
            episode,
            credits: &credits,
        },
        &options,
    );

    let outdir = match &request.output {
        OutputTarget::Stdout => {
            write_document_to_stdout(&document)?;
            return Ok(RunReport {
                document,
                outdir: None,
                images: Vec::new(),
            });
        }
        OutputTarget::Directory(dir) => prepare_outdir(dir)?,
        OutputTarget::Default => {
            prepare_outdir(&episode_outdir(&show.name, &season.name, &episode.name))?
        }
    };
    write_document(&document, &outdir)?;

    let images = match &episode.still_path {
        Some(still) if !still.is_empty() => {
            let catalog = client.configuration().await?.images;
            let stills = [ImageEntry {
                file_path: still.clone(),
                iso_639_1: None,
            }];
            let planned = artwork::resolve(
                &catalog,
                &[(ImageCategory::Still, stills.as_slice())],
                &ResolveOptions {
                    include_original: config.image_size_original,
                    ..ResolveOptions::default()
                },
            );
            artwork::download_all(client, &planned, &outdir).await?
        }
        _ => {
            debug!("Episode has no still image");
            Vec::new()
        }
    };

    Ok(RunReport {
        document,
        outdir: Some(outdir),
        images,
    })
}
