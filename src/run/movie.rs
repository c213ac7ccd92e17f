use tracing::info;

use crate::artwork::{self, ImageCategory, ResolveOptions};
use crate::config::Config;
use crate::error::Result;
use crate::select::{select_candidate, Prompt};
use crate::tags::{build_movie_tags, BuildOptions};
use crate::tmdb::TmdbClient;

use super::{
    movie_outdir, prepare_outdir, write_document, write_document_to_stdout, MovieSearch,
    OutputTarget, RunReport,
};

/// Arguments of a movie run.
#[derive(Debug, Clone)]
pub struct MovieRequest {
    pub language: String,
    pub title: String,
    pub output: OutputTarget,
}

/// Search, select and tag a movie, then download its artwork.
pub async fn run_movie<P: Prompt + ?Sized>(
    client: &TmdbClient,
    config: &Config,
    request: &MovieRequest,
    prompt: &mut P,
) -> Result<RunReport> {
    let language = request.language.as_str();

    let first = client
        .search_movies(&request.title, language, config.include_adult, 1)
        .await?;
    let source = MovieSearch {
        client,
        query: &request.title,
        language,
        include_adult: config.include_adult,
    };
    let movie = select_candidate(first, &source, prompt, "movies").await?;
    info!(id = movie.id, title = %movie.title, "Selected movie");

    let detail = client.movie_detail(movie.id, language).await?;
    let credits = client.movie_credits(movie.id, language).await?;

    let options = BuildOptions {
        language: language.to_string(),
        warn_unknown_crew: config.warn_unknown_crew,
    };
    let document = build_movie_tags(&movie, &detail, &credits, &options);

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
        OutputTarget::Default => prepare_outdir(&movie_outdir(&movie.title))?,
    };
    write_document(&document, &outdir)?;

    let catalog = client.configuration().await?.images;
    let images = client.movie_images(movie.id).await?;
    let planned = artwork::resolve(
        &catalog,
        &[
            (ImageCategory::Poster, images.posters.as_slice()),
            (ImageCategory::Logo, images.logos.as_slice()),
            (ImageCategory::Backdrop, images.backdrops.as_slice()),
        ],
        &ResolveOptions {
            include_original: config.image_size_original,
            all_images: config.all_images,
            language: Some(language.to_string()),
        },
    );
    let images = artwork::download_all(client, &planned, &outdir).await?;

    Ok(RunReport {
        document,
        outdir: Some(outdir),
        images,
    })
}
