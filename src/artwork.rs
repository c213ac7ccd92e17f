//! Artwork selection and download.
//!
//! Picks the largest usable size per image category from the TMDB size
//! catalog, filters images by language, and downloads the result next to the
//! tag document. Existing files are never re-downloaded.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::tmdb::{ImageCatalog, ImageEntry, TmdbClient};

/// Size sentinel TMDB lists last in every size array.
const ORIGINAL_SIZE: &str = "original";

/// Artwork category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageCategory {
    Poster,
    Logo,
    Backdrop,
    /// Episode still, saved as the container cover.
    Still,
}

impl ImageCategory {
    /// Local file name stem.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Poster => "poster",
            Self::Logo => "logo",
            Self::Backdrop => "backdrop",
            Self::Still => "cover",
        }
    }

    /// Available sizes for this category, smallest first.
    fn sizes(self, catalog: &ImageCatalog) -> &[String] {
        match self {
            Self::Poster => &catalog.poster_sizes,
            Self::Logo => &catalog.logo_sizes,
            Self::Backdrop => &catalog.backdrop_sizes,
            Self::Still => &catalog.still_sizes,
        }
    }
}

/// Options controlling which images are picked.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Allow the unscaled "original" size.
    pub include_original: bool,
    /// Take every image per category instead of the first.
    pub all_images: bool,
    /// Drop images tagged with a different language. Untagged images are
    /// always kept.
    pub language: Option<String>,
}

/// An image chosen for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedImage {
    pub category: ImageCategory,
    pub file_name: String,
    pub url: String,
}

/// Largest size for a category, skipping "original" unless allowed.
pub fn pick_size(sizes: &[String], include_original: bool) -> Option<&str> {
    sizes
        .iter()
        .rev()
        .map(String::as_str)
        .find(|size| include_original || *size != ORIGINAL_SIZE)
}

/// Work out which images to fetch and where to store them.
///
/// `sets` pairs each category with the images TMDB listed for it, in TMDB's
/// own ranking order.
pub fn resolve(
    catalog: &ImageCatalog,
    sets: &[(ImageCategory, &[ImageEntry])],
    options: &ResolveOptions,
) -> Vec<PlannedImage> {
    let mut planned = Vec::new();

    for (category, images) in sets {
        let Some(size) = pick_size(category.sizes(catalog), options.include_original) else {
            debug!(?category, "No usable image size, skipping category");
            continue;
        };

        let kept = images.iter().filter(|image| match (&options.language, &image.iso_639_1) {
            (Some(wanted), Some(tagged)) if !tagged.is_empty() => wanted == tagged,
            _ => true,
        });
        let limit = if options.all_images { usize::MAX } else { 1 };

        for (index, image) in kept.take(limit).enumerate() {
            planned.push(PlannedImage {
                category: *category,
                file_name: file_name(category.file_stem(), index, &image.file_path),
                url: format!("{}{}{}", catalog.secure_base_url, size, image.file_path),
            });
        }
    }

    planned
}

/// `poster.jpg`, `poster1.jpg`, `poster2.jpg`, ...
fn file_name(stem: &str, index: usize, remote_path: &str) -> String {
    let suffix = if index > 0 { index.to_string() } else { String::new() };
    match Path::new(remote_path).extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    }
}

/// Download every planned image into `outdir` that is not already there.
///
/// Returns the paths that were written.
pub async fn download_all(
    client: &TmdbClient,
    planned: &[PlannedImage],
    outdir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for image in planned {
        let path = outdir.join(&image.file_name);
        if tokio::fs::try_exists(&path).await? {
            debug!(path = %path.display(), "Image already exists, skipping");
            continue;
        }

        let data = client.download(&image.url).await?;
        tokio::fs::write(&path, &data).await?;
        info!(path = %path.display(), bytes = data.len(), "Saved image");
        written.push(path);
    }

    Ok(written)
}
