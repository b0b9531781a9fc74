//! Artwork catalog scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Walks each configured gallery's image
//! directory, attaches sidecar text, resolves series ordering, and produces
//! the manifest that the generate stage consumes.
//!
//! ## Directory Structure
//!
//! One directory level below each gallery root names the series:
//!
//! ```text
//! content/                         # Content root
//! ├── atelier.toml                 # Site configuration (optional)
//! ├── data/                        # Sidecar text (see crate::sidecar)
//! │   ├── series-order.txt
//! │   ├── gallery-captions/
//! │   └── series-descriptions/
//! ├── paintings/                   # Gallery root
//! │   ├── florals/                 # Series
//! │   │   ├── blue-vase.jpg
//! │   │   └── harbour-sold.jpg     # "sold" in the filename marks it sold
//! │   └── birds/
//! │       └── kereru.jpg
//! └── for-sale/
//!     └── earrings/
//!         └── paua-drops.jpg
//! ```
//!
//! Images directly under a gallery root (no series subdirectory) fall into
//! the `"other"` series, so grouping is total.
//!
//! ## Failure Policy
//!
//! Missing things degrade, they never fault: a missing caption file is an
//! empty caption, a missing gallery directory is an empty catalog. Only
//! real IO failures (unreadable entries) propagate as [`CatalogError`].

use crate::config::{self, GalleryConfig, SiteConfig};
use crate::ordering;
use crate::sidecar::{self, TextIndex};
use crate::titling;
use crate::types::{Artwork, Series};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub galleries: Vec<GalleryManifest>,
    pub config: SiteConfig,
}

/// One gallery's catalog plus its resolved series ordering.
#[derive(Debug, Serialize, Deserialize)]
pub struct GalleryManifest {
    /// URL segment and output directory name.
    pub route: String,
    /// Page heading.
    pub title: String,
    /// Image directory under the content root.
    pub source: String,
    /// Whether viewer pages carry the add-to-cart affordance.
    pub cart: bool,
    /// Page intro text (description file named after the route).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    /// Series present in this gallery, in resolved display order.
    pub series: Vec<Series>,
    /// All artworks, newest-first (reverse path order).
    pub artworks: Vec<Artwork>,
}

/// Scan the content root into a manifest, loading `atelier.toml` (or stock
/// defaults) along the way.
pub fn scan(root: &Path) -> Result<Manifest, CatalogError> {
    let site_config = config::load_config(root)?;
    scan_with_config(root, site_config)
}

/// Scan with an already-loaded configuration.
pub fn scan_with_config(root: &Path, site_config: SiteConfig) -> Result<Manifest, CatalogError> {
    let data_dir = site_config.data_path(root);
    let order = sidecar::read_order_list(&site_config.order_path(root));

    let galleries = site_config
        .galleries
        .iter()
        .map(|gallery| scan_gallery(root, &data_dir, gallery, &order))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Manifest {
        galleries,
        config: site_config,
    })
}

fn scan_gallery(
    root: &Path,
    data_dir: &Path,
    gallery: &GalleryConfig,
    order: &[String],
) -> Result<GalleryManifest, CatalogError> {
    let captions = gallery
        .captions
        .as_ref()
        .map(|dir| TextIndex::load_raw(&data_dir.join(dir)))
        .unwrap_or_default();
    let descriptions = gallery
        .descriptions
        .as_ref()
        .map(|dir| TextIndex::load_cleaned(&data_dir.join(dir)))
        .unwrap_or_default();

    let artworks = load_artworks(&root.join(&gallery.source), &captions)?;

    let present: BTreeSet<String> = artworks.iter().map(|a| a.series.clone()).collect();
    let series = ordering::build_series(&present, order, &descriptions);
    let intro = descriptions.get(&gallery.route).map(String::from);

    Ok(GalleryManifest {
        route: gallery.route.clone(),
        title: gallery.title.clone(),
        source: gallery.source.clone(),
        cart: gallery.cart,
        intro,
        series,
        artworks,
    })
}

/// Load all artwork records under one gallery root.
///
/// A missing root yields an empty catalog. Records come back newest-first:
/// reverse lexicographic comparison of the relative path string — a stable,
/// explicit tie-break rule, not best-effort.
pub fn load_artworks(
    gallery_root: &Path,
    captions: &TextIndex,
) -> Result<Vec<Artwork>, CatalogError> {
    if !gallery_root.is_dir() {
        return Ok(Vec::new());
    }

    let mut artworks = Vec::new();
    for entry in WalkDir::new(gallery_root) {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_image(entry.path()) {
            continue;
        }
        let path = entry.path();
        let rel = path.strip_prefix(gallery_root).unwrap_or(path);
        let image = rel_path_string(rel);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        artworks.push(Artwork {
            id: artwork_id(&image),
            title: titling::title_from_stem(&stem),
            series: series_key(gallery_root, path),
            caption: captions.get(&stem).map(String::from),
            sold: titling::is_sold(&stem),
            image,
        });
    }

    artworks.sort_by(|a, b| b.image.cmp(&a.image));
    Ok(artworks)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Relative path with forward slashes regardless of platform, so both
/// identifiers and ordering are stable across machines.
fn rel_path_string(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Series key: the immediate parent directory, lower-cased and trimmed.
/// `"other"` when the image sits directly under the gallery root.
fn series_key(gallery_root: &Path, path: &Path) -> String {
    path.parent()
        .filter(|parent| *parent != gallery_root)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().trim().to_lowercase())
        .filter(|key| !key.is_empty())
        .unwrap_or_else(|| "other".to_string())
}

/// Stable artwork identifier: truncated SHA-256 of the relative path.
pub fn artwork_id(rel_path: &str) -> String {
    let digest = Sha256::digest(rel_path.as_bytes());
    let hex = format!("{digest:x}");
    hex[..16].to_string()
}

/// Where the scan stage writes its manifest inside the temp dir.
pub fn manifest_path(temp_dir: &Path) -> PathBuf {
    temp_dir.join("manifest.json")
}
