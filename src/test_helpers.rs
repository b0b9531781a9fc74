//! Shared test utilities for the atelier-gal test suite.
//!
//! Provides a fixture content tree, record builders for view/cart tests,
//! and lookup helpers that panic with a clear message on miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = fixture_site();
//! let manifest = crate::catalog::scan(tmp.path()).unwrap();
//!
//! let paintings = find_gallery(&manifest, "paintings");
//! let vase = find_artwork(paintings, "Blue Vase");
//! assert_eq!(vase.series, "florals");
//! ```

use crate::catalog::{self, GalleryManifest, Manifest};
use crate::titling;
use crate::types::{Artwork, Series};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// =========================================================================
// Fixture setup
// =========================================================================

/// Build a small but complete content tree in a temp directory:
///
/// ```text
/// paintings/
/// ├── florals/blue-vase.jpg        (captioned)
/// ├── florals/harbour-sold.jpg     (sold)
/// └── birds/kereru.jpg
/// for-sale/
/// ├── earrings/paua-drops.jpg
/// └── earrings/koru-hoops.jpg
/// data/
/// ├── series-order.txt             (birds first)
/// ├── gallery-captions/blue-vase.txt
/// ├── series-descriptions/florals.txt
/// └── for-sale-descriptions/for-sale.txt   (page intro)
/// ```
///
/// The stock config's other galleries (earrings, pet-portraits, cards)
/// deliberately have no source directories, covering the
/// missing-directory-degrades-to-empty path.
pub fn fixture_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write_image(&root.join("paintings/florals/blue-vase.jpg"));
    write_image(&root.join("paintings/florals/harbour-sold.jpg"));
    write_image(&root.join("paintings/birds/kereru.jpg"));
    write_image(&root.join("for-sale/earrings/paua-drops.jpg"));
    write_image(&root.join("for-sale/earrings/koru-hoops.jpg"));

    write_text(
        &root.join("data/series-order.txt"),
        "# display order\nbirds\n",
    );
    write_text(
        &root.join("data/gallery-captions/blue-vase.txt"),
        "Oil on canvas, 30 x 40 cm\n",
    );
    write_text(
        &root.join("data/series-descriptions/florals.txt"),
        "# florals blurb\nStill lifes from the garden.\n",
    );
    write_text(
        &root.join("data/for-sale-descriptions/for-sale.txt"),
        "Original works currently available.\n",
    );

    tmp
}

/// Write a placeholder image file, creating parent directories. Scanning
/// only checks extensions, so the content never has to decode.
pub fn write_image(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"not a real image").unwrap();
}

fn write_text(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

// =========================================================================
// Record builders
// =========================================================================

/// Build an artwork the way the catalog loader would, from a relative
/// image path and a series key.
pub fn artwork(image: &str, series: &str) -> Artwork {
    let stem = Path::new(image)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    Artwork {
        id: catalog::artwork_id(image),
        title: titling::title_from_stem(&stem),
        image: image.to_string(),
        series: series.to_string(),
        caption: None,
        sold: titling::is_sold(&stem),
    }
}

/// Build a series record with a capitalized label and no description.
pub fn series(key: &str) -> Series {
    Series {
        key: key.to_string(),
        label: titling::capitalize(key),
        description: None,
    }
}

// =========================================================================
// Manifest lookups — panic with a clear message on miss
// =========================================================================

/// Find a gallery by route. Panics if not found.
pub fn find_gallery<'a>(manifest: &'a Manifest, route: &str) -> &'a GalleryManifest {
    manifest
        .galleries
        .iter()
        .find(|g| g.route == route)
        .unwrap_or_else(|| {
            let routes: Vec<&str> = manifest.galleries.iter().map(|g| g.route.as_str()).collect();
            panic!("gallery '{route}' not found. Available: {routes:?}")
        })
}

/// Find an artwork by title within a gallery. Panics if not found.
pub fn find_artwork<'a>(gallery: &'a GalleryManifest, title: &str) -> &'a Artwork {
    gallery
        .artworks
        .iter()
        .find(|a| a.title == title)
        .unwrap_or_else(|| {
            let titles: Vec<&str> = gallery.artworks.iter().map(|a| a.title.as_str()).collect();
            panic!(
                "artwork '{title}' not found in gallery '{}'. Available: {titles:?}",
                gallery.route
            )
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All artwork titles in catalog order.
pub fn artwork_titles(gallery: &GalleryManifest) -> Vec<&str> {
    gallery.artworks.iter().map(|a| a.title.as_str()).collect()
}

/// All series keys in resolved order.
pub fn series_keys(gallery: &GalleryManifest) -> Vec<&str> {
    gallery.series.iter().map(|s| s.key.as_str()).collect()
}
