//! CLI output formatting for both pipeline stages.
//!
//! Output is information-centric, not file-centric: the primary display
//! for every entity is its semantic identity — positional index plus title
//! — with filesystem paths as indented `Source:` context lines.
//!
//! ```text
//! Galleries
//! 001 Paintings (3 artworks, 2 series)
//!     Source: paintings/
//!     001 Birds (1 artwork)
//!     002 Florals (2 artworks)
//! 002 Artworks for Sale (2 artworks, 1 series) [cart]
//!     Source: for-sale/
//!     001 Earrings (2 artworks)
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::catalog::{GalleryManifest, Manifest};
use crate::generate::GenerateSummary;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{pos:0>3}")
}

fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

fn gallery_header(index: usize, gallery: &GalleryManifest) -> String {
    let cart = if gallery.cart { " [cart]" } else { "" };
    format!(
        "{} {} ({}, {}){}",
        format_index(index),
        gallery.title,
        count_noun(gallery.artworks.len(), "artwork", "artworks"),
        count_noun(gallery.series.len(), "series", "series"),
        cart
    )
}

/// Scan stage report: galleries, their series, and totals.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Galleries".to_string()];

    for (gallery_pos, gallery) in manifest.galleries.iter().enumerate() {
        lines.push(gallery_header(gallery_pos + 1, gallery));
        lines.push(format!("    Source: {}/", gallery.source));
        for (series_pos, series) in gallery.series.iter().enumerate() {
            let count = gallery
                .artworks
                .iter()
                .filter(|artwork| artwork.series == series.key)
                .count();
            lines.push(format!(
                "    {} {} ({})",
                format_index(series_pos + 1),
                series.label,
                count_noun(count, "artwork", "artworks"),
            ));
        }
    }

    let artworks: usize = manifest.galleries.iter().map(|g| g.artworks.len()).sum();
    let sold: usize = manifest
        .galleries
        .iter()
        .flat_map(|g| g.artworks.iter())
        .filter(|artwork| artwork.sold)
        .count();
    lines.push(String::new());
    lines.push(format!(
        "Scanned {} with {} ({} sold)",
        count_noun(manifest.galleries.len(), "gallery", "galleries"),
        count_noun(artworks, "artwork", "artworks"),
        sold,
    ));
    lines
}

pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{line}");
    }
}

/// Generate stage report: page and image counts.
pub fn format_generate_summary(summary: &GenerateSummary) -> Vec<String> {
    vec![
        format!(
            "Generated {} ({} viewer pages) across {}",
            count_noun(summary.pages, "page", "pages"),
            summary.viewer_pages,
            count_noun(summary.galleries, "gallery", "galleries"),
        ),
        format!("Copied {}", count_noun(summary.images_copied, "image", "images")),
    ]
}

pub fn print_generate_summary(summary: &GenerateSummary) {
    for line in format_generate_summary(summary) {
        println!("{line}");
    }
}
