//! Shared types serialized between pipeline stages.
//!
//! These types flow from scan to generate through `manifest.json` and must
//! be identical on both sides. They are also the vocabulary of the view
//! layer: [`crate::view`] composes galleries out of [`Artwork`] and
//! [`Series`], and [`crate::cart`] copies artworks into [`CartItem`]s.

use serde::{Deserialize, Serialize};

/// A single artwork record, constructed once at catalog-load time and
/// immutable thereafter.
///
/// The identifier is derived from the relative source path and is unique
/// within a catalog. The series key is always present: artworks sitting
/// directly under a gallery root (no series subdirectory) get `"other"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artwork {
    /// Stable identifier: truncated SHA-256 of the relative source path.
    pub id: String,
    /// Display title derived from the filename, or `"Untitled"`.
    pub title: String,
    /// Image reference: path relative to the gallery root.
    pub image: String,
    /// Lower-cased series grouping key.
    pub series: String,
    /// Caption text from a matching sidecar file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// True when the filename marks the piece as sold.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub sold: bool,
}

/// A named grouping of artworks: one level of subdirectory under a gallery
/// root, with a display label and an optional free-text description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    /// Lower-case grouping token (the subdirectory name).
    pub key: String,
    /// Human label: the key with its first character capitalized.
    pub label: String,
    /// Description from a matching sidecar file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A cart entry: a lightweight copy of an artwork, deliberately decoupled
/// from the catalog record. No quantity field — duplicate adds produce
/// duplicate entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub title: String,
    pub image: String,
    pub series: String,
}

impl CartItem {
    /// Copy the fields the cart needs out of an artwork.
    pub fn from_artwork(artwork: &Artwork) -> Self {
        Self {
            id: artwork.id.clone(),
            title: artwork.title.clone(),
            image: artwork.image.clone(),
            series: artwork.series.clone(),
        }
    }
}
