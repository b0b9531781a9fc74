//! Gallery filter/group view composition.
//!
//! One parameterized view serves every gallery page: it takes a catalog
//! slice and the resolved series ordering, and answers the three questions
//! a gallery page asks:
//!
//! - which sections to render, in what order (empty series are omitted);
//! - which filter buttons to show;
//! - when a thumbnail is activated, which ordered image list the lightbox
//!   should cycle through, and at which starting index.
//!
//! Under the `All` filter the active list is the full flattened catalog in
//! section order, so a visitor can navigate across every series, not just
//! the one they clicked into. Under a series filter the active list is
//! exactly that series' artworks.

use crate::lightbox::Lightbox;
use crate::types::{Artwork, Series};

/// The single selected filter value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Series(String),
}

impl Filter {
    /// Filter on a series key; keys are matched lower-cased and trimmed.
    pub fn series(key: &str) -> Self {
        Filter::Series(key.trim().to_lowercase())
    }
}

/// One rendered gallery section: a series and its artworks.
#[derive(Debug)]
pub struct Section<'a> {
    pub series: &'a Series,
    pub artworks: Vec<&'a Artwork>,
}

/// Result of activating a thumbnail: the ordered list the lightbox cycles
/// through, and the opened lightbox positioned on the clicked artwork.
#[derive(Debug)]
pub struct Activation<'a> {
    pub images: Vec<&'a Artwork>,
    pub lightbox: Lightbox,
}

/// A gallery page's view over a catalog.
///
/// Construction sorts the catalog by resolved series rank (stable within a
/// series, so catalog order is preserved); the filter then selects what the
/// page shows.
#[derive(Debug)]
pub struct GalleryView<'a> {
    artworks: Vec<&'a Artwork>,
    series: &'a [Series],
    filter: Filter,
}

impl<'a> GalleryView<'a> {
    pub fn new(artworks: &'a [Artwork], series: &'a [Series]) -> Self {
        let rank = |artwork: &Artwork| {
            series
                .iter()
                .position(|s| s.key == artwork.series)
                .unwrap_or(usize::MAX)
        };
        let mut sorted: Vec<&Artwork> = artworks.iter().collect();
        sorted.sort_by_key(|artwork| rank(artwork));
        Self {
            artworks: sorted,
            series,
            filter: Filter::All,
        }
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Explicit user filter selection — the only way filter state mutates.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Filter button labels: "All" followed by the series labels in
    /// resolved order.
    pub fn filter_labels(&self) -> Vec<String> {
        std::iter::once("All".to_string())
            .chain(self.series.iter().map(|s| s.label.clone()))
            .collect()
    }

    /// Sections to render for the current filter. Series with zero
    /// artworks are omitted entirely, never rendered as empty headers.
    pub fn sections(&self) -> Vec<Section<'a>> {
        self.series
            .iter()
            .filter(|series| match &self.filter {
                Filter::All => true,
                Filter::Series(key) => series.key == *key,
            })
            .map(|series| Section {
                series,
                artworks: self.by_series(&series.key),
            })
            .filter(|section| !section.artworks.is_empty())
            .collect()
    }

    /// The ordered image list the lightbox cycles through under the
    /// current filter: the full flattened catalog for `All`, one series'
    /// artworks otherwise.
    pub fn active_images(&self) -> Vec<&'a Artwork> {
        match &self.filter {
            Filter::All => self.artworks.clone(),
            Filter::Series(key) => self.by_series(key),
        }
    }

    /// Thumbnail activation: compute the active list, locate the clicked
    /// artwork in it (defaulting to 0 when it cannot be found), and open
    /// the lightbox there.
    pub fn activate(&self, artwork_id: &str) -> Activation<'a> {
        let images = self.active_images();
        let start = images
            .iter()
            .position(|artwork| artwork.id == artwork_id)
            .unwrap_or(0);
        Activation {
            lightbox: Lightbox::open(images.len(), start),
            images,
        }
    }

    fn by_series(&self, key: &str) -> Vec<&'a Artwork> {
        self.artworks
            .iter()
            .copied()
            .filter(|artwork| artwork.series == key)
            .collect()
    }
}
