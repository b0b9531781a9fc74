//! # Atelier Gal
//!
//! A static gallery engine and site generator for artist portfolios with an
//! informal storefront. Your filesystem is the data source: gallery
//! directories hold series subdirectories of images, and plain-text sidecar
//! files carry captions, series descriptions, and the display order.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Content is processed through two independent stages, joined by a JSON
//! manifest:
//!
//! ```text
//! 1. Scan      content/ + data/  →  manifest.json   (filesystem → catalog)
//! 2. Generate  manifest          →  dist/           (static HTML site)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Testability**: composition is pure — the view, ordering, lightbox,
//!   and cart modules never touch the filesystem, so unit tests exercise
//!   the gallery logic without scanning or rendering anything.
//! - **Embeddability**: the manifest plus the view layer is everything an
//!   interactive front end needs; the HTML generator is just one consumer.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Stage 1 — walks gallery directories, builds artwork records, produces the manifest |
//! | [`generate`] | Stage 2 — renders the static site from the manifest using Maud |
//! | [`titling`] | Filename-to-title derivation shared by all galleries |
//! | [`sidecar`] | Caption/description/order sidecar text loading |
//! | [`ordering`] | Series display-order resolution (explicit list + alphabetical fallback) |
//! | [`view`] | Gallery filter/group composition and lightbox activation |
//! | [`lightbox`] | Viewer state machine with wraparound navigation |
//! | [`cart`] | In-memory cart store (tab-lifetime, no persistence) |
//! | [`contact`] | Contact form submission through a transactional-email provider |
//! | [`config`] | `atelier.toml` loading, validation, and stock defaults |
//! | [`types`] | Shared types serialized between stages |
//! | [`output`] | CLI output formatting — display of pipeline results |
//!
//! # Design Decisions
//!
//! ## One Parameterized Gallery
//!
//! Every page — paintings, earrings, pet portraits, cards, the storefront —
//! is the same gallery component configured by a small options structure
//! (route, title, source directory, sidecar directories, cart flag). The
//! differences between pages live in `atelier.toml`, not in code.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system: malformed markup is a build error, template variables
//! are Rust expressions, and all interpolation is auto-escaped.
//!
//! ## Missing Data Is Not an Error
//!
//! A missing caption file is an empty caption; a missing description is no
//! description; a missing gallery directory is an empty gallery; an unknown
//! path redirects home. The only user-visible error in normal operation is
//! a failed contact-form submission, reported once and not retried.
//!
//! ## Verbatim Images
//!
//! Source images are copied into the output as-is. No resizing, no
//! re-encoding, no thumbnail pipeline — galleries of this size don't need
//! one, and the build stays dependency-free on the imaging side.
//!
//! ## Explicit Cart State
//!
//! The cart is an explicit store object handed to the components that need
//! it, exposing add/remove/clear and a read-only snapshot. Nothing reaches
//! for ambient global state, and nothing persists: the cart lives for one
//! page session, by design.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod generate;
pub mod lightbox;
pub mod ordering;
pub mod output;
pub mod sidecar;
pub mod titling;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
