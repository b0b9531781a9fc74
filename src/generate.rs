//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the scan manifest and generates the
//! final static site.
//!
//! ## Generated Pages
//!
//! - **Home** (`/index.html`): gallery cards with preview images
//! - **Gallery pages** (`/{route}/index.html`): the "All" view — series
//!   sections in resolved order, filter bar linking to series views
//! - **Series views** (`/{route}/series/{key}/index.html`): one series,
//!   the static form of the series filter
//! - **Viewer pages** (`/{route}/{n}.html` and
//!   `/{route}/series/{key}/{n}.html`): one image with wraparound
//!   previous/next links — the viewer cycles over the list its context
//!   defines, the whole gallery from the "All" view, a single series from
//!   a series view
//! - **Contact** (`/contact/index.html`): the enquiry form
//! - **`/404.html`**: redirects unknown paths back to home
//!
//! Source images are copied verbatim under `/{route}/img/`; there is no
//! processing step.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping. The
//! stylesheet and the two small scripts (contact submission, storefront
//! cart) are embedded at compile time.

use crate::catalog::{GalleryManifest, Manifest};
use crate::config::SiteConfig;
use crate::contact::{BANNER_FADE_MS, BANNER_HIDE_MS, EMAILJS_ENDPOINT, banner_text};
use crate::lightbox::{Cursor, ViewerOptions};
use crate::types::Artwork;
use crate::view::{Filter, GalleryView, Section};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS: &str = include_str!("../static/style.css");
const CONTACT_JS: &str = include_str!("../static/contact.js");
const CART_JS: &str = include_str!("../static/cart.js");

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Counters for the CLI report.
#[derive(Debug, Default)]
pub struct GenerateSummary {
    pub galleries: usize,
    pub pages: usize,
    pub viewer_pages: usize,
    pub images_copied: usize,
}

/// Generate the site from a manifest file on disk.
pub fn generate(
    manifest_path: &Path,
    source_root: &Path,
    output_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    let manifest: Manifest = serde_json::from_str(&fs::read_to_string(manifest_path)?)?;
    generate_site(&manifest, source_root, output_dir)
}

/// Generate the site from an in-memory manifest.
pub fn generate_site(
    manifest: &Manifest,
    source_root: &Path,
    output_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    let mut summary = GenerateSummary::default();
    fs::create_dir_all(output_dir)?;

    write_page(
        &output_dir.join("index.html"),
        render_home(manifest),
        &mut summary,
    )?;
    write_page(&output_dir.join("404.html"), render_not_found(), &mut summary)?;

    let contact_dir = output_dir.join("contact");
    fs::create_dir_all(&contact_dir)?;
    write_page(
        &contact_dir.join("index.html"),
        render_contact_page(&manifest.config)?,
        &mut summary,
    )?;

    for gallery in &manifest.galleries {
        summary.galleries += 1;
        let gallery_dir = output_dir.join(&gallery.route);
        fs::create_dir_all(&gallery_dir)?;
        summary.images_copied +=
            copy_images(&source_root.join(&gallery.source), &gallery_dir.join("img"))?;

        let view = GalleryView::new(&gallery.artworks, &gallery.series);
        let flat = view.active_images();

        write_page(
            &gallery_dir.join("index.html"),
            render_gallery_page(&manifest.config, gallery, &view),
            &mut summary,
        )?;

        // Viewer pages in the "All" context: cycle over the whole gallery
        for index in 0..flat.len() {
            let Some(cursor) = Cursor::new(flat.len(), index) else {
                continue;
            };
            let href = |i: usize| format!("/{}/{}.html", gallery.route, i + 1);
            let page = render_viewer_page(
                &manifest.config,
                gallery,
                &flat,
                &cursor,
                &href,
                &format!("/{}/", gallery.route),
            );
            write_page(
                &gallery_dir.join(format!("{}.html", index + 1)),
                page,
                &mut summary,
            )?;
            summary.viewer_pages += 1;
        }

        // Series views and their viewer pages: cycle within one series
        for series in &gallery.series {
            let mut series_view = GalleryView::new(&gallery.artworks, &gallery.series);
            series_view.set_filter(Filter::series(&series.key));
            let images = series_view.active_images();
            if images.is_empty() {
                continue;
            }

            let series_dir = gallery_dir.join("series").join(&series.key);
            fs::create_dir_all(&series_dir)?;
            write_page(
                &series_dir.join("index.html"),
                render_gallery_page(&manifest.config, gallery, &series_view),
                &mut summary,
            )?;

            for index in 0..images.len() {
                let Some(cursor) = Cursor::new(images.len(), index) else {
                    continue;
                };
                let href =
                    |i: usize| format!("/{}/series/{}/{}.html", gallery.route, series.key, i + 1);
                let page = render_viewer_page(
                    &manifest.config,
                    gallery,
                    &images,
                    &cursor,
                    &href,
                    &format!("/{}/series/{}/", gallery.route, series.key),
                );
                write_page(
                    &series_dir.join(format!("{}.html", index + 1)),
                    page,
                    &mut summary,
                )?;
                summary.viewer_pages += 1;
            }
        }
    }

    Ok(summary)
}

fn write_page(
    path: &Path,
    markup: Markup,
    summary: &mut GenerateSummary,
) -> Result<(), GenerateError> {
    fs::write(path, markup.into_string())?;
    summary.pages += 1;
    Ok(())
}

/// Copy every image under `src` to `dst`, preserving the series
/// subdirectories. A missing source directory copies nothing.
fn copy_images(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_image(entry.path()) {
            continue;
        }
        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &target)?;
        copied += 1;
    }
    Ok(copied)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure.
fn base_document(title: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Site header: title plus one nav link per gallery and the contact page.
fn site_header(config: &SiteConfig, current: Option<&str>, cart_badge: bool) -> Markup {
    html! {
        header.site-header {
            a.site-title href="/" { (config.site.title) }
            nav.site-nav {
                @for gallery in &config.galleries {
                    a.current[current == Some(gallery.route.as_str())]
                        href=(format!("/{}/", gallery.route)) {
                        (gallery.title)
                    }
                }
                a.current[current == Some("contact")] href="/contact/" { "Contact" }
                @if cart_badge {
                    span.cart-badge { "Cart (0)" }
                }
            }
        }
    }
}

fn img_src(gallery: &GalleryManifest, artwork: &Artwork) -> String {
    format!("/{}/img/{}", gallery.route, artwork.image)
}

/// Home page: one card per gallery, previewing its newest artwork.
fn render_home(manifest: &Manifest) -> Markup {
    let config = &manifest.config;
    let content = html! {
        (site_header(config, None, false))
        main {
            h1 { (config.site.title) }
            @if !config.site.tagline.is_empty() {
                p.tagline { (config.site.tagline) }
            }
            div.gallery-cards {
                @for gallery in &manifest.galleries {
                    a.gallery-card href=(format!("/{}/", gallery.route)) {
                        figure {
                            @if let Some(preview) = gallery.artworks.first() {
                                img src=(img_src(gallery, preview)) alt=(preview.title);
                            }
                            figcaption { (gallery.title) }
                        }
                    }
                }
            }
        }
    };
    base_document(&config.site.title, None, content)
}

/// A gallery page: filter bar, intro, and the sections the view composes
/// for its current filter. Serves both the "All" page and series views.
fn render_gallery_page(
    config: &SiteConfig,
    gallery: &GalleryManifest,
    view: &GalleryView,
) -> Markup {
    let flat = GalleryView::new(&gallery.artworks, &gallery.series).active_images();
    let content = html! {
        (site_header(config, Some(gallery.route.as_str()), gallery.cart))
        main {
            (render_filter_bar(gallery, view.filter()))
            h1 { (gallery.title) }
            @if let Some(intro) = &gallery.intro {
                p.gallery-intro { (intro) }
            }
            @for section in view.sections() {
                (render_section(config, gallery, &section, view.filter(), &flat))
            }
        }
    };
    let title = format!("{} — {}", gallery.title, config.site.title);
    base_document(&title, None, content)
}

/// Filter bar: the active selection is inert text, everything else links.
fn render_filter_bar(gallery: &GalleryManifest, filter: &Filter) -> Markup {
    html! {
        div.filter-bar {
            @match filter {
                Filter::All => { span.current { "All" } }
                Filter::Series(_) => { a href=(format!("/{}/", gallery.route)) { "All" } }
            }
            @for series in &gallery.series {
                @if matches!(filter, Filter::Series(key) if *key == series.key) {
                    span.current { (series.label) }
                } @else {
                    a href=(format!("/{}/series/{}/", gallery.route, series.key)) {
                        (series.label)
                    }
                }
            }
        }
    }
}

/// One series section: heading, divider, description, thumbnail grid.
///
/// Thumbnail links depend on the filter context: under "All" they target
/// whole-gallery viewer pages (position in the flattened catalog), under a
/// series filter they target that series' own viewer pages.
fn render_section(
    config: &SiteConfig,
    gallery: &GalleryManifest,
    section: &Section,
    filter: &Filter,
    flat: &[&Artwork],
) -> Markup {
    let viewer_href = |artwork: &Artwork, position_in_section: usize| match filter {
        Filter::All => {
            let position = flat
                .iter()
                .position(|other| other.id == artwork.id)
                .unwrap_or(0);
            format!("/{}/{}.html", gallery.route, position + 1)
        }
        Filter::Series(key) => format!(
            "/{}/series/{}/{}.html",
            gallery.route,
            key,
            position_in_section + 1
        ),
    };

    html! {
        section.series-section id=(section.series.key) {
            h2 { (section.series.label) }
            div.series-divider {}
            @if let Some(description) = &section.series.description {
                p.series-description { (description) }
            }
            div.thumb-grid {
                @for (position, artwork) in section.artworks.iter().enumerate() {
                    a.thumb href=(viewer_href(artwork, position)) {
                        figure {
                            img src=(img_src(gallery, artwork)) alt=(artwork.title);
                            figcaption {
                                (artwork.title)
                                @if artwork.sold {
                                    span.sold-badge { "Sold" }
                                }
                            }
                            @if gallery.cart {
                                @if let Some(caption) = &artwork.caption {
                                    p.caption { (caption) }
                                }
                                p.price-note { (config.site.price_note) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A viewer page: one image with wraparound previous/next links computed
/// by the lightbox cursor, plus the affordances the gallery grants.
fn render_viewer_page(
    config: &SiteConfig,
    gallery: &GalleryManifest,
    images: &[&Artwork],
    cursor: &Cursor,
    viewer_href: &dyn Fn(usize) -> String,
    close_href: &str,
) -> Markup {
    let artwork = images[cursor.index()];
    let options = ViewerOptions {
        captions: true,
        cart: gallery.cart,
    };
    let content = html! {
        main.viewer {
            img src=(img_src(gallery, artwork)) alt=(artwork.title);
            @if options.captions {
                @if let Some(caption) = &artwork.caption {
                    p.caption { (caption) }
                }
            }
            @if options.cart {
                button.add-to-cart
                    data-id=(artwork.id)
                    data-title=(artwork.title)
                    data-image=(artwork.image)
                    data-series=(artwork.series) {
                    "Add to Cart"
                }
            }
            nav.viewer-nav {
                a href=(viewer_href(cursor.peek_prev())) rel="prev" { "← Previous" }
                a href=(close_href) { "Close" }
                a href=(viewer_href(cursor.peek_next())) rel="next" { "Next →" }
            }
        }
        @if options.cart {
            aside.cart-drawer {
                h2 { "Your Cart" }
                ul {}
                button.cart-clear { "Clear" }
            }
            span.cart-badge hidden {}
            script { (PreEscaped(CART_JS)) }
        }
    };
    let title = format!("{} — {}", artwork.title, config.site.title);
    base_document(&title, Some("viewer-page"), content)
}

/// Contact page: the enquiry form plus the transient status banner. The
/// submission script is emitted only when the provider is configured.
fn render_contact_page(config: &SiteConfig) -> Result<Markup, GenerateError> {
    let contact_config = serde_json::to_string(&serde_json::json!({
        "endpoint": EMAILJS_ENDPOINT,
        "serviceId": config.email.service_id,
        "templateId": config.email.template_id,
        "publicKey": config.email.public_key,
        "fadeMs": BANNER_FADE_MS,
        "hideMs": BANNER_HIDE_MS,
        "successText": banner_text(true),
        "errorText": banner_text(false),
    }))?;

    let content = html! {
        (site_header(config, Some("contact"), false))
        main {
            h1 { "Contact" }
            p {
                "For commissions, purchase enquiries, or collaborations, "
                "send a message below."
            }
            div.status-banner.hidden {}
            form.contact-form {
                input type="text" name="from_name" placeholder="Your name" required;
                input type="email" name="from_email" placeholder="Your email" required;
                textarea name="message" rows="4" placeholder="Your message" required {}
                button type="submit" { "Send Message" }
            }
            @if config.email.is_configured() {
                script { (PreEscaped(format!("window.ATELIER_CONTACT = {contact_config};"))) }
                script { (PreEscaped(CONTACT_JS)) }
            }
        }
    };
    let title = format!("Contact — {}", config.site.title);
    Ok(base_document(&title, None, content))
}

/// Unknown paths land here on static hosts; send them home silently.
fn render_not_found() -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta http-equiv="refresh" content="0; url=/";
                title { "Redirecting" }
            }
            body {
                p {
                    a href="/" { "Return to the gallery." }
                }
            }
        }
    }
}
