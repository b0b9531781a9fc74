//! End-to-end pipeline test: scan a real content tree, generate the site,
//! and check the pages a visitor would actually land on.

use atelier_gal::catalog;
use atelier_gal::generate;
use atelier_gal::view::{Filter, GalleryView};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, bytes).unwrap();
}

/// The worked example from the gallery contract: paintings with two floral
/// pieces and one bird, order list putting birds first.
fn example_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write(&root.join("paintings/florals/peonies.jpg"), b"img");
    write(&root.join("paintings/florals/ranunculus.jpg"), b"img");
    write(&root.join("paintings/birds/kereru.jpg"), b"img");
    write(&root.join("for-sale/earrings/paua-drops.jpg"), b"img");

    write(&root.join("data/series-order.txt"), b"# order\nbirds\n");
    write(
        &root.join("data/gallery-captions/kereru.txt"),
        b"Acrylic on board.\n",
    );
    write(
        &root.join("data/series-descriptions/birds.txt"),
        b"# note\nNative birds.\n",
    );

    tmp
}

#[test]
fn resolved_order_and_flattened_activation_match_the_contract() {
    let tmp = example_site();
    let manifest = catalog::scan(tmp.path()).unwrap();

    let paintings = manifest
        .galleries
        .iter()
        .find(|g| g.route == "paintings")
        .unwrap();

    // Resolved order: birds (listed), then florals (alphabetical fallback)
    let keys: Vec<&str> = paintings.series.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["birds", "florals"]);

    // Clicking the first floral under "All" opens the full 3-item list at
    // index 1, right after the single bird
    let view = GalleryView::new(&paintings.artworks, &paintings.series);
    let first_floral = paintings
        .artworks
        .iter()
        .find(|a| a.series == "florals")
        .unwrap();
    let flattened_floral = view
        .active_images()
        .iter()
        .position(|a| a.id == first_floral.id)
        .unwrap();
    let activation = view.activate(&first_floral.id);
    assert_eq!(activation.images.len(), 3);
    assert_eq!(
        activation.lightbox.cursor().unwrap().index(),
        flattened_floral
    );
    assert_eq!(activation.images[0].series, "birds");

    // Under the florals filter the list shrinks to that series
    let mut filtered = GalleryView::new(&paintings.artworks, &paintings.series);
    filtered.set_filter(Filter::series("florals"));
    let activation = filtered.activate(&first_floral.id);
    assert_eq!(activation.images.len(), 2);
    assert!(activation.images.iter().all(|a| a.series == "florals"));
}

#[test]
fn generated_site_has_every_route() {
    let tmp = example_site();
    let manifest = catalog::scan(tmp.path()).unwrap();
    let out = TempDir::new().unwrap();

    generate::generate_site(&manifest, tmp.path(), out.path()).unwrap();

    for page in [
        "index.html",
        "404.html",
        "contact/index.html",
        "paintings/index.html",
        "earrings/index.html",
        "pet-portraits/index.html",
        "cards/index.html",
        "for-sale/index.html",
    ] {
        assert!(out.path().join(page).exists(), "missing {page}");
    }
}

#[test]
fn gallery_page_sections_render_in_order_with_descriptions() {
    let tmp = example_site();
    let manifest = catalog::scan(tmp.path()).unwrap();
    let out = TempDir::new().unwrap();
    generate::generate_site(&manifest, tmp.path(), out.path()).unwrap();

    let page = fs::read_to_string(out.path().join("paintings/index.html")).unwrap();
    let birds = page.find("<h2>Birds</h2>").unwrap();
    let florals = page.find("<h2>Florals</h2>").unwrap();
    assert!(birds < florals);
    assert!(page.contains("Native birds."));
}

#[test]
fn viewer_pages_wrap_and_carry_captions() {
    let tmp = example_site();
    let manifest = catalog::scan(tmp.path()).unwrap();
    let out = TempDir::new().unwrap();
    generate::generate_site(&manifest, tmp.path(), out.path()).unwrap();

    // Page 1 is the bird (birds section comes first); previous wraps to 3
    let first = fs::read_to_string(out.path().join("paintings/1.html")).unwrap();
    assert!(first.contains("Acrylic on board."));
    assert!(first.contains("/paintings/3.html"));
    assert!(first.contains("/paintings/2.html"));

    // Last page's next wraps back to 1
    let last = fs::read_to_string(out.path().join("paintings/3.html")).unwrap();
    assert!(last.contains("/paintings/1.html"));
}

#[test]
fn series_viewer_pages_cycle_within_the_series() {
    let tmp = example_site();
    let manifest = catalog::scan(tmp.path()).unwrap();
    let out = TempDir::new().unwrap();
    generate::generate_site(&manifest, tmp.path(), out.path()).unwrap();

    let florals_dir = out.path().join("paintings/series/florals");
    assert!(florals_dir.join("index.html").exists());
    assert!(florals_dir.join("1.html").exists());
    assert!(florals_dir.join("2.html").exists());
    assert!(!florals_dir.join("3.html").exists());

    // Two images: next from page 1 is page 2, and vice versa
    let first = fs::read_to_string(florals_dir.join("1.html")).unwrap();
    assert!(first.contains("/paintings/series/florals/2.html"));

    // A single-image series wraps onto itself
    let birds_first =
        fs::read_to_string(out.path().join("paintings/series/birds/1.html")).unwrap();
    let self_links = birds_first
        .matches("/paintings/series/birds/1.html")
        .count();
    assert_eq!(self_links, 2, "prev and next both point at the only page");
}

#[test]
fn storefront_carries_cart_affordance_and_read_only_galleries_do_not() {
    let tmp = example_site();
    let manifest = catalog::scan(tmp.path()).unwrap();
    let out = TempDir::new().unwrap();
    generate::generate_site(&manifest, tmp.path(), out.path()).unwrap();

    let storefront = fs::read_to_string(out.path().join("for-sale/1.html")).unwrap();
    assert!(storefront.contains("class=\"add-to-cart\""));
    assert!(storefront.contains("data-series=\"earrings\""));

    let painting = fs::read_to_string(out.path().join("paintings/1.html")).unwrap();
    assert!(!painting.contains("class=\"add-to-cart\""));
}

#[test]
fn images_are_copied_verbatim_into_gallery_dirs() {
    let tmp = example_site();
    let manifest = catalog::scan(tmp.path()).unwrap();
    let out = TempDir::new().unwrap();
    generate::generate_site(&manifest, tmp.path(), out.path()).unwrap();

    let copied = out.path().join("paintings/img/birds/kereru.jpg");
    assert!(copied.exists());
    assert_eq!(fs::read(copied).unwrap(), b"img");
}

#[test]
fn empty_content_root_still_builds_a_site() {
    let tmp = TempDir::new().unwrap();
    let manifest = catalog::scan(tmp.path()).unwrap();
    let out = TempDir::new().unwrap();

    let summary = generate::generate_site(&manifest, tmp.path(), out.path()).unwrap();

    assert!(out.path().join("index.html").exists());
    assert_eq!(summary.viewer_pages, 0);
    assert_eq!(summary.images_copied, 0);
}

#[test]
fn configured_email_reaches_the_contact_page() {
    let tmp = example_site();
    fs::write(
        tmp.path().join("atelier.toml"),
        "[email]\nservice_id = \"service_x\"\ntemplate_id = \"contact\"\npublic_key = \"pk\"\n",
    )
    .unwrap();

    let manifest = catalog::scan(tmp.path()).unwrap();
    let out = TempDir::new().unwrap();
    generate::generate_site(&manifest, tmp.path(), out.path()).unwrap();

    let contact = fs::read_to_string(out.path().join("contact/index.html")).unwrap();
    assert!(contact.contains("service_x"));
    assert!(contact.contains("api.emailjs.com"));
}
