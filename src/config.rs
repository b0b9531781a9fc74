//! Site configuration module.
//!
//! Handles loading and validating `atelier.toml`. Configuration is sparse:
//! stock defaults describe the standard five-gallery portfolio site, and a
//! user config file overrides only the values it names.
//!
//! ## Config File Location
//!
//! Place `atelier.toml` in the content root:
//!
//! ```text
//! content/
//! ├── atelier.toml             # Site configuration (optional)
//! ├── data/                    # Sidecar text (captions, descriptions, order)
//! ├── paintings/               # One directory per gallery
//! ├── earrings/
//! └── for-sale/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! data_dir = "data"                # Sidecar text directory (under content root)
//! order_file = "series-order.txt"  # Series display order (under data_dir)
//!
//! [site]
//! title = "Atelier"                # Site title
//! tagline = ""                     # Short line under the title on the home page
//! price_note = "NZD — price on enquiry"  # Shown under storefront thumbnails
//!
//! [email]
//! service_id = ""                  # Transactional email provider credentials
//! template_id = ""                 # (all three required to enable the
//! public_key = ""                  #  contact form)
//!
//! # One [[galleries]] block per gallery page. route is the URL segment,
//! # source the directory under the content root, captions/descriptions
//! # the sidecar directories under data_dir. cart enables the add-to-cart
//! # affordance on that gallery's viewer pages.
//! [[galleries]]
//! route = "paintings"
//! title = "Paintings"
//! source = "paintings"
//! captions = "gallery-captions"
//! descriptions = "series-descriptions"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `atelier.toml`.
///
/// All fields have stock defaults describing the standard portfolio site.
/// User config files need only specify the values they want to override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Sidecar text directory, relative to the content root.
    pub data_dir: String,
    /// Series display order list, relative to `data_dir`.
    pub order_file: String,
    /// Site chrome strings.
    pub site: SiteInfo,
    /// Gallery page definitions, in display order.
    pub galleries: Vec<GalleryConfig>,
    /// Transactional email provider credentials for the contact form.
    pub email: EmailConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            order_file: "series-order.txt".to_string(),
            site: SiteInfo::default(),
            galleries: default_galleries(),
            email: EmailConfig::default(),
        }
    }
}

/// Site chrome strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Site title, used on the home page and in every page's `<title>`.
    pub title: String,
    /// Short line under the title on the home page.
    pub tagline: String,
    /// Note shown under storefront thumbnails in place of a price.
    pub price_note: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Atelier".to_string(),
            tagline: String::new(),
            price_note: "NZD — price on enquiry".to_string(),
        }
    }
}

/// One gallery page: a catalog subset plus its presentation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryConfig {
    /// URL segment and output directory name.
    pub route: String,
    /// Page heading.
    pub title: String,
    /// Image directory under the content root.
    pub source: String,
    /// Caption sidecar directory under `data_dir`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captions: Option<String>,
    /// Description sidecar directory under `data_dir`. Files named after a
    /// series key describe that series; a file named after the gallery
    /// route becomes the page intro.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<String>,
    /// Render the add-to-cart affordance on this gallery's viewer pages.
    #[serde(default)]
    pub cart: bool,
}

/// Credentials for the EmailJS-compatible contact form provider.
///
/// All three fields are required to enable the contact form; the form page
/// is still generated without them, but submission is disabled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailConfig {
    /// True when all provider credentials are present.
    pub fn is_configured(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}

/// The stock five-gallery layout: paintings, earrings, pet portraits,
/// cards, and the for-sale storefront (the only cart-enabled page).
fn default_galleries() -> Vec<GalleryConfig> {
    let gallery = |route: &str, title: &str, captions: &str, descriptions: &str, cart: bool| {
        GalleryConfig {
            route: route.to_string(),
            title: title.to_string(),
            source: route.to_string(),
            captions: Some(captions.to_string()),
            descriptions: Some(descriptions.to_string()),
            cart,
        }
    };
    vec![
        gallery("paintings", "Paintings", "gallery-captions", "series-descriptions", false),
        gallery("earrings", "Earrings", "shop-captions", "shop-descriptions", false),
        gallery("pet-portraits", "Pet Portraits", "shop-captions", "shop-descriptions", false),
        gallery("cards", "Quirky Cards", "shop-captions", "shop-descriptions", false),
        gallery("for-sale", "Artworks for Sale", "for-sale-captions", "for-sale-descriptions", true),
    ]
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.galleries.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [[galleries]] entry is required".into(),
            ));
        }
        let mut seen_routes = Vec::new();
        for gallery in &self.galleries {
            if gallery.route.is_empty() || gallery.source.is_empty() || gallery.title.is_empty() {
                return Err(ConfigError::Validation(
                    "gallery route, title, and source must be non-empty".into(),
                ));
            }
            if !gallery
                .route
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
            {
                return Err(ConfigError::Validation(format!(
                    "gallery route '{}' must be alphanumeric-and-dashes",
                    gallery.route
                )));
            }
            if seen_routes.contains(&gallery.route) {
                return Err(ConfigError::Validation(format!(
                    "duplicate gallery route '{}'",
                    gallery.route
                )));
            }
            seen_routes.push(gallery.route.clone());
        }
        let email_fields = [
            &self.email.service_id,
            &self.email.template_id,
            &self.email.public_key,
        ];
        if email_fields.iter().any(|f| !f.is_empty()) && !self.email.is_configured() {
            return Err(ConfigError::Validation(
                "email requires service_id, template_id, and public_key together".into(),
            ));
        }
        Ok(())
    }

    /// Absolute path of the sidecar data directory.
    pub fn data_path(&self, root: &Path) -> PathBuf {
        root.join(&self.data_dir)
    }

    /// Absolute path of the series order list.
    pub fn order_path(&self, root: &Path) -> PathBuf {
        self.data_path(root).join(&self.order_file)
    }
}

/// Load `atelier.toml` from the content root, falling back to stock
/// defaults when the file does not exist.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("atelier.toml");
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let raw = fs::read_to_string(&path)?;
    let config: SiteConfig = toml::from_str(&raw)?;
    config.validate()?;
    Ok(config)
}

/// The documented stock config, printed by `atelier-gal gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = SiteConfig::default();
    let body = toml::to_string_pretty(&defaults).unwrap_or_default();
    format!(
        "# atelier-gal site configuration.\n\
         # All values shown are the stock defaults; delete anything you\n\
         # don't want to override. Paths are relative to the content root\n\
         # (data_dir) or to data_dir itself (order_file, captions,\n\
         # descriptions).\n\n{body}"
    )
}
