//! Sidecar text loading.
//!
//! All free text on the site — per-artwork captions, per-series
//! descriptions, and the series display order — lives in plain UTF-8 files
//! under the data directory. The files are configuration treated as
//! content: loaded once at scan time into immutable lookup tables, never
//! consulted again at runtime.
//!
//! Two cleanup conventions apply:
//!
//! - **Captions** are served raw (trimmed only) — line breaks in a caption
//!   are intentional.
//! - **Descriptions and the order list** follow the comment convention:
//!   lines starting with `#` and blank lines are stripped; description
//!   lines are joined with spaces into one paragraph.
//!
//! Missing files and missing directories are never errors. A gallery with
//! no caption directory simply has no captions.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Lookup table from lower-cased file stem to sidecar text.
///
/// Built from a directory of `.txt` files; the stem of each file is the
/// key, matched case-insensitively against artwork filename stems (for
/// captions) or series keys and gallery routes (for descriptions).
#[derive(Debug, Clone, Default)]
pub struct TextIndex {
    entries: HashMap<String, String>,
}

impl TextIndex {
    /// Load captions: file contents trimmed but otherwise untouched.
    pub fn load_raw(dir: &Path) -> Self {
        Self::load_with(dir, |raw| {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// Load descriptions: comment lines stripped, remaining lines joined
    /// into a single paragraph.
    pub fn load_cleaned(dir: &Path) -> Self {
        Self::load_with(dir, |raw| {
            let cleaned = clean_text(raw);
            if cleaned.is_empty() { None } else { Some(cleaned) }
        })
    }

    fn load_with(dir: &Path, prepare: impl Fn(&str) -> Option<String>) -> Self {
        let mut entries = HashMap::new();
        let Ok(dir_entries) = fs::read_dir(dir) else {
            return Self { entries };
        };
        for entry in dir_entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            let is_txt = path
                .extension()
                .map(|e| e.eq_ignore_ascii_case("txt"))
                .unwrap_or(false);
            if !path.is_file() || !is_txt {
                continue;
            }
            let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().to_lowercase())
            else {
                continue;
            };
            if let Ok(raw) = fs::read_to_string(&path)
                && let Some(text) = prepare(&raw)
            {
                entries.insert(stem, text);
            }
        }
        Self { entries }
    }

    /// Look up text by stem, case-insensitively.
    pub fn get(&self, stem: &str) -> Option<&str> {
        self.entries.get(&stem.to_lowercase()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Strip `#` comment lines and blanks; join the rest with single spaces.
pub fn clean_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read the series order list: one key per line, trimmed and lower-cased,
/// `#` comments and blank lines ignored. A missing file yields an empty
/// list (alphabetical fallback ordering takes over downstream).
pub fn read_order_list(path: &Path) -> Vec<String> {
    let Ok(raw) = fs::read_to_string(path) else {
        return Vec::new();
    };
    raw.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}
