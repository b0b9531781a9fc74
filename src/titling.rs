//! Centralized filename-to-title derivation.
//!
//! Artwork filenames carry their display titles: `harbour-at-dusk.jpg`
//! becomes "Harbour At Dusk". The stem is split on hyphens, bookkeeping
//! tokens (category names and the sold marker) are filtered out, and each
//! remaining token is capitalized. A stem made entirely of bookkeeping
//! tokens falls back to "Untitled".
//!
//! The same stem drives the sold flag: any filename containing `sold`
//! (case-insensitive) marks the piece as sold.

/// Tokens that describe the file rather than the artwork. Filtered out of
/// titles so `kereru-sold.jpg` reads "Kereru", not "Kereru Sold".
const STOP_WORDS: &[&str] = &["sold", "paintings", "earrings", "pet", "cards"];

/// Derive a display title from a filename stem.
///
/// - `"blue-vase"` → `"Blue Vase"`
/// - `"kereru-sold"` → `"Kereru"`
/// - `"sold"` → `"Untitled"` (every token filtered)
/// - `""` → `"Untitled"`
pub fn title_from_stem(stem: &str) -> String {
    let title = stem
        .split('-')
        .filter(|token| !token.is_empty())
        .filter(|token| !STOP_WORDS.contains(&token.to_lowercase().as_str()))
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        "Untitled".to_string()
    } else {
        title
    }
}

/// True when the stem marks the artwork as sold.
pub fn is_sold(stem: &str) -> bool {
    stem.to_lowercase().contains("sold")
}

/// Uppercase the first character, leaving the rest untouched.
///
/// Used both for title tokens and for series labels ("florals" → "Florals").
pub fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_capitalizes_each_token() {
        assert_eq!(title_from_stem("blue-vase"), "Blue Vase");
        assert_eq!(title_from_stem("harbour-at-dusk"), "Harbour At Dusk");
    }

    #[test]
    fn title_single_token() {
        assert_eq!(title_from_stem("kereru"), "Kereru");
    }

    #[test]
    fn title_filters_sold_marker() {
        assert_eq!(title_from_stem("kereru-sold"), "Kereru");
        assert_eq!(title_from_stem("sold-kereru"), "Kereru");
    }

    #[test]
    fn title_filters_category_tokens() {
        assert_eq!(title_from_stem("paintings-dawn"), "Dawn");
        assert_eq!(title_from_stem("pet-portrait-milo"), "Portrait Milo");
    }

    #[test]
    fn title_stop_words_case_insensitive() {
        assert_eq!(title_from_stem("SOLD-Kereru"), "Kereru");
    }

    #[test]
    fn title_untitled_when_all_tokens_filtered() {
        assert_eq!(title_from_stem("sold"), "Untitled");
        assert_eq!(title_from_stem("sold-paintings"), "Untitled");
    }

    #[test]
    fn title_untitled_for_empty_stem() {
        assert_eq!(title_from_stem(""), "Untitled");
    }

    #[test]
    fn title_ignores_empty_tokens_from_double_hyphens() {
        assert_eq!(title_from_stem("blue--vase"), "Blue Vase");
    }

    #[test]
    fn title_preserves_inner_casing() {
        assert_eq!(title_from_stem("mcKenzie-basin"), "McKenzie Basin");
    }

    #[test]
    fn sold_detected_anywhere_in_stem() {
        assert!(is_sold("kereru-sold"));
        assert!(is_sold("sold-kereru"));
        assert!(is_sold("unsold"));
    }

    #[test]
    fn sold_case_insensitive() {
        assert!(is_sold("Kereru-SOLD"));
    }

    #[test]
    fn sold_absent() {
        assert!(!is_sold("blue-vase"));
    }

    #[test]
    fn capitalize_first_char_only() {
        assert_eq!(capitalize("florals"), "Florals");
        assert_eq!(capitalize("f"), "F");
        assert_eq!(capitalize(""), "");
    }
}
