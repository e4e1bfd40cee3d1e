// crates/venue-core/src/text.rs
use std::cmp::Ordering;

/// Convert a string into a folded key suitable for matching and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Müller` -> `Muller`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use venue_core::text::fold_key;
///
/// assert_eq!(fold_key("MANNHEIM"), "mannheim");
/// assert_eq!(fold_key("Straße"), "strasse");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Collation used by the `name` and `recommended` sort orders.
///
/// Folded keys decide first, so `Äpfel` sorts next to `apfel`; the raw
/// text only breaks ties between spellings that fold to the same key.
pub fn compare_folded(a: &str, b: &str) -> Ordering {
    fold_key(a)
        .cmp(&fold_key(b))
        .then_with(|| a.cmp(b))
}
