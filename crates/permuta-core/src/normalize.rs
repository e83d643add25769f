/// Canonical form for free-text court and participant names.
///
/// Every equality check between court names goes through [`normalize`], so
/// `"São Paulo"`, `"sao paulo"` and `"SAO PAULO "` all compare equal. Stored
/// values keep their original spelling for display; normalization happens at
/// comparison boundaries.
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Returns the comparison key for `text`.
///
/// Applies compatibility decomposition (NFKD), drops combining marks, trims
/// surrounding whitespace and lowercases the remainder.
pub fn normalize(text: &str) -> String {
    let stripped: String = text.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    stripped.trim().to_lowercase()
}

/// Like [`normalize`], but maps an absent field to the empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

/// Returns `true` if `a` and `b` have the same normalized form.
pub fn same_place(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
