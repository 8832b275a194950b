//! Upload filename sanitizing.
//!
//! Client-supplied names are only used for logging and the upload summary,
//! but they are still reduced to a safe ASCII form first.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("valid filename regex"));

/// Reduce a client filename to `[A-Za-z0-9_.-]`.
///
/// The name is NFKD-normalized and whatever is still non-ASCII is
/// dropped, so accented letters keep their base letter. Path separators
/// become spaces, whitespace runs collapse to `_`, and leading/trailing
/// `.` and `_` are stripped. May return an empty string.
pub fn secure_filename(name: &str) -> String {
    let ascii: String = name.nfkd().filter(char::is_ascii).collect();
    let spaced = ascii.replace(['/', '\\'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE_CHARS.replace_all(&joined, "");
    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}
