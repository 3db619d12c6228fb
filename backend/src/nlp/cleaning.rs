//! Text normalisation applied before tokenizing.

use regex::Regex;
use std::sync::LazyLock;

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+").expect("valid URL pattern"));
static NON_LETTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").expect("valid letter pattern"));

/// Lowercase `text`, strip URLs and everything that is not an ASCII letter or
/// whitespace, then trim the ends.
///
/// Inner whitespace is kept as-is.
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_urls = URL_REGEX.replace_all(&lowered, "");
    let letters_only = NON_LETTER_REGEX.replace_all(&without_urls, "");
    letters_only.trim().to_string()
}
