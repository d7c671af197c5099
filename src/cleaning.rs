//! Text cleanup shared by every extracted field
//!
//! Judgments are scraped from the Supreme Court's online directory, so the
//! text is littered with running headers (`Putusan Nomor 185/Pid.Sus/2023/PN
//! Yyk`), page counters (`hal 2 dari 17 hal`) and repository banners. These
//! land in the middle of sentences wherever a page break fell.
//!
//! [`clean_text`] strips them and collapses whitespace. It is applied to the
//! final value of every field, so the rest of the crate can match against
//! messy text and still emit clean cells.

mod normalize;

pub use normalize::normalize_judgment;

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker patterns removed by [`clean_text`], in application order.
static MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // hal 2 dari 17 hal / halaman 2 dari 17 halaman / hal. 2/17
        r"(?i)\bhal(?:aman)?\.?\s*\d+\s*(?:dari|/)\s*\d+(?:\s*hal(?:aman)?\b)?[.:,;\-]*",
        // Putusan Nomor 185/Pid.Sus/2023/PN Yyk
        r"(?i)\bputusan\s+(?:nomor|no\.?)\s*:?\s*\d+\s*/[a-z0-9./\-\s]*?/\s*\d{4}\s*/\s*pn\.?\s*[a-z]+\b[.:,;\-]*",
        // Putusan Nomor 185/Pid.Sus (header cut off by the page break)
        r"(?i)\bputusan\s+nomor\s+[a-z0-9./\-]+[.:,;\-]*",
        r"(?i)\b(?:direktori\s+putusan\s+)?mahkamah\s+agung\s+republik\s+indonesia\b",
        r"(?i)\bdirektori\s+putusan\b",
        r"(?i)\bputusan\.mahkamahagung\.go\.id\b",
        r"(?i)\bcase_\d{1,4}\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NON_ASCII: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\x00-\x7F]+").unwrap());

/// Remove page markers, running headers and banners, then collapse whitespace.
///
/// Removal can expose a new marker (a header split by a page counter), so the
/// pass repeats until nothing changes. That makes the function idempotent.
pub fn clean_text(text: &str) -> String {
    let mut current = clean_pass(text);
    loop {
        let next = clean_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_pass(text: &str) -> String {
    let mut out = text.to_string();
    for marker in MARKERS.iter() {
        if marker.is_match(&out) {
            out = marker.replace_all(&out, " ").into_owned();
        }
    }
    collapse_whitespace(&out)
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Replace runs of non-ASCII characters (bullets, OCR debris) with a space.
pub fn strip_non_ascii(text: &str) -> String {
    collapse_whitespace(&NON_ASCII.replace_all(text, " "))
}

/// Cut `text` to at most `max_chars` characters, backing off to the last
/// space and appending `...`. Text within the limit is returned unchanged.
pub fn truncate_on_word(text: &str, max_chars: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };
    let head = &text[..cut];
    let head = match head.rfind(' ') {
        Some(space) => &head[..space],
        None => head,
    };
    format!("{}...", head.trim_end())
}
