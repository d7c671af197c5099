//! Operative verdict (amar putusan)
//!
//! The verdict starts at `Menyatakan Terdakwa ...` and runs through the
//! numbered decision clauses. The same phrase also appears earlier, inside
//! the prosecutor's demand, so a `Menyatakan Terdakwa` directly under the
//! `MENGADILI` heading is preferred.

use super::rules::RuleSet;
use crate::cleaning::{clean_text, strip_non_ascii, truncate_on_word};
use crate::config::ParserConfig;
use once_cell::sync::Lazy;
use regex::Regex;

static START: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::compile(
        "verdict",
        &[
            (
                "mengadili",
                r"(?i)\bmengadili\s*:?\s*(?:\d{1,2}\s*[.)]\s*)?(?P<start>menyatakan\s+terdakwa\b)",
            ),
            ("menyatakan_terdakwa", r"(?i)(?P<start>\bmenyatakan\s+terdakwa\b)"),
        ],
    )
});

/// Closing formula that follows the operative part.
static CLOSING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bdemikian(?:lah)?\s+diputus(?:kan)?\b").unwrap());

/// A line opening with an upper-case word: the next section heading.
static HEADING_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]{0,5}[A-Z]{3,}\b").unwrap());

static BULLET_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*[-\u{2022}]\s*").unwrap());

/// Heading lines are only honoured this many characters past the start, so a
/// defendant name in capitals right after the opening phrase does not end it.
const HEADING_GRACE_CHARS: usize = 50;

/// Verdict text with the default window and length cap.
pub fn extract_verdict(text: &str) -> Option<String> {
    let defaults = ParserConfig::default();
    extract_verdict_with(
        text,
        defaults.verdict_window_chars,
        defaults.max_verdict_chars,
    )
}

/// Verdict text searched within `window_chars` of the opening phrase and cut
/// to `max_chars` on a word boundary.
pub fn extract_verdict_with(text: &str, window_chars: usize, max_chars: usize) -> Option<String> {
    let text = text.replace('\r', "");
    let (_, caps) = START.first_match(&text)?;
    let opening = caps.name("start")?;
    let begin = opening.start();

    // A window shorter than the opening phrase still keeps the phrase.
    let window_end = char_offset(&text, begin, window_chars).max(opening.end());
    let mut end = window_end;

    // find_at keeps `^` and `\b` anchored to the full text, not the offset.
    let windowed = &text[..window_end];
    if let Some(closing) = CLOSING.find_at(windowed, opening.end()) {
        end = end.min(closing.start());
    }

    let grace = char_offset(&text, begin, HEADING_GRACE_CHARS).max(opening.end());
    if grace < window_end {
        if let Some(heading) = HEADING_LINE.find_at(windowed, grace) {
            end = end.min(heading.start());
        }
    }

    let block = BULLET_LINE.replace_all(&text[begin..end], "; ");
    // Stripping debris can reassemble a page marker, so cleaning runs last.
    let verdict = clean_text(&strip_non_ascii(&block));
    let verdict = truncate_on_word(&verdict, max_chars);
    (!verdict.is_empty()).then_some(verdict)
}

/// Byte offset `chars` characters after `from`, clamped to the end of `text`.
fn char_offset(text: &str, from: usize, chars: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(chars)
        .map(|(offset, _)| from + offset)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const JUDGMENT: &str = "\
Menuntut supaya Majelis Hakim:
1. Menyatakan Terdakwa ANDI bersalah sesuai tuntutan;
MENGADILI:
1. Menyatakan Terdakwa ANDI BIN BUDI tersebut di atas terbukti secara sah dan meyakinkan bersalah melakukan tindak pidana pencurian;
2. Menjatuhkan pidana kepada Terdakwa oleh karena itu dengan pidana penjara selama 1 (satu) tahun;
Demikian diputuskan dalam rapat permusyawaratan Majelis Hakim";

    #[test]
    fn prefers_clause_under_mengadili() {
        let verdict = extract_verdict(JUDGMENT).unwrap();
        assert!(verdict.starts_with("Menyatakan Terdakwa ANDI BIN BUDI tersebut"));
        assert!(verdict.ends_with("pidana penjara selama 1 (satu) tahun;"));
        assert!(!verdict.contains("Demikian"));
    }

    #[test]
    fn falls_back_to_first_phrase() {
        let text = "menyatakan terdakwa bersalah melakukan penggelapan; menjatuhkan pidana penjara 6 bulan";
        assert_eq!(extract_verdict(text).as_deref(), Some(text));
    }

    #[test]
    fn stops_at_upper_case_heading_line() {
        let text = "Menyatakan Terdakwa terbukti bersalah melakukan tindak pidana narkotika;\nMEMERINTAHKAN Terdakwa tetap ditahan";
        assert_eq!(
            extract_verdict(text).as_deref(),
            Some("Menyatakan Terdakwa terbukti bersalah melakukan tindak pidana narkotika;")
        );
    }

    #[test]
    fn capitalised_name_right_after_opening_does_not_end_block() {
        let text = "Menyatakan Terdakwa\nANDI terbukti bersalah";
        assert_eq!(
            extract_verdict(text).as_deref(),
            Some("Menyatakan Terdakwa ANDI terbukti bersalah")
        );
    }

    #[test]
    fn removes_page_markers_and_bullets() {
        let text = "Menyatakan Terdakwa bersalah\n- pidana penjara hal 9 dari 10 hal 2 tahun";
        assert_eq!(
            extract_verdict(text).as_deref(),
            Some("Menyatakan Terdakwa bersalah; pidana penjara 2 tahun")
        );
    }

    #[test]
    fn respects_window_and_cap() {
        let text = format!("Menyatakan Terdakwa {}", "bersalah ".repeat(100));
        let verdict = extract_verdict_with(&text, 4000, 40).unwrap();
        assert!(verdict.ends_with("..."));
        assert!(verdict.chars().count() <= 43);

        let windowed = extract_verdict_with(&text, 28, 3000).unwrap();
        assert_eq!(windowed, "Menyatakan Terdakwa bersalah");
    }

    #[test]
    fn window_shorter_than_opening_keeps_phrase() {
        let text = "Menyatakan Terdakwa bersalah melakukan pencurian";
        assert_eq!(
            extract_verdict_with(text, 10, 3000).as_deref(),
            Some("Menyatakan Terdakwa")
        );
        assert_eq!(
            extract_verdict_with(text, 0, 3000).as_deref(),
            Some("Menyatakan Terdakwa")
        );
    }

    #[test]
    fn removes_page_marker_split_by_debris() {
        let text = "Menyatakan Terdakwa bersalah hal\u{a0}\u{2022}3 dari 9 hal pidana penjara";
        assert_eq!(
            extract_verdict(text).as_deref(),
            Some("Menyatakan Terdakwa bersalah pidana penjara")
        );
    }

    #[test]
    fn absent_without_opening_phrase() {
        assert_eq!(extract_verdict("Menimbang bahwa ..."), None);
    }
}
