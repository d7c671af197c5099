//! Evidence list (barang bukti)
//!
//! The operative part of a judgment lists seized items after a heading such
//! as `Menetapkan barang bukti berupa:` and before the next decision clause:
//!
//! ```text
//! 4. Menetapkan barang bukti berupa:
//!    - 1 (satu) paket sabu seberat 0,5 gram;
//!    - 1 (satu) unit handphone merk Samsung;
//!    Dirampas untuk dimusnahkan;
//! 5. Membebankan kepada Terdakwa membayar biaya perkara ...
//! ```
//!
//! yields `["1 paket sabu seberat 0,5 gram", "1 unit handphone merk Samsung"]`.

use super::rules::RuleSet;
use crate::cleaning::{clean_text, collapse_whitespace};
use once_cell::sync::Lazy;
use regex::Regex;

/// Heading rules. The last [`LOOSE_RULES`] entries only run when enabled:
/// they catch narrative wording and can pick up prose that is not a list.
static HEADINGS: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::compile(
        "evidence",
        &[
            ("menetapkan_berupa", r"(?i)\bmenetapkan\s+barang\s+bukti\s+berupa\s*:?"),
            ("berupa", r"(?i)\bbarang\s*bukti\s*berupa\s*:?"),
            ("barang_bukti_colon", r"(?i)\bbarang\s+bukti\s*:"),
            ("terbukti", r"(?i)\bterbukti\s*:?"),
            ("telah_ditemukan", r"(?i)\btelah\s+ditemukan\b\s*:?"),
            ("ditemukan", r"(?i)\bditemukan\b\s*:?"),
        ],
    )
});

const LOOSE_RULES: usize = 3;
const STRICT_RULES: usize = 3;

/// Next decision clause: where the evidence block stops.
static SECTION_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:mengingat|mengadili|memutuskan|menetapkan|menyatakan|membebankan)\b")
        .unwrap()
});

/// Enumeration markers between items: `1.` `2)` `a.` `-` `•`.
static ITEM_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)(?:\d{1,2}[.)]|[a-z][.)]|[-\u{2022}*])(?:\s+|$)").unwrap());

static NUMBER_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(\d+)\s*\(?\s*(?:dua belas|tiga belas|empat belas|lima belas|sebelas|sepuluh|satu|dua|tiga|empat|lima|enam|tujuh|delapan|sembilan)\b\s*\)?",
    )
    .unwrap()
});

static DESTROY_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bdirampas\s*untuk\s*(?:di\s*)?dimusnahkan\b.*$").unwrap()
});

static STRAY_SYMBOLS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9A-Za-z\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{FF}\s,.;:()%\-/]").unwrap());

static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([,.;:])").unwrap());
static EDGE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\s,.;:\-]+|[\s,.;:\-]+$").unwrap());

/// Evidence items listed under the first evidence heading.
///
/// Returns an empty list when the document has no evidence section.
pub fn extract_evidence(text: &str) -> Vec<String> {
    extract_evidence_with(text, false)
}

/// As [`extract_evidence`], optionally accepting narrative headings
/// (`terbukti`, `telah ditemukan`, `ditemukan`) when no list heading exists.
pub fn extract_evidence_with(text: &str, loose_fallbacks: bool) -> Vec<String> {
    let limit = if loose_fallbacks {
        STRICT_RULES + LOOSE_RULES
    } else {
        STRICT_RULES
    };
    let Some((_, caps)) = HEADINGS.first_match_among(text, limit) else {
        return Vec::new();
    };
    let Some(heading) = caps.get(0) else {
        return Vec::new();
    };

    let rest = &text[heading.end()..];
    let block = match SECTION_END.find(rest) {
        Some(end) => &rest[..end.start()],
        None => rest,
    };

    split_items(&clean_text(block))
}

/// Split a cleaned block on enumeration markers and semicolons.
fn split_items(block: &str) -> Vec<String> {
    ITEM_MARKER
        .split(block)
        .flat_map(|segment| segment.split(';'))
        .map(tidy_item)
        // a bare "5" left over from the next clause's number is not an item
        .filter(|item| item.chars().any(char::is_alphabetic))
        .collect()
}

fn tidy_item(item: &str) -> String {
    let item = NUMBER_WORD.replace_all(item, "${1} ");
    let item = DESTROY_CLAUSE.replace(&item, "");
    let item = STRAY_SYMBOLS.replace_all(&item, " ");
    // Symbol removal and punctuation squeezing can each reassemble a page
    // marker, so cleaning repeats until the item is stable.
    let mut item = collapse_whitespace(&item);
    loop {
        let next = clean_text(&SPACE_BEFORE_PUNCT.replace_all(&item, "${1}"));
        if next == item {
            break;
        }
        item = next;
    }
    EDGE_PUNCT.replace_all(&item, "").into_owned()
}
