//! Case number (nomor putusan)
//!
//! District court numbers read `<seq>/<type>[/<subtype>...]/<year>/PN <code>`,
//! e.g. `185/Pid.Sus/2023/PN Yyk`. PDF conversion sometimes spreads the
//! parts with spaces; the returned number has them squeezed out.

use super::rules::RuleSet;
use crate::cleaning::{clean_text, collapse_whitespace};
use once_cell::sync::Lazy;
use regex::Regex;

/// `<seq>/<type>(/<subtype>)*/<year>/PN <code>`
const FULL_NUMBER: &str = r"\d+\s*/\s*[a-z][a-z0-9.\-]*(?:\s*/\s*[a-z][a-z0-9.\-]*)*\s*/\s*\d{4}\s*/\s*PN\.?[ \t]*[a-z]{2,}\b";

static RULES: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::compile(
        "case_number",
        &[
            ("nomor", format!(r"(?i)\bnomor\s*:?\s*({FULL_NUMBER})")),
            ("putusan_no", format!(r"(?i)\bputusan\s+no[.:]?\s*({FULL_NUMBER})")),
            ("bare", format!(r"(?i)\b({FULL_NUMBER})")),
            // Digits, some path-like run, then the court code. Tolerates a
            // missing year or OCR damage in the middle.
            (
                "loose_no",
                r"(?i)\bno(?:mor)?[.:]?\s*(\d+[-/]?[a-z0-9./]+/[^/\n]*?PN\.?[ \t]*[a-z]{2,})\b".to_string(),
            ),
        ],
    )
});

static SLASH_SPACING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*/\s*").unwrap());

/// First case number in `text`, or `None` when no candidate matches.
pub fn extract_case_number(text: &str) -> Option<String> {
    let (_, caps) = RULES.first_match(text)?;
    let raw = caps.get(1)?.as_str();
    let number = SLASH_SPACING.replace_all(raw, "/");
    let number = clean_text(&collapse_whitespace(&number));
    (!number.is_empty()).then_some(number)
}

/// Court code at the tail of a case number (`Yyk` in `.../PN Yyk`).
pub(crate) fn court_code(case_number: &str) -> Option<&str> {
    static CODE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)/\s*PN\.?\s*([a-z]+)\s*$").unwrap());
    CODE.captures(case_number)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
