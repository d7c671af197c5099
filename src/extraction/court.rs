//! Court name (lembaga peradilan)

use super::case_number::{court_code, extract_case_number};
use crate::config::CourtConfig;
use once_cell::sync::Lazy;
use regex::Regex;

static COURT_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\bpengadilan\s+negeri\s+(?:kelas\s+i+\s*[ab]?\s+)?([a-z]+)(?:[ \t]+(utara|selatan|barat|timur|pusat)\b)?",
    )
    .unwrap()
});

/// Words that follow `Pengadilan Negeri` in running prose instead of a city.
const NOT_A_CITY: &[&str] = &[
    "tersebut", "yang", "dengan", "setempat", "ini", "itu", "dan", "di", "dalam", "untuk",
];

/// Court as `PN <CITY>`.
///
/// Tries the court named in the text, then the code at the tail of the case
/// number, then the configured default.
pub fn extract_court_name(text: &str, court: &CourtConfig) -> Option<String> {
    if let Some(name) = named_court(text) {
        tracing::debug!(field = "court_name", rule = "pengadilan_negeri", "candidate matched");
        return Some(name);
    }

    let from_code = extract_case_number(text).and_then(|number| {
        let code = court_code(&number)?.to_lowercase();
        court.codes.get(&code).map(|city| format!("PN {}", city.to_uppercase()))
    });
    if from_code.is_some() {
        tracing::debug!(field = "court_name", rule = "court_code", "candidate matched");
        return from_code;
    }

    tracing::debug!(field = "court_name", rule = "default", "falling back to configured court");
    court.default_name.clone()
}

fn named_court(text: &str) -> Option<String> {
    COURT_PHRASE.captures_iter(text).find_map(|caps| {
        let city = caps.get(1)?.as_str();
        if NOT_A_CITY.contains(&city.to_lowercase().as_str()) {
            return None;
        }
        let name = match caps.get(2) {
            Some(direction) => format!("PN {} {}", city, direction.as_str()),
            None => format!("PN {}", city),
        };
        Some(name.to_uppercase())
    })
}
