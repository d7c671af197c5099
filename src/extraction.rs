//! Field extraction from judgment text
//!
//! Every field is found by ordered candidate rules: the most specific pattern
//! is tried first, looser ones follow, and the first hit wins. No rule ever
//! errors; a field nobody matched is simply absent.
//!
//! ```rust,ignore
//! use putusan::document::Document;
//! use putusan::extraction::DocumentParser;
//!
//! let parser = DocumentParser::default();
//! let result = parser.parse(&Document::load("data/raw/case_001.txt")?);
//! println!("{:?}", result.case_number);
//! ```

mod case_number;
mod court;
mod evidence;
mod result;
mod rules;
mod verdict;

pub use case_number::extract_case_number;
pub use court::extract_court_name;
pub use evidence::{extract_evidence, extract_evidence_with};
pub use result::ExtractionResult;
pub use verdict::{extract_verdict, extract_verdict_with};

use crate::cleaning::normalize_judgment;
use crate::config::{CourtConfig, ParserConfig, PutusanConfig};
use crate::document::Document;
use std::borrow::Cow;

/// Turns one [`Document`] into an [`ExtractionResult`].
///
/// Stateless between documents; one parser serves a whole batch.
#[derive(Debug, Clone, Default)]
pub struct DocumentParser {
    settings: ParserConfig,
    court: CourtConfig,
}

impl DocumentParser {
    pub fn new(settings: ParserConfig, court: CourtConfig) -> Self {
        DocumentParser { settings, court }
    }

    pub fn from_config(config: &PutusanConfig) -> Self {
        DocumentParser::new(config.parser.clone(), config.court.clone())
    }

    /// Extract every field from `document`.
    pub fn parse(&self, document: &Document) -> ExtractionResult {
        let text = self.prepare(document.text());

        let result = ExtractionResult {
            document_id: document.id().to_string(),
            source_name: document.source_name().map(str::to_string),
            case_number: self.extract_case_number(&text),
            court_name: self.extract_court_name(&text),
            evidence: self.extract_evidence(&text),
            verdict: self.extract_verdict(&text),
        };

        let missing = result.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(document = document.id(), ?missing, "fields not found");
        }
        result
    }

    /// Boilerplate-stripped text, or the raw text when normalization is off.
    pub fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.settings.normalize_input {
            Cow::Owned(normalize_judgment(text))
        } else {
            Cow::Borrowed(text)
        }
    }

    pub fn extract_case_number(&self, text: &str) -> Option<String> {
        extract_case_number(text)
    }

    pub fn extract_court_name(&self, text: &str) -> Option<String> {
        extract_court_name(text, &self.court)
    }

    pub fn extract_evidence(&self, text: &str) -> Vec<String> {
        extract_evidence_with(text, self.settings.loose_evidence_fallbacks)
    }

    pub fn extract_verdict(&self, text: &str) -> Option<String> {
        extract_verdict_with(
            text,
            self.settings.verdict_window_chars,
            self.settings.max_verdict_chars,
        )
    }
}
