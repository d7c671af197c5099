use serde::Serialize;

/// Fields extracted from one judgment.
///
/// Every present value has been through [`clean_text`](crate::cleaning::clean_text);
/// a field the rules could not find is `None` (or an empty list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub document_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    pub case_number: Option<String>,
    pub court_name: Option<String>,
    pub evidence: Vec<String>,
    pub verdict: Option<String>,
}

impl ExtractionResult {
    /// Names of the fields that came back empty, for logging.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.case_number.is_none() {
            missing.push("case_number");
        }
        if self.court_name.is_none() {
            missing.push("court_name");
        }
        if self.evidence.is_empty() {
            missing.push("evidence_list");
        }
        if self.verdict.is_none() {
            missing.push("verdict_text");
        }
        missing
    }
}
