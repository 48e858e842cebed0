/// Data structures for analysis responses from the Haloscope backend

use serde::{Deserialize, Serialize};

/// One analysis of a page URL, as returned by `POST /analyze`.
///
/// Every field may be absent in the payload; accessors substitute
/// "Unknown" / 0 / empty so the popup never has to branch on `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub source_score: Option<f64>,
    #[serde(default)]
    pub credibility: Option<Credibility>,
    #[serde(default)]
    pub language: Option<LanguageInfo>,
    #[serde(default)]
    pub claims: Option<Vec<String>>,
    #[serde(default)]
    pub text_length: Option<u64>,
    /// Application-level failure reported inside a 200 response.
    #[serde(default)]
    pub error: Option<String>,
}

/// Factual-reporting track record of the page's domain
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credibility {
    #[serde(default)]
    pub credibility_score: Option<f64>,
    #[serde(default)]
    pub factual_reporting: Option<String>,
}

/// Detected content language with 0-100 confidence
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LanguageInfo {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl AnalysisResult {
    pub fn source_score(&self) -> f64 {
        self.source_score.unwrap_or(0.0)
    }

    pub fn domain(&self) -> &str {
        self.domain.as_deref().unwrap_or("Unknown")
    }

    pub fn credibility_score(&self) -> f64 {
        self.credibility
            .as_ref()
            .and_then(|c| c.credibility_score)
            .unwrap_or(0.0)
    }

    pub fn factual_reporting(&self) -> &str {
        self.credibility
            .as_ref()
            .and_then(|c| c.factual_reporting.as_deref())
            .unwrap_or("Unknown")
    }

    pub fn language(&self) -> &str {
        self.language
            .as_ref()
            .and_then(|l| l.language.as_deref())
            .unwrap_or("Unknown")
    }

    pub fn language_confidence(&self) -> f64 {
        self.language
            .as_ref()
            .and_then(|l| l.confidence)
            .unwrap_or(0.0)
    }

    pub fn claims(&self) -> &[String] {
        self.claims.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_response() {
        let json = r#"{
            "url": "https://www.bbc.com/news/article",
            "domain": "bbc.com",
            "source_score": 0.85,
            "credibility": {"credibility_score": 0.92, "factual_reporting": "HIGH"},
            "language": {"language": "EN", "confidence": 99.99},
            "claims": ["The minister said spending rose 12% in 2024."],
            "text_length": 5120
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.domain(), "bbc.com");
        assert_eq!(result.source_score(), 0.85);
        assert_eq!(result.credibility_score(), 0.92);
        assert_eq!(result.factual_reporting(), "HIGH");
        assert_eq!(result.language(), "EN");
        assert_eq!(result.language_confidence(), 99.99);
        assert_eq!(result.claims().len(), 1);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let result: AnalysisResult = serde_json::from_str("{}").unwrap();

        assert_eq!(result.source_score(), 0.0);
        assert_eq!(result.domain(), "Unknown");
        assert_eq!(result.credibility_score(), 0.0);
        assert_eq!(result.factual_reporting(), "Unknown");
        assert_eq!(result.language(), "Unknown");
        assert_eq!(result.language_confidence(), 0.0);
        assert!(result.claims().is_empty());
    }

    #[test]
    fn test_defaults_for_partial_nested_objects() {
        let json = r#"{"credibility": {}, "language": {"language": "EN"}}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.credibility_score(), 0.0);
        assert_eq!(result.factual_reporting(), "Unknown");
        assert_eq!(result.language(), "EN");
        assert_eq!(result.language_confidence(), 0.0);
    }

    #[test]
    fn test_error_field_survives_deserialization() {
        let json = r#"{"error": "Failed to extract content from URL"}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();

        assert_eq!(
            result.error.as_deref(),
            Some("Failed to extract content from URL")
        );
    }
}
