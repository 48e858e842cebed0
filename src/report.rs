/// Score classification and result formatting for the popup
///
/// Both the trust score and the credibility score use the same three-tier
/// split (>= 0.8, >= 0.6, below), but their presentations stay separate:
/// the trust score drives bar colors ("good"/"medium"/"low") while the
/// credibility score drives badge labels ("High/Medium/Low Trust").

/// Three-valued classification shared by trust and credibility scores.
/// Boundary values 0.8 and 0.6 belong to the higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Good,
    Medium,
    Low,
}

pub fn score_tier(score: f64) -> Tier {
    if score >= 0.8 {
        Tier::Good
    } else if score >= 0.6 {
        Tier::Medium
    } else {
        Tier::Low
    }
}

impl Tier {
    /// CSS class for the trust-score presentation
    pub fn score_class(self) -> &'static str {
        match self {
            Tier::Good => "good",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }

    /// CSS class for the credibility-badge presentation
    pub fn badge_class(self) -> &'static str {
        match self {
            Tier::Good => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }

    /// Badge label for the credibility-badge presentation
    pub fn badge_label(self) -> &'static str {
        match self {
            Tier::Good => "High Trust",
            Tier::Medium => "Medium Trust",
            Tier::Low => "Low Trust",
        }
    }
}

/// Rounded percentage for a [0,1] score
pub fn score_percent(score: f64) -> u32 {
    (score * 100.0).round() as u32
}

/// "NN% - LABEL" line for the credibility row
pub fn credibility_line(score: f64, factual_reporting: &str) -> String {
    format!("{}% - {}", score_percent(score), factual_reporting)
}

/// "<language> (<confidence>% confidence)" line for the language row
pub fn language_line(language: &str, confidence: f64) -> String {
    format!("{} ({}% confidence)", language, confidence)
}

/// At most this many claims are rendered; the count still covers all of them.
pub const MAX_VISIBLE_CLAIMS: usize = 3;

/// Maximum characters of a claim shown before truncation
pub const CLAIM_PREVIEW_CHARS: usize = 100;

/// Truncate a claim to `CLAIM_PREVIEW_CHARS` characters with an ellipsis
pub fn claim_preview(claim: &str) -> String {
    if claim.chars().count() > CLAIM_PREVIEW_CHARS {
        let truncated: String = claim.chars().take(CLAIM_PREVIEW_CHARS).collect();
        format!("{}...", truncated)
    } else {
        claim.to_string()
    }
}

/// The first `MAX_VISIBLE_CLAIMS` claims as numbered preview lines
pub fn visible_claims(claims: &[String]) -> Vec<String> {
    claims
        .iter()
        .take(MAX_VISIBLE_CLAIMS)
        .enumerate()
        .map(|(index, claim)| format!("{}. {}", index + 1, claim_preview(claim)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(score_tier(1.0), Tier::Good);
        assert_eq!(score_tier(0.8), Tier::Good);
        assert_eq!(score_tier(0.79), Tier::Medium);
        assert_eq!(score_tier(0.6), Tier::Medium);
        assert_eq!(score_tier(0.59), Tier::Low);
        assert_eq!(score_tier(0.0), Tier::Low);
    }

    #[test]
    fn test_score_and_badge_classes_stay_independent() {
        assert_eq!(score_tier(0.85).score_class(), "good");
        assert_eq!(score_tier(0.85).badge_class(), "high");
        assert_eq!(score_tier(0.7).score_class(), "medium");
        assert_eq!(score_tier(0.7).badge_class(), "medium");
        assert_eq!(score_tier(0.3).score_class(), "low");
        assert_eq!(score_tier(0.3).badge_class(), "low");
    }

    #[test]
    fn test_badge_labels() {
        assert_eq!(score_tier(0.9).badge_label(), "High Trust");
        assert_eq!(score_tier(0.6).badge_label(), "Medium Trust");
        assert_eq!(score_tier(0.1).badge_label(), "Low Trust");
    }

    #[test]
    fn test_score_percent_rounds() {
        assert_eq!(score_percent(0.85), 85);
        assert_eq!(score_percent(0.854), 85);
        assert_eq!(score_percent(0.855), 86);
        assert_eq!(score_percent(0.0), 0);
        assert_eq!(score_percent(1.0), 100);
    }

    #[test]
    fn test_credibility_line() {
        assert_eq!(credibility_line(0.9, "HIGH"), "90% - HIGH");
        assert_eq!(credibility_line(0.0, "Unknown"), "0% - Unknown");
    }

    #[test]
    fn test_language_line() {
        assert_eq!(language_line("English", 97.0), "English (97% confidence)");
        assert_eq!(language_line("EN", 99.99), "EN (99.99% confidence)");
        assert_eq!(language_line("Unknown", 0.0), "Unknown (0% confidence)");
    }

    #[test]
    fn test_claim_preview_short_claim_untouched() {
        let claim = "The report was published in 2024.";
        assert_eq!(claim_preview(claim), claim);
    }

    #[test]
    fn test_claim_preview_exactly_100_chars_untouched() {
        let claim = "a".repeat(100);
        assert_eq!(claim_preview(&claim), claim);
    }

    #[test]
    fn test_claim_preview_truncates_long_claim() {
        let claim = "a".repeat(150);
        let preview = claim_preview(&claim);

        assert_eq!(preview.chars().count(), 103);
        assert!(preview.ends_with("..."));
        assert!(preview.starts_with(&"a".repeat(100)));
    }

    #[test]
    fn test_claim_preview_multibyte_safe() {
        let claim = "é".repeat(120);
        let preview = claim_preview(&claim);

        assert_eq!(preview.chars().count(), 103);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_visible_claims_caps_at_three() {
        let claims: Vec<String> = (1..=5).map(|i| format!("claim {}", i)).collect();
        let visible = visible_claims(&claims);

        assert_eq!(visible.len(), 3);
        assert_eq!(visible[0], "1. claim 1");
        assert_eq!(visible[1], "2. claim 2");
        assert_eq!(visible[2], "3. claim 3");
    }

    #[test]
    fn test_visible_claims_fewer_than_three() {
        let claims = vec!["only one".to_string()];
        let visible = visible_claims(&claims);

        assert_eq!(visible, vec!["1. only one".to_string()]);
    }

    #[test]
    fn test_visible_claims_empty() {
        assert!(visible_claims(&[]).is_empty());
    }
}
