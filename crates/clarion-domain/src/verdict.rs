//! Verdict labels and composed verdict payloads

use crate::article::Article;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical verdict vocabulary.
///
/// Every provider rating is mapped onto this set. `Analyzed` is the only
/// label the engine assigns itself: it means the claim was processed but no
/// official fact-check record matched, and carries no independent truth
/// claim - the analysis text and articles are the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictLabel {
    /// An official fact-check confirmed the claim
    Verified,
    /// An official fact-check refuted the claim
    False,
    /// An official fact-check found the claim partially true or distorted
    Misleading,
    /// No usable rating exists for the claim
    Unchecked,
    /// Processed by the engine without an authoritative record
    Analyzed,
}

impl VerdictLabel {
    /// Map a fact-check provider's free-text rating onto the canonical set.
    ///
    /// Provider vocabularies are open-ended ("Pants on Fire!", "Mostly
    /// False", "Four Pinocchios", ...), so matching is by keyword. Ratings
    /// that signal distortion are checked before outright truth values so
    /// "Half True" lands on `Misleading` rather than `Verified`.
    ///
    /// # Examples
    ///
    /// ```
    /// use clarion_domain::VerdictLabel;
    ///
    /// assert_eq!(VerdictLabel::from_provider_rating("Pants on Fire!"), VerdictLabel::False);
    /// assert_eq!(VerdictLabel::from_provider_rating("Half True"), VerdictLabel::Misleading);
    /// assert_eq!(VerdictLabel::from_provider_rating("True"), VerdictLabel::Verified);
    /// ```
    pub fn from_provider_rating(rating: &str) -> Self {
        let rating = rating.to_lowercase();
        let contains_any =
            |needles: &[&str]| needles.iter().any(|needle| rating.contains(needle));

        if contains_any(&["misleading", "mixture", "half", "partly", "exaggerat", "distort"]) {
            VerdictLabel::Misleading
        } else if contains_any(&["false", "pants on fire", "incorrect", "fake", "fabricat", "pinocchio"]) {
            VerdictLabel::False
        } else if contains_any(&["true", "correct", "accurate", "verified"]) {
            VerdictLabel::Verified
        } else {
            VerdictLabel::Unchecked
        }
    }

    /// Whether this label came from an authoritative fact-check record.
    ///
    /// Authoritative labels take precedence over the engine's own
    /// `Analyzed` label when composing a verdict.
    pub fn is_authoritative(&self) -> bool {
        !matches!(self, VerdictLabel::Unchecked | VerdictLabel::Analyzed)
    }

    /// The wire representation of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictLabel::Verified => "VERIFIED",
            VerdictLabel::False => "FALSE",
            VerdictLabel::Misleading => "MISLEADING",
            VerdictLabel::Unchecked => "UNCHECKED",
            VerdictLabel::Analyzed => "ANALYZED",
        }
    }
}

impl fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record found in the structured fact-check database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckReview {
    /// Canonical verdict mapped from the publisher's rating
    pub verdict: VerdictLabel,

    /// Name of the fact-checking publisher (e.g. "PolitiFact")
    pub source: String,

    /// The claim text as reviewed by the publisher
    pub summary: String,
}

/// The composed answer for one claim.
///
/// Constructed once per orchestration call and immutable thereafter; the
/// same value is serialized to the caller and placed in the cache, so a
/// cache hit returns a byte-identical payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// The claim exactly as submitted (after trimming)
    pub claim: String,

    /// Top-level verdict label
    pub verdict: VerdictLabel,

    /// Free-text analysis from the reasoning provider, or a degradation
    /// notice when that provider was unavailable
    pub analysis: String,

    /// Deduplicated supporting articles in relevance order
    pub supporting_articles: Vec<Article>,

    /// Number of supporting articles after deduplication
    pub articles_count: usize,

    /// The fact-check database record, when one matched
    #[serde(
        rename = "google_fact_check",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fact_check: Option<FactCheckReview>,
}

/// One entry in the trending feed: a headline run through the fact-check
/// pipeline, projected for list display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingItem {
    /// Stable 1-based display rank
    pub id: usize,

    /// The headline treated as a claim
    pub title: String,

    /// Publisher of the headline
    pub source: String,

    /// Link to the story
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Publication date as reported by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,

    /// Verdict label for the headline
    pub verdict: VerdictLabel,

    /// Fact-check summary, or a sentinel when none matched
    pub summary: String,

    /// Fact-check publisher attribution, or "N/A"
    pub fact_check_source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_mapping_false_family() {
        assert_eq!(VerdictLabel::from_provider_rating("False"), VerdictLabel::False);
        assert_eq!(VerdictLabel::from_provider_rating("Pants on Fire!"), VerdictLabel::False);
        assert_eq!(VerdictLabel::from_provider_rating("Mostly False"), VerdictLabel::False);
        assert_eq!(VerdictLabel::from_provider_rating("Four Pinocchios"), VerdictLabel::False);
    }

    #[test]
    fn test_rating_mapping_true_family() {
        assert_eq!(VerdictLabel::from_provider_rating("True"), VerdictLabel::Verified);
        assert_eq!(VerdictLabel::from_provider_rating("Accurate"), VerdictLabel::Verified);
        assert_eq!(VerdictLabel::from_provider_rating("Verified"), VerdictLabel::Verified);
    }

    #[test]
    fn test_rating_mapping_misleading_wins_over_true() {
        // "Half True" contains "true" but is a distortion rating
        assert_eq!(VerdictLabel::from_provider_rating("Half True"), VerdictLabel::Misleading);
        assert_eq!(VerdictLabel::from_provider_rating("Misleading"), VerdictLabel::Misleading);
        assert_eq!(VerdictLabel::from_provider_rating("Mixture"), VerdictLabel::Misleading);
    }

    #[test]
    fn test_rating_mapping_unknown() {
        assert_eq!(VerdictLabel::from_provider_rating("Unrateable"), VerdictLabel::Unchecked);
        assert_eq!(VerdictLabel::from_provider_rating(""), VerdictLabel::Unchecked);
    }

    #[test]
    fn test_authoritative_labels() {
        assert!(VerdictLabel::False.is_authoritative());
        assert!(VerdictLabel::Verified.is_authoritative());
        assert!(VerdictLabel::Misleading.is_authoritative());
        assert!(!VerdictLabel::Unchecked.is_authoritative());
        assert!(!VerdictLabel::Analyzed.is_authoritative());
    }

    #[test]
    fn test_label_wire_format() {
        assert_eq!(serde_json::to_string(&VerdictLabel::False).unwrap(), "\"FALSE\"");
        assert_eq!(serde_json::to_string(&VerdictLabel::Analyzed).unwrap(), "\"ANALYZED\"");
        let parsed: VerdictLabel = serde_json::from_str("\"MISLEADING\"").unwrap();
        assert_eq!(parsed, VerdictLabel::Misleading);
    }

    #[test]
    fn test_verdict_wire_shape() {
        let verdict = Verdict {
            claim: "water is wet".to_string(),
            verdict: VerdictLabel::Analyzed,
            analysis: "analysis text".to_string(),
            supporting_articles: vec![],
            articles_count: 0,
            fact_check: Some(FactCheckReview {
                verdict: VerdictLabel::False,
                source: "PolitiFact".to_string(),
                summary: "reviewed claim".to_string(),
            }),
        };
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["verdict"], "ANALYZED");
        assert_eq!(json["google_fact_check"]["source"], "PolitiFact");
        assert_eq!(json["articles_count"], 0);
    }

    #[test]
    fn test_verdict_omits_absent_fact_check() {
        let verdict = Verdict {
            claim: "c".to_string(),
            verdict: VerdictLabel::Analyzed,
            analysis: String::new(),
            supporting_articles: vec![],
            articles_count: 0,
            fact_check: None,
        };
        let json = serde_json::to_value(&verdict).unwrap();
        assert!(json.get("google_fact_check").is_none());
    }
}
