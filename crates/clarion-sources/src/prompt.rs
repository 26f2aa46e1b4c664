//! Prompt assembly for the reasoning provider

use clarion_domain::Article;

/// Builds the grounding prompt sent to the reasoning provider.
pub struct AnalysisPrompt<'a> {
    claim: &'a str,
    evidence: &'a [Article],
}

impl<'a> AnalysisPrompt<'a> {
    /// Create a prompt for a claim with its supporting articles.
    pub fn new(claim: &'a str, evidence: &'a [Article]) -> Self {
        Self { claim, evidence }
    }

    /// Build the complete prompt text.
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!("Claim to fact-check: \"{}\"\n\n", self.claim));

        prompt.push_str("Supporting articles:\n");
        if self.evidence.is_empty() {
            prompt.push_str("No articles found.\n");
        } else {
            for (i, article) in self.evidence.iter().enumerate() {
                prompt.push_str(&format!(
                    "Article {}:\nTitle: {}\nSource: {}\nDescription: {}\n\n",
                    i + 1,
                    article.title,
                    article.source,
                    article.description.as_deref().unwrap_or("(none)")
                ));
            }
        }

        prompt.push_str("\nProvide your fact-check verdict and explanation.");

        prompt
    }
}

/// Fixed system instruction for the reasoning provider.
pub const SYSTEM_INSTRUCTION: &str = "You are a professional fact-checker. \
Assess the factual accuracy of the given claim using only the supporting \
articles provided. Cite the evidence you rely on, be objective, and answer \
concisely.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_with_articles() {
        let evidence = vec![Article {
            title: "Convoys moving".to_string(),
            source: "Reuters".to_string(),
            description: Some("Aid resumed Friday.".to_string()),
            url: None,
            published_at: None,
        }];

        let prompt = AnalysisPrompt::new("aid is stalled", &evidence).build();

        assert!(prompt.contains("Claim to fact-check: \"aid is stalled\""));
        assert!(prompt.contains("Article 1:"));
        assert!(prompt.contains("Source: Reuters"));
        assert!(!prompt.contains("No articles found."));
    }

    #[test]
    fn test_prompt_without_articles() {
        let prompt = AnalysisPrompt::new("aid is stalled", &[]).build();
        assert!(prompt.contains("No articles found."));
    }
}
