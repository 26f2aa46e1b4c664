//! News article evidence

use serde::{Deserialize, Serialize};

/// A news article returned by the news-search provider as evidence for or
/// against a claim.
///
/// Articles are identified by the (title, source, url) triple; two articles
/// matching on all three are the same article even if their descriptions
/// differ between provider responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline of the article
    pub title: String,

    /// Name of the publication
    pub source: String,

    /// Short description or lede, when the provider supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Link to the article
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Publication date as reported by the provider, passed through verbatim
    #[serde(
        rename = "pubDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub published_at: Option<String>,
}

impl Article {
    /// The identity triple used for deduplication.
    pub fn identity(&self) -> (&str, &str, Option<&str>) {
        (&self.title, &self.source, self.url.as_deref())
    }
}
