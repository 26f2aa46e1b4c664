//! Output formatting for the CLI.

use clarion_domain::{TrendingItem, Verdict, VerdictLabel};
use colored::*;

fn colored_label(label: VerdictLabel) -> ColoredString {
    let text = label.as_str();
    match label {
        VerdictLabel::Verified => text.green().bold(),
        VerdictLabel::False => text.red().bold(),
        VerdictLabel::Misleading => text.yellow().bold(),
        VerdictLabel::Unchecked | VerdictLabel::Analyzed => text.cyan(),
    }
}

/// Render a verdict for terminal display.
pub fn render_verdict(verdict: &Verdict) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", "Claim:".bold(), verdict.claim));
    out.push_str(&format!(
        "{} {}\n",
        "Verdict:".bold(),
        colored_label(verdict.verdict)
    ));

    if let Some(review) = &verdict.fact_check {
        out.push_str(&format!(
            "{} {} rated this {} - {}\n",
            "Fact-check:".bold(),
            review.source,
            colored_label(review.verdict),
            review.summary
        ));
    }

    out.push_str(&format!("\n{}\n{}\n", "Analysis:".bold(), verdict.analysis));

    if verdict.supporting_articles.is_empty() {
        out.push_str(&format!("\n{}\n", "No supporting articles found.".dimmed()));
    } else {
        out.push_str(&format!(
            "\n{} ({}):\n",
            "Supporting articles".bold(),
            verdict.articles_count
        ));
        for (i, article) in verdict.supporting_articles.iter().enumerate() {
            out.push_str(&format!("  {}. {} - {}", i + 1, article.title, article.source));
            if let Some(url) = &article.url {
                out.push_str(&format!(" ({})", url.dimmed()));
            }
            out.push('\n');
        }
    }

    out
}

/// Render the trending feed for terminal display.
pub fn render_trending(items: &[TrendingItem]) -> String {
    if items.is_empty() {
        return "No trending headlines available.".dimmed().to_string();
    }

    let mut out = String::new();
    for item in items {
        out.push_str(&format!(
            "{}. [{}] {} - {}\n",
            item.id,
            colored_label(item.verdict),
            item.title,
            item.source
        ));
        out.push_str(&format!(
            "   {} (source: {})\n",
            item.summary, item.fact_check_source
        ));
    }

    out
}
