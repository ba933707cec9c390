//! analyze_design tool - heuristic design report over markup.

use schemars::JsonSchema;
use serde::Deserialize;

use super::structured_completion;
use crate::analyze::{analyze, DesignReport};
use crate::completions::CompletionClient;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AnalyzeDesignInput {
    /// HTML fragment to analyze.
    pub html: String,
}

fn prompt(input: &AnalyzeDesignInput) -> String {
    format!(
        r#"Analyze this Tailwind-styled HTML for design quality: semantic structure,
accessibility, responsive design, interactivity, and class usage.

HTML:
{html}

Respond with a single JSON object:
{{"checks": [{{"name": "...", "verdict": "good" | "needs-work" | "missing", "detail": "...", "recommendation": null}}], "summary": "..."}}"#,
        html = input.html,
    )
}

pub async fn run(input: AnalyzeDesignInput, client: &CompletionClient) -> Result<String, String> {
    let report: DesignReport =
        match structured_completion(client, &prompt(&input), "analyze_design").await {
            Some(report) => report,
            None => analyze(&input.html),
        };

    Ok(format_report(&report))
}

fn format_report(report: &DesignReport) -> String {
    let mut out = String::from("# Design Analysis\n");

    if let Some(summary) = &report.summary {
        out.push_str(&format!("\n**Summary:** {}\n", summary));
    }

    for check in &report.checks {
        out.push_str(&format!("\n## {}\n\n**{}** - {}\n", check.name, check.verdict.label(), check.detail));
        if let Some(recommendation) = &check.recommendation {
            out.push_str(&format!("\n> Recommendation: {}\n", recommendation));
        }
    }

    out
}
