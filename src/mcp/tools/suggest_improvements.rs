//! suggest_improvements tool - actionable fixes for existing markup.

use schemars::JsonSchema;
use serde::Deserialize;

use super::structured_completion;
use crate::completions::CompletionClient;
use crate::suggest::{suggest, Improvements};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SuggestImprovementsInput {
    /// HTML fragment to review for improvements.
    pub html: String,
}

fn prompt(input: &SuggestImprovementsInput) -> String {
    format!(
        r#"Suggest concrete improvements for this Tailwind-styled HTML: accessibility,
responsiveness, consistency, interactivity, and theming.

HTML:
{html}

Respond with a single JSON object:
{{"items": [{{"area": "...", "finding": "...", "suggestion": "...", "example": "..."}}]}}"#,
        html = input.html,
    )
}

pub async fn run(
    input: SuggestImprovementsInput,
    client: &CompletionClient,
) -> Result<String, String> {
    let improvements: Improvements =
        match structured_completion(client, &prompt(&input), "suggest_improvements").await {
            Some(improvements) => improvements,
            None => suggest(&input.html),
        };

    Ok(format_report(&improvements))
}

fn format_report(improvements: &Improvements) -> String {
    if improvements.items.is_empty() {
        return "# Improvement Suggestions\n\nNothing to flag - the markup already follows the checked practices.".to_string();
    }

    let mut out = String::from("# Improvement Suggestions\n");
    for item in &improvements.items {
        out.push_str(&format!("\n## {}\n\n{}\n\n{}\n", item.area, item.finding, item.suggestion));
        if let Some(example) = &item.example {
            out.push_str(&format!("\n```html\n{}\n```\n", example));
        }
    }
    out
}
