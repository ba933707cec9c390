//! convert_to_tailwind tool - CSS declarations to utility classes.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{bullet_list, structured_completion};
use crate::completions::CompletionClient;
use crate::convert::{convert_css, convert_markup, Conversion};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ConvertToTailwindInput {
    /// CSS rules or an HTML fragment with inline style attributes.
    pub css: String,

    /// Input format: "css" for stylesheet rules, "html" for markup with
    /// inline styles. Default: "css".
    #[serde(default)]
    pub format: Option<String>,
}

fn prompt(input: &ConvertToTailwindInput, format: &str) -> String {
    format!(
        r#"Convert this {format} input to Tailwind CSS utility classes.

Input:
{css}

Respond with a single JSON object:
{{"rules": [{{"selector": "...", "classes": ["..."], "mappings": ["property: value → class"]}}], "unconverted": ["property: value"], "convertedHtml": null}}
List every declaration you could not convert in "unconverted"."#,
        format = format,
        css = input.css,
    )
}

pub async fn run(
    input: ConvertToTailwindInput,
    client: &CompletionClient,
) -> Result<String, String> {
    let format = input.format.as_deref().unwrap_or("css").to_ascii_lowercase();

    let result: Conversion =
        match structured_completion(client, &prompt(&input, &format), "convert_to_tailwind").await
        {
            Some(result) => result,
            None => match format.as_str() {
                "html" | "markup" => convert_markup(&input.css),
                _ => convert_css(&input.css),
            },
        };

    Ok(format_report(&result))
}

fn format_report(result: &Conversion) -> String {
    let mut sections = Vec::new();

    if let Some(html) = &result.converted_html {
        sections.push(format!("```html\n{}\n```", html));
    }

    for rule in &result.rules {
        let classes =
            if rule.classes.is_empty() { "(none)".to_string() } else { rule.classes.join(" ") };
        sections.push(format!(
            "## `{}`\n\n`{}`\n\n{}",
            rule.selector,
            classes,
            bullet_list(&rule.mappings, "No convertible declarations"),
        ));
    }

    let unconverted: Vec<String> =
        result.unconverted.iter().map(|u| format!("`{}`", u)).collect();

    format!(
        "# Tailwind Conversion\n\n{}\n\n## Unconverted Declarations\n{}",
        sections.join("\n\n"),
        bullet_list(&unconverted, "None - everything converted"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completions::{CompletionClient, ProviderConfig};

    fn manual_client() -> CompletionClient {
        CompletionClient::new(ProviderConfig::disabled())
    }

    #[tokio::test]
    async fn test_css_conversion_report() {
        let client = manual_client();
        let input = ConvertToTailwindInput {
            css: ".btn { padding: 16px; display: flex; }".to_string(),
            format: Some("css".to_string()),
        };
        let report = run(input, &client).await.unwrap();

        assert!(report.starts_with("# Tailwind Conversion"));
        assert!(report.contains("## `.btn`"));
        assert!(report.contains("`p-4 flex`"));
        assert!(report.contains("padding: 16px → p-4"));
        assert!(report.contains("display: flex → flex"));
        assert!(report.contains("None - everything converted"));
    }

    #[tokio::test]
    async fn test_unconvertible_surfaced() {
        let client = manual_client();
        let input = ConvertToTailwindInput {
            css: "div { letter-spacing: 2px; }".to_string(),
            format: None,
        };
        let report = run(input, &client).await.unwrap();
        assert!(report.contains("`letter-spacing: 2px`"));
        assert!(!report.contains("None - everything converted"));
    }

    #[tokio::test]
    async fn test_html_format_rewrites_markup() {
        let client = manual_client();
        let input = ConvertToTailwindInput {
            css: r#"<div style="display: flex">x</div>"#.to_string(),
            format: Some("html".to_string()),
        };
        let report = run(input, &client).await.unwrap();
        assert!(report.contains(r#"<div class="flex">x</div>"#));
    }

    #[tokio::test]
    async fn test_manual_path_deterministic() {
        let client = manual_client();
        let css = ".a { margin: 8px; color: red; clip-path: circle(); }";
        let make = || ConvertToTailwindInput { css: css.to_string(), format: None };
        let a = run(make(), &client).await.unwrap();
        let b = run(make(), &client).await.unwrap();
        assert_eq!(a, b);
    }
}
