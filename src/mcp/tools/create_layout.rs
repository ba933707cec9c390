//! create_layout tool - page scaffolds from the layout table.

use schemars::JsonSchema;
use serde::Deserialize;

use super::structured_completion;
use crate::completions::CompletionClient;
use crate::component::Framework;
use crate::layout::{generate, Complexity, Layout};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateLayoutInput {
    /// Layout type: "landing", "dashboard", "blog", or any custom name
    /// (custom names use a generic section list).
    #[serde(rename = "type")]
    pub layout_type: String,

    /// Section names in render order. Overrides the type's default sections.
    #[serde(default)]
    pub sections: Vec<String>,

    /// Layout complexity: "simple", "standard", or "detailed". Default: "simple".
    #[serde(default)]
    pub complexity: Option<String>,

    /// Target framework: "html", "react", or "vue". Default: "html".
    #[serde(default)]
    pub framework: Option<String>,
}

fn prompt(input: &CreateLayoutInput, complexity: &str, framework: &str) -> String {
    let sections = if input.sections.is_empty() {
        "choose appropriate sections".to_string()
    } else {
        input.sections.join(", ")
    };

    format!(
        r#"Generate a {complexity} {layout_type} page layout for {framework} using Tailwind CSS.
Sections: {sections}.

Respond with a single JSON object:
{{"sections": ["..."], "grid": "wrapper grid classes", "markup": "full layout markup"}}"#,
        complexity = complexity,
        layout_type = input.layout_type,
        framework = framework,
        sections = sections,
    )
}

pub async fn run(input: CreateLayoutInput, client: &CompletionClient) -> Result<String, String> {
    let complexity_name = input.complexity.clone().unwrap_or_else(|| "simple".to_string());
    let framework_name = input.framework.clone().unwrap_or_else(|| "html".to_string());
    let framework = Framework::parse(&framework_name);

    let layout: Layout = match structured_completion(
        client,
        &prompt(&input, &complexity_name, framework.name()),
        "create_layout",
    )
    .await
    {
        Some(layout) => layout,
        None => generate(
            &input.layout_type,
            &input.sections,
            Complexity::parse(&complexity_name),
            framework,
        ),
    };

    Ok(format_report(&input.layout_type, framework, &layout))
}

fn format_report(layout_type: &str, framework: Framework, layout: &Layout) -> String {
    format!(
        r#"# Generated Layout

**Type:** {layout_type} | **Framework:** {framework}

## Structure
{sections}

**Grid:** `{grid}`

## Markup

```{fence}
{markup}
```"#,
        layout_type = layout_type,
        framework = framework.name(),
        sections = layout
            .sections
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {}", i + 1, s))
            .collect::<Vec<_>>()
            .join("\n"),
        grid = layout.grid,
        fence = framework.fence(),
        markup = layout.markup,
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
    async fn test_landing_simple_structure() {
        let client = manual_client();
        let input = CreateLayoutInput {
            layout_type: "landing".to_string(),
            sections: vec!["header".to_string(), "hero".to_string(), "footer".to_string()],
            complexity: Some("simple".to_string()),
            framework: Some("html".to_string()),
        };
        let report = run(input, &client).await.unwrap();

        assert!(report.contains("1. header\n2. hero\n3. footer"));
        assert!(report.contains("**Grid:** `grid grid-cols-1 gap-8`"));
        assert!(report.contains("```html"));
    }

    #[tokio::test]
    async fn test_defaults_applied() {
        let client = manual_client();
        let input = CreateLayoutInput {
            layout_type: "dashboard".to_string(),
            sections: Vec::new(),
            complexity: None,
            framework: None,
        };
        let report = run(input, &client).await.unwrap();
        assert!(report.contains("1. header\n2. main"));
    }

    #[tokio::test]
    async fn test_manual_path_deterministic() {
        let client = manual_client();
        let make = || CreateLayoutInput {
            layout_type: "blog".to_string(),
            sections: Vec::new(),
            complexity: Some("standard".to_string()),
            framework: Some("react".to_string()),
        };
        let a = run(make(), &client).await.unwrap();
        let b = run(make(), &client).await.unwrap();
        assert_eq!(a, b);
    }
}
