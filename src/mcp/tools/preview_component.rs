//! preview_component tool - wrap markup in a standalone HTML page.

use schemars::JsonSchema;
use serde::Deserialize;

use super::raw_completion;
use crate::completions::CompletionClient;
use crate::component::ThemeMode;
use crate::preview::document;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PreviewComponentInput {
    /// Markup fragment to preview.
    pub html: String,

    /// Base palette for the page shell: "light" or "dark". Default: "light".
    #[serde(default)]
    pub theme: Option<String>,

    /// Page title for the preview document.
    #[serde(default)]
    pub title: Option<String>,
}

fn prompt(input: &PreviewComponentInput) -> String {
    format!(
        r#"Polish this Tailwind-styled HTML fragment for presentation: keep its structure
and classes, only fix obvious styling gaps (spacing, alignment).

HTML:
{html}

Reply with only the improved fragment, no explanation."#,
        html = input.html,
    )
}

pub async fn run(
    input: PreviewComponentInput,
    client: &CompletionClient,
) -> Result<String, String> {
    // The LLM may polish the fragment; the manual path previews it verbatim.
    // Either way the document shell below is the same.
    let fragment = match raw_completion(client, &prompt(&input), "preview_component").await {
        Some(fragment) => fragment,
        None => input.html.clone(),
    };

    let theme = ThemeMode::parse(input.theme.as_deref().unwrap_or("light"));
    let title = input.title.as_deref().unwrap_or("");
    let page = document(&fragment, theme, title);

    Ok(format_report(&page))
}

fn format_report(page: &str) -> String {
    format!(
        r#"# Component Preview

Save as an .html file and open it in a browser.

```html
{}
```"#,
        page
    )
}
