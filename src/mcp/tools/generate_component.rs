//! generate_component tool - UI component markup from a description.
//!
//! The one tool whose LLM path consumes the completion verbatim: the reply
//! is the artifact, not a JSON envelope. The manual path renders from the
//! static template table and is a hard error for types outside it.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{default_true, raw_completion};
use crate::completions::CompletionClient;
use crate::component::{generate, ComponentSpec, Framework, Size, ThemeMode, Variant};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GenerateComponentInput {
    /// What the component should do or say.
    pub description: String,

    /// Component type: "button", "card", "form", "navigation", "modal",
    /// "table", or "custom" (custom requires the LLM path).
    pub component_type: String,

    /// Target framework: "html", "react", or "vue". Default: "html".
    #[serde(default)]
    pub framework: Option<String>,

    /// Visual variant: "primary", "secondary", "outline", or "ghost". Default: "primary".
    #[serde(default)]
    pub variant: Option<String>,

    /// Size: "sm", "md", or "lg". Default: "md".
    #[serde(default)]
    pub size: Option<String>,

    /// Base palette: "light" or "dark". Default: "light".
    #[serde(default)]
    pub theme: Option<String>,

    /// Include responsive width/breakpoint classes. Default: true.
    #[serde(default = "default_true")]
    pub responsive: bool,

    /// Include ARIA attributes and focus styles. Default: true.
    #[serde(default = "default_true")]
    pub accessibility: bool,
}

fn resolve(input: &GenerateComponentInput) -> ComponentSpec {
    ComponentSpec {
        description: input.description.clone(),
        component_type: input.component_type.clone(),
        framework: Framework::parse(input.framework.as_deref().unwrap_or("html")),
        variant: Variant::parse(input.variant.as_deref().unwrap_or("primary")),
        size: Size::parse(input.size.as_deref().unwrap_or("md")),
        theme: ThemeMode::parse(input.theme.as_deref().unwrap_or("light")),
        responsive: input.responsive,
        accessibility: input.accessibility,
    }
}

fn prompt(spec: &ComponentSpec) -> String {
    format!(
        r#"Generate a {framework} {component_type} component styled with Tailwind CSS utility classes.

Description: {description}
Variant: {variant:?}. Size: {size:?}. Theme: {theme:?}.
Responsive design: {responsive}. Accessibility attributes: {accessibility}.

Reply with only the component code, no explanation."#,
        framework = spec.framework.name(),
        component_type = spec.component_type,
        description = spec.description,
        variant = spec.variant,
        size = spec.size,
        theme = spec.theme,
        responsive = spec.responsive,
        accessibility = spec.accessibility,
    )
}

pub async fn run(
    input: GenerateComponentInput,
    client: &CompletionClient,
) -> Result<String, String> {
    let spec = resolve(&input);

    let code = match raw_completion(client, &prompt(&spec), "generate_component").await {
        Some(code) => code,
        // Template misses are hard errors, not a further degradation
        None => generate(&spec).map_err(|e| e.to_string())?,
    };

    Ok(format_report(&spec, &code))
}

fn format_report(spec: &ComponentSpec, code: &str) -> String {
    format!(
        r#"# Generated Component

**Type:** {component_type} | **Framework:** {framework} | **Responsive:** {responsive} | **Accessible:** {accessibility}

```{fence}
{code}
```

## Usage Notes
- Classes follow the {framework} idiom; adjust colors to match your palette
- Pair with `preview_component` to see the rendered result"#,
        component_type = spec.component_type,
        framework = spec.framework.name(),
        responsive = spec.responsive,
        accessibility = spec.accessibility,
        fence = spec.framework.fence(),
        code = code,
    )
}
