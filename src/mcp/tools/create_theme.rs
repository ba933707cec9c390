//! create_theme tool - shade ramps and scales from a brand color.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{default_true, structured_completion};
use crate::completions::CompletionClient;
use crate::theme::{generate, render_config, Theme, ThemeOptions};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateThemeInput {
    /// Brand color: hex ("#3b82f6"), rgb()/hsl() notation, or a CSS color name.
    pub brand_color: String,

    /// Design style the theme should lean toward: "modern", "classic",
    /// "playful", "elegant", or "minimal". Advisory; the generated ramps do
    /// not vary with it. Default: "modern".
    #[serde(default)]
    pub style: Option<String>,

    /// Number of primary shades to generate (5-10). Default: 10.
    #[serde(default)]
    pub shade_count: Option<u32>,

    /// Include a tailwind.config.js snippet. Default: true.
    #[serde(default = "default_true")]
    pub include_config: bool,

    /// Include the typography scale. Default: true.
    #[serde(default = "default_true")]
    pub include_typography: bool,

    /// Include the spacing scale. Default: true.
    #[serde(default = "default_true")]
    pub include_spacing: bool,
}

fn prompt(input: &CreateThemeInput, style: &str, shade_count: usize) -> String {
    format!(
        r##"Create a Tailwind CSS color theme from the brand color {brand} in a {style} style.
Generate {count} primary shades (lightest to darkest) plus a neutral gray ramp.

Respond with a single JSON object:
{{"primary": [{{"level": 50, "hex": "#..."}}, ...], "gray": [{{"level": 50, "hex": "#..."}}, ...], "typography": null, "spacing": null}}"##,
        brand = input.brand_color,
        style = style,
        count = shade_count,
    )
}

pub async fn run(input: CreateThemeInput, client: &CompletionClient) -> Result<String, String> {
    let style = input.style.clone().unwrap_or_else(|| "modern".to_string());
    let shade_count = input.shade_count.unwrap_or(10) as usize;

    let theme: Theme =
        match structured_completion(client, &prompt(&input, &style, shade_count), "create_theme")
            .await
        {
            Some(theme) => theme,
            None => {
                let options = ThemeOptions {
                    shade_count,
                    include_typography: input.include_typography,
                    include_spacing: input.include_spacing,
                };
                generate(&input.brand_color, &options).map_err(|e| e.to_string())?
            }
        };

    Ok(format_report(&input.brand_color, &style, &theme, input.include_config))
}

fn format_report(brand: &str, style: &str, theme: &Theme, include_config: bool) -> String {
    let mut out = format!(
        "# Generated Theme\n\n**Brand color:** {} | **Style:** {}\n\n## Primary Shades\n",
        brand, style
    );
    for shade in &theme.primary {
        out.push_str(&format!("- `{}`: `{}`\n", shade.level, shade.hex));
    }

    out.push_str("\n## Gray Shades\n");
    for shade in &theme.gray {
        out.push_str(&format!("- `{}`: `{}`\n", shade.level, shade.hex));
    }

    if let Some(typography) = &theme.typography {
        out.push_str("\n## Typography Scale\n");
        for step in typography {
            out.push_str(&format!(
                "- `text-{}`: {} / line-height {}\n",
                step.name, step.size, step.line_height
            ));
        }
    }

    if let Some(spacing) = &theme.spacing {
        out.push_str("\n## Spacing Scale\n");
        for step in spacing {
            out.push_str(&format!("- `{}`: {}\n", step.name, step.size));
        }
    }

    if include_config {
        out.push_str("\n## Tailwind Config\n\n```js\n");
        out.push_str(&render_config(theme));
        out.push_str("```");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completions::{CompletionClient, ProviderConfig};

    fn manual_client() -> CompletionClient {
        CompletionClient::new(ProviderConfig::disabled())
    }

    fn input() -> CreateThemeInput {
        CreateThemeInput {
            brand_color: "#3b82f6".to_string(),
            style: None,
            shade_count: None,
            include_config: true,
            include_typography: true,
            include_spacing: true,
        }
    }

    #[tokio::test]
    async fn test_manual_theme_report() {
        let client = manual_client();
        let report = run(input(), &client).await.unwrap();
        assert!(report.starts_with("# Generated Theme"));
        assert!(report.contains("## Primary Shades"));
        assert!(report.contains("`500`: `#3b82f6`"));
        assert!(report.contains("## Gray Shades"));
        assert!(report.contains("## Typography Scale"));
        assert!(report.contains("## Tailwind Config"));
        assert!(report.contains("module.exports"));
    }

    #[tokio::test]
    async fn test_flags_trim_sections() {
        let client = manual_client();
        let mut req = input();
        req.include_config = false;
        req.include_typography = false;
        req.include_spacing = false;
        let report = run(req, &client).await.unwrap();
        assert!(!report.contains("## Typography Scale"));
        assert!(!report.contains("## Spacing Scale"));
        assert!(!report.contains("## Tailwind Config"));
    }

    #[tokio::test]
    async fn test_invalid_color_is_error() {
        let client = manual_client();
        let mut req = input();
        req.brand_color = "#zzz".to_string();
        let err = run(req, &client).await.unwrap_err();
        assert!(err.contains("invalid hex character"));
    }

    #[tokio::test]
    async fn test_manual_path_deterministic() {
        let client = manual_client();
        let a = run(input(), &client).await.unwrap();
        let b = run(input(), &client).await.unwrap();
        assert_eq!(a, b);
    }
}
