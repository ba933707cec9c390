//! Theme generation: shade ramps, fixed scales, and config output.
//!
//! Brand colors accept the same formats the rest of the CSS world uses:
//! hex (`#RGB`, `#RRGGBB`, `#RRGGBBAA`) through a fast hand-rolled parser,
//! everything else (`rgb()`, `hsl()`, named colors) through lightningcss.
//!
//! The primary ramp keeps the brand color's hue and saturation and walks a
//! fixed lightness table per level; level 500 is the brand color verbatim.
//! The gray ramp, typography scale, and spacing scale are static tables -
//! they do not vary with the brand color or style.

use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for brand-color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid hex color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    /// CSS parsing error from lightningcss
    #[error("CSS parse error: {0}")]
    CssParse(String),
}

/// One entry of a shade ramp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shade {
    pub level: u16,
    pub hex: String,
}

/// One step of the typography scale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeStep {
    pub name: String,
    pub size: String,
    pub line_height: String,
}

/// One step of the spacing scale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpaceStep {
    pub name: String,
    pub size: String,
}

/// A generated theme. Both the rule engine and the parsed LLM reply produce
/// this exact shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary: Vec<Shade>,
    #[serde(default)]
    pub gray: Vec<Shade>,
    #[serde(default)]
    pub typography: Option<Vec<TypeStep>>,
    #[serde(default)]
    pub spacing: Option<Vec<SpaceStep>>,
}

/// Options for manual theme generation.
#[derive(Debug, Clone)]
pub struct ThemeOptions {
    pub shade_count: usize,
    pub include_typography: bool,
    pub include_spacing: bool,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self { shade_count: 10, include_typography: true, include_spacing: true }
    }
}

/// Full shade level list. `shade_count` selects evenly spaced entries; the
/// spacing always lands on level 500 so the brand color survives selection.
const LEVELS: &[u16] = &[50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Target lightness per shade level, light to dark.
const LIGHTNESS: &[f32] = &[0.97, 0.94, 0.86, 0.77, 0.66, 0.56, 0.46, 0.39, 0.31, 0.24];

/// Fixed neutral gray ramp (10 levels).
const GRAY_RAMP: &[(u16, &str)] = &[
    (50, "#f9fafb"),
    (100, "#f3f4f6"),
    (200, "#e5e7eb"),
    (300, "#d1d5db"),
    (400, "#9ca3af"),
    (500, "#6b7280"),
    (600, "#4b5563"),
    (700, "#374151"),
    (800, "#1f2937"),
    (900, "#111827"),
];

const TYPE_SCALE: &[(&str, &str, &str)] = &[
    ("xs", "0.75rem", "1rem"),
    ("sm", "0.875rem", "1.25rem"),
    ("base", "1rem", "1.5rem"),
    ("lg", "1.125rem", "1.75rem"),
    ("xl", "1.25rem", "1.75rem"),
    ("2xl", "1.5rem", "2rem"),
    ("3xl", "1.875rem", "2.25rem"),
    ("4xl", "2.25rem", "2.5rem"),
];

const SPACE_SCALE: &[(&str, &str)] = &[
    ("1", "0.25rem"),
    ("2", "0.5rem"),
    ("3", "0.75rem"),
    ("4", "1rem"),
    ("6", "1.5rem"),
    ("8", "2rem"),
    ("12", "3rem"),
    ("16", "4rem"),
];

/// Generate a theme from a brand color.
pub fn generate(brand_color: &str, options: &ThemeOptions) -> Result<Theme, ColorError> {
    let (r, g, b) = parse_brand_color(brand_color)?;
    let (h, s, _) = rgb_to_hsl(r, g, b);

    let shade_count = options.shade_count.clamp(5, LEVELS.len());
    let primary = select_levels(shade_count)
        .into_iter()
        .map(|idx| {
            let level = LEVELS[idx];
            let hex = if level == 500 {
                format_hex(r, g, b)
            } else {
                let (sr, sg, sb) = hsl_to_rgb(h, s, LIGHTNESS[idx]);
                format_hex(sr, sg, sb)
            };
            Shade { level, hex }
        })
        .collect();

    let gray = GRAY_RAMP.iter().map(|&(level, hex)| Shade { level, hex: hex.to_string() }).collect();

    let typography = options.include_typography.then(|| {
        TYPE_SCALE
            .iter()
            .map(|&(name, size, line_height)| TypeStep {
                name: name.to_string(),
                size: size.to_string(),
                line_height: line_height.to_string(),
            })
            .collect()
    });

    let spacing = options.include_spacing.then(|| {
        SPACE_SCALE
            .iter()
            .map(|&(name, size)| SpaceStep { name: name.to_string(), size: size.to_string() })
            .collect()
    });

    Ok(Theme { primary, gray, typography, spacing })
}

/// Evenly spaced indices into `LEVELS`, endpoints included.
fn select_levels(count: usize) -> Vec<usize> {
    let last = LEVELS.len() - 1;
    (0..count).map(|i| (i * last + (count - 1) / 2) / (count - 1)).collect()
}

/// Render a theme as a `tailwind.config.js` snippet.
pub fn render_config(theme: &Theme) -> String {
    let mut out = String::from("module.exports = {\n  theme: {\n    extend: {\n      colors: {\n");
    out.push_str("        primary: {\n");
    for shade in &theme.primary {
        out.push_str(&format!("          {}: '{}',\n", shade.level, shade.hex));
    }
    out.push_str("        },\n        gray: {\n");
    for shade in &theme.gray {
        out.push_str(&format!("          {}: '{}',\n", shade.level, shade.hex));
    }
    out.push_str("        },\n      },\n");

    if let Some(typography) = &theme.typography {
        out.push_str("      fontSize: {\n");
        for step in typography {
            out.push_str(&format!(
                "        {}: ['{}', '{}'],\n",
                quote_key(&step.name),
                step.size,
                step.line_height
            ));
        }
        out.push_str("      },\n");
    }
    if let Some(spacing) = &theme.spacing {
        out.push_str("      spacing: {\n");
        for step in spacing {
            out.push_str(&format!("        {}: '{}',\n", quote_key(&step.name), step.size));
        }
        out.push_str("      },\n");
    }

    out.push_str("    },\n  },\n};\n");
    out
}

/// Quote scale keys that are not valid JS identifiers (`2xl`).
fn quote_key(key: &str) -> String {
    let needs_quotes = key.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(true);
    if needs_quotes {
        format!("'{}'", key)
    } else {
        key.to_string()
    }
}

/// Parse a brand color string into RGB.
///
/// Hex colors take the fast path; everything else goes through lightningcss.
pub fn parse_brand_color(s: &str) -> Result<(u8, u8, u8), ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    parse_css_color(s)
}

/// Parse hex digits (without the leading `#`), ignoring any alpha channel.
fn parse_hex(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    for c in hex.chars() {
        if !c.is_ascii_hexdigit() {
            return Err(ColorError::InvalidHex(c));
        }
    }

    match hex.len() {
        3 | 4 => {
            let mut chars = hex.chars();
            let r = hex_digit(chars.next().ok_or(ColorError::Empty)?)? * 17;
            let g = hex_digit(chars.next().ok_or(ColorError::Empty)?)? * 17;
            let b = hex_digit(chars.next().ok_or(ColorError::Empty)?)? * 17;
            Ok((r, g, b))
        }
        6 | 8 => {
            let r = hex_pair(&hex[0..2])?;
            let g = hex_pair(&hex[2..4])?;
            let b = hex_pair(&hex[4..6])?;
            Ok((r, g, b))
        }
        len => Err(ColorError::InvalidLength(len)),
    }
}

/// Parse a CSS color using lightningcss (rgb, hsl, named colors).
fn parse_css_color(s: &str) -> Result<(u8, u8, u8), ColorError> {
    let css_color =
        CssColor::parse_string(s).map_err(|e| ColorError::CssParse(e.to_string()))?;
    let rgb_color = css_color
        .to_rgb()
        .map_err(|_| ColorError::CssParse("cannot convert color to RGB".to_string()))?;

    match rgb_color {
        CssColor::RGBA(rgba) => Ok((rgba.red, rgba.green, rgba.blue)),
        _ => Err(ColorError::CssParse("color conversion did not produce RGB".to_string())),
    }
}

fn hex_digit(c: char) -> Result<u8, ColorError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(ColorError::InvalidHex(c)),
    }
}

fn hex_pair(s: &str) -> Result<u8, ColorError> {
    let mut chars = s.chars();
    let high = hex_digit(chars.next().ok_or(ColorError::Empty)?)?;
    let low = hex_digit(chars.next().ok_or(ColorError::Empty)?)?;
    Ok(high * 16 + low)
}

fn format_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// RGB (0-255) to HSL (h in degrees, s and l in 0-1).
fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f32::EPSILON {
        return (0.0, 0.0, l);
    }

    let delta = max - min;
    let s = if l > 0.5 { delta / (2.0 - max - min) } else { delta / (max + min) };

    let h = if (max - r).abs() < f32::EPSILON {
        ((g - b) / delta).rem_euclid(6.0)
    } else if (max - g).abs() < f32::EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (h * 60.0, s, l)
}

/// HSL back to RGB (0-255).
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    if s < f32::EPSILON {
        let v = (l * 255.0).round() as u8;
        return (v, v, v);
    }

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    (
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_brand_color("#F00").unwrap(), (255, 0, 0));
        assert_eq!(parse_brand_color("#3b82f6").unwrap(), (59, 130, 246));
        assert_eq!(parse_brand_color("#3b82f6ff").unwrap(), (59, 130, 246));
    }

    #[test]
    fn test_parse_named_and_functional() {
        assert_eq!(parse_brand_color("blue").unwrap(), (0, 0, 255));
        assert_eq!(parse_brand_color("rgb(59, 130, 246)").unwrap(), (59, 130, 246));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_brand_color(""), Err(ColorError::Empty));
        assert_eq!(parse_brand_color("#12"), Err(ColorError::InvalidLength(2)));
        assert_eq!(parse_brand_color("#xyz"), Err(ColorError::InvalidHex('x')));
        assert!(matches!(parse_brand_color("not-a-color"), Err(ColorError::CssParse(_))));
    }

    #[test]
    fn test_hsl_round_trip_primaries() {
        for &(r, g, b) in &[(255u8, 0u8, 0u8), (0, 255, 0), (0, 0, 255), (128, 128, 128)] {
            let (h, s, l) = rgb_to_hsl(r, g, b);
            assert_eq!(hsl_to_rgb(h, s, l), (r, g, b));
        }
    }

    #[test]
    fn test_generate_default_shape() {
        let theme = generate("#3b82f6", &ThemeOptions::default()).unwrap();
        assert_eq!(theme.primary.len(), 10);
        assert_eq!(theme.gray.len(), 10);
        assert!(theme.typography.is_some());
        assert!(theme.spacing.is_some());
    }

    #[test]
    fn test_brand_color_is_level_500() {
        let theme = generate("#3b82f6", &ThemeOptions::default()).unwrap();
        let level_500 = theme.primary.iter().find(|s| s.level == 500).unwrap();
        assert_eq!(level_500.hex, "#3b82f6");
    }

    #[test]
    fn test_ramp_is_light_to_dark() {
        let theme = generate("#3b82f6", &ThemeOptions::default()).unwrap();
        let lightness: Vec<f32> = theme
            .primary
            .iter()
            .map(|s| {
                let (r, g, b) = parse_brand_color(&s.hex).unwrap();
                rgb_to_hsl(r, g, b).2
            })
            .collect();
        for pair in lightness.windows(2) {
            // Monotonic except where the verbatim brand color sits
            assert!(pair[0] >= pair[1] - 0.12, "ramp not descending: {:?}", lightness);
        }
    }

    #[test]
    fn test_shade_count_clamped() {
        let theme = generate(
            "#3b82f6",
            &ThemeOptions { shade_count: 99, include_typography: false, include_spacing: false },
        )
        .unwrap();
        assert_eq!(theme.primary.len(), 10);
        assert!(theme.typography.is_none());
        assert!(theme.spacing.is_none());

        let small =
            generate("#3b82f6", &ThemeOptions { shade_count: 1, ..ThemeOptions::default() })
                .unwrap();
        assert_eq!(small.primary.len(), 5);
    }

    #[test]
    fn test_select_levels_endpoints() {
        let indices = select_levels(5);
        assert_eq!(indices.len(), 5);
        assert_eq!(indices[0], 0);
        assert_eq!(*indices.last().unwrap(), LEVELS.len() - 1);
    }

    #[test]
    fn test_determinism() {
        let a = generate("#16a34a", &ThemeOptions::default()).unwrap();
        let b = generate("#16a34a", &ThemeOptions::default()).unwrap();
        assert_eq!(a.primary, b.primary);
        assert_eq!(a.gray, b.gray);
    }

    #[test]
    fn test_render_config_contains_ramps() {
        let theme = generate("#3b82f6", &ThemeOptions::default()).unwrap();
        let config = render_config(&theme);
        assert!(config.starts_with("module.exports"));
        assert!(config.contains("primary: {"));
        assert!(config.contains("500: '#3b82f6',"));
        assert!(config.contains("'2xl': ['1.5rem', '2rem'],"));
        assert!(config.contains("spacing: {"));
    }
}
