//! CSS to utility-class conversion engine.
//!
//! Regex-driven, not a CSS parser: rule blocks are split on `{`/`}` and
//! declarations on `;`/`:`. The property table is closed - display, padding,
//! margin, color, background-color, and font-weight are the only covered
//! properties - and every declaration that misses the table lands in the
//! `unconverted` list. Nothing is silently dropped.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One converted rule block (or one `style` attribute in markup mode).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuleConversion {
    /// CSS selector, or element tag for inline-style conversion
    pub selector: String,
    /// Utility classes produced for this rule
    pub classes: Vec<String>,
    /// Human-readable `property: value → class` notes
    pub mappings: Vec<String>,
}

/// Result of a conversion run. Identical shape from the rule engine and from
/// a parsed LLM reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub rules: Vec<RuleConversion>,
    /// Declarations the closed table could not express
    #[serde(default)]
    pub unconverted: Vec<String>,
    /// Rewritten markup, present in markup mode only
    #[serde(default)]
    pub converted_html: Option<String>,
}

/// Tailwind spacing scale entries the numeric converter recognizes.
/// rem value → scale suffix. Values outside this table are unconvertible;
/// there is no rounding to the nearest step.
const SPACING_SCALE: &[(f32, &str)] = &[
    (0.25, "1"),
    (0.5, "2"),
    (0.75, "3"),
    (1.0, "4"),
    (1.25, "5"),
    (1.5, "6"),
    (2.0, "8"),
];

/// Closed color vocabulary for `color` / `background-color` values.
const COLOR_VALUES: &[(&str, &str)] = &[
    ("white", "white"),
    ("black", "black"),
    ("transparent", "transparent"),
    ("red", "red-500"),
    ("blue", "blue-500"),
    ("green", "green-500"),
    ("gray", "gray-500"),
    ("grey", "gray-500"),
    ("#fff", "white"),
    ("#ffffff", "white"),
    ("#000", "black"),
    ("#000000", "black"),
];

const DISPLAY_VALUES: &[(&str, &str)] = &[
    ("flex", "flex"),
    ("inline-flex", "inline-flex"),
    ("grid", "grid"),
    ("inline-grid", "inline-grid"),
    ("block", "block"),
    ("inline-block", "inline-block"),
    ("inline", "inline"),
    ("none", "hidden"),
];

const FONT_WEIGHT_VALUES: &[(&str, &str)] = &[
    ("bold", "font-bold"),
    ("normal", "font-normal"),
    ("300", "font-light"),
    ("400", "font-normal"),
    ("500", "font-medium"),
    ("600", "font-semibold"),
    ("700", "font-bold"),
    ("800", "font-extrabold"),
    ("900", "font-black"),
];

/// Convert a CSS stylesheet fragment.
pub fn convert_css(css: &str) -> Conversion {
    static BLOCK_RE: OnceLock<Regex> = OnceLock::new();
    let block_re =
        BLOCK_RE.get_or_init(|| Regex::new(r"([^{}]+)\{([^}]*)\}").expect("css block regex"));

    let mut rules = Vec::new();
    let mut unconverted = Vec::new();

    for caps in block_re.captures_iter(css) {
        let selector = caps[1].trim().to_string();
        if selector.is_empty() {
            continue;
        }
        let (classes, mappings) = convert_declarations(&caps[2], &mut unconverted);
        rules.push(RuleConversion { selector, classes, mappings });
    }

    Conversion { rules, unconverted, converted_html: None }
}

/// Convert inline `style="..."` attributes in a markup fragment.
///
/// Converted declarations become a `class` attribute; declarations the table
/// cannot express stay behind in the `style` attribute so the markup keeps
/// rendering the same.
pub fn convert_markup(html: &str) -> Conversion {
    static STYLE_RE: OnceLock<Regex> = OnceLock::new();
    let style_re =
        STYLE_RE.get_or_init(|| Regex::new(r#"style="([^"]*)""#).expect("style attribute regex"));

    let mut rules = Vec::new();
    let mut unconverted = Vec::new();

    let converted_html = style_re
        .replace_all(html, |caps: &regex::Captures<'_>| {
            let mut local_unconverted = Vec::new();
            let (classes, mappings) = convert_declarations(&caps[1], &mut local_unconverted);

            rules.push(RuleConversion {
                selector: "style attribute".to_string(),
                classes: classes.clone(),
                mappings,
            });

            let mut replacement = String::new();
            if !classes.is_empty() {
                replacement.push_str(&format!(r#"class="{}""#, classes.join(" ")));
            }
            if !local_unconverted.is_empty() {
                if !replacement.is_empty() {
                    replacement.push(' ');
                }
                replacement.push_str(&format!(r#"style="{}""#, local_unconverted.join("; ")));
            }
            unconverted.extend(local_unconverted);
            replacement
        })
        .into_owned();

    Conversion { rules, unconverted, converted_html: Some(converted_html) }
}

/// Convert one declaration list, splitting on `;` then the first `:`.
fn convert_declarations(body: &str, unconverted: &mut Vec<String>) -> (Vec<String>, Vec<String>) {
    let mut classes = Vec::new();
    let mut mappings = Vec::new();

    for declaration in body.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }
        let Some((property, value)) = declaration.split_once(':') else {
            unconverted.push(declaration.to_string());
            continue;
        };
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim().to_ascii_lowercase();

        match convert_declaration(&property, &value) {
            Some(class) => {
                mappings.push(format!("{}: {} → {}", property, value, class));
                classes.push(class);
            }
            None => unconverted.push(format!("{}: {}", property, value)),
        }
    }

    (classes, mappings)
}

/// The closed property→converter table.
fn convert_declaration(property: &str, value: &str) -> Option<String> {
    match property {
        "display" => lookup(DISPLAY_VALUES, value).map(str::to_string),
        "padding" => spacing_suffix(value).map(|s| format!("p-{}", s)),
        "margin" => spacing_suffix(value).map(|s| format!("m-{}", s)),
        "color" => lookup(COLOR_VALUES, value).map(|c| format!("text-{}", c)),
        "background-color" => lookup(COLOR_VALUES, value).map(|c| format!("bg-{}", c)),
        "font-weight" => lookup(FONT_WEIGHT_VALUES, value).map(str::to_string),
        _ => None,
    }
}

fn lookup<'t>(table: &[(&str, &'t str)], key: &str) -> Option<&'t str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Map a pixel or rem length onto the spacing scale.
///
/// Pixels divide by 16; only exact matches against the scale table convert.
fn spacing_suffix(value: &str) -> Option<&'static str> {
    let rem = if let Some(px) = value.strip_suffix("px") {
        px.trim().parse::<f32>().ok()? / 16.0
    } else if let Some(rem) = value.strip_suffix("rem") {
        rem.trim().parse::<f32>().ok()?
    } else if value == "0" {
        return Some("0");
    } else {
        return None;
    };

    SPACING_SCALE
        .iter()
        .find(|(step, _)| (step - rem).abs() < f32::EPSILON)
        .map(|(_, suffix)| *suffix)
}
