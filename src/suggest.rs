//! Improvement suggestions over existing markup.
//!
//! Builds on the same presence checks as the analyzer but answers a
//! different question: not "how does this score" but "what should change".
//! Each failing check contributes one suggestion with a static snippet
//! showing the fix. Purely advisory; the input markup is never modified.

use serde::{Deserialize, Serialize};

use crate::analyze::{analyze, Verdict};

/// One improvement suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Improvement {
    /// Which aspect of the design this targets
    pub area: String,
    /// What the check found
    pub finding: String,
    /// What to do about it
    pub suggestion: String,
    /// Example markup or classes showing the fix
    #[serde(default)]
    pub example: Option<String>,
}

/// The suggestion set for one markup fragment. Same shape from both paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvements {
    pub items: Vec<Improvement>,
}

/// Static fix snippet per check name.
fn example_for(area: &str) -> Option<String> {
    match area {
        "Semantic structure" => Some(
            r#"<header>...</header>
<main>...</main>
<footer>...</footer>"#
                .to_string(),
        ),
        "Accessibility" => Some(r#"<img src="chart.png" alt="Monthly revenue chart">"#.to_string()),
        "Responsive design" => {
            Some(r#"<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3">"#.to_string())
        }
        "Interactivity" => Some(
            r#"<button class="bg-blue-600 hover:bg-blue-700 focus:ring-2 transition-colors">"#
                .to_string(),
        ),
        "Class usage" => Some(r#"@apply px-4 py-2 rounded-lg font-medium;"#.to_string()),
        _ => None,
    }
}

/// Derive suggestions from the analyzer's failing checks, plus a few
/// suggestion-only heuristics the report does not cover.
pub fn suggest(html: &str) -> Improvements {
    let report = analyze(html);
    let mut items = Vec::new();

    for check in &report.checks {
        if check.verdict == Verdict::Good {
            continue;
        }
        let Some(recommendation) = &check.recommendation else { continue };
        items.push(Improvement {
            area: check.name.clone(),
            finding: check.detail.clone(),
            suggestion: recommendation.clone(),
            example: example_for(&check.name),
        });
    }

    // Suggestion-only heuristics
    if html.contains("style=") {
        items.push(Improvement {
            area: "Consistency".to_string(),
            finding: "Inline style attributes mixed with utility classes".to_string(),
            suggestion: "Replace inline styles with utility classes so all styling lives in one system"
                .to_string(),
            example: Some(r#"class="flex p-4" instead of style="display: flex; padding: 16px""#.to_string()),
        });
    }
    if html.contains("class=") && !html.contains("dark:") {
        items.push(Improvement {
            area: "Theming".to_string(),
            finding: "No dark-mode variants present".to_string(),
            suggestion: "Add dark: variants for background and text colors".to_string(),
            example: Some(r#"class="bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100""#.to_string()),
        });
    }

    Improvements { items }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failing_checks_become_suggestions() {
        let improvements = suggest(r#"<div class="p-4">plain</div>"#);
        let areas: Vec<&str> = improvements.items.iter().map(|i| i.area.as_str()).collect();
        assert!(areas.contains(&"Semantic structure"));
        assert!(areas.contains(&"Responsive design"));
    }

    #[test]
    fn test_inline_style_suggestion() {
        let improvements = suggest(r#"<div style="display: flex" class="p-4">x</div>"#);
        assert!(improvements.items.iter().any(|i| i.area == "Consistency"));
    }

    #[test]
    fn test_dark_mode_suggestion() {
        let with = suggest(r#"<div class="bg-white dark:bg-gray-900">x</div>"#);
        assert!(!with.items.iter().any(|i| i.area == "Theming"));

        let without = suggest(r#"<div class="bg-white">x</div>"#);
        assert!(without.items.iter().any(|i| i.area == "Theming"));
    }

    #[test]
    fn test_examples_attached() {
        let improvements = suggest("<div>bare</div>");
        let semantic =
            improvements.items.iter().find(|i| i.area == "Semantic structure").unwrap();
        assert!(semantic.example.as_deref().unwrap().contains("<main>"));
    }

    #[test]
    fn test_determinism() {
        let html = r#"<div class="p-4" style="color: red">x</div>"#;
        let a = suggest(html);
        let b = suggest(html);
        assert_eq!(a.items, b.items);
    }
}
