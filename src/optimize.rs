//! Utility-class optimization engine.
//!
//! Deterministic rule passes over every `class="..."` attribute in a markup
//! fragment. The passes run in a fixed order and the whole engine is pure:
//! the same input always produces byte-identical output, and running the
//! engine on its own output is a fixpoint.
//!
//! Rule order per attribute:
//! 1. exact-duplicate removal (first occurrence wins)
//! 2. axis-redundancy: a general `p-N`/`m-N` makes `px-*`/`py-*`
//!    (`mx-*`/`my-*`) dead, so they are dropped
//! 3. category conflicts: within one category the last-declared token wins
//! 4. advisory suggestions - these never change the output

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::classes::{classify, is_axis_spacing, is_spacing, Category};

/// One resolved conflict: several tokens in the same category collapsed to
/// the last-declared one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConflictResolution {
    pub category: String,
    pub kept: String,
    pub dropped: Vec<String>,
}

/// Result of an optimization run. Both the rule engine and the parsed LLM
/// reply produce this exact shape; the formatter downstream does not know
/// which path filled it in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    /// The markup with every class attribute rewritten
    pub optimized_html: String,
    /// Tokens removed as duplicates or axis-redundant
    #[serde(default)]
    pub removed: Vec<String>,
    /// Category conflicts resolved by last-declared-wins
    #[serde(default)]
    pub conflicts: Vec<ConflictResolution>,
    /// Advisory notes that did not change the output
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Summary of what the run changed
    #[serde(default)]
    pub improvements: Vec<String>,
}

/// Options mirroring the tool's boolean flags.
#[derive(Debug, Clone, Copy)]
pub struct OptimizeOptions {
    pub remove_redundant: bool,
    pub merge_conflicts: bool,
    pub suggest_alternatives: bool,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self { remove_redundant: true, merge_conflicts: true, suggest_alternatives: true }
    }
}

fn class_attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Double-quoted attributes only; single quotes are rare in utility-class
    // markup and not worth the ambiguity
    RE.get_or_init(|| Regex::new(r#"class="([^"]*)""#).expect("class attribute regex"))
}

/// Run the optimization engine over a markup fragment.
pub fn optimize(html: &str, options: OptimizeOptions) -> Optimization {
    let mut removed = Vec::new();
    let mut conflicts = Vec::new();
    let mut suggestions = Vec::new();

    let optimized_html = class_attr_regex()
        .replace_all(html, |caps: &regex::Captures<'_>| {
            let tokens: Vec<&str> = caps[1].split_whitespace().collect();
            let kept = optimize_tokens(&tokens, options, &mut removed, &mut conflicts, &mut suggestions);
            format!(r#"class="{}""#, kept.join(" "))
        })
        .into_owned();

    let mut improvements = Vec::new();
    if !removed.is_empty() {
        improvements.push(format!("Removed {} redundant class(es)", removed.len()));
    }
    if !conflicts.is_empty() {
        improvements.push(format!(
            "Resolved {} conflicting declaration group(s) to the last-declared class",
            conflicts.len()
        ));
    }

    Optimization { optimized_html, removed, conflicts, suggestions, improvements }
}

/// Apply the rule passes to one attribute's token list, in order.
fn optimize_tokens(
    tokens: &[&str],
    options: OptimizeOptions,
    removed: &mut Vec<String>,
    conflicts: &mut Vec<ConflictResolution>,
    suggestions: &mut Vec<String>,
) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(tokens.len());

    // Pass 1: exact duplicates
    let mut seen = HashSet::new();
    for &token in tokens {
        if options.remove_redundant && !seen.insert(token) {
            removed.push(token.to_string());
            continue;
        }
        kept.push(token.to_string());
    }

    // Pass 2: axis-specific spacing shadowed by a general token
    if options.remove_redundant {
        for kind in ['p', 'm'] {
            if kept.iter().any(|t| is_spacing(t, kind)) {
                kept.retain(|t| {
                    if is_axis_spacing(t, kind) {
                        removed.push(t.clone());
                        false
                    } else {
                        true
                    }
                });
            }
        }
    }

    // Pass 3: last-declared wins within a category
    if options.merge_conflicts {
        resolve_conflicts(&mut kept, conflicts);
    }

    // Pass 4: advisory only
    if options.suggest_alternatives {
        collect_suggestions(&kept, suggestions);
    }

    kept
}

fn resolve_conflicts(kept: &mut Vec<String>, conflicts: &mut Vec<ConflictResolution>) {
    // Iterate categories in a fixed order so report output is stable
    const ORDER: &[Category] = &[
        Category::Margin,
        Category::Padding,
        Category::Width,
        Category::Height,
        Category::Display,
        Category::Position,
        Category::TextAlign,
        Category::TextColor,
        Category::FontSize,
        Category::FontWeight,
        Category::BorderRadius,
    ];

    for &category in ORDER {
        let member_indices: Vec<usize> = kept
            .iter()
            .enumerate()
            .filter(|(_, t)| classify(t) == Some(category))
            .map(|(i, _)| i)
            .collect();
        if member_indices.len() < 2 {
            continue;
        }

        // Last occurrence models "last declared wins"
        let winner_idx = member_indices[member_indices.len() - 1];
        let winner = kept[winner_idx].clone();
        let dropped: Vec<String> = member_indices[..member_indices.len() - 1]
            .iter()
            .map(|&i| kept[i].clone())
            .collect();

        let mut index = 0;
        kept.retain(|_| {
            let keep = !member_indices.contains(&index) || index == winner_idx;
            index += 1;
            keep
        });
        conflicts.push(ConflictResolution {
            category: category.name().to_string(),
            kept: winner,
            dropped,
        });
    }
}

fn collect_suggestions(tokens: &[String], suggestions: &mut Vec<String>) {
    let has = |needle: &str| tokens.iter().any(|t| t == needle);

    if has("flex") && has("flex-row") {
        push_unique(
            suggestions,
            "'flex-row' is the default direction; 'flex' alone is sufficient".to_string(),
        );
    }
    if has("block") && has("w-full") {
        push_unique(
            suggestions,
            "'w-full' on a block element is often redundant; block elements fill their container"
                .to_string(),
        );
    }
    if tokens.len() > 12 {
        push_unique(
            suggestions,
            format!(
                "{} classes on one element; consider extracting a component class",
                tokens.len()
            ),
        );
    }
}

fn push_unique(list: &mut Vec<String>, item: String) {
    if !list.contains(&item) {
        list.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Optimization {
        optimize(html, OptimizeOptions::default())
    }

    #[test]
    fn test_exact_duplicates_removed() {
        let result = run(r#"<div class="p-4 p-4 flex">x</div>"#);
        assert_eq!(result.optimized_html, r#"<div class="p-4 flex">x</div>"#);
        assert_eq!(result.removed, vec!["p-4"]);
    }

    #[test]
    fn test_axis_redundancy_dropped() {
        let result = run(r#"<div class="p-4 px-2 py-8">x</div>"#);
        assert_eq!(result.optimized_html, r#"<div class="p-4">x</div>"#);
        assert!(result.removed.contains(&"px-2".to_string()));
        assert!(result.removed.contains(&"py-8".to_string()));
    }

    #[test]
    fn test_margin_axis_redundancy() {
        let result = run(r#"<div class="m-2 mx-4">x</div>"#);
        assert_eq!(result.optimized_html, r#"<div class="m-2">x</div>"#);
        assert_eq!(result.removed, vec!["mx-4"]);
    }

    #[test]
    fn test_side_spacing_not_dropped() {
        // pt-2 is a side token, not an axis token; the rule leaves it alone
        let result = run(r#"<div class="p-4 pt-2">x</div>"#);
        assert_eq!(result.optimized_html, r#"<div class="p-4 pt-2">x</div>"#);
        assert!(result.removed.is_empty());
    }

    // Last-declared wins within a category, one conflict entry recorded
    #[test]
    fn test_text_align_last_wins() {
        let result = run(r#"<p class="text-left text-center text-right">x</p>"#);
        assert_eq!(result.optimized_html, r#"<p class="text-right">x</p>"#);
        assert_eq!(result.conflicts.len(), 1);
        let conflict = &result.conflicts[0];
        assert_eq!(conflict.category, "text-align");
        assert_eq!(conflict.kept, "text-right");
        assert_eq!(conflict.dropped, vec!["text-left", "text-center"]);
    }

    #[test]
    fn test_scenario_axis_and_color() {
        let html = r#"<div class="p-4 px-4 py-4 text-blue-500 text-blue-600">X</div>"#;
        let result = run(html);
        assert_eq!(result.optimized_html, r#"<div class="p-4 text-blue-600">X</div>"#);
        assert!(result.removed.contains(&"px-4".to_string()));
        assert!(result.removed.contains(&"py-4".to_string()));
        let color_conflicts: Vec<_> =
            result.conflicts.iter().filter(|c| c.category == "text-color").collect();
        assert_eq!(color_conflicts.len(), 1);
        assert_eq!(color_conflicts[0].kept, "text-blue-600");
    }

    // Fixpoint: optimizing the optimizer's own output changes nothing
    #[test]
    fn test_idempotent() {
        let first = run(r#"<div class="p-4 px-4 py-4 text-blue-500 text-blue-600 flex flex">X</div>"#);
        let second = run(&first.optimized_html);
        assert_eq!(second.optimized_html, first.optimized_html);
        assert!(second.removed.is_empty());
        assert!(second.conflicts.is_empty());
    }

    #[test]
    fn test_determinism() {
        let html = r#"<div class="m-1 m-2 w-4 w-8 text-sm text-lg">x</div>"#;
        let a = run(html);
        let b = run(html);
        assert_eq!(a.optimized_html, b.optimized_html);
        assert_eq!(a.removed, b.removed);
        assert_eq!(a.conflicts, b.conflicts);
    }

    #[test]
    fn test_multiple_attributes() {
        let html = r#"<div class="p-2 p-2"><span class="m-1 m-1">y</span></div>"#;
        let result = run(html);
        assert_eq!(result.optimized_html, r#"<div class="p-2"><span class="m-1">y</span></div>"#);
        assert_eq!(result.removed.len(), 2);
    }

    #[test]
    fn test_flags_off_leaves_tokens() {
        let options = OptimizeOptions {
            remove_redundant: false,
            merge_conflicts: false,
            suggest_alternatives: false,
        };
        let html = r#"<div class="p-4 p-4 text-left text-right">x</div>"#;
        let result = optimize(html, options);
        assert_eq!(result.optimized_html, html);
        assert!(result.removed.is_empty());
        assert!(result.conflicts.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_suggestions_do_not_mutate() {
        let result = run(r#"<div class="flex flex-row">x</div>"#);
        assert_eq!(result.optimized_html, r#"<div class="flex flex-row">x</div>"#);
        assert_eq!(result.suggestions.len(), 1);
    }

    #[test]
    fn test_no_class_attributes() {
        let result = run("<div>plain</div>");
        assert_eq!(result.optimized_html, "<div>plain</div>");
        assert!(result.removed.is_empty());
    }

    #[test]
    fn test_variant_prefixed_tokens_untouched() {
        let html = r#"<div class="text-blue-500 hover:text-blue-700 md:text-red-500">x</div>"#;
        let result = run(html);
        assert_eq!(result.optimized_html, html);
        assert!(result.conflicts.is_empty());
    }
}
