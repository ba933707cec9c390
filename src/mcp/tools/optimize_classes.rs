//! optimize_classes tool - deduplicate and reconcile utility classes.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{bullet_list, default_true, structured_completion};
use crate::completions::CompletionClient;
use crate::optimize::{optimize, Optimization, OptimizeOptions};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct OptimizeClassesInput {
    /// HTML fragment whose class attributes should be optimized.
    pub html: String,

    /// Remove duplicate and redundant classes. Default: true.
    #[serde(default = "default_true")]
    pub remove_redundant: bool,

    /// Resolve conflicting classes in the same category (last declared wins). Default: true.
    #[serde(default = "default_true")]
    pub merge_conflicts: bool,

    /// Include advisory suggestions that do not change the markup. Default: true.
    #[serde(default = "default_true")]
    pub suggest_alternatives: bool,
}

fn prompt(input: &OptimizeClassesInput) -> String {
    format!(
        r#"Optimize the Tailwind CSS classes in this HTML fragment.
Remove redundant classes: {remove}. Merge conflicting classes: {merge}. Suggest alternatives: {suggest}.

HTML:
{html}

Respond with a single JSON object:
{{"optimizedHtml": "...", "removed": ["..."], "conflicts": [{{"category": "...", "kept": "...", "dropped": ["..."]}}], "suggestions": ["..."], "improvements": ["..."]}}"#,
        remove = input.remove_redundant,
        merge = input.merge_conflicts,
        suggest = input.suggest_alternatives,
        html = input.html,
    )
}

pub async fn run(
    input: OptimizeClassesInput,
    client: &CompletionClient,
) -> Result<String, String> {
    let result: Optimization =
        match structured_completion(client, &prompt(&input), "optimize_classes").await {
            Some(result) => result,
            None => {
                let options = OptimizeOptions {
                    remove_redundant: input.remove_redundant,
                    merge_conflicts: input.merge_conflicts,
                    suggest_alternatives: input.suggest_alternatives,
                };
                optimize(&input.html, options)
            }
        };

    Ok(format_report(&result))
}

fn format_report(result: &Optimization) -> String {
    let conflicts: Vec<String> = result
        .conflicts
        .iter()
        .map(|c| format!("{}: kept `{}`, dropped {}", c.category, c.kept, backtick_join(&c.dropped)))
        .collect();
    let removed: Vec<String> = result.removed.iter().map(|r| format!("`{}`", r)).collect();

    format!(
        r#"# Optimized Classes

```html
{html}
```

## Removed Classes
{removed}

## Resolved Conflicts
{conflicts}

## Suggestions
{suggestions}

## Improvements
{improvements}"#,
        html = result.optimized_html,
        removed = bullet_list(&removed, "None - no redundant classes found"),
        conflicts = bullet_list(&conflicts, "None - no conflicting classes found"),
        suggestions = bullet_list(&result.suggestions, "None"),
        improvements = bullet_list(&result.improvements, "The markup was already clean"),
    )
}

fn backtick_join(items: &[String]) -> String {
    items.iter().map(|i| format!("`{}`", i)).collect::<Vec<_>>().join(", ")
}
