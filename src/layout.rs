//! Page layout generation.
//!
//! Purely combinatorial templating: a static (layout type × complexity)
//! table supplies default section lists and grid templates, a fixed switch
//! over known section names supplies per-section markup, and a generic
//! block covers everything else. Caller-provided sections override the
//! table's defaults verbatim.

use serde::{Deserialize, Serialize};

use crate::component::{wrap_in_framework, Framework};

/// Layout complexity step. Unrecognized values clamp to `Simple`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Simple,
    Standard,
    Detailed,
}

impl Complexity {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "medium" => Complexity::Standard,
            "detailed" | "complex" => Complexity::Detailed,
            _ => Complexity::Simple,
        }
    }
}

/// A generated layout. Identical shape from both execution paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Section names in render order
    pub sections: Vec<String>,
    /// Wrapper grid classes from the static table
    pub grid: String,
    /// Full markup for the layout
    pub markup: String,
}

/// Static (type × complexity) table: default sections and grid template.
const LAYOUT_TABLE: &[(&str, Complexity, &[&str], &str)] = &[
    (
        "landing",
        Complexity::Simple,
        &["header", "hero", "footer"],
        "grid grid-cols-1 gap-8",
    ),
    (
        "landing",
        Complexity::Standard,
        &["header", "hero", "features", "cta", "footer"],
        "grid grid-cols-1 gap-12",
    ),
    (
        "landing",
        Complexity::Detailed,
        &["header", "hero", "features", "testimonials", "pricing", "cta", "footer"],
        "grid grid-cols-1 gap-16",
    ),
    (
        "dashboard",
        Complexity::Simple,
        &["header", "main"],
        "grid grid-rows-[auto_1fr] min-h-screen",
    ),
    (
        "dashboard",
        Complexity::Standard,
        &["header", "sidebar", "main"],
        "grid grid-cols-[16rem_1fr] grid-rows-[auto_1fr] min-h-screen",
    ),
    (
        "dashboard",
        Complexity::Detailed,
        &["header", "sidebar", "main", "footer"],
        "grid grid-cols-[16rem_1fr] grid-rows-[auto_1fr_auto] min-h-screen",
    ),
    (
        "blog",
        Complexity::Simple,
        &["header", "main", "footer"],
        "grid grid-cols-1 gap-8 max-w-3xl mx-auto",
    ),
    (
        "blog",
        Complexity::Standard,
        &["header", "main", "sidebar", "footer"],
        "grid grid-cols-1 lg:grid-cols-[1fr_20rem] gap-8 max-w-6xl mx-auto",
    ),
    (
        "blog",
        Complexity::Detailed,
        &["header", "hero", "main", "sidebar", "footer"],
        "grid grid-cols-1 lg:grid-cols-[1fr_20rem] gap-12 max-w-6xl mx-auto",
    ),
];

/// Generic fallback when the type is not in the table.
const GENERIC_SECTIONS: &[&str] = &["header", "main", "footer"];

fn generic_grid(complexity: Complexity) -> &'static str {
    match complexity {
        Complexity::Simple => "grid grid-cols-1 gap-4",
        Complexity::Standard => "grid grid-cols-1 gap-8",
        Complexity::Detailed => "grid grid-cols-1 gap-12",
    }
}

/// Generate a layout.
///
/// `sections`, when non-empty, replaces the table's default section list;
/// the grid template still comes from the (type, complexity) entry.
pub fn generate(
    layout_type: &str,
    sections: &[String],
    complexity: Complexity,
    framework: Framework,
) -> Layout {
    let layout_type = layout_type.to_ascii_lowercase();

    let entry = LAYOUT_TABLE
        .iter()
        .find(|(t, c, _, _)| *t == layout_type && *c == complexity);

    let (default_sections, grid) = match entry {
        Some((_, _, sections, grid)) => (*sections, *grid),
        None => (GENERIC_SECTIONS, generic_grid(complexity)),
    };

    let sections: Vec<String> = if sections.is_empty() {
        default_sections.iter().map(|s| s.to_string()).collect()
    } else {
        sections.to_vec()
    };

    let body = render_markup(&sections, grid);
    let markup = wrap_in_framework(&body, framework, &format!("{}-layout", layout_type));

    Layout { sections, grid: grid.to_string(), markup }
}

fn render_markup(sections: &[String], grid: &str) -> String {
    let mut out = format!(r#"<div class="{}">"#, grid);
    for section in sections {
        out.push('\n');
        out.push_str(&section_markup(section));
    }
    out.push_str("\n</div>");
    out
}

/// Fixed switch over known section names; anything else renders the
/// generic section block.
fn section_markup(name: &str) -> String {
    match name.to_ascii_lowercase().as_str() {
        "header" => r##"  <header class="flex items-center justify-between px-6 py-4 border-b">
    <span class="font-semibold text-lg">Brand</span>
    <nav class="hidden sm:flex gap-6">
      <a href="#" class="hover:text-blue-600 transition-colors">Home</a>
      <a href="#" class="hover:text-blue-600 transition-colors">About</a>
    </nav>
  </header>"##
            .to_string(),
        "hero" => r#"  <section class="text-center py-20 px-6">
    <h1 class="text-4xl sm:text-5xl font-bold mb-4">Headline goes here</h1>
    <p class="text-lg opacity-80 max-w-2xl mx-auto mb-8">Supporting copy for the main value proposition.</p>
    <button type="button" class="bg-blue-600 text-white hover:bg-blue-700 px-6 py-3 rounded-lg font-medium transition-colors">Get started</button>
  </section>"#
            .to_string(),
        "sidebar" => r##"  <aside class="border-r px-4 py-6">
    <nav class="flex flex-col gap-2">
      <a href="#" class="px-3 py-2 rounded-lg hover:bg-gray-100 transition-colors">Overview</a>
      <a href="#" class="px-3 py-2 rounded-lg hover:bg-gray-100 transition-colors">Settings</a>
    </nav>
  </aside>"##
            .to_string(),
        "main" => r#"  <main class="px-6 py-8">
    <h2 class="text-2xl font-semibold mb-4">Main content</h2>
    <p class="opacity-80">Content goes here.</p>
  </main>"#
            .to_string(),
        "footer" => r#"  <footer class="px-6 py-8 border-t text-sm opacity-70">
    <p>&copy; 2025 Company. All rights reserved.</p>
  </footer>"#
            .to_string(),
        other => format!(
            r#"  <section class="px-6 py-12">
    <h2 class="text-2xl font-semibold mb-4 capitalize">{}</h2>
    <p class="opacity-80">Section content goes here.</p>
  </section>"#,
            other
        ),
    }
}
