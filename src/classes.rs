//! Utility-class vocabulary tables.
//!
//! Shared by the optimizer, the analyzer, and the suggestion engine. The
//! tables are closed: a token that matches nothing is simply uncategorized
//! and passes through every rule untouched.

/// Category a utility token belongs to for conflict resolution.
///
/// Tokens in the same category target the same CSS concern, so more than
/// one of them on an element means the earlier ones are dead weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Margin,
    Padding,
    Width,
    Height,
    Display,
    Position,
    TextAlign,
    TextColor,
    FontSize,
    FontWeight,
    BorderRadius,
}

impl Category {
    /// Stable lowercase name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Margin => "margin",
            Category::Padding => "padding",
            Category::Width => "width",
            Category::Height => "height",
            Category::Display => "display",
            Category::Position => "position",
            Category::TextAlign => "text-align",
            Category::TextColor => "text-color",
            Category::FontSize => "font-size",
            Category::FontWeight => "font-weight",
            Category::BorderRadius => "border-radius",
        }
    }
}

const DISPLAY_VALUES: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "flow-root",
    "contents",
    "hidden",
];

const POSITION_VALUES: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const TEXT_ALIGN_SUFFIXES: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_SIZE_SUFFIXES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const FONT_WEIGHT_SUFFIXES: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

/// Classify a utility token into a conflict category.
///
/// Variant prefixes (`hover:`, `md:`, `dark:` ...) are not stripped: a
/// `hover:text-red-500` never conflicts with a base `text-blue-500`, which
/// matches how the cascade actually behaves.
pub fn classify(token: &str) -> Option<Category> {
    if token.contains(':') {
        return None;
    }

    if DISPLAY_VALUES.contains(&token) {
        return Some(Category::Display);
    }
    if POSITION_VALUES.contains(&token) {
        return Some(Category::Position);
    }

    if let Some(suffix) = token.strip_prefix("text-") {
        if TEXT_ALIGN_SUFFIXES.contains(&suffix) {
            return Some(Category::TextAlign);
        }
        if FONT_SIZE_SUFFIXES.contains(&suffix) {
            return Some(Category::FontSize);
        }
        return Some(Category::TextColor);
    }

    if let Some(suffix) = token.strip_prefix("font-") {
        if FONT_WEIGHT_SUFFIXES.contains(&suffix) {
            return Some(Category::FontWeight);
        }
        return None;
    }

    if token == "rounded" || token.starts_with("rounded-") {
        return Some(Category::BorderRadius);
    }

    if is_spacing(token, 'm') {
        return Some(Category::Margin);
    }
    if is_spacing(token, 'p') {
        return Some(Category::Padding);
    }
    if token.starts_with("w-") {
        return Some(Category::Width);
    }
    if token.starts_with("h-") {
        return Some(Category::Height);
    }

    None
}

/// True for the general spacing form (`p-4`, `m-0.5`), not the axis or side
/// forms (`px-4`, `mt-2`).
pub fn is_spacing(token: &str, kind: char) -> bool {
    let mut chars = token.chars();
    chars.next() == Some(kind) && chars.next() == Some('-') && !token[2..].is_empty()
}

/// True for an axis-specific spacing token of `kind` (`px-4`, `my-2`).
pub fn is_axis_spacing(token: &str, kind: char) -> bool {
    let mut chars = token.chars();
    if chars.next() != Some(kind) {
        return false;
    }
    matches!(chars.next(), Some('x') | Some('y')) && chars.next() == Some('-')
}

/// Responsive breakpoint variant prefixes.
pub const BREAKPOINT_PREFIXES: &[&str] = &["sm:", "md:", "lg:", "xl:", "2xl:"];

/// Interaction / motion variant markers checked by the analyzer.
pub const INTERACTION_MARKERS: &[&str] = &["hover:", "focus:", "active:", "transition", "duration-"];
