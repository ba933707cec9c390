//! Standalone HTML preview documents.
//!
//! Wraps a markup fragment in a complete page that renders on its own: CDN
//! script tag, viewport meta, optional dark-mode class. The manual path
//! wraps the caller's markup verbatim; the LLM path may restyle the
//! fragment first, but the document shell is always built here so both
//! paths produce the same envelope.

use crate::component::ThemeMode;

/// Build a self-contained preview document around a markup fragment.
pub fn document(markup: &str, theme: ThemeMode, title: &str) -> String {
    let html_class = match theme {
        ThemeMode::Light => "",
        ThemeMode::Dark => r#" class="dark""#,
    };
    let body_class = match theme {
        ThemeMode::Light => "bg-gray-50 text-gray-900",
        ThemeMode::Dark => "bg-gray-950 text-gray-100",
    };
    let title = if title.trim().is_empty() { "Component preview" } else { title.trim() };

    format!(
        r#"<!DOCTYPE html>
<html lang="en"{html_class}>
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <script src="https://cdn.tailwindcss.com"></script>
  <script>tailwind.config = {{ darkMode: 'class' }};</script>
</head>
<body class="{body_class} min-h-screen flex items-center justify-center p-8">
{markup}
</body>
</html>"#,
        html_class = html_class,
        title = title,
        body_class = body_class,
        markup = markup,
    )
}
