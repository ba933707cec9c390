//! Component markup templates.
//!
//! The manual counterpart to LLM component generation: a closed per-type
//! template table keyed by variant and size. A type outside the table is a
//! hard error - there is nothing sensible to degrade to, and callers must
//! hear about it rather than receive an empty component.

use thiserror::Error;

/// Error during manual component generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// No template table entry for the requested component type
    #[error("No component template found for type '{0}'. Available: button, card, form, navigation, modal, table")]
    UnknownType(String),
}

/// Target framework for generated markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    Html,
    React,
    Vue,
}

impl Framework {
    /// Parse with clamping: anything unrecognized renders as plain HTML.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "react" | "jsx" => Framework::React,
            "vue" => Framework::Vue,
            _ => Framework::Html,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Framework::Html => "html",
            Framework::React => "react",
            Framework::Vue => "vue",
        }
    }

    /// Language tag for the markdown code fence.
    pub fn fence(&self) -> &'static str {
        match self {
            Framework::Html => "html",
            Framework::React => "jsx",
            Framework::Vue => "vue",
        }
    }
}

/// Visual variant. Unrecognized values clamp to `Primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl Variant {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "secondary" => Variant::Secondary,
            "outline" => Variant::Outline,
            "ghost" => Variant::Ghost,
            _ => Variant::Primary,
        }
    }
}

/// Size step. Unrecognized values clamp to `Md`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Sm,
    Md,
    Lg,
}

impl Size {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "sm" | "small" => Size::Sm,
            "lg" | "large" => Size::Lg,
            _ => Size::Md,
        }
    }
}

/// Light or dark base palette. Unrecognized values clamp to `Light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

/// Fully resolved generation request.
#[derive(Debug, Clone)]
pub struct ComponentSpec {
    pub description: String,
    pub component_type: String,
    pub framework: Framework,
    pub variant: Variant,
    pub size: Size,
    pub theme: ThemeMode,
    pub responsive: bool,
    pub accessibility: bool,
}

/// Interactive-element classes per variant.
fn variant_classes(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "bg-blue-600 text-white hover:bg-blue-700",
        Variant::Secondary => "bg-gray-200 text-gray-900 hover:bg-gray-300",
        Variant::Outline => "border border-blue-600 text-blue-600 hover:bg-blue-50",
        Variant::Ghost => "text-blue-600 hover:bg-blue-50",
    }
}

/// Control sizing per size step.
fn control_size_classes(size: Size) -> &'static str {
    match size {
        Size::Sm => "px-3 py-1.5 text-sm",
        Size::Md => "px-4 py-2 text-base",
        Size::Lg => "px-6 py-3 text-lg",
    }
}

/// Container padding per size step.
fn container_size_classes(size: Size) -> &'static str {
    match size {
        Size::Sm => "p-4",
        Size::Md => "p-6",
        Size::Lg => "p-8",
    }
}

/// Surface colors per theme mode.
fn surface_classes(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "bg-white text-gray-900",
        ThemeMode::Dark => "bg-gray-900 text-gray-100",
    }
}

/// Generate component markup from the template table.
pub fn generate(spec: &ComponentSpec) -> Result<String, TemplateError> {
    let body = match spec.component_type.to_ascii_lowercase().as_str() {
        "button" => button_markup(spec),
        "card" => card_markup(spec),
        "form" => form_markup(spec),
        "navigation" | "nav" => navigation_markup(spec),
        "modal" => modal_markup(spec),
        "table" => table_markup(spec),
        other => return Err(TemplateError::UnknownType(other.to_string())),
    };

    Ok(wrap_in_framework(&body, spec.framework, &spec.component_type))
}

fn button_markup(spec: &ComponentSpec) -> String {
    let mut classes = format!(
        "{} {} rounded-lg font-medium transition-colors",
        variant_classes(spec.variant),
        control_size_classes(spec.size)
    );
    if spec.responsive {
        classes.push_str(" w-full sm:w-auto");
    }
    if spec.accessibility {
        classes.push_str(" focus-visible:outline focus-visible:outline-2");
    }

    let aria = if spec.accessibility {
        format!(r#" aria-label="{}""#, attr_text(&spec.description))
    } else {
        String::new()
    };

    format!(
        r#"<button type="button" class="{}"{}>
  {}
</button>"#,
        classes,
        aria,
        text(&spec.description)
    )
}

fn card_markup(spec: &ComponentSpec) -> String {
    let mut classes = format!(
        "{} {} rounded-xl shadow-md",
        surface_classes(spec.theme),
        container_size_classes(spec.size)
    );
    if spec.responsive {
        classes.push_str(" w-full md:max-w-md");
    }

    format!(
        r#"<div class="{}">
  <h3 class="text-lg font-semibold mb-2">Card title</h3>
  <p class="text-sm opacity-80">{}</p>
</div>"#,
        classes,
        text(&spec.description)
    )
}

fn form_markup(spec: &ComponentSpec) -> String {
    let label_for = if spec.accessibility { r#" for="field""# } else { "" };
    let field_id = if spec.accessibility { r#" id="field""# } else { "" };
    let width = if spec.responsive { " max-w-full sm:max-w-md" } else { "" };

    format!(
        r#"<form class="{surface} {pad} rounded-xl shadow-md space-y-4{width}">
  <div>
    <label{label_for} class="block text-sm font-medium mb-1">Label</label>
    <input{field_id} type="text" class="w-full border border-gray-300 rounded-lg px-3 py-2 focus:ring-2 focus:ring-blue-500" placeholder="{placeholder}">
  </div>
  <button type="submit" class="{variant} {control} rounded-lg font-medium transition-colors">
    Submit
  </button>
</form>"#,
        surface = surface_classes(spec.theme),
        pad = container_size_classes(spec.size),
        width = width,
        label_for = label_for,
        field_id = field_id,
        placeholder = attr_text(&spec.description),
        variant = variant_classes(spec.variant),
        control = control_size_classes(spec.size),
    )
}

fn navigation_markup(spec: &ComponentSpec) -> String {
    let aria = if spec.accessibility { r#" aria-label="Main navigation""# } else { "" };
    let collapse = if spec.responsive { " hidden sm:flex" } else { " flex" };

    format!(
        r##"<nav{aria} class="{surface} {pad} shadow-sm">
  <div class="flex items-center justify-between">
    <span class="font-semibold">Brand</span>
    <ul class="{collapse} gap-6">
      <li><a href="#" class="hover:text-blue-600 transition-colors">Home</a></li>
      <li><a href="#" class="hover:text-blue-600 transition-colors">About</a></li>
      <li><a href="#" class="hover:text-blue-600 transition-colors">Contact</a></li>
    </ul>
  </div>
</nav>"##,
        aria = aria,
        surface = surface_classes(spec.theme),
        pad = container_size_classes(spec.size),
        collapse = collapse.trim_start(),
    )
}

fn modal_markup(spec: &ComponentSpec) -> String {
    let dialog_attrs = if spec.accessibility {
        r#" role="dialog" aria-modal="true" aria-labelledby="modal-title""#
    } else {
        ""
    };
    let title_id = if spec.accessibility { r#" id="modal-title""# } else { "" };
    let width = if spec.responsive { "w-full max-w-sm sm:max-w-lg" } else { "max-w-lg" };

    format!(
        r#"<div class="fixed inset-0 bg-black/50 flex items-center justify-center">
  <div{dialog_attrs} class="{surface} {pad} rounded-xl shadow-xl {width}">
    <h2{title_id} class="text-xl font-semibold mb-4">Modal title</h2>
    <p class="text-sm opacity-80 mb-6">{body}</p>
    <div class="flex justify-end gap-3">
      <button type="button" class="{ghost} {control} rounded-lg transition-colors">Cancel</button>
      <button type="button" class="{variant} {control} rounded-lg font-medium transition-colors">Confirm</button>
    </div>
  </div>
</div>"#,
        dialog_attrs = dialog_attrs,
        surface = surface_classes(spec.theme),
        pad = container_size_classes(spec.size),
        width = width,
        title_id = title_id,
        body = text(&spec.description),
        ghost = variant_classes(Variant::Ghost),
        variant = variant_classes(spec.variant),
        control = control_size_classes(spec.size),
    )
}

fn table_markup(spec: &ComponentSpec) -> String {
    let caption = if spec.accessibility {
        format!("\n  <caption class=\"sr-only\">{}</caption>", text(&spec.description))
    } else {
        String::new()
    };
    let wrapper = if spec.responsive { "overflow-x-auto" } else { "" };

    format!(
        r#"<div class="{wrapper}">
<table class="{surface} min-w-full divide-y divide-gray-200 rounded-lg shadow-sm">{caption}
  <thead>
    <tr>
      <th scope="col" class="{pad} text-left text-sm font-semibold">Name</th>
      <th scope="col" class="{pad} text-left text-sm font-semibold">Status</th>
    </tr>
  </thead>
  <tbody class="divide-y divide-gray-100">
    <tr>
      <td class="{pad} text-sm">Example row</td>
      <td class="{pad} text-sm">Active</td>
    </tr>
  </tbody>
</table>
</div>"#,
        wrapper = wrapper,
        surface = surface_classes(spec.theme),
        caption = caption,
        pad = control_size_classes(spec.size),
    )
}

/// Wrap raw HTML in the target framework's component form.
///
/// Also used by layout generation, which shares the framework enum.
pub fn wrap_in_framework(body: &str, framework: Framework, name: &str) -> String {
    match framework {
        Framework::Html => body.to_string(),
        Framework::React => {
            let component = pascal_case(name);
            let jsx = body.replace("class=", "className=");
            let indented = indent(&jsx, 4);
            format!("export function {}() {{\n  return (\n{}\n  );\n}}", component, indented)
        }
        Framework::Vue => format!("<template>\n{}\n</template>", indent(body, 2)),
    }
}

fn pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn indent(s: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    s.lines()
        .map(|l| if l.is_empty() { l.to_string() } else { format!("{}{}", pad, l) })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Description as element text.
fn text(description: &str) -> String {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        "Generated component".to_string()
    } else {
        trimmed.replace('<', "&lt;").replace('>', "&gt;")
    }
}

/// Description as an attribute value.
fn attr_text(description: &str) -> String {
    text(description).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(component_type: &str) -> ComponentSpec {
        ComponentSpec {
            description: "Submit the signup form".to_string(),
            component_type: component_type.to_string(),
            framework: Framework::Html,
            variant: Variant::Primary,
            size: Size::Md,
            theme: ThemeMode::Light,
            responsive: true,
            accessibility: true,
        }
    }

    #[test]
    fn test_button_variant_and_size() {
        let markup = generate(&spec("button")).unwrap();
        assert!(markup.contains("bg-blue-600"));
        assert!(markup.contains("px-4 py-2"));
        assert!(markup.contains(r#"aria-label="Submit the signup form""#));
        assert!(markup.contains("sm:w-auto"));
    }

    #[test]
    fn test_button_secondary_sm() {
        let markup = generate(&ComponentSpec {
            variant: Variant::Secondary,
            size: Size::Sm,
            responsive: false,
            accessibility: false,
            ..spec("button")
        })
        .unwrap();
        assert!(markup.contains("bg-gray-200"));
        assert!(markup.contains("px-3 py-1.5"));
        assert!(!markup.contains("aria-label"));
        assert!(!markup.contains("sm:w-auto"));
    }

    #[test]
    fn test_unknown_type_is_hard_error() {
        let err = generate(&spec("custom")).unwrap_err();
        assert_eq!(err, TemplateError::UnknownType("custom".to_string()));
        assert!(err.to_string().contains("No component template found"));
    }

    #[test]
    fn test_react_wrapper() {
        let markup =
            generate(&ComponentSpec { framework: Framework::React, ..spec("button") }).unwrap();
        assert!(markup.starts_with("export function Button()"));
        assert!(markup.contains("className="));
        assert!(!markup.contains("class="));
    }

    #[test]
    fn test_vue_wrapper() {
        let markup =
            generate(&ComponentSpec { framework: Framework::Vue, ..spec("card") }).unwrap();
        assert!(markup.starts_with("<template>"));
        assert!(markup.trim_end().ends_with("</template>"));
    }

    #[test]
    fn test_dark_theme_card() {
        let markup =
            generate(&ComponentSpec { theme: ThemeMode::Dark, ..spec("card") }).unwrap();
        assert!(markup.contains("bg-gray-900"));
    }

    #[test]
    fn test_modal_accessibility_attrs() {
        let markup = generate(&spec("modal")).unwrap();
        assert!(markup.contains(r#"role="dialog""#));
        assert!(markup.contains("aria-modal"));
    }

    #[test]
    fn test_description_escaped() {
        let markup = generate(&ComponentSpec {
            description: r#"<script>"x"</script>"#.to_string(),
            ..spec("card")
        })
        .unwrap();
        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_parse_clamping() {
        assert_eq!(Framework::parse("svelte"), Framework::Html);
        assert_eq!(Variant::parse("weird"), Variant::Primary);
        assert_eq!(Size::parse("enormous"), Size::Md);
        assert_eq!(ThemeMode::parse("midnight"), ThemeMode::Light);
    }

    #[test]
    fn test_all_known_types_render() {
        for t in ["button", "card", "form", "navigation", "modal", "table"] {
            assert!(generate(&spec(t)).is_ok(), "type {} failed", t);
        }
    }
}
