//! Tool registry and dispatch.
//!
//! A closed enum of tool kinds maps names to handlers and schemars-derived
//! input schemas. `dispatch` is the single error boundary: unknown names,
//! missing or malformed arguments, and every error a handler returns all
//! become a `CallToolResult` whose text starts with `Error:` - nothing
//! escapes to the transport layer. It takes the completion client and raw
//! arguments directly so tests can drive it without a protocol connection.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, Tool};
use serde_json::Value;

use super::tools;
use crate::completions::CompletionClient;

/// JSON object type used for tool arguments and schemas.
pub type JsonObject = serde_json::Map<String, Value>;

/// Every tool this server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    GenerateComponent,
    OptimizeClasses,
    CreateTheme,
    AnalyzeDesign,
    ConvertToTailwind,
    SuggestImprovements,
    CreateLayout,
    PreviewComponent,
}

impl ToolKind {
    pub const ALL: [ToolKind; 8] = [
        ToolKind::GenerateComponent,
        ToolKind::OptimizeClasses,
        ToolKind::CreateTheme,
        ToolKind::AnalyzeDesign,
        ToolKind::ConvertToTailwind,
        ToolKind::SuggestImprovements,
        ToolKind::CreateLayout,
        ToolKind::PreviewComponent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::GenerateComponent => "generate_component",
            ToolKind::OptimizeClasses => "optimize_classes",
            ToolKind::CreateTheme => "create_theme",
            ToolKind::AnalyzeDesign => "analyze_design",
            ToolKind::ConvertToTailwind => "convert_to_tailwind",
            ToolKind::SuggestImprovements => "suggest_improvements",
            ToolKind::CreateLayout => "create_layout",
            ToolKind::PreviewComponent => "preview_component",
        }
    }

    pub fn from_name(name: &str) -> Option<ToolKind> {
        ToolKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    fn description(&self) -> &'static str {
        match self {
            ToolKind::GenerateComponent => {
                "Generate a UI component (button, card, form, navigation, modal, table) styled with Tailwind CSS."
            }
            ToolKind::OptimizeClasses => {
                "Deduplicate and reconcile Tailwind classes in an HTML fragment, with a report of every change."
            }
            ToolKind::CreateTheme => {
                "Create a color theme from a brand color: primary shade ramp, gray ramp, typography and spacing scales."
            }
            ToolKind::AnalyzeDesign => {
                "Analyze markup for semantic structure, accessibility, responsiveness, interactivity, and class usage."
            }
            ToolKind::ConvertToTailwind => {
                "Convert CSS rules or inline styles to Tailwind utility classes, accounting for anything unconvertible."
            }
            ToolKind::SuggestImprovements => {
                "Suggest concrete improvements for existing markup with example fixes."
            }
            ToolKind::CreateLayout => {
                "Generate a page layout (landing, dashboard, blog) with a section structure and grid template."
            }
            ToolKind::PreviewComponent => {
                "Wrap a markup fragment in a standalone HTML preview document."
            }
        }
    }

    fn input_schema(&self) -> Arc<JsonObject> {
        match self {
            ToolKind::GenerateComponent => {
                schema_object::<tools::generate_component::GenerateComponentInput>()
            }
            ToolKind::OptimizeClasses => {
                schema_object::<tools::optimize_classes::OptimizeClassesInput>()
            }
            ToolKind::CreateTheme => schema_object::<tools::create_theme::CreateThemeInput>(),
            ToolKind::AnalyzeDesign => {
                schema_object::<tools::analyze_design::AnalyzeDesignInput>()
            }
            ToolKind::ConvertToTailwind => {
                schema_object::<tools::convert_to_tailwind::ConvertToTailwindInput>()
            }
            ToolKind::SuggestImprovements => {
                schema_object::<tools::suggest_improvements::SuggestImprovementsInput>()
            }
            ToolKind::CreateLayout => schema_object::<tools::create_layout::CreateLayoutInput>(),
            ToolKind::PreviewComponent => {
                schema_object::<tools::preview_component::PreviewComponentInput>()
            }
        }
    }

    pub fn descriptor(&self) -> Tool {
        Tool::new(self.name(), self.description(), self.input_schema())
    }
}

/// Convert a schemars derive into the JSON object rmcp expects.
fn schema_object<T: schemars::JsonSchema>() -> Arc<JsonObject> {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(map)) => Arc::new(map),
        _ => Arc::new(JsonObject::new()),
    }
}

/// Descriptors for every registered tool, in registration order.
pub fn descriptors() -> Vec<Tool> {
    ToolKind::ALL.iter().map(|kind| kind.descriptor()).collect()
}

/// Route one tools/call request. Never returns a protocol-level error.
pub async fn dispatch(
    name: &str,
    arguments: Option<&JsonObject>,
    client: &CompletionClient,
) -> CallToolResult {
    let Some(kind) = ToolKind::from_name(name) else {
        return error_result(format!("Unknown tool: {}", name));
    };
    let Some(arguments) = arguments else {
        return error_result(format!("Missing arguments for tool '{}'", name));
    };

    let args = Value::Object(arguments.clone());
    let outcome = invoke(kind, args, client).await;

    match outcome {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(message) => error_result(message),
    }
}

/// Deserialize the tool's input and run its handler.
async fn invoke(kind: ToolKind, args: Value, client: &CompletionClient) -> Result<String, String> {
    match kind {
        ToolKind::GenerateComponent => {
            tools::generate_component::run(parse_args(args)?, client).await
        }
        ToolKind::OptimizeClasses => tools::optimize_classes::run(parse_args(args)?, client).await,
        ToolKind::CreateTheme => tools::create_theme::run(parse_args(args)?, client).await,
        ToolKind::AnalyzeDesign => tools::analyze_design::run(parse_args(args)?, client).await,
        ToolKind::ConvertToTailwind => {
            tools::convert_to_tailwind::run(parse_args(args)?, client).await
        }
        ToolKind::SuggestImprovements => {
            tools::suggest_improvements::run(parse_args(args)?, client).await
        }
        ToolKind::CreateLayout => tools::create_layout::run(parse_args(args)?, client).await,
        ToolKind::PreviewComponent => {
            tools::preview_component::run(parse_args(args)?, client).await
        }
    }
}

fn parse_args<T: serde::de::DeserializeOwned>(args: Value) -> Result<T, String> {
    serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))
}

fn error_result(message: String) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {}", message))])
}
