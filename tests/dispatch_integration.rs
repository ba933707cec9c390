//! Tool dispatch integration tests.
//!
//! These drive the registry's dispatch path end-to-end - the same code the
//! MCP server's tools/call handler runs - without a protocol connection.
//! All tests run in manual-only mode (no credential), plus one scenario
//! with a credential pointing at a dead endpoint to verify the silent
//! provider-failure fallback.

use std::sync::Arc;

use rmcp::model::CallToolResult;
use serde_json::{json, Value};

use tailsmith::completions::{CompletionClient, ProviderConfig};
use tailsmith::mcp::registry::{descriptors, dispatch, JsonObject};

fn manual_client() -> CompletionClient {
    CompletionClient::new(ProviderConfig::disabled())
}

/// A client that believes it has a credential but cannot reach a provider.
/// Exercises the provider-failure path rather than the unavailable path.
fn dead_endpoint_client() -> CompletionClient {
    CompletionClient::new(ProviderConfig {
        api_key: Some("sk-test".to_string()),
        // Loopback port with no listener; connections are refused immediately
        base_url: "http://127.0.0.1:9".to_string(),
        model: "test-model".to_string(),
    })
}

fn args(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        _ => panic!("arguments must be a JSON object"),
    }
}

fn text_of(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.as_text().map(|t| t.text.clone()))
        .collect::<Vec<_>>()
        .join("")
}

#[test]
fn test_descriptors_cover_all_tools() {
    let names: Vec<String> = descriptors().iter().map(|t| t.name.to_string()).collect();
    for expected in [
        "generate_component",
        "optimize_classes",
        "create_theme",
        "analyze_design",
        "convert_to_tailwind",
        "suggest_improvements",
        "create_layout",
        "preview_component",
    ] {
        assert!(names.contains(&expected.to_string()), "missing tool {}", expected);
    }
}

// Scenario A: axis-redundant padding dropped, color conflict resolved last-wins
#[tokio::test]
async fn test_optimize_scenario() {
    let client = manual_client();
    let request = args(json!({
        "html": "<div class=\"p-4 px-4 py-4 text-blue-500 text-blue-600\">X</div>",
        "remove_redundant": true,
        "merge_conflicts": true
    }));

    let result = dispatch("optimize_classes", Some(&request), &client).await;
    let text = text_of(&result);

    assert_ne!(result.is_error, Some(true));
    assert!(text.contains("<div class=\"p-4 text-blue-600\">X</div>"), "{}", text);
    assert!(text.contains("`px-4`"));
    assert!(text.contains("`py-4`"));
    assert!(text.contains("text-color: kept `text-blue-600`"));
}

// Scenario B: padding and display convert, nothing left unconverted
#[tokio::test]
async fn test_convert_scenario() {
    let client = manual_client();
    let request = args(json!({
        "css": ".btn { padding: 16px; display: flex; }",
        "format": "css"
    }));

    let result = dispatch("convert_to_tailwind", Some(&request), &client).await;
    let text = text_of(&result);

    assert!(text.contains("padding: 16px → p-4"), "{}", text);
    assert!(text.contains("display: flex → flex"));
    assert!(text.contains("None - everything converted"));
}

// Scenario C: explicit sections pass through with the simple grid template
#[tokio::test]
async fn test_layout_scenario() {
    let client = manual_client();
    let request = args(json!({
        "type": "landing",
        "sections": ["header", "hero", "footer"],
        "complexity": "simple",
        "framework": "html"
    }));

    let result = dispatch("create_layout", Some(&request), &client).await;
    let text = text_of(&result);

    assert!(text.contains("1. header\n2. hero\n3. footer"), "{}", text);
    assert!(text.contains("**Grid:** `grid grid-cols-1 gap-8`"));
}

// Unknown tools produce an Error: response, not a protocol failure
#[tokio::test]
async fn test_unknown_tool_error_text() {
    let client = manual_client();
    let result = dispatch("nonexistent_tool", Some(&JsonObject::new()), &client).await;

    assert_eq!(result.is_error, Some(true));
    assert!(text_of(&result).starts_with("Error: Unknown tool"));
}

#[tokio::test]
async fn test_missing_arguments_error_text() {
    let client = manual_client();
    let result = dispatch("analyze_design", None, &client).await;
    assert!(text_of(&result).starts_with("Error: Missing arguments"));
}

// Manual-only mode is deterministic across calls for every tool
#[tokio::test]
async fn test_all_tools_deterministic_without_credential() {
    let client = manual_client();
    let requests: Vec<(&str, Value)> = vec![
        (
            "generate_component",
            json!({"description": "save button", "component_type": "button"}),
        ),
        ("optimize_classes", json!({"html": "<div class=\"p-2 p-2\">x</div>"})),
        ("create_theme", json!({"brand_color": "#16a34a"})),
        ("analyze_design", json!({"html": "<main class=\"p-4\">x</main>"})),
        ("convert_to_tailwind", json!({"css": ".a { margin: 8px; }"})),
        ("suggest_improvements", json!({"html": "<div class=\"p-4\">x</div>"})),
        ("create_layout", json!({"type": "dashboard", "complexity": "standard"})),
        ("preview_component", json!({"html": "<button>x</button>"})),
    ];

    for (name, request) in requests {
        let request = args(request);
        let first = text_of(&dispatch(name, Some(&request), &client).await);
        let second = text_of(&dispatch(name, Some(&request), &client).await);
        assert_eq!(first, second, "tool {} not deterministic", name);
        assert!(!first.starts_with("Error:"), "tool {} failed: {}", name, first);
    }
}

// Provider failure degrades silently to the rule engine: the output equals
// the manual-only output for the same input
#[tokio::test]
async fn test_provider_failure_falls_back_to_manual_output() {
    let manual = manual_client();
    let failing = dead_endpoint_client();
    let request = args(json!({
        "html": "<div class=\"p-4 px-4 text-left text-center\">x</div>"
    }));

    let manual_text = text_of(&dispatch("optimize_classes", Some(&request), &manual).await);
    let fallback_text = text_of(&dispatch("optimize_classes", Some(&request), &failing).await);

    assert_eq!(manual_text, fallback_text);
    assert!(!fallback_text.starts_with("Error:"));
}

// The template-miss hard error crosses the dispatch boundary as Error: text
#[tokio::test]
async fn test_template_miss_is_error_response() {
    let client = manual_client();
    let request = args(json!({
        "description": "3d carousel",
        "component_type": "carousel"
    }));

    let result = dispatch("generate_component", Some(&request), &client).await;
    let text = text_of(&result);

    assert_eq!(result.is_error, Some(true));
    assert!(text.starts_with("Error: No component template found"), "{}", text);
}

// Theme dispatch returns all sections the flags request
#[tokio::test]
async fn test_theme_dispatch_end_to_end() {
    let client = manual_client();
    let request = args(json!({
        "brand_color": "rgb(59, 130, 246)",
        "shade_count": 5,
        "include_config": true
    }));

    let result = dispatch("create_theme", Some(&request), &client).await;
    let text = text_of(&result);

    assert!(text.contains("## Primary Shades"));
    assert!(text.contains("`500`: `#3b82f6`"));
    assert!(text.contains("module.exports"));
}

// Arc-shared client works across concurrent dispatches without interference
#[tokio::test]
async fn test_concurrent_dispatch() {
    let client = Arc::new(manual_client());
    let request = args(json!({"html": "<div class=\"m-1 m-1\">x</div>"}));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = Arc::clone(&client);
            let request = request.clone();
            tokio::spawn(
                async move { text_of(&dispatch("optimize_classes", Some(&request), &client).await) },
            )
        })
        .collect();

    let mut outputs = Vec::new();
    for handle in handles {
        outputs.push(handle.await.expect("dispatch task panicked"));
    }
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
}
