//! MCP tool implementations.
//!
//! One module per tool: the schemars input struct, the prompt builder, and
//! the run function. Each run function owns the dual-path sequence - LLM
//! attempt, structured extraction, silent fallback to the rule engine -
//! and formats whichever result it got through one shared markdown
//! template, so a caller cannot tell the paths apart by shape.

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::completions::CompletionClient;
use crate::extract;

pub mod analyze_design;
pub mod convert_to_tailwind;
pub mod create_layout;
pub mod create_theme;
pub mod generate_component;
pub mod optimize_classes;
pub mod preview_component;
pub mod suggest_improvements;

fn default_true() -> bool {
    true
}

/// Attempt the LLM path for a tool expecting a structured JSON reply.
///
/// Returns `None` on every failure - unavailable, provider error,
/// unparsable reply, missing fields - because the caller's response is the
/// same for all of them: run the rule engine. Failures are logged so the
/// degradation is diagnosable.
pub(crate) async fn structured_completion<T: DeserializeOwned>(
    client: &CompletionClient,
    prompt: &str,
    tool: &str,
) -> Option<T> {
    if !client.available() {
        return None;
    }

    let text = match client.complete(prompt, client.model()).await {
        Ok(text) => text,
        Err(e) => {
            warn!("{}: completion failed, using rule engine: {}", tool, e);
            return None;
        }
    };

    match extract::typed(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("{}: completion unusable ({}), using rule engine", tool, e);
            None
        }
    }
}

/// Attempt the LLM path for a tool that consumes the reply verbatim
/// (markup generation). Code-fence markers are stripped; empty replies
/// count as failures.
pub(crate) async fn raw_completion(
    client: &CompletionClient,
    prompt: &str,
    tool: &str,
) -> Option<String> {
    if !client.available() {
        return None;
    }

    match client.complete(prompt, client.model()).await {
        Ok(text) => {
            let stripped = extract::strip_code_fences(&text);
            if stripped.is_empty() {
                debug!("{}: empty completion, using rule engine", tool);
                None
            } else {
                Some(stripped)
            }
        }
        Err(e) => {
            warn!("{}: completion failed, using rule engine: {}", tool, e);
            None
        }
    }
}

/// Render a list section of a markdown report, with a placeholder line
/// when the list is empty so section headers stay stable.
pub(crate) fn bullet_list(items: &[String], empty: &str) -> String {
    if items.is_empty() {
        format!("- {}", empty)
    } else {
        items.iter().map(|i| format!("- {}", i)).collect::<Vec<_>>().join("\n")
    }
}
