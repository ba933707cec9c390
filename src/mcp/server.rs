//! Core MCP server implementation.

use std::sync::Arc;

use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler, ServiceExt};

use super::registry;
use crate::completions::CompletionClient;

/// The Tailsmith MCP Server
///
/// Exposes the generation and optimization tools over the Model Context
/// Protocol. The completion client is constructed once at startup and
/// injected; handlers share it read-only.
#[derive(Clone)]
pub struct TailsmithServer {
    client: Arc<CompletionClient>,
}

impl TailsmithServer {
    pub fn new(client: Arc<CompletionClient>) -> Self {
        Self { client }
    }
}

impl ServerHandler for TailsmithServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "tailsmith".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Tailsmith MCP server — generate, optimize, and analyze Tailwind-styled \
                 UI code. Use generate_component for new markup, optimize_classes to clean \
                 up class lists, convert_to_tailwind to migrate plain CSS, and create_theme \
                 for brand color ramps. Tools work with or without an LLM credential; \
                 without one they run deterministic rule engines."
                    .into(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult { tools: registry::descriptors(), next_cursor: None, meta: None })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(registry::dispatch(&request.name, request.arguments.as_ref(), &self.client).await)
    }
}

/// Run the MCP server on stdin/stdout
pub async fn run_server(client: Arc<CompletionClient>) -> Result<(), Box<dyn std::error::Error>> {
    let server = TailsmithServer::new(client);
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;
    Ok(())
}
