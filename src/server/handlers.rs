//! MCP tool handlers for the cédula server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::error::ServiceError;
use crate::services::CedulaService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes cédula validation tools.
#[derive(Clone)]
pub struct CedulaMcpServer {
    service: Arc<dyn CedulaService>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for CedulaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "cedula-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for Ecuadorian national ID (cédula) validation - checks length, digits, province code, third digit and check digit, and resolves the issuing province.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct CedulaParams {
    /// Candidate ID. Any JSON type is accepted; non-strings are rejected
    /// with NOT_A_STRING.
    cedula: serde_json::Value,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CedulaBatchParams {
    cedulas: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ProvinceCodeParams {
    code: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn service_error_to_mcp(e: ServiceError) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &impl serde::Serialize) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

// Tool router implementation
#[tool_router]
impl CedulaMcpServer {
    /// Create a new cédula MCP server.
    pub fn new(service: Arc<dyn CedulaService>) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Validate a single cédula.
    #[tool(
        description = "Validate an Ecuadorian national ID (cédula). Returns whether it is valid, the issuing province on success, or a reason code (NOT_A_STRING, INVALID_LENGTH, NON_NUMERIC, INVALID_PROVINCE, INVALID_THIRD_DIGIT, CHECK_DIGIT_MISMATCH) and a localized message on failure."
    )]
    async fn validate_cedula(
        &self,
        params: Parameters<CedulaParams>,
    ) -> Result<CallToolResult, McpError> {
        let report = self.service.validate(&params.0.cedula);
        json_result(&report)
    }

    /// Boolean-only validation.
    #[tool(description = "Check whether a cédula is valid. Returns only a boolean.")]
    async fn is_valid_cedula(
        &self,
        params: Parameters<CedulaParams>,
    ) -> Result<CallToolResult, McpError> {
        let valid = self.service.is_valid(&params.0.cedula);
        json_result(&serde_json::json!({ "valid": valid }))
    }

    /// Validate several cédulas at once.
    #[tool(
        description = "Validate a list of cédulas. Results are returned in input order together with valid/invalid counts."
    )]
    async fn validate_cedula_batch(
        &self,
        params: Parameters<CedulaBatchParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: validate_cedula_batch called");
        tracing::debug!("Parameters: batch_size={}", params.cedulas.len());

        let report = self
            .service
            .validate_batch(&params.cedulas)
            .map_err(|e| {
                tracing::error!("Batch validation failed: {}", e);
                service_error_to_mcp(e)
            })?;

        json_result(&report)
    }

    /// Resolve a province code to its name.
    #[tool(
        description = "Get the province name for a two-digit cédula prefix (01-24, or 30 for Ecuadorians abroad)"
    )]
    async fn get_province_name(
        &self,
        params: Parameters<ProvinceCodeParams>,
    ) -> Result<CallToolResult, McpError> {
        let lookup = self.service.province_name(&params.0.code);
        json_result(&lookup)
    }

    /// List every province code.
    #[tool(description = "List all valid province codes and names, 01 through 24 followed by 30")]
    async fn list_provinces(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.service.provinces())
    }

    /// Report validation counters.
    #[tool(
        description = "Get validation counters for this server: totals, accepted, and rejections by reason"
    )]
    async fn get_validation_metrics(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.service.metrics().summary())
    }
}
