//! JSON-RPC 2.0 server loop over stdio.

use anyhow::Result;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::protocol::{
    CallToolParams, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult,
};
use crate::tools::ToolRegistry;

/// MCP server: dispatches JSON-RPC requests to the registered tools.
pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Reads newline-delimited JSON-RPC requests from stdin and writes
    /// responses to stdout until EOF.
    pub async fn run(&self) -> Result<()> {
        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(stdin).lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(request) => request,
                Err(e) => {
                    tracing::warn!("Failed to parse request: {}", e);
                    let response =
                        JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error());
                    write_response(&mut stdout, &response).await?;
                    continue;
                }
            };

            // Notifications (no id) get no response.
            let Some(id) = request.id.clone() else {
                tracing::debug!("Notification: {}", request.method);
                continue;
            };

            let response = self.handle(&request, id).await;
            write_response(&mut stdout, &response).await?;
        }
        Ok(())
    }

    async fn handle(&self, request: &JsonRpcRequest, id: Value) -> JsonRpcResponse {
        tracing::debug!("Handling method: {}", request.method);
        match request.method.as_str() {
            "initialize" => match serde_json::to_value(InitializeResult::new()) {
                Ok(result) => JsonRpcResponse::success(id, result),
                Err(e) => JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string())),
            },
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => {
                let result = ListToolsResult {
                    tools: self.registry.list_schemas(),
                };
                match serde_json::to_value(result) {
                    Ok(result) => JsonRpcResponse::success(id, result),
                    Err(e) => {
                        JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string()))
                    }
                }
            }
            "tools/call" => self.call_tool(request.params.clone(), id).await,
            method => JsonRpcResponse::error(id, JsonRpcError::method_not_found(method)),
        }
    }

    async fn call_tool(&self, params: Option<Value>, id: Value) -> JsonRpcResponse {
        let params: CallToolParams = match params.map(serde_json::from_value).transpose() {
            Ok(Some(params)) => params,
            _ => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params("Missing or malformed tool call parameters"),
                )
            }
        };
        let Some(tool) = self.registry.get(&params.name) else {
            return JsonRpcResponse::error(id, JsonRpcError::method_not_found(&params.name));
        };

        match tool.execute(params.arguments).await {
            Ok(result) => match serde_json::to_value(result) {
                Ok(result) => JsonRpcResponse::success(id, result),
                Err(e) => JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string())),
            },
            Err(e) => {
                tracing::error!("Tool {} failed: {}", params.name, e);
                JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string()))
            }
        }
    }
}

async fn write_response<W>(writer: &mut W, response: &JsonRpcResponse) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let serialized = serde_json::to_string(response)?;
    writer.write_all(serialized.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::protocol::{CallToolResult, ToolContent, ToolSchema};
    use crate::tools::Tool;

    struct EchoTool;

    #[async_trait::async_trait]
    impl Tool for EchoTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: "echo".to_string(),
                description: "Echoes its arguments".to_string(),
                input_schema: serde_json::json!({ "type": "object" }),
            }
        }

        async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
            Ok(CallToolResult {
                content: vec![ToolContent::text(arguments.to_string())],
                is_error: None,
            })
        }
    }

    fn server_with_echo() -> McpServer {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));
        McpServer::new(registry)
    }

    fn request(method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(serde_json::json!(1)),
            method: method.to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn initialize_reports_tool_capability() {
        let server = server_with_echo();
        let response = server
            .handle(&request("initialize", None), serde_json::json!(1))
            .await;
        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], "cfnews");
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn tools_list_returns_registered_schemas() {
        let server = server_with_echo();
        let response = server
            .handle(&request("tools/list", None), serde_json::json!(1))
            .await;
        let result = response.result.unwrap();
        assert_eq!(result["tools"][0]["name"], "echo");
    }

    #[tokio::test]
    async fn unknown_method_is_rejected() {
        let server = server_with_echo();
        let response = server
            .handle(&request("resources/list", None), serde_json::json!(1))
            .await;
        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn unknown_tool_is_rejected() {
        let server = server_with_echo();
        let params = serde_json::json!({ "name": "nope", "arguments": {} });
        let response = server
            .handle(&request("tools/call", Some(params)), serde_json::json!(1))
            .await;
        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn tool_call_round_trips_content() {
        let server = server_with_echo();
        let params = serde_json::json!({ "name": "echo", "arguments": { "x": 1 } });
        let response = server
            .handle(&request("tools/call", Some(params)), serde_json::json!(1))
            .await;
        let result = response.result.unwrap();
        assert_eq!(result["content"][0]["type"], "text");
        assert!(result["content"][0]["text"]
            .as_str()
            .unwrap()
            .contains("\"x\":1"));
    }
}
