// MCP tool definitions and implementations

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;

use crate::protocol::{CallToolResult, ToolContent, ToolSchema};

mod portfolio;
mod search;

pub use portfolio::FundPortfolioTool;
pub use search::{
    SearchActorsTool, SearchCompaniesTool, SearchFundsTool, SearchNewsTool, SearchOperationsTool,
    SearchPeopleTool,
};

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments
    async fn execute(&self, arguments: Value) -> Result<CallToolResult>;
}

/// Tool registry for managing available tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let schema = tool.schema();
        self.tools.insert(schema.name.clone(), tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// List all tool schemas
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|t| t.schema()).collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a pipeline outcome into a tool result.
///
/// This is the single point where errors become data: every failure turns
/// into an `{"error": ...}` payload carried in the result text, never a
/// protocol-level error.
pub(crate) fn tool_response(outcome: Result<Value, cfnews_api::Error>) -> CallToolResult {
    match outcome {
        Ok(value) => CallToolResult {
            content: vec![ToolContent::text(pretty(&value))],
            is_error: None,
        },
        Err(e) => error_response(&e.to_string()),
    }
}

/// Builds an `{"error": ...}` tool result with the given message.
pub(crate) fn error_response(message: &str) -> CallToolResult {
    let payload = serde_json::json!({ "error": message });
    CallToolResult {
        content: vec![ToolContent::text(payload.to_string())],
        is_error: Some(true),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: Value, required: Vec<&str>) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_number(description: &str) -> Value {
    serde_json::json!({
        "type": "number",
        "description": description
    })
}

pub fn json_schema_integer(description: &str) -> Value {
    serde_json::json!({
        "type": "integer",
        "description": description
    })
}

pub fn json_schema_boolean(description: &str) -> Value {
    serde_json::json!({
        "type": "boolean",
        "description": description
    })
}

pub fn json_schema_string_array(description: &str) -> Value {
    serde_json::json!({
        "type": "array",
        "items": { "type": "string" },
        "description": description
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_wraps_the_message_as_data() {
        let result = error_response("Request failed with status 500: boom");
        assert_eq!(result.is_error, Some(true));
        let ToolContent::Text { text } = &result.content[0];
        let payload: Value = serde_json::from_str(text).unwrap();
        assert_eq!(payload["error"], "Request failed with status 500: boom");
    }

    #[test]
    fn tool_response_pretty_prints_success_values() {
        let result = tool_response(Ok(serde_json::json!({ "total": 3 })));
        assert!(result.is_error.is_none());
        let ToolContent::Text { text } = &result.content[0];
        assert!(text.contains("\"total\": 3"));
    }
}
