//! MCP server exposing CFNEWS search tools over JSON-RPC 2.0 on stdio.

pub mod context;
pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
