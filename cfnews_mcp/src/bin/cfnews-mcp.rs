// Standalone CFNEWS MCP server binary

use std::sync::Arc;

use anyhow::Result;
use cfnews_mcp::context::ApiContext;
use cfnews_mcp::server::McpServer;
use cfnews_mcp::tools::*;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries JSON-RPC, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Pick up CFNEWS_API_KEY from a local .env if present. The key is only
    // required once the first tool call constructs the client.
    let _ = dotenvy::dotenv();

    tracing::info!("CFNEWS MCP server starting");

    let context = Arc::new(ApiContext::new());

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(SearchOperationsTool::new(context.clone())));
    registry.register(Arc::new(SearchFundsTool::new(context.clone())));
    registry.register(Arc::new(SearchActorsTool::new(context.clone())));
    registry.register(Arc::new(SearchCompaniesTool::new(context.clone())));
    registry.register(Arc::new(SearchPeopleTool::new(context.clone())));
    registry.register(Arc::new(SearchNewsTool::new(context.clone())));
    registry.register(Arc::new(FundPortfolioTool::new(context)));

    tracing::info!("Registered {} tools", registry.list_schemas().len());

    McpServer::new(registry).run().await
}
