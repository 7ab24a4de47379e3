//! Portfolio lookup for a single fund.

use std::sync::Arc;

use anyhow::Result;
use serde::Deserialize;
use serde_json::Value;

use crate::context::ApiContext;
use crate::protocol::{CallToolResult, ToolSchema};

use super::{
    error_response, json_schema_integer, json_schema_object, json_schema_string, tool_response,
    Tool,
};

fn default_portfolio_type() -> String {
    "current".to_string()
}

#[derive(Debug, Deserialize)]
struct FundPortfolioArgs {
    fund_id: i64,
    #[serde(default = "default_portfolio_type")]
    portfolio_type: String,
}

/// Fetches the current or exited portfolio of an investment fund.
///
/// Portfolio responses are single objects, not paginated lists, so they are
/// returned whole without shaping.
pub struct FundPortfolioTool {
    context: Arc<ApiContext>,
}

impl FundPortfolioTool {
    pub fn new(context: Arc<ApiContext>) -> Self {
        Self { context }
    }
}

#[async_trait::async_trait]
impl Tool for FundPortfolioTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_fund_portfolio".to_string(),
            description: "Get the portfolio of an investment fund by its CFNEWS actor id"
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "fund_id": json_schema_integer(
                        "Fund identifier (found via search_actors)"
                    ),
                    "portfolio_type": json_schema_string(
                        "\"current\" for the live portfolio, \"exits\" for divested holdings"
                    ),
                }),
                vec!["fund_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: FundPortfolioArgs = match serde_json::from_value(arguments) {
            Ok(args) => args,
            Err(e) => return Ok(error_response(&format!("Invalid arguments: {}", e))),
        };
        if args.portfolio_type != "current" && args.portfolio_type != "exits" {
            return Ok(error_response(
                "portfolio_type must be 'current' or 'exits'",
            ));
        }
        let outcome: Result<Value, cfnews_api::Error> = async {
            let client = self.context.client().await?;
            if args.portfolio_type == "current" {
                client.actor_portfolio_current(args.fund_id).await
            } else {
                client.actor_portfolio_exits(args.fund_id).await
            }
        }
        .await;
        Ok(tool_response(outcome))
    }
}
