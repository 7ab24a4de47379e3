//! One search tool per CFNEWS entity family.
//!
//! Each tool deserializes its arguments, builds the family filter, runs the
//! query through the shared client, and shapes the page for the LLM. All
//! failures come back as `{"error": ...}` payloads.

use std::sync::Arc;

use anyhow::Result;
use cfnews_api::types::shape;
use cfnews_api::{
    ActorFilter, CompanyFilter, FundFilter, NewsFilter, OperationFilter, PeopleFilter,
};
use serde::Deserialize;
use serde_json::Value;

use crate::context::ApiContext;
use crate::protocol::{CallToolResult, ToolSchema};

use super::{
    error_response, json_schema_boolean, json_schema_integer, json_schema_number,
    json_schema_object, json_schema_string, json_schema_string_array, tool_response, Tool,
};

fn default_page() -> i64 {
    1
}
fn default_max_results() -> usize {
    10
}

// --- Operations ---

#[derive(Debug, Deserialize)]
struct SearchOperationsArgs {
    company_name: Option<String>,
    #[serde(default)]
    operation_types: Vec<String>,
    #[serde(default)]
    sectors: Vec<String>,
    date_from: Option<String>,
    date_to: Option<String>,
    amount_min: Option<f64>,
    amount_max: Option<f64>,
    #[serde(default = "default_page")]
    page: i64,
    #[serde(default = "default_max_results")]
    max_results: usize,
}

/// Searches deals (LBO, M&A, fundraisings, ...).
pub struct SearchOperationsTool {
    context: Arc<ApiContext>,
}

impl SearchOperationsTool {
    pub fn new(context: Arc<ApiContext>) -> Self {
        Self { context }
    }
}

#[async_trait::async_trait]
impl Tool for SearchOperationsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_operations".to_string(),
            description:
                "Search operations (deals: LBO, M&A, fundraisings...) in the CFNEWS database"
                    .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "company_name": json_schema_string("Target company name"),
                    "operation_types": json_schema_string_array(
                        "Deal types, e.g. [\"LBO\", \"Capital Développement\"]"
                    ),
                    "sectors": json_schema_string_array(
                        "Business sectors, e.g. [\"Biotechnologies\", \"Services Financiers\"]"
                    ),
                    "date_from": json_schema_string("Start date, DD/MM/YYYY"),
                    "date_to": json_schema_string("End date, DD/MM/YYYY"),
                    "amount_min": json_schema_number("Minimum deal amount in M€"),
                    "amount_max": json_schema_number("Maximum deal amount in M€"),
                    "page": json_schema_integer("Page number (default 1)"),
                    "max_results": json_schema_integer("Maximum results to show (default 10)"),
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: SearchOperationsArgs = match serde_json::from_value(arguments) {
            Ok(args) => args,
            Err(e) => return Ok(error_response(&format!("Invalid arguments: {}", e))),
        };
        let filter = OperationFilter {
            company_name: args.company_name,
            operation_types: args.operation_types,
            sectors: args.sectors,
            date_from: args.date_from,
            date_to: args.date_to,
            amount_min: args.amount_min,
            amount_max: args.amount_max,
        };
        let outcome: Result<Value, cfnews_api::Error> = async {
            let client = self.context.client().await?;
            let raw = client.search_operations(args.page, &filter).await?;
            Ok(shape(raw, args.max_results))
        }
        .await;
        Ok(tool_response(outcome))
    }
}

// --- Funds ---

#[derive(Debug, Deserialize)]
struct SearchFundsArgs {
    fund_name: Option<String>,
    management_company: Option<String>,
    #[serde(default)]
    fund_types: Vec<String>,
    #[serde(default)]
    segments: Vec<String>,
    #[serde(default)]
    status: Vec<String>,
    amount_raised_min: Option<f64>,
    amount_raised_max: Option<f64>,
    #[serde(default = "default_page")]
    page: i64,
    #[serde(default = "default_max_results")]
    max_results: usize,
}

/// Searches investment vehicles (funds).
pub struct SearchFundsTool {
    context: Arc<ApiContext>,
}

impl SearchFundsTool {
    pub fn new(context: Arc<ApiContext>) -> Self {
        Self { context }
    }
}

#[async_trait::async_trait]
impl Tool for SearchFundsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_funds".to_string(),
            description: "Search investment vehicles (funds) in the CFNEWS database".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "fund_name": json_schema_string("Vehicle name"),
                    "management_company": json_schema_string("Management company name"),
                    "fund_types": json_schema_string_array(
                        "Vehicle types, e.g. [\"FCPR\", \"FPCI\"]"
                    ),
                    "segments": json_schema_string_array(
                        "Segments, e.g. [\"LBO\", \"Capital développement\"]"
                    ),
                    "status": json_schema_string_array(
                        "Statuses, e.g. [\"Closé\", \"En cours de levée\"]"
                    ),
                    "amount_raised_min": json_schema_number("Minimum amount raised in M€"),
                    "amount_raised_max": json_schema_number("Maximum amount raised in M€"),
                    "page": json_schema_integer("Page number (default 1)"),
                    "max_results": json_schema_integer("Maximum results to show (default 10)"),
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: SearchFundsArgs = match serde_json::from_value(arguments) {
            Ok(args) => args,
            Err(e) => return Ok(error_response(&format!("Invalid arguments: {}", e))),
        };
        let filter = FundFilter {
            fund_name: args.fund_name,
            management_company: args.management_company,
            fund_types: args.fund_types,
            segments: args.segments,
            statuses: args.status,
            amount_raised_min: args.amount_raised_min,
            amount_raised_max: args.amount_raised_max,
        };
        let outcome: Result<Value, cfnews_api::Error> = async {
            let client = self.context.client().await?;
            let raw = client.search_funds(args.page, &filter).await?;
            Ok(shape(raw, args.max_results))
        }
        .await;
        Ok(tool_response(outcome))
    }
}

// --- Actors ---

#[derive(Debug, Deserialize)]
struct SearchActorsArgs {
    actor_name: Option<String>,
    #[serde(default)]
    actor_types: Vec<String>,
    #[serde(default)]
    nationalities: Vec<String>,
    #[serde(default)]
    regions: Vec<String>,
    is_tech_fund: Option<bool>,
    #[serde(default = "default_page")]
    page: i64,
    #[serde(default = "default_max_results")]
    max_results: usize,
}

/// Searches corporate-finance actors (funds, lawyers, bankers, advisors).
pub struct SearchActorsTool {
    context: Arc<ApiContext>,
}

impl SearchActorsTool {
    pub fn new(context: Arc<ApiContext>) -> Self {
        Self { context }
    }
}

#[async_trait::async_trait]
impl Tool for SearchActorsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_actors".to_string(),
            description:
                "Search corporate finance actors (funds, lawyers, bankers, advisors) in CFNEWS"
                    .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "actor_name": json_schema_string("Actor name"),
                    "actor_types": json_schema_string_array(
                        "Actor types, e.g. [\"Fonds d'investissement\", \"Avocats\"]"
                    ),
                    "nationalities": json_schema_string_array(
                        "ISO country codes: \"FR\", \"US\", \"GB\"..."
                    ),
                    "regions": json_schema_string_array(
                        "French regions, e.g. [\"Île-de-France\"]"
                    ),
                    "is_tech_fund": json_schema_boolean("Restrict to TECH funds"),
                    "page": json_schema_integer("Page number (default 1)"),
                    "max_results": json_schema_integer("Maximum results to show (default 10)"),
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: SearchActorsArgs = match serde_json::from_value(arguments) {
            Ok(args) => args,
            Err(e) => return Ok(error_response(&format!("Invalid arguments: {}", e))),
        };
        let filter = ActorFilter {
            actor_name: args.actor_name,
            actor_types: args.actor_types,
            nationalities: args.nationalities,
            regions: args.regions,
            is_tech_fund: args.is_tech_fund,
        };
        let outcome: Result<Value, cfnews_api::Error> = async {
            let client = self.context.client().await?;
            let raw = client.search_actors(args.page, &filter).await?;
            Ok(shape(raw, args.max_results))
        }
        .await;
        Ok(tool_response(outcome))
    }
}

// --- Companies ---

#[derive(Debug, Deserialize)]
struct SearchCompaniesArgs {
    company_name: Option<String>,
    #[serde(default)]
    company_types: Vec<String>,
    #[serde(default)]
    sectors: Vec<String>,
    #[serde(default)]
    regions: Vec<String>,
    revenue_min: Option<f64>,
    revenue_max: Option<f64>,
    is_tech: Option<bool>,
    #[serde(default = "default_page")]
    page: i64,
    #[serde(default = "default_max_results")]
    max_results: usize,
}

/// Searches companies.
pub struct SearchCompaniesTool {
    context: Arc<ApiContext>,
}

impl SearchCompaniesTool {
    pub fn new(context: Arc<ApiContext>) -> Self {
        Self { context }
    }
}

#[async_trait::async_trait]
impl Tool for SearchCompaniesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_companies".to_string(),
            description: "Search companies in the CFNEWS database".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "company_name": json_schema_string("Company name"),
                    "company_types": json_schema_string_array(
                        "Ownership types, e.g. [\"Familiale\", \"Sté sous LBO\", \"Cotée\"]"
                    ),
                    "sectors": json_schema_string_array("Business sectors"),
                    "regions": json_schema_string_array("French regions"),
                    "revenue_min": json_schema_number("Minimum revenue in M€"),
                    "revenue_max": json_schema_number("Maximum revenue in M€"),
                    "is_tech": json_schema_boolean("Restrict to TECH companies"),
                    "page": json_schema_integer("Page number (default 1)"),
                    "max_results": json_schema_integer("Maximum results to show (default 10)"),
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: SearchCompaniesArgs = match serde_json::from_value(arguments) {
            Ok(args) => args,
            Err(e) => return Ok(error_response(&format!("Invalid arguments: {}", e))),
        };
        let filter = CompanyFilter {
            company_name: args.company_name,
            company_types: args.company_types,
            sectors: args.sectors,
            regions: args.regions,
            revenue_min: args.revenue_min,
            revenue_max: args.revenue_max,
            is_tech: args.is_tech,
        };
        let outcome: Result<Value, cfnews_api::Error> = async {
            let client = self.context.client().await?;
            let raw = client.search_companies(args.page, &filter).await?;
            Ok(shape(raw, args.max_results))
        }
        .await;
        Ok(tool_response(outcome))
    }
}

// --- People ---

#[derive(Debug, Deserialize)]
struct SearchPeopleArgs {
    name: Option<String>,
    organization: Option<String>,
    #[serde(default)]
    titles: Vec<String>,
    #[serde(default)]
    organization_types: Vec<String>,
    #[serde(default)]
    regions: Vec<String>,
    #[serde(default)]
    executives_only: bool,
    #[serde(default)]
    with_email: bool,
    #[serde(default = "default_page")]
    page: i64,
    #[serde(default = "default_max_results")]
    max_results: usize,
}

/// Searches the people directory.
pub struct SearchPeopleTool {
    context: Arc<ApiContext>,
}

impl SearchPeopleTool {
    pub fn new(context: Arc<ApiContext>) -> Self {
        Self { context }
    }
}

#[async_trait::async_trait]
impl Tool for SearchPeopleTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_people".to_string(),
            description: "Search people in the CFNEWS directory".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "name": json_schema_string("First or last name"),
                    "organization": json_schema_string("Current organization"),
                    "titles": json_schema_string_array(
                        "Titles, e.g. [\"Directeur général\", \"Associé(e)\"]"
                    ),
                    "organization_types": json_schema_string_array(
                        "Organization types, e.g. [\"Fonds\", \"Avocats\"]"
                    ),
                    "regions": json_schema_string_array("French regions of the organization"),
                    "executives_only": json_schema_boolean(
                        "Restrict to executive committee members"
                    ),
                    "with_email": json_schema_boolean("Restrict to entries with an email"),
                    "page": json_schema_integer("Page number (default 1)"),
                    "max_results": json_schema_integer("Maximum results to show (default 10)"),
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: SearchPeopleArgs = match serde_json::from_value(arguments) {
            Ok(args) => args,
            Err(e) => return Ok(error_response(&format!("Invalid arguments: {}", e))),
        };
        let filter = PeopleFilter {
            name: args.name,
            organization: args.organization,
            titles: args.titles,
            organization_types: args.organization_types,
            regions: args.regions,
            executives_only: args.executives_only,
            with_email: args.with_email,
        };
        let outcome: Result<Value, cfnews_api::Error> = async {
            let client = self.context.client().await?;
            let raw = client.search_people(args.page, &filter).await?;
            Ok(shape(raw, args.max_results))
        }
        .await;
        Ok(tool_response(outcome))
    }
}

// --- News ---

#[derive(Debug, Deserialize)]
struct SearchNewsArgs {
    title: Option<String>,
    #[serde(default)]
    themes: Vec<String>,
    #[serde(default)]
    keywords: Vec<String>,
    date_from: Option<String>,
    date_to: Option<String>,
    #[serde(default = "default_page")]
    page: i64,
    #[serde(default = "default_max_results")]
    max_results: usize,
}

/// Searches news articles.
pub struct SearchNewsTool {
    context: Arc<ApiContext>,
}

impl SearchNewsTool {
    pub fn new(context: Arc<ApiContext>) -> Self {
        Self { context }
    }
}

#[async_trait::async_trait]
impl Tool for SearchNewsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_news".to_string(),
            description: "Search CFNEWS news articles".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "title": json_schema_string("Words in the article title"),
                    "themes": json_schema_string_array(
                        "Themes, e.g. [\"LBO\", \"Levée de Fonds\"]"
                    ),
                    "keywords": json_schema_string_array(
                        "Keywords, e.g. [\"capital investissement\", \"fintech\"]"
                    ),
                    "date_from": json_schema_string("Publication start date, YYYY-MM-DD"),
                    "date_to": json_schema_string("Publication end date, YYYY-MM-DD"),
                    "page": json_schema_integer("Page number (default 1)"),
                    "max_results": json_schema_integer("Maximum results to show (default 10)"),
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: SearchNewsArgs = match serde_json::from_value(arguments) {
            Ok(args) => args,
            Err(e) => return Ok(error_response(&format!("Invalid arguments: {}", e))),
        };
        let filter = NewsFilter {
            title: args.title,
            themes: args.themes,
            keywords: args.keywords,
            date_from: args.date_from,
            date_to: args.date_to,
        };
        let outcome: Result<Value, cfnews_api::Error> = async {
            let client = self.context.client().await?;
            let raw = client.search_news(args.page, &filter).await?;
            Ok(shape(raw, args.max_results))
        }
        .await;
        Ok(tool_response(outcome))
    }
}
