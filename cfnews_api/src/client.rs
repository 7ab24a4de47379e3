//! HTTP client for the CFNEWS REST API.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use url::Url;

use crate::{
    query::{
        ActorFilter, CompanyFilter, Filter, FilterSpec, FundFilter, NewsFilter, OperationFilter,
        PeopleFilter, SortDirection,
    },
    Error,
};

const DEFAULT_BASE_URL: &str = "https://api.cfnews.net/v1";

/// Default sort column for operation searches: the deal date, so the most
/// recent operations come first.
const OPERATION_DATE_SORT: &str = "fiche_operation_operation_date_value_dt";

/// HTTP client for the CFNEWS API.
///
/// Wraps a single `reqwest::Client` built once at construction with bearer
/// auth and a 30-second timeout. `reqwest::Client` is internally
/// reference-counted and safe for concurrent in-flight requests, so one
/// instance serves the whole process.
pub struct Client {
    base_api_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client for the production CFNEWS API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e| {
            tracing::error!("API key is not a valid header value: {}", e);
            Error::MissingApiKey
        })?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;

        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Creates a client from the `CFNEWS_API_KEY` environment variable, with
    /// an optional `CFNEWS_BASE_URL` override.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var("CFNEWS_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingApiKey)?;
        match std::env::var("CFNEWS_BASE_URL") {
            Ok(base_url) => Self::with_base_url(&api_key, &base_url),
            Err(_) => Self::new(&api_key),
        }
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(&format!("{}/{}", self.base_api_url, path)).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    async fn get(&self, url: Url) -> Result<Value, Error> {
        tracing::debug!("GET {}", url);
        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
            Error::RequestFailed
        })
    }

    /// Fetches one page from a search endpoint.
    ///
    /// The encoded filter string rides inside the single `q` parameter, whose
    /// value is form-encoded again by the URL layer (the API expects this
    /// nested encoding). An empty spec omits `q` entirely.
    pub async fn search(
        &self,
        endpoint: &str,
        page: i64,
        spec: &FilterSpec,
        limit: Option<i64>,
    ) -> Result<Value, Error> {
        let mut url = self.get_url(endpoint)?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        if let Some(limit) = limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        let query = spec.to_query_string();
        if !query.is_empty() {
            url.query_pairs_mut().append_pair("q", &query);
        }
        self.get(url).await
    }

    /// Searches operations (deals), most recent first.
    pub async fn search_operations(
        &self,
        page: i64,
        filter: &OperationFilter,
    ) -> Result<Value, Error> {
        self.search_operations_sorted(page, filter, OPERATION_DATE_SORT, SortDirection::Descending)
            .await
    }

    /// Searches operations with an explicit sort column and direction.
    pub async fn search_operations_sorted(
        &self,
        page: i64,
        filter: &OperationFilter,
        sort_by: &str,
        direction: SortDirection,
    ) -> Result<Value, Error> {
        let mut spec = filter.to_spec();
        spec.insert("sort_attribute", sort_by);
        spec.insert("sort_type", direction.as_str());
        self.search("operation", page, &spec, None).await
    }

    /// Searches investment vehicles (funds).
    pub async fn search_funds(&self, page: i64, filter: &FundFilter) -> Result<Value, Error> {
        self.search("vehicule", page, &filter.to_spec(), None).await
    }

    /// Searches corporate-finance actors.
    pub async fn search_actors(&self, page: i64, filter: &ActorFilter) -> Result<Value, Error> {
        self.search("acteur", page, &filter.to_spec(), None).await
    }

    /// Searches companies.
    pub async fn search_companies(
        &self,
        page: i64,
        filter: &CompanyFilter,
    ) -> Result<Value, Error> {
        self.search("societe", page, &filter.to_spec(), None).await
    }

    /// Searches the people directory.
    pub async fn search_people(&self, page: i64, filter: &PeopleFilter) -> Result<Value, Error> {
        self.search("people", page, &filter.to_spec(), None).await
    }

    /// Searches news articles.
    pub async fn search_news(&self, page: i64, filter: &NewsFilter) -> Result<Value, Error> {
        self.search("actualite", page, &filter.to_spec(), None).await
    }

    /// Fetches an actor's current portfolio by numeric identifier.
    pub async fn actor_portfolio_current(&self, actor_id: i64) -> Result<Value, Error> {
        let url = self.get_url(&format!("acteur/portfolio_now/{}", actor_id))?;
        self.get(url).await
    }

    /// Fetches an actor's exited (divested) portfolio by numeric identifier.
    pub async fn actor_portfolio_exits(&self, actor_id: i64) -> Result<Value, Error> {
        let url = self.get_url(&format!("acteur/portfolio_sortie/{}", actor_id))?;
        self.get(url).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so multi-byte text cannot split mid-char.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
