//! search_wikipedia tool: encyclopedia summary lookup
//!
//! Requests the page summary for an underscore-joined, capitalized title.
//! On a not-found response, up to three alternate spellings are tried before
//! giving up. Every failure (HTTP status, timeout, transport) becomes a
//! `success: false` result.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use toolchat_domain::tool::{
    category::ToolCategory,
    entities::{ToolCall, ToolDefinition, ToolParameter},
    names::SEARCH_WIKIPEDIA,
    value_objects::{ToolError, ToolResult},
};
use toolchat_domain::util::{ellipsize, title_case};
use tracing::debug;

const LABEL: &str = "Wikipedia 📚";

/// Settings for the summary endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct EncyclopediaSettings {
    /// Summary endpoint; the page title is appended as the last path segment
    pub base_url: String,
    /// Client identification header (required by the endpoint)
    pub user_agent: String,
    pub timeout: Duration,
    /// Longer extracts are cut and suffixed with `...`
    pub max_summary_chars: usize,
}

impl Default for EncyclopediaSettings {
    fn default() -> Self {
        Self {
            base_url: "https://en.wikipedia.org/api/rest_v1/page/summary".to_string(),
            user_agent: concat!(
                "toolchat/",
                env!("CARGO_PKG_VERSION"),
                " (https://github.com/toolchat/toolchat)"
            )
            .to_string(),
            timeout: Duration::from_secs(10),
            max_summary_chars: 500,
        }
    }
}

#[derive(Error, Debug)]
pub enum EncyclopediaError {
    #[error("invalid encyclopedia base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Subset of the summary payload we read.
#[derive(Debug, Clone, Default, Deserialize)]
struct PageSummary {
    #[serde(default)]
    extract: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

impl PageSummary {
    fn is_disambiguation(&self) -> bool {
        self.kind.as_deref() == Some("disambiguation")
    }
}

/// Outcome of a single summary request.
enum Fetch {
    Found(PageSummary),
    NotFound,
    Status(u16),
}

pub fn search_wikipedia_definition() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_WIKIPEDIA,
        "Search Wikipedia for information",
        ToolCategory::Information,
    )
    .with_parameter(ToolParameter::new("query", "Search query", true))
}

/// HTTP client for the encyclopedia summary endpoint.
#[derive(Debug, Clone)]
pub struct EncyclopediaClient {
    http: reqwest::Client,
    base_url: reqwest::Url,
    max_summary_chars: usize,
}

impl EncyclopediaClient {
    pub fn new(settings: &EncyclopediaSettings) -> Result<Self, EncyclopediaError> {
        let base_url = reqwest::Url::parse(&settings.base_url)
            .ok()
            .filter(|u| !u.cannot_be_a_base())
            .ok_or_else(|| EncyclopediaError::InvalidBaseUrl(settings.base_url.clone()))?;

        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            base_url,
            max_summary_chars: settings.max_summary_chars,
        })
    }

    /// Execute the search_wikipedia tool.
    pub async fn execute(&self, call: &ToolCall) -> ToolResult {
        let query = match call.require_string("query") {
            Ok(q) if !q.trim().is_empty() => q.trim(),
            Ok(_) => return ToolResult::failure(LABEL, "", "Query must not be empty"),
            Err(e) => return ToolResult::from_error(LABEL, "", &e),
        };

        match self.lookup(query).await {
            Ok(result) => result,
            Err(e) if e.is_timeout() => ToolResult::from_error(
                LABEL,
                query,
                &ToolError::timeout("Wikipedia request timed out. Please try again."),
            ),
            Err(e) => ToolResult::from_error(
                LABEL,
                query,
                &ToolError::execution_failed(format!("Search error: {}", e)),
            ),
        }
    }

    async fn lookup(&self, query: &str) -> Result<ToolResult, reqwest::Error> {
        match self.fetch(&primary_title(query)).await? {
            Fetch::Found(summary) => Ok(interpret_summary(&summary, query, self.max_summary_chars)),
            Fetch::Status(status) => Ok(ToolResult::from_error(
                LABEL,
                query,
                &ToolError::execution_failed(format!("Wikipedia returned error {}", status)),
            )),
            Fetch::NotFound => {
                for title in alternate_titles(query) {
                    let Fetch::Found(summary) = self.fetch(&title).await? else {
                        continue;
                    };
                    if summary.is_disambiguation() || summary.extract.is_empty() {
                        debug!(title = %title, "Skipping alternate title");
                        continue;
                    }
                    return Ok(ToolResult::success(
                        LABEL,
                        query,
                        ellipsize(&summary.extract, self.max_summary_chars),
                    ));
                }
                Ok(ToolResult::failure(
                    LABEL,
                    query,
                    format!("No Wikipedia article found for '{}'", query),
                ))
            }
        }
    }

    async fn fetch(&self, title: &str) -> Result<Fetch, reqwest::Error> {
        let url = summary_url(&self.base_url, title);
        debug!(url = %url, "Fetching encyclopedia summary");

        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "Encyclopedia response");
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(Fetch::NotFound);
        }
        if !status.is_success() {
            return Ok(Fetch::Status(status.as_u16()));
        }
        Ok(Fetch::Found(response.json::<PageSummary>().await?))
    }
}

/// "ada  lovelace" -> "Ada_Lovelace"
fn primary_title(query: &str) -> String {
    query
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("_")
}

/// Spellings tried after the primary title was not found: as typed,
/// title case, upper case.
fn alternate_titles(query: &str) -> [String; 3] {
    [
        query.replace(' ', "_"),
        title_case(query).replace(' ', "_"),
        query.to_uppercase().replace(' ', "_"),
    ]
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn summary_url(base: &reqwest::Url, title: &str) -> reqwest::Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(title);
    }
    url
}

fn interpret_summary(summary: &PageSummary, query: &str, max_chars: usize) -> ToolResult {
    if summary.is_disambiguation() {
        return ToolResult::failure(
            LABEL,
            query,
            format!(
                "Multiple results found for '{}'. Please be more specific.",
                query
            ),
        );
    }
    if summary.extract.is_empty() {
        return ToolResult::failure(LABEL, query, "No information found");
    }
    ToolResult::success(LABEL, query, ellipsize(&summary.extract, max_chars))
}
