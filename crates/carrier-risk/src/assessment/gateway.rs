//! Outbound collaborators: the carrier lookup API and the callback endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use crate::config::UpstreamConfig;

use super::domain::{CarrierAssessment, MalformedAssessment};
use super::summary::CommandReply;

/// Stage endpoint used when `MCP_API_URL` is not configured.
pub const DEFAULT_BASE_URL: &str = "https://mycarrierpacketsapi-stage.azurewebsites.net/api/v1/";

const USER_AGENT: &str = "carrier-risk-bot/0.1.0";

/// Failure surfaced by a carrier lookup. All variants collapse into one
/// generic user-facing message at the handler; no retries are attempted.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("carrier lookup request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("carrier lookup rejected with status {0}")]
    Status(StatusCode),
    #[error("carrier lookup returned no results")]
    EmptyResult,
    #[error(transparent)]
    Malformed(#[from] MalformedAssessment),
}

/// Fetches a carrier's risk assessment given its docket/MC number.
#[async_trait]
pub trait CarrierLookupGateway: Send + Sync {
    async fn preview(&self, docket_number: &str) -> Result<CarrierAssessment, LookupError>;
}

/// reqwest-backed gateway for the MyCarrierPackets PreviewCarrier endpoint.
/// The bearer credential is supplied at construction, not read from any
/// global state.
pub struct MyCarrierPacketsClient {
    http: Client,
    base_url: Url,
    bearer_token: String,
}

impl MyCarrierPacketsClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, LookupError> {
        let base_url = Url::parse(&config.base_url)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url,
            bearer_token: config.bearer_token.clone(),
        })
    }
}

#[async_trait]
impl CarrierLookupGateway for MyCarrierPacketsClient {
    async fn preview(&self, docket_number: &str) -> Result<CarrierAssessment, LookupError> {
        let url = self.base_url.join("Carrier/PreviewCarrier")?;
        let response = self
            .http
            .post(url)
            .query(&[("docketNumber", docket_number)])
            .bearer_auth(&self.bearer_token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        // The endpoint answers with an array of matches; only the first is
        // relevant for a slash command.
        let matches: Vec<serde_json::Value> = response.json().await?;
        let first = matches.into_iter().next().ok_or(LookupError::EmptyResult)?;
        Ok(CarrierAssessment::from_value(first)?)
    }
}

/// Failure while delivering the assembled reply to the callback URL.
#[derive(Debug, thiserror::Error)]
pub enum CallbackError {
    #[error("callback delivery failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("callback endpoint rejected the reply with status {0}")]
    Status(StatusCode),
}

/// Posts the assembled reply back to the command's callback URL.
#[async_trait]
pub trait CallbackPublisher: Send + Sync {
    async fn publish(&self, response_url: &str, reply: &CommandReply) -> Result<(), CallbackError>;
}

/// Plain HTTP publisher posting the reply JSON to the callback URL.
#[derive(Clone)]
pub struct HttpCallbackPublisher {
    http: Client,
}

impl HttpCallbackPublisher {
    pub fn new() -> Result<Self, CallbackError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl CallbackPublisher for HttpCallbackPublisher {
    async fn publish(&self, response_url: &str, reply: &CommandReply) -> Result<(), CallbackError> {
        let response = self.http.post(response_url).json(reply).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CallbackError::Status(status));
        }
        Ok(())
    }
}
