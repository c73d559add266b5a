use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use frontdesk_config::Config;
use frontdesk_core::{GatewayError, TransactionGateway};
use frontdesk_domain::{CreateTransactionInput, RecordedTransaction};

use crate::errors::AppError;

pub const CREATE_TRANSACTION: &str = r#"mutation CreateTransaction($createTransactionInput: CreateTransactionInput!) {
  createTransaction(createTransactionInput: $createTransactionInput) {
    _id
    date
    category
    subCategory
    method
    description
    amount
  }
}"#;

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<CreateTransactionData>,
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTransactionData {
    #[serde(default)]
    create_transaction: Option<RecordedTransaction>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
}

/// Builds the JSON body posted to the GraphQL endpoint.
pub fn request_body(input: &CreateTransactionInput) -> Value {
    json!({
        "query": CREATE_TRANSACTION,
        "variables": { "createTransactionInput": input },
    })
}

/// Interprets a GraphQL response body for `createTransaction`.
pub fn decode_response(body: &str) -> Result<Option<RecordedTransaction>, GatewayError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|err| GatewayError::Decode(err.to_string()))?;
    if !envelope.errors.is_empty() {
        return Err(GatewayError::Rejected(
            envelope.errors.into_iter().map(|e| e.message).collect(),
        ));
    }
    Ok(envelope.data.and_then(|data| data.create_transaction))
}

/// Posts `createTransaction` mutations to a GraphQL endpoint over HTTP.
pub struct GraphQlTransactionGateway {
    client: reqwest::Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl GraphQlTransactionGateway {
    pub fn new(endpoint: impl Into<String>, auth_token: Option<String>) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            auth_token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        config.validate()?;
        Self::new(config.api_endpoint.trim(), config.auth_token.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TransactionGateway for GraphQlTransactionGateway {
    async fn create_transaction(
        &self,
        input: CreateTransactionInput,
    ) -> Result<Option<RecordedTransaction>, GatewayError> {
        let mut request = self.client.post(&self.endpoint).json(&request_body(&input));
        if let Some(token) = self.auth_token.as_deref() {
            request = request.bearer_auth(token);
        }

        debug!(endpoint = %self.endpoint, "sending createTransaction");
        let response = request
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        if !status.is_success() {
            warn!(%status, "createTransaction returned an error status");
            // Servers often report GraphQL validation failures with a 4xx.
            return match decode_response(&body) {
                Err(rejected @ GatewayError::Rejected(_)) => Err(rejected),
                _ => Err(GatewayError::Transport(format!("HTTP {status}"))),
            };
        }
        decode_response(&body)
    }
}
