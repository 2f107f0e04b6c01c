//! GraphQL client for the Contentful Content API

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// GraphQL request body
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<V: Serialize> {
    pub query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
}

/// GraphQL response wrapper
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

/// GraphQL error
#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

/// Error type for Contentful requests
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("GraphQL error: {0}")]
    GraphQL(String),

    #[error("No data returned")]
    NoData,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl<T> GraphQLResponse<T> {
    /// Surface the first GraphQL error, otherwise the data
    pub fn into_result(self) -> Result<T, ContentError> {
        if let Some(first_error) = self.errors.as_ref().and_then(|errors| errors.first()) {
            return Err(ContentError::GraphQL(first_error.message.clone()));
        }

        self.data.ok_or(ContentError::NoData)
    }
}

/// Client for the Contentful GraphQL endpoint
#[derive(Clone)]
pub struct ContentfulClient {
    client: reqwest::Client,
    endpoint: String,
    access_token: Option<String>,
}

impl ContentfulClient {
    /// Create a new client for `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            access_token: None,
        }
    }

    /// Create a client with a delivery or preview access token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Execute a GraphQL query
    pub async fn query<V, R>(&self, query: &'static str, variables: Option<V>) -> Result<R, ContentError>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        let request = GraphQLRequest { query, variables };

        let mut req = self.client.post(&self.endpoint).json(&request);

        if let Some(token) = &self.access_token {
            req = req.bearer_auth(token);
        }

        let body = req.send().await?.text().await?;
        let response: GraphQLResponse<R> = serde_json::from_str(&body)?;

        response.into_result()
    }
}
