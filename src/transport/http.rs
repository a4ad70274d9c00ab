//! HTTP transport for the transactional-commit endpoint.
//!
//! Every call posts one statement batch to
//! `http://<host>[:<port>]/db/data/transaction/commit` and commits it in the
//! same request.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

use crate::connection::{ConnectionParams, Scheme};
use crate::error::{AuthError, ClientError, ConfigurationError, QueryError, TransportError};
use crate::query::{ResultSet, Statement};

use super::messages::{CommitRequest, CommitResponse};
use super::protocol::Transport;

/// Fixed per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport implementation.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Connection descriptor
    params: ConnectionParams,
    /// Commit endpoint derived from host and port
    endpoint: String,
    /// Shared HTTP client with the request timeout applied
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create an HTTP transport bound to the commit endpoint of `params`.
    ///
    /// No request is made until [`Transport::run`] is called.
    pub fn new(params: ConnectionParams) -> Result<Self, ConfigurationError> {
        if params.scheme != Scheme::Http {
            return Err(ConfigurationError::UnsupportedScheme {
                scheme: params.scheme.to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConfigurationError::HttpClient(e.to_string()))?;

        let endpoint = params.to_commit_url();
        log::debug!("HTTP transport bound to {}", endpoint);

        Ok(Self {
            params,
            endpoint,
            client,
        })
    }

    /// Commit endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn run(&self, statement: &Statement) -> Result<ResultSet, ClientError> {
        let request = CommitRequest::single(statement);

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&request);
        if let Some(credentials) = self.params.credentials() {
            builder = builder.basic_auth(credentials.username(), Some(credentials.password()));
        }

        let response = builder.send().await.map_err(TransportError::from)?;
        let status = response.status();
        let body = response.text().await.map_err(TransportError::from)?;

        log::debug!("POST {} -> {}", self.endpoint, status);

        read_commit_response(status, &body, &self.endpoint)
    }

    fn params(&self) -> &ConnectionParams {
        &self.params
    }
}

/// Interpret a commit response.
///
/// 401 is checked first, then an embedded error list (whatever the status),
/// then any other non-success status. Only a clean envelope yields rows.
pub(crate) fn read_commit_response(
    status: StatusCode,
    body: &str,
    endpoint: &str,
) -> Result<ResultSet, ClientError> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(AuthError::Unauthorized {
            endpoint: endpoint.to_string(),
        }
        .into());
    }

    let failed = status.as_u16() >= 300;
    let envelope = serde_json::from_str::<CommitResponse>(body);

    let envelope = match envelope {
        Ok(envelope) => envelope,
        Err(_) if failed => {
            return Err(TransportError::HttpStatus {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            }
            .into())
        }
        Err(e) => return Err(TransportError::from(e).into()),
    };

    if let Some(error) = envelope.errors.into_iter().next() {
        log::debug!("Statement rejected: {}", error.message);
        return Err(QueryError::Database {
            code: error.code,
            message: error.message,
        }
        .into());
    }

    if failed {
        return Err(TransportError::HttpStatus {
            status: status.as_u16(),
            endpoint: endpoint.to_string(),
        }
        .into());
    }

    let result = envelope.results.into_iter().next().ok_or_else(|| {
        TransportError::InvalidResponse("Response contains no result block".to_string())
    })?;

    Ok(result.into_result_set())
}
