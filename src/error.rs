//! Error types for cypherlink.
//!
//! This module defines domain-specific error types organized by functional area.
//! Every failure a transport can report is one of four kinds, see [`ErrorKind`].

use std::fmt;
use thiserror::Error;

/// Top-level error type encompassing all possible errors.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection URL or transport setup errors
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Credential rejection by the server
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Statement failures reported by the database
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Network and protocol failures below the query layer
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Errors raised while turning a connection URL into a transport.
///
/// These always happen before any network activity.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Scheme is neither `http` nor `bolt`
    #[error("Unsupported interface scheme \"{scheme}\"")]
    UnsupportedScheme { scheme: String },

    /// Connection URL could not be parsed
    #[error("Failed to parse connection URL: {0}")]
    ParseError(String),

    /// Invalid connection parameter
    #[error("Invalid connection parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },

    /// Scheme requires an explicit port
    #[error("The {scheme} scheme requires an explicit port")]
    MissingPort { scheme: String },

    /// HTTP client could not be initialised
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Errors related to authentication.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Server answered 401
    #[error("Unauthorized: credentials rejected by {endpoint}")]
    Unauthorized { endpoint: String },
}

/// Errors reported by the database for a statement.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The server returned an embedded error for the statement
    #[error("{message}")]
    Database {
        /// Status code such as `Neo.ClientError.Statement.SyntaxError`
        code: Option<String>,
        message: String,
    },
}

impl QueryError {
    /// Database status code, if the server sent one.
    pub fn code(&self) -> Option<&str> {
        match self {
            QueryError::Database { code, .. } => code.as_deref(),
        }
    }

    /// Message as reported by the database.
    pub fn message(&self) -> &str {
        match self {
            QueryError::Database { message, .. } => message,
        }
    }
}

/// Errors related to the transport protocols.
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP request could not be sent or its body not read
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    /// HTTP status outside the success range
    #[error("HTTP status {status} from {endpoint}")]
    HttpStatus { status: u16, endpoint: String },

    /// Request timed out
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Message serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Response body could not be decoded
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// Response decoded but does not have the expected shape
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    /// Bolt connection or execution failure
    #[error("Bolt error: {0}")]
    Bolt(String),
}

/// Failure kinds callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unsupported or unparsable connection configuration
    Configuration,
    /// Credentials rejected
    Auth,
    /// Statement rejected by the database
    Query,
    /// Network or protocol failure
    Transport,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Configuration => write!(f, "CONFIGURATION"),
            ErrorKind::Auth => write!(f, "AUTH"),
            ErrorKind::Query => write!(f, "QUERY"),
            ErrorKind::Transport => write!(f, "TRANSPORT"),
        }
    }
}

impl ClientError {
    /// Map to the failure kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Configuration(_) => ErrorKind::Configuration,
            ClientError::Auth(_) => ErrorKind::Auth,
            ClientError::Query(_) => ErrorKind::Query,
            ClientError::Transport(_) => ErrorKind::Transport,
        }
    }

    /// Whether the server rejected the credentials.
    pub fn is_auth(&self) -> bool {
        self.kind() == ErrorKind::Auth
    }
}

// Conversions from external error types
impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            TransportError::DeserializationError(err.to_string())
        } else {
            TransportError::SerializationError(err.to_string())
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                timeout_ms: crate::transport::http::REQUEST_TIMEOUT.as_millis() as u64,
            }
        } else {
            TransportError::RequestFailed(err.to_string())
        }
    }
}

impl From<neo4rs::Error> for TransportError {
    fn from(err: neo4rs::Error) -> Self {
        TransportError::Bolt(err.to_string())
    }
}
