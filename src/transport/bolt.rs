//! Bolt transport.
//!
//! A `BoltTransport` owns one long-lived driver handle bound to
//! `bolt://<host>:<port>`. Each call opens one session, drains every record
//! into a [`Record`], and closes the session before returning, on success
//! and on failure alike.
//!
//! The session seam is the [`SessionFactory`] / [`BoltSession`] pair so that
//! session lifecycle can be exercised without a server. The default factory
//! is backed by `neo4rs`.

use async_trait::async_trait;
use neo4rs::{BoltList, BoltMap, BoltNull, BoltString, BoltType, ConfigBuilder, Graph, Row};
use serde_json::{Map, Value};
use std::fmt;
use tokio::sync::OnceCell;

use crate::connection::{ConnectionParams, Credentials, Scheme};
use crate::error::{ClientError, ConfigurationError, TransportError};
use crate::query::{Record, ResultSet, Statement};

use super::protocol::Transport;

/// Opens sessions on a persistent connection handle.
#[async_trait]
pub trait SessionFactory: Send + Sync {
    /// Open a session for a single statement.
    async fn open_session(&self) -> Result<Box<dyn BoltSession>, TransportError>;
}

/// A session scoped to one statement execution.
#[async_trait]
pub trait BoltSession: Send {
    /// Execute the statement and collect every record in server order.
    async fn run(&mut self, statement: &Statement) -> Result<Vec<Record>, TransportError>;

    /// Release the session. Called exactly once per opened session.
    async fn close(&mut self) -> Result<(), TransportError>;
}

/// Bolt transport implementation.
pub struct BoltTransport {
    /// Connection descriptor
    params: ConnectionParams,
    /// Bolt URI derived from host and port
    uri: String,
    /// Session source, holds the persistent handle
    sessions: Box<dyn SessionFactory>,
}

impl BoltTransport {
    /// Create a Bolt transport backed by a `neo4rs` driver handle.
    ///
    /// The handle connects on the first call to [`Transport::run`], so
    /// construction performs no network activity.
    pub fn new(params: ConnectionParams) -> Result<Self, ConfigurationError> {
        let uri = Self::validate(&params)?;
        let sessions = GraphSessionFactory::new(uri.clone(), params.credentials().cloned());
        Ok(Self {
            params,
            uri,
            sessions: Box::new(sessions),
        })
    }

    /// Create a Bolt transport with a custom session factory.
    pub fn with_session_factory(
        params: ConnectionParams,
        sessions: Box<dyn SessionFactory>,
    ) -> Result<Self, ConfigurationError> {
        let uri = Self::validate(&params)?;
        Ok(Self {
            params,
            uri,
            sessions,
        })
    }

    fn validate(params: &ConnectionParams) -> Result<String, ConfigurationError> {
        if params.scheme != Scheme::Bolt {
            return Err(ConfigurationError::UnsupportedScheme {
                scheme: params.scheme.to_string(),
            });
        }
        let uri = params.to_bolt_uri()?;
        log::debug!("Bolt transport bound to {}", uri);
        Ok(uri)
    }

    /// Bolt URI of the connection handle.
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl fmt::Debug for BoltTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoltTransport")
            .field("params", &self.params)
            .field("uri", &self.uri)
            .field("sessions", &"<SessionFactory>")
            .finish()
    }
}

#[async_trait]
impl Transport for BoltTransport {
    async fn run(&self, statement: &Statement) -> Result<ResultSet, ClientError> {
        let mut session = self.sessions.open_session().await?;

        let outcome = session.run(statement).await;
        let closed = session.close().await;

        match (outcome, closed) {
            (Ok(records), Ok(())) => Ok(ResultSet::new(records)),
            (Ok(_), Err(close_err)) => Err(close_err.into()),
            (Err(run_err), Ok(())) => Err(run_err.into()),
            (Err(run_err), Err(close_err)) => {
                log::warn!("Failed to close Bolt session after error: {}", close_err);
                Err(run_err.into())
            }
        }
    }

    fn params(&self) -> &ConnectionParams {
        &self.params
    }
}

/// Session factory backed by a single `neo4rs` graph handle.
///
/// The handle is created lazily and capped at one connection.
pub struct GraphSessionFactory {
    uri: String,
    credentials: Option<Credentials>,
    graph: OnceCell<Graph>,
}

impl GraphSessionFactory {
    pub fn new(uri: String, credentials: Option<Credentials>) -> Self {
        Self {
            uri,
            credentials,
            graph: OnceCell::new(),
        }
    }

    async fn connect(&self) -> Result<Graph, TransportError> {
        // Without credentials an empty basic-auth pair is sent; servers with
        // authentication disabled accept it.
        let (user, password) = match &self.credentials {
            Some(credentials) => (credentials.username(), credentials.password()),
            None => ("", ""),
        };

        let config = ConfigBuilder::default()
            .uri(self.uri.as_str())
            .user(user)
            .password(password)
            .max_connections(1)
            .build()?;

        log::info!("Opening Bolt connection to {}", self.uri);
        Ok(Graph::connect(config).await?)
    }
}

#[async_trait]
impl SessionFactory for GraphSessionFactory {
    async fn open_session(&self) -> Result<Box<dyn BoltSession>, TransportError> {
        let graph = self.graph.get_or_try_init(|| self.connect()).await?;
        log::debug!("Opening Bolt session on {}", self.uri);
        Ok(Box::new(GraphSession {
            graph: graph.clone(),
            open: true,
        }))
    }
}

/// Auto-commit session on the shared graph handle.
///
/// The pooled connection is held by the row stream inside `run` and goes
/// back to the pool when the stream is dropped, including on cancellation.
struct GraphSession {
    graph: Graph,
    open: bool,
}

#[async_trait]
impl BoltSession for GraphSession {
    async fn run(&mut self, statement: &Statement) -> Result<Vec<Record>, TransportError> {
        let mut query = neo4rs::query(statement.text());
        for (name, value) in statement.parameters() {
            query = query.param(name.as_str(), to_bolt(value));
        }

        let mut stream = self.graph.execute(query).await?;

        let mut records = Vec::new();
        while let Some(row) = stream.next().await? {
            records.push(row_to_record(&row)?);
        }
        Ok(records)
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        if std::mem::take(&mut self.open) {
            log::debug!("Bolt session closed");
        }
        Ok(())
    }
}

/// Convert a native row into a record keyed by field name.
///
/// Nodes and relationships become their property maps. Field order follows
/// the driver's map, not the statement's `RETURN` clause.
fn row_to_record(row: &Row) -> Result<Record, TransportError> {
    row.to::<Map<String, Value>>()
        .map(Record::from)
        .map_err(|e| TransportError::DeserializationError(e.to_string()))
}

/// Convert a JSON parameter into a Bolt value.
fn to_bolt(value: &Value) -> BoltType {
    match value {
        Value::Null => BoltType::Null(BoltNull),
        Value::Bool(b) => BoltType::from(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => BoltType::from(i),
            None => BoltType::from(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => BoltType::from(s.as_str()),
        Value::Array(items) => BoltType::List(BoltList {
            value: items.iter().map(to_bolt).collect(),
        }),
        Value::Object(map) => BoltType::Map(BoltMap {
            value: map
                .iter()
                .map(|(k, v)| (BoltString::from(k.as_str()), to_bolt(v)))
                .collect(),
        }),
    }
}
