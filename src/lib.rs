//! # cypherlink
//!
//! Cypher client for Neo4j-compatible graph databases that hides whether the
//! server is reached over the HTTP transactional-commit endpoint or over a
//! Bolt session.
//!
//! The URL scheme picks the transport (`http` or `bolt`); both return the
//! same [`ResultSet`] shape, an ordered list of records keyed by column name.
//!
//! ## Example
//!
//! ```no_run
//! # use cypherlink::*;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Pick a transport from the URL scheme
//! let transport = create("bolt://localhost:7687", Some(Credentials::new("neo4j", "secret")))?;
//!
//! // Run a statement
//! let results = transport
//!     .query("MATCH (n:Gene) RETURN n.id AS id LIMIT 5")
//!     .await?;
//!
//! for record in &results {
//!     println!("{:?}", record.get("id"));
//! }
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod config;
pub mod connection;
pub mod driver;
pub mod error;
pub mod query;
pub mod transport;

// Re-export public API
pub use config::ClientConfig;
pub use connection::{ConnectionParams, Credentials, Scheme};
pub use driver::{create, open};
pub use error::{AuthError, ClientError, ConfigurationError, ErrorKind, QueryError, TransportError};
pub use query::{Record, ResultSet, Statement};
pub use transport::{BoltTransport, HttpTransport, Transport};
