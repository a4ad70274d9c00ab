//! Transport layer for graph database communication.
//!
//! This module provides the transport abstraction and its two
//! implementations.
//!
//! # Architecture
//!
//! The transport layer is organized into:
//! - `protocol` - `Transport` trait definition
//! - `messages` - JSON envelope of the HTTP commit endpoint
//! - `http` - HTTP transactional-commit transport
//! - `bolt` - Bolt session transport
//!
//! # Example
//!
//! ```no_run
//! use cypherlink::connection::{ConnectionParams, Credentials};
//! use cypherlink::transport::{HttpTransport, Transport};
//! use std::str::FromStr;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let params = ConnectionParams::from_str("http://localhost:7474")?
//!     .with_credentials(Some(Credentials::new("neo4j", "secret")));
//! let transport = HttpTransport::new(params)?;
//!
//! let results = transport.query("MATCH (n) RETURN count(n) AS total").await?;
//! println!("{:?}", results.first());
//! # Ok(())
//! # }
//! ```

pub mod bolt;
pub mod http;
pub mod messages;
pub mod protocol;

pub use bolt::{BoltSession, BoltTransport, GraphSessionFactory, SessionFactory};
pub use http::{HttpTransport, REQUEST_TIMEOUT};
pub use protocol::Transport;
