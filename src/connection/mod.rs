//! Connection descriptors for graph database transports.
//!
//! This module provides connection URL parsing and credential handling.
//!
//! # Example
//!
//! ```
//! # use cypherlink::connection::{ConnectionBuilder, ConnectionParams, Credentials, Scheme};
//! # use std::str::FromStr;
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Using ConnectionBuilder
//! let params = ConnectionBuilder::new()
//!     .scheme(Scheme::Bolt)
//!     .host("localhost")
//!     .port(7687)
//!     .credentials(Credentials::new("neo4j", "secret"))
//!     .build()?;
//!
//! // Or parse from a connection URL
//! let params = ConnectionParams::from_str("http://localhost:7474")?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod params;

pub use auth::Credentials;
pub use params::{ConnectionBuilder, ConnectionParams, Scheme, TRANSACTION_COMMIT_PATH};
