//! Transport abstraction trait.
//!
//! This module defines the `Transport` trait shared by the HTTP and Bolt
//! implementations. Callers hold a `Box<dyn Transport>` and never need to
//! know which protocol is behind it.

use async_trait::async_trait;

use crate::connection::{ConnectionParams, Scheme};
use crate::error::ClientError;
use crate::query::{ResultSet, Statement};

/// Query execution over one transport.
///
/// Implementations take `&self`; overlapping calls are allowed and each call
/// completes or fails independently.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Run a statement and return its rows in server order.
    ///
    /// # Errors
    ///
    /// - `ClientError::Auth` if the server rejected the credentials (HTTP only)
    /// - `ClientError::Query` if the database rejected the statement (HTTP only)
    /// - `ClientError::Transport` for network and protocol failures
    async fn run(&self, statement: &Statement) -> Result<ResultSet, ClientError>;

    /// Run a statement given as plain text.
    async fn query(&self, text: &str) -> Result<ResultSet, ClientError> {
        self.run(&Statement::new(text)).await
    }

    /// Connection descriptor this transport is bound to.
    fn params(&self) -> &ConnectionParams;

    /// Protocol of this transport.
    fn scheme(&self) -> Scheme {
        self.params().scheme
    }
}
