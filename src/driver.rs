//! Transport selection.
//!
//! The URL scheme is a strict, one-shot dispatch key: `http` selects the
//! HTTP transport, `bolt` the Bolt transport, and anything else fails before
//! any network activity. There is no fallback between transports.

use std::str::FromStr;

use crate::connection::{ConnectionParams, Credentials, Scheme};
use crate::error::ConfigurationError;
use crate::transport::{BoltTransport, HttpTransport, Transport};

/// Create a transport for a connection URL.
///
/// Explicit `credentials` take precedence over credentials embedded in the
/// URL.
///
/// # Example
///
/// ```
/// use cypherlink::{create, Credentials, Scheme};
///
/// let transport = create("bolt://localhost:7687", Some(Credentials::new("neo4j", "secret")))?;
/// assert_eq!(transport.scheme(), Scheme::Bolt);
///
/// assert!(create("ftp://localhost", None).is_err());
/// # Ok::<(), cypherlink::ConfigurationError>(())
/// ```
pub fn create(
    url: &str,
    credentials: Option<Credentials>,
) -> Result<Box<dyn Transport>, ConfigurationError> {
    let params = ConnectionParams::from_str(url)?.with_credentials(credentials);
    open(params)
}

/// Create a transport for already parsed connection parameters.
pub fn open(params: ConnectionParams) -> Result<Box<dyn Transport>, ConfigurationError> {
    log::debug!("Selecting {} transport for {}", params.scheme, params);

    match params.scheme {
        Scheme::Http => Ok(Box::new(HttpTransport::new(params)?)),
        Scheme::Bolt => Ok(Box::new(BoltTransport::new(params)?)),
    }
}
