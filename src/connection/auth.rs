//! Credential handling for graph database connections.
//!
//! Credentials are a plain principal/secret pair passed through to the
//! transport: HTTP basic authentication for the HTTP transport and basic
//! authentication on the Bolt handshake.

use std::fmt;
use std::sync::Arc;

/// Username and password for basic authentication.
///
/// The password is shared between clones and is redacted from every
/// formatted representation.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    secret: Arc<Secret>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: Arc::new(Secret::from(password.into())),
        }
    }

    /// Principal sent to the server.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Secret sent to the server. Not exposed outside the crate.
    pub(crate) fn password(&self) -> &str {
        self.secret.expose()
    }
}

impl PartialEq for Credentials {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username && self.secret.expose() == other.secret.expose()
    }
}

impl Eq for Credentials {}

impl<U: Into<String>, P: Into<String>> From<(U, P)> for Credentials {
    fn from((username, password): (U, P)) -> Self {
        Credentials::new(username, password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &self.secret)
            .finish()
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:<redacted>", self.username)
    }
}

/// Password bytes, wiped when the last owner goes away.
struct Secret(Vec<u8>);

impl Secret {
    fn expose(&self) -> &str {
        // Built from a String only.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Secret(value.into_bytes())
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0.fill(0);
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}
