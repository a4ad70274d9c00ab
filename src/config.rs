//! Environment configuration.
//!
//! | Variable         | Default                 |
//! |------------------|-------------------------|
//! | `NEO4J_URL`      | `http://localhost:7474` |
//! | `NEO4J_USER`     | `neo4j`                 |
//! | `NEO4J_PASSWORD` | `pword`                 |
//!
//! An empty `NEO4J_USER` disables authentication.

use std::env;

use crate::connection::Credentials;
use crate::driver;
use crate::error::ConfigurationError;
use crate::transport::Transport;

pub const ENV_URL: &str = "NEO4J_URL";
pub const ENV_USER: &str = "NEO4J_USER";
pub const ENV_PASSWORD: &str = "NEO4J_PASSWORD";

pub const DEFAULT_URL: &str = "http://localhost:7474";
pub const DEFAULT_USER: &str = "neo4j";
pub const DEFAULT_PASSWORD: &str = "pword";

/// Client configuration resolved from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Connection URL
    pub url: String,
    /// Username, `None` for unauthenticated access
    pub user: Option<String>,
    password: String,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user: None,
            password: String::new(),
        }
    }

    /// Set the username and password.
    pub fn with_auth(self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.with_user(user).with_password(password)
    }

    /// Set the username. An empty name disables authentication.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into()).filter(|u| !u.is_empty());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through a lookup function.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(ENV_URL).unwrap_or_else(|| DEFAULT_URL.to_string());
        let user = lookup(ENV_USER).unwrap_or_else(|| DEFAULT_USER.to_string());
        let password = lookup(ENV_PASSWORD).unwrap_or_else(|| DEFAULT_PASSWORD.to_string());

        Self {
            url,
            user: Some(user).filter(|u| !u.is_empty()),
            password,
        }
    }

    /// Credentials to authenticate with, if a user is configured.
    pub fn credentials(&self) -> Option<Credentials> {
        self.user
            .as_ref()
            .map(|user| Credentials::new(user.clone(), self.password.clone()))
    }

    /// Create the transport selected by the configured URL.
    pub fn connect(&self) -> Result<Box<dyn Transport>, ConfigurationError> {
        driver::create(&self.url, self.credentials())
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_URL).with_auth(DEFAULT_USER, DEFAULT_PASSWORD)
    }
}
