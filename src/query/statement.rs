//! Statement type submitted to a transport.

use serde_json::{Map, Value};
use std::fmt;

/// A Cypher statement with optional named parameters.
///
/// The text is opaque to this crate; it is forwarded unchanged. Parameters
/// are sent alongside the text and referenced as `$name` inside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    text: String,
    parameters: Map<String, Value>,
}

impl Statement {
    /// Create a statement without parameters.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parameters: Map::new(),
        }
    }

    /// Bind a named parameter.
    ///
    /// # Example
    ///
    /// ```
    /// use cypherlink::Statement;
    ///
    /// let stmt = Statement::new("MATCH (n:Gene {id: $id}) RETURN n")
    ///     .with_parameter("id", "HGNC:1100");
    /// assert_eq!(stmt.parameters()["id"], "HGNC:1100");
    /// ```
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Statement text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bound parameters.
    pub fn parameters(&self) -> &Map<String, Value> {
        &self.parameters
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }
}

impl From<&str> for Statement {
    fn from(text: &str) -> Self {
        Statement::new(text)
    }
}

impl From<String> for Statement {
    fn from(text: String) -> Self {
        Statement::new(text)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
