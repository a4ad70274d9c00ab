//! JSON message types for the HTTP transactional-commit endpoint.
//!
//! Request: `{"statements": [{"statement": "...", "parameters": {...}}]}`
//! Response: `{"results": [{"columns": [...], "data": [{"row": [...]}]}], "errors": [...]}`

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::query::{ResultSet, Statement};

/// Commit request carrying a batch of statements.
#[derive(Debug, Clone, Serialize)]
pub struct CommitRequest {
    pub statements: Vec<StatementRequest>,
}

/// One statement inside a commit request.
#[derive(Debug, Clone, Serialize)]
pub struct StatementRequest {
    pub statement: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub parameters: Map<String, Value>,
}

impl CommitRequest {
    /// Batch containing a single statement.
    pub fn single(statement: &Statement) -> Self {
        Self {
            statements: vec![StatementRequest {
                statement: statement.text().to_string(),
                parameters: statement.parameters().clone(),
            }],
        }
    }
}

/// Commit response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitResponse {
    #[serde(default)]
    pub results: Vec<StatementResult>,
    #[serde(default)]
    pub errors: Vec<ServerError>,
}

/// Result block for one statement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatementResult {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub data: Vec<DataRow>,
}

/// A positional row. Servers may add `meta` next to `row`; it is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataRow {
    #[serde(default)]
    pub row: Vec<Value>,
}

/// Error entry reported by the database.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl StatementResult {
    /// Zip columns with every row, preserving row order.
    pub fn into_result_set(self) -> ResultSet {
        let StatementResult { columns, data } = self;
        for (index, row) in data.iter().enumerate() {
            if row.row.len() != columns.len() {
                log::warn!(
                    "Row {} has {} values for {} columns",
                    index,
                    row.row.len(),
                    columns.len()
                );
            }
        }
        ResultSet::from_columns(columns, data.into_iter().map(|d| d.row).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_commit_request_wire_format() {
        let request = CommitRequest::single(&Statement::new("MATCH (n) RETURN n"));

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"statements": [{"statement": "MATCH (n) RETURN n"}]})
        );
    }

    #[test]
    fn test_commit_request_with_parameters() {
        let stmt = Statement::new("MATCH (n {id: $id}) RETURN n").with_parameter("id", "x");
        let request = CommitRequest::single(&stmt);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"statements": [{
                "statement": "MATCH (n {id: $id}) RETURN n",
                "parameters": {"id": "x"}
            }]})
        );
    }

    #[test]
    fn test_commit_response_deserialize() {
        let body = r#"{
            "results": [{
                "columns": ["a", "b"],
                "data": [{"row": [1, "x"], "meta": [null, null]}]
            }],
            "errors": []
        }"#;

        let response: CommitResponse = serde_json::from_str(body).unwrap();
        assert!(response.errors.is_empty());
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].columns, vec!["a", "b"]);
        assert_eq!(response.results[0].data[0].row, vec![json!(1), json!("x")]);
    }

    #[test]
    fn test_commit_response_with_errors() {
        let body = r#"{
            "results": [],
            "errors": [
                {"code": "Neo.ClientError.Statement.SyntaxError", "message": "Invalid input"},
                {"code": "Neo.ClientError.Other", "message": "second"}
            ]
        }"#;

        let response: CommitResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.errors.len(), 2);
        assert_eq!(response.errors[0].message, "Invalid input");
        assert_eq!(
            response.errors[0].code.as_deref(),
            Some("Neo.ClientError.Statement.SyntaxError")
        );
    }

    #[test]
    fn test_server_error_message_optional() {
        let body = r#"{"errors": [{"code": "Neo.ClientError.Other"}]}"#;

        let response: CommitResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.errors[0].code.as_deref(), Some("Neo.ClientError.Other"));
        assert!(response.errors[0].message.is_empty());
    }

    #[test]
    fn test_statement_result_into_result_set() {
        let result = StatementResult {
            columns: vec!["name".to_string(), "degree".to_string()],
            data: vec![
                DataRow {
                    row: vec![json!("b"), json!(2)],
                },
                DataRow {
                    row: vec![json!("a"), json!(5)],
                },
            ],
        };

        let results = result.into_result_set();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].get("name"), Some(&json!("b")));
        assert_eq!(results[1].get("degree"), Some(&json!(5)));
    }
}
