//! Normalized result sets.
//!
//! Both transports produce the same shape: an ordered [`ResultSet`] of
//! [`Record`]s, each mapping column name to a JSON value. Row order is the
//! order the server returned; nothing is re-sorted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single result row keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zip column names with positional values.
    ///
    /// Pairs stop at the shorter of the two sequences.
    pub fn from_row<C, V>(columns: C, values: V) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        V: IntoIterator<Item = Value>,
    {
        columns
            .into_iter()
            .map(Into::into)
            .zip(values)
            .collect()
    }

    /// Value of a column.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    /// Deserialize a column into a concrete type.
    pub fn get_as<T: serde::de::DeserializeOwned>(&self, column: &str) -> Option<T> {
        self.fields
            .get(column)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Set a column, replacing any previous value.
    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        self.fields.insert(column.into(), value);
    }

    /// Column names in insertion order.
    ///
    /// Records built from HTTP responses keep the server's column order;
    /// Bolt records follow the driver's field map, which is unordered.
    /// Equality between records ignores column order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Borrow the underlying column map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Take the underlying column map.
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.fields)
    }
}

/// Ordered sequence of records returned by one statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<Record>,
}

impl ResultSet {
    /// Create a result set from records in server order.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Build a result set from a column header and positional rows.
    ///
    /// # Example
    ///
    /// ```
    /// use cypherlink::ResultSet;
    /// use serde_json::json;
    ///
    /// let results = ResultSet::from_columns(
    ///     vec!["a".to_string(), "b".to_string()],
    ///     vec![vec![json!(1), json!("x")]],
    /// );
    /// assert_eq!(results.len(), 1);
    /// assert_eq!(results[0].get("b"), Some(&json!("x")));
    /// ```
    pub fn from_columns(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        rows.into_iter()
            .map(|row| Record::from_row(columns.iter().cloned(), row))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record, if any.
    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    /// Iterate records in server order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Borrow the records in server order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Take the records in server order.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Column names of the first record, empty for an empty result set.
    pub fn column_names(&self) -> Vec<&str> {
        self.records
            .first()
            .map(|record| record.columns().collect())
            .unwrap_or_default()
    }
}

impl std::ops::Index<usize> for ResultSet {
    type Output = Record;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl FromIterator<Record> for ResultSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ResultSet {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
