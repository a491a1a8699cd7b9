//! In-memory content backend.
//!
//! Rows live in insertion order per collection. Listing filters, then
//! stable-sorts on the query's column, then truncates to the limit, so rows
//! with equal sort keys keep their insertion order.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cmp::Ordering;
use std::collections::HashMap;

use serde_json::Value;
use uuid::Uuid;

use crate::source::{Collection, ContentError, ContentSource, Query, Record};

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: HashMap<Collection, Vec<Record>>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert each of `rows` into `collection`, assigning ids where missing.
    ///
    /// # Errors
    ///
    /// Stops at the first row [`ContentSource::create`] rejects.
    pub fn seed(&mut self, collection: Collection, rows: impl IntoIterator<Item = Value>) -> Result<(), ContentError> {
        for row in rows {
            self.create(collection, row)?;
        }
        Ok(())
    }

    /// Number of rows stored in `collection`.
    #[must_use]
    pub fn len(&self, collection: Collection) -> usize {
        self.rows.get(&collection).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self, collection: Collection) -> bool {
        self.len(collection) == 0
    }

    fn position(&self, collection: Collection, id: &str) -> Option<usize> {
        self.rows.get(&collection)?.iter().position(|row| row_id(row) == Some(id))
    }

    fn not_found(collection: Collection, id: &str) -> ContentError {
        ContentError::NotFound { collection, id: id.to_owned() }
    }
}

impl ContentSource for MemorySource {
    fn list(&self, collection: Collection, query: &Query) -> Result<Vec<Record>, ContentError> {
        let mut rows: Vec<Record> = self
            .rows
            .get(&collection)
            .map(|rows| rows.iter().filter(|row| query.matches(row)).cloned().collect())
            .unwrap_or_default();

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| compare_column(a.get(&order.column), b.get(&order.column), order.descending));
        }
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }
        Ok(rows)
    }

    fn get(&self, collection: Collection, id: &str) -> Result<Record, ContentError> {
        self.rows
            .get(&collection)
            .and_then(|rows| rows.iter().find(|row| row_id(row) == Some(id)))
            .cloned()
            .ok_or_else(|| Self::not_found(collection, id))
    }

    fn create(&mut self, collection: Collection, fields: Value) -> Result<Record, ContentError> {
        let Value::Object(mut record) = fields else {
            return Err(ContentError::InvalidFields { collection, reason: "expected a JSON object".into() });
        };
        let id = match record.get("id") {
            None | Some(Value::Null) => Uuid::new_v4().to_string(),
            Some(Value::String(id)) => id.clone(),
            Some(other) => {
                return Err(ContentError::InvalidFields { collection, reason: format!("id must be a string, got {other}") });
            }
        };
        if self.position(collection, &id).is_some() {
            return Err(ContentError::InvalidFields { collection, reason: format!("duplicate id {id}") });
        }
        record.insert("id".into(), Value::String(id));
        self.rows.entry(collection).or_default().push(record.clone());
        Ok(record)
    }

    fn update(&mut self, collection: Collection, id: &str, fields: Value) -> Result<(), ContentError> {
        let Value::Object(fields) = fields else {
            return Err(ContentError::InvalidFields { collection, reason: "expected a JSON object".into() });
        };
        if fields.get("id").is_some_and(|new_id| new_id.as_str() != Some(id)) {
            return Err(ContentError::InvalidFields { collection, reason: "id cannot be changed".into() });
        }
        let index = self.position(collection, id).ok_or_else(|| Self::not_found(collection, id))?;
        let row = self
            .rows
            .get_mut(&collection)
            .and_then(|rows| rows.get_mut(index))
            .ok_or_else(|| Self::not_found(collection, id))?;
        row.extend(fields);
        Ok(())
    }

    fn delete(&mut self, collection: Collection, id: &str) -> Result<(), ContentError> {
        let index = self.position(collection, id).ok_or_else(|| Self::not_found(collection, id))?;
        if let Some(rows) = self.rows.get_mut(&collection) {
            rows.remove(index);
        }
        Ok(())
    }
}

fn row_id(row: &Record) -> Option<&str> {
    row.get("id").and_then(Value::as_str)
}

/// Numbers compare numerically and strings lexically. Missing or null values
/// sort after everything else in either direction.
fn compare_column(a: Option<&Value>, b: Option<&Value>, descending: bool) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ord = compare_values(a, b);
            if descending { ord.reverse() } else { ord }
        }
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => {
            a.as_f64().unwrap_or(0.0).total_cmp(&b.as_f64().unwrap_or(0.0))
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => a.to_string().cmp(&b.to_string()),
    }
}
