//! Schema-driven document table: one row per document, one cell per schema
//! field in schema order, preceded by the document number.

use serde_json::{Map, Value};

use crate::model::{Document, FieldSchema};

/// Sentinel rendered for schema fields absent from (or null in) a payload.
pub const MISSING: &str = "N/A";

pub fn header(schema: &FieldSchema) -> Vec<String> {
    let mut cols = Vec::with_capacity(schema.len() + 1);
    cols.push("Document #".to_string());
    cols.extend(schema.keys().cloned());
    cols
}

/// One display row. `note` carries a payload-normalization failure; the cells
/// are then all [`MISSING`] and the table keeps rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRow {
    pub number: i64,
    pub cells: Vec<String>,
    pub note: Option<String>,
}

/// Normalizes a raw `customData` payload into one canonical object form.
/// A string payload gets exactly one parse step; anything that does not end
/// up as a JSON object is an error handled per-document by the caller.
pub fn normalize_payload(raw: &Value) -> Result<Map<String, Value>, String> {
    match raw {
        Value::Object(map) => Ok(map.clone()),
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(format!("payload is not an object: {}", other)),
            Err(err) => Err(format!("payload parse failed: {}", err)),
        },
        Value::Null => Ok(Map::new()),
        other => Err(format!("payload is not an object: {}", other)),
    }
}

/// Looks a schema field up in a payload: lower-cased field name first, then
/// the raw field name, tolerating both normalized and literal key casings.
fn field_value<'a>(payload: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    payload
        .get(&field.to_lowercase())
        .or_else(|| payload.get(field))
}

fn cell(payload: &Map<String, Value>, field: &str) -> String {
    match field_value(payload, field) {
        None | Some(Value::Null) => MISSING.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn document_row(schema: &FieldSchema, doc: &Document) -> DocumentRow {
    match normalize_payload(&doc.custom_data) {
        Ok(payload) => DocumentRow {
            number: doc.document_number,
            cells: schema.keys().map(|f| cell(&payload, f)).collect(),
            note: None,
        },
        Err(note) => DocumentRow {
            number: doc.document_number,
            cells: schema.keys().map(|_| MISSING.to_string()).collect(),
            note: Some(note),
        },
    }
}

pub fn document_rows(schema: &FieldSchema, docs: &[Document]) -> Vec<DocumentRow> {
    docs.iter().map(|d| document_row(schema, d)).collect()
}
