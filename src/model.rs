//! Domain records shared by the client, the CLI, and the dev server.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The type of one schema field. Wire form is the lowercase name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
}

impl FieldType {
    pub const ALL: [FieldType; 4] = [
        FieldType::String,
        FieldType::Number,
        FieldType::Boolean,
        FieldType::Date,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
        }
    }

    /// Next type in display order; wraps around. Drives the form's type toggle.
    pub fn cycle(self) -> Self {
        match self {
            FieldType::String => FieldType::Number,
            FieldType::Number => FieldType::Boolean,
            FieldType::Boolean => FieldType::Date,
            FieldType::Date => FieldType::String,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "string" => Some(FieldType::String),
            "number" => Some(FieldType::Number),
            "boolean" | "bool" => Some(FieldType::Boolean),
            "date" => Some(FieldType::Date),
            _ => None,
        }
    }
}

/// Ordered field-name -> type mapping. Insertion order is author order and is
/// preserved through serialization.
pub type FieldSchema = IndexMap<String, FieldType>;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub space_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackSummary {
    pub stack_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stack {
    pub stack_name: String,
    pub space_name: String,
    pub field_schema: FieldSchema,
}

/// A record inside a Stack. `document_number` is assigned by the server.
/// `custom_data` is either a JSON object or a JSON-encoded string holding one;
/// it is normalized at the rendering boundary, never validated here.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub document_number: i64,

    #[serde(default)]
    pub custom_data: serde_json::Value,
}
