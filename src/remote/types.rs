//! Request/response payload types for the remote API. The record shapes
//! shared with the rest of the client live in `crate::model`.

use serde::{Deserialize, Serialize};

use crate::model::FieldSchema;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpaceRequest {
    pub space_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStackRequest {
    pub stack_name: String,
    pub space_name: String,
    pub field_schema: FieldSchema,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackSchemaResponse {
    pub field_schema: FieldSchema,
}

/// Optional error body carried by non-2xx responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
