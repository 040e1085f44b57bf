use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use stackly::model::{Document, Space, Stack, StackSummary};
use stackly::remote::{CreateSpaceRequest, CreateStackRequest, StackSchemaResponse};
use stackly::validate;

use super::state::SharedStore;

pub(crate) async fn healthz() -> &'static str {
    "ok"
}

fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({"message": message.into()})),
    )
        .into_response()
}

fn bad_request(message: impl Into<String>) -> Response {
    error_body(StatusCode::BAD_REQUEST, message)
}

fn not_found(message: impl Into<String>) -> Response {
    error_body(StatusCode::NOT_FOUND, message)
}

fn conflict(message: impl Into<String>) -> Response {
    error_body(StatusCode::CONFLICT, message)
}

pub(crate) async fn list_spaces(State(store): State<SharedStore>) -> Json<Vec<Space>> {
    Json(store.read().await.spaces.clone())
}

pub(crate) async fn create_space(
    State(store): State<SharedStore>,
    Json(req): Json<CreateSpaceRequest>,
) -> Result<StatusCode, Response> {
    let name = req.space_name.trim().to_string();
    if name.is_empty() {
        return Err(bad_request("spaceName must not be blank"));
    }

    let mut store = store.write().await;
    if validate::is_duplicate(&name, store.space_names()) {
        return Err(conflict(validate::duplicate_message(&name)));
    }
    store.spaces.push(Space { space_name: name });
    Ok(StatusCode::CREATED)
}

pub(crate) async fn list_space_stacks(
    State(store): State<SharedStore>,
    Path(space_name): Path<String>,
) -> Result<Json<Vec<StackSummary>>, Response> {
    let store = store.read().await;
    if !store.has_space(&space_name) {
        return Err(not_found(format!("no space named \"{}\"", space_name)));
    }
    let stacks = store
        .stacks
        .iter()
        .filter(|s| s.space_name == space_name)
        .map(|s| StackSummary {
            stack_name: s.stack_name.clone(),
        })
        .collect();
    Ok(Json(stacks))
}

pub(crate) async fn list_stack_names(State(store): State<SharedStore>) -> Json<Vec<String>> {
    Json(
        store
            .read()
            .await
            .stack_names()
            .map(str::to_string)
            .collect(),
    )
}

pub(crate) async fn create_stack(
    State(store): State<SharedStore>,
    Json(req): Json<CreateStackRequest>,
) -> Result<StatusCode, Response> {
    let name = req.stack_name.trim().to_string();
    if name.is_empty() {
        return Err(bad_request("stackName must not be blank"));
    }
    if req.field_schema.is_empty() {
        return Err(bad_request("fieldSchema must have at least one field"));
    }

    let mut store = store.write().await;
    if !store.has_space(&req.space_name) {
        return Err(not_found(format!("no space named \"{}\"", req.space_name)));
    }
    // Stack names are unique globally, not just within the owning space.
    if validate::is_duplicate(&name, store.stack_names()) {
        return Err(conflict(validate::duplicate_message(&name)));
    }
    store.stacks.push(Stack {
        stack_name: name,
        space_name: req.space_name,
        field_schema: req.field_schema,
    });
    Ok(StatusCode::CREATED)
}

pub(crate) async fn stack_schema(
    State(store): State<SharedStore>,
    Path(stack_name): Path<String>,
) -> Result<Json<StackSchemaResponse>, Response> {
    let store = store.read().await;
    let stack = store
        .find_stack(&stack_name)
        .ok_or_else(|| not_found(format!("no stack named \"{}\"", stack_name)))?;
    Ok(Json(StackSchemaResponse {
        field_schema: stack.field_schema.clone(),
    }))
}

pub(crate) async fn list_documents(
    State(store): State<SharedStore>,
    Path(stack_name): Path<String>,
) -> Result<Json<Vec<Document>>, Response> {
    let store = store.read().await;
    if store.find_stack(&stack_name).is_none() {
        return Err(not_found(format!("no stack named \"{}\"", stack_name)));
    }
    Ok(Json(
        store.documents.get(&stack_name).cloned().unwrap_or_default(),
    ))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateDocumentRequest {
    pub(crate) custom_data: serde_json::Value,
}

/// Dev-only seeding endpoint; the product client never creates documents.
pub(crate) async fn create_document(
    State(store): State<SharedStore>,
    Path(stack_name): Path<String>,
    Json(req): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<Document>), Response> {
    let mut store = store.write().await;
    if store.find_stack(&stack_name).is_none() {
        return Err(not_found(format!("no stack named \"{}\"", stack_name)));
    }
    let doc = store.add_document(&stack_name, req.custom_data);
    Ok((StatusCode::CREATED, Json(doc)))
}
