mod common;

use anyhow::Result;
use serde_json::json;

use stackly::model::FieldType;
use stackly::remote::{RemoteClient, SyncError};
use stackly::schema::DraftSchema;
use stackly::sync::{NameIndex, Slot, Uniqueness};

#[test]
fn fetches_and_writes_round_trip_through_the_client() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = RemoteClient::new(guard.base_url.clone())?;

    assert!(client.list_spaces()?.is_empty());

    client.create_space("HR")?;
    let spaces = client.list_spaces()?;
    assert_eq!(spaces.len(), 1);
    assert_eq!(spaces[0].space_name, "HR");

    let schema = DraftSchema::new().build()?;
    client.create_stack("Employees", "HR", schema)?;

    let stacks = client.list_space_stacks("HR")?;
    assert_eq!(stacks.len(), 1);
    assert_eq!(stacks[0].stack_name, "Employees");

    let names = client.list_stack_names()?;
    assert_eq!(names, vec!["Employees".to_string()]);

    let schema = client.stack_schema("Employees")?;
    assert_eq!(schema.get("Name"), Some(&FieldType::String));

    assert!(client.list_documents("Employees")?.is_empty());
    Ok(())
}

#[test]
fn blank_names_are_rejected_locally_without_a_request() -> Result<()> {
    // Deliberately unreachable: a blank name must never produce traffic.
    let client = RemoteClient::new("http://127.0.0.1:1")?;

    match client.create_space("   ") {
        Err(SyncError::Invalid(msg)) => assert!(msg.contains("blank")),
        other => panic!("expected Invalid, got {:?}", other.err()),
    }
    match client.create_stack("  ", "HR", DraftSchema::new().build()?) {
        Err(SyncError::Invalid(_)) => {}
        other => panic!("expected Invalid, got {:?}", other.err()),
    }
    Ok(())
}

#[test]
fn failures_classify_by_transport_and_status() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = RemoteClient::new(guard.base_url.clone())?;

    // 404 on a missing stack.
    match client.stack_schema("Ghost") {
        Err(err) => assert!(err.is_not_found(), "got {:?}", err),
        Ok(_) => panic!("expected not found"),
    }

    // 409 duplicate surfaces as a client error with the server message.
    client.create_space("HR")?;
    match client.create_space("hr") {
        Err(SyncError::Client { status, message }) => {
            assert_eq!(status, 409);
            assert_eq!(message, "Already exists with name: \"hr\"");
        }
        other => panic!("expected Client error, got {:?}", other.err()),
    }

    // No listener at all: transport.
    let dead = RemoteClient::new("http://127.0.0.1:1")?;
    match dead.list_spaces() {
        Err(SyncError::Transport(_)) => {}
        other => panic!("expected Transport error, got {:?}", other.err()),
    }
    Ok(())
}

#[test]
fn cache_slots_keep_prior_values_across_failures() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = RemoteClient::new(guard.base_url.clone())?;
    client.create_space("HR")?;

    let mut slot: Slot<Vec<stackly::model::Space>> = Slot::default();
    slot.apply(client.list_spaces());
    assert_eq!(slot.value.len(), 1);
    assert!(slot.error.is_none());

    let dead = RemoteClient::new("http://127.0.0.1:1")?;
    slot.apply(dead.list_spaces());
    assert_eq!(slot.value.len(), 1, "failed fetch must not clear the cache");
    assert!(matches!(slot.error, Some(SyncError::Transport(_))));
    Ok(())
}

#[test]
fn name_index_degrades_when_the_fetch_fails() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = RemoteClient::new(guard.base_url.clone())?;
    client.create_space("HR")?;
    client.create_stack("Employees", "HR", DraftSchema::new().build()?)?;

    let mut index = NameIndex::default();
    index.apply(client.list_stack_names());
    assert_eq!(index.check("employees"), Uniqueness::Duplicate);

    let dead = RemoteClient::new("http://127.0.0.1:1")?;
    index.apply(dead.list_stack_names());
    assert!(index.names().is_empty());
    assert!(index.fetch_failed().is_some());
    // Uniqueness can no longer be verified; it must stop blocking.
    assert_eq!(index.check("employees"), Uniqueness::Unverified);
    Ok(())
}

#[test]
fn documents_deserialize_with_polymorphic_payloads() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = RemoteClient::new(guard.base_url.clone())?;
    client.create_space("HR")?;

    let mut draft = DraftSchema::new();
    draft.add_field();
    draft.set_name(1, "Email");
    client.create_stack("Employees", "HR", draft.build()?)?;

    let http = reqwest::blocking::Client::new();
    let seed = |payload: serde_json::Value| {
        http.post(format!("{}/stack/Employees/documents", guard.base_url))
            .json(&json!({"customData": payload}))
            .send()
    };
    seed(json!({"name": "Ada", "email": "ada@example.com"}))?;
    seed(json!(r#"{"name": "Grace"}"#))?;

    let docs = client.list_documents("Employees")?;
    assert_eq!(docs.len(), 2);
    assert!(docs[0].custom_data.is_object());
    assert!(docs[1].custom_data.is_string());
    Ok(())
}
