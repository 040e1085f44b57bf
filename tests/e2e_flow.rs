mod common;

use anyhow::Result;
use serde_json::json;

use stackly::nav::{NavState, SyncEffect};
use stackly::remote::RemoteClient;
use stackly::schema::DraftSchema;
use stackly::sync::{NameIndex, Uniqueness};
use stackly::{table, validate};

#[test]
fn create_space_then_stack_then_browse_documents() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = RemoteClient::new(guard.base_url.clone())?;

    // Create the Space and re-pull the authoritative list.
    client.create_space("HR")?;
    let spaces = client.list_spaces()?;
    assert_eq!(spaces.len(), 1);
    assert_eq!(spaces[0].space_name, "HR");

    // Select it; the transition demands the stack list and the name index.
    let mut nav = NavState::default();
    let effects = nav.select_space("HR");
    assert!(effects.contains(&SyncEffect::FetchSpaceStacks {
        space: "HR".to_string()
    }));
    assert!(effects.contains(&SyncEffect::FetchStackNameIndex));

    assert!(client.list_space_stacks("HR")?.is_empty());

    // Author the default schema and create the Stack.
    let schema = DraftSchema::new().build()?;
    assert_eq!(serde_json::to_string(&schema)?, r#"{"Name":"string"}"#);
    client.create_stack("Employees", "HR", schema)?;

    let stacks = client.list_space_stacks("HR")?;
    assert_eq!(stacks.len(), 1);
    assert_eq!(stacks[0].stack_name, "Employees");

    // Drill in: schema strictly before documents.
    let effects = nav.select_stack("Employees");
    assert_eq!(
        effects,
        vec![SyncEffect::FetchStackDetail {
            stack: "Employees".to_string()
        }]
    );
    let schema = client.stack_schema("Employees")?;
    let docs = client.list_documents("Employees")?;

    assert_eq!(
        table::header(&schema),
        vec!["Document #".to_string(), "Name".to_string()]
    );
    assert!(docs.is_empty());

    // Seed one document and confirm the case-insensitive field lookup.
    reqwest::blocking::Client::new()
        .post(format!("{}/stack/Employees/documents", guard.base_url))
        .json(&json!({"customData": {"name": "Ada"}}))
        .send()?
        .error_for_status()?;

    let docs = client.list_documents("Employees")?;
    let rows = table::document_rows(&schema, &docs);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cells, vec!["Ada".to_string()]);

    Ok(())
}

#[test]
fn case_different_duplicate_stack_is_blocked_everywhere() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = RemoteClient::new(guard.base_url.clone())?;

    client.create_space("HR")?;
    client.create_space("Sales")?;
    client.create_stack("Employees", "HR", DraftSchema::new().build()?)?;

    // The client-side gate blocks before any request is made.
    let mut index = NameIndex::default();
    index.apply(client.list_stack_names());
    assert_eq!(index.check("employees"), Uniqueness::Duplicate);
    assert_eq!(
        validate::duplicate_message("employees"),
        "Already exists with name: \"employees\""
    );

    // And the remote agrees if asked anyway, in any space.
    match client.create_stack("employees", "Sales", DraftSchema::new().build()?) {
        Err(err) => assert_eq!(
            err.to_string(),
            "request rejected (409): Already exists with name: \"employees\""
        ),
        Ok(()) => panic!("duplicate stack creation must fail"),
    }

    Ok(())
}

#[test]
fn navigation_reset_holds_across_real_fetches() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = RemoteClient::new(guard.base_url.clone())?;

    client.create_space("A")?;
    client.create_space("B")?;
    client.create_stack("X", "A", DraftSchema::new().build()?)?;

    let mut nav = NavState::default();
    let _ = nav.select_space("A");
    let _ = nav.select_stack("X");
    assert_eq!(nav.active_stack(), Some("X"));

    // Switching spaces always lands on the stack list.
    let effects = nav.select_space("B");
    assert_eq!(nav.active_stack(), None);
    for effect in effects {
        match effect {
            SyncEffect::FetchSpaceStacks { space } => {
                assert!(client.list_space_stacks(&space)?.is_empty());
            }
            SyncEffect::FetchStackNameIndex => {
                assert_eq!(client.list_stack_names()?, vec!["X".to_string()]);
            }
            SyncEffect::FetchStackDetail { .. } => {
                panic!("stack-list entry must not demand a stack detail fetch")
            }
        }
    }

    Ok(())
}
