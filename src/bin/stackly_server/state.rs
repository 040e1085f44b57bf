use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use stackly::model::{Document, FieldType, Space, Stack};

pub(crate) type SharedStore = Arc<RwLock<Store>>;

#[derive(Default)]
pub(crate) struct Store {
    pub(crate) spaces: Vec<Space>,
    pub(crate) stacks: Vec<Stack>,
    // Keyed by the stack's exact name.
    pub(crate) documents: HashMap<String, Vec<Document>>,
    pub(crate) next_document_number: i64,
}

impl Store {
    pub(crate) fn space_names(&self) -> impl Iterator<Item = &str> {
        self.spaces.iter().map(|s| s.space_name.as_str())
    }

    pub(crate) fn stack_names(&self) -> impl Iterator<Item = &str> {
        self.stacks.iter().map(|s| s.stack_name.as_str())
    }

    pub(crate) fn has_space(&self, name: &str) -> bool {
        self.spaces.iter().any(|s| s.space_name == name)
    }

    pub(crate) fn find_stack(&self, name: &str) -> Option<&Stack> {
        self.stacks.iter().find(|s| s.stack_name == name)
    }

    pub(crate) fn add_document(&mut self, stack: &str, custom_data: serde_json::Value) -> Document {
        self.next_document_number += 1;
        let doc = Document {
            document_number: self.next_document_number,
            custom_data,
        };
        self.documents
            .entry(stack.to_string())
            .or_default()
            .push(doc.clone());
        doc
    }

    pub(crate) fn seed_demo(&mut self) {
        self.spaces.push(Space {
            space_name: "HR".to_string(),
        });
        self.stacks.push(Stack {
            stack_name: "Employees".to_string(),
            space_name: "HR".to_string(),
            field_schema: [
                ("Name".to_string(), FieldType::String),
                ("Email".to_string(), FieldType::String),
                ("Salary".to_string(), FieldType::Number),
            ]
            .into_iter()
            .collect(),
        });
        self.add_document(
            "Employees",
            serde_json::json!({"name": "Ada Lovelace", "email": "ada@example.com", "salary": 5200}),
        );
        // String-encoded payload, as some producers send it.
        self.add_document(
            "Employees",
            serde_json::json!(r#"{"name": "Grace Hopper", "email": "grace@example.com"}"#),
        );
        self.add_document("Employees", serde_json::json!({"name": "Alan Turing"}));
    }
}
