use crate::model::{Document, FieldSchema, Space, StackSummary};

use super::types::{CreateSpaceRequest, CreateStackRequest, StackSchemaResponse};
use super::{RemoteClient, SyncError};

impl RemoteClient {
    /// All Spaces.
    pub fn list_spaces(&self) -> Result<Vec<Space>, SyncError> {
        self.get_json("/spaces", "list spaces")
    }

    /// The Stacks of one Space.
    pub fn list_space_stacks(&self, space: &str) -> Result<Vec<StackSummary>, SyncError> {
        self.get_json(&format!("/{}/stacks", space), "list stacks")
    }

    /// The global index of all Stack names, for uniqueness checks spanning
    /// Spaces.
    pub fn list_stack_names(&self) -> Result<Vec<String>, SyncError> {
        self.get_json("/stacks", "list stack names")
    }

    /// One Stack's field schema.
    pub fn stack_schema(&self, stack: &str) -> Result<FieldSchema, SyncError> {
        let resp: StackSchemaResponse =
            self.get_json(&format!("/stack/{}", stack), "fetch stack schema")?;
        Ok(resp.field_schema)
    }

    /// The Documents of one Stack.
    pub fn list_documents(&self, stack: &str) -> Result<Vec<Document>, SyncError> {
        self.get_json(&format!("/stack/{}/documents", stack), "list documents")
    }

    pub fn create_space(&self, name: &str) -> Result<(), SyncError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SyncError::Invalid("space name must not be blank".to_string()));
        }
        self.post_json(
            "/space",
            &CreateSpaceRequest {
                space_name: name.to_string(),
            },
            "create space",
        )
    }

    pub fn create_stack(
        &self,
        name: &str,
        space: &str,
        field_schema: FieldSchema,
    ) -> Result<(), SyncError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SyncError::Invalid("stack name must not be blank".to_string()));
        }
        if space.trim().is_empty() {
            return Err(SyncError::Invalid("space name must not be blank".to_string()));
        }
        self.post_json(
            "/stack",
            &CreateStackRequest {
                stack_name: name.to_string(),
                space_name: space.trim().to_string(),
                field_schema,
            },
            "create stack",
        )
    }
}
