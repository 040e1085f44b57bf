//! Draft field-schema builder backing the add-Stack form.

use anyhow::{Result, bail};

use crate::model::{FieldSchema, FieldType};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftField {
    pub name: String,
    pub field_type: FieldType,
}

/// Ordered draft of a new Stack's field schema. Never shorter than one entry:
/// the draft is seeded with a `Name: string` field and `remove_field` refuses
/// to drop the last remaining row.
#[derive(Clone, Debug)]
pub struct DraftSchema {
    fields: Vec<DraftField>,
}

impl Default for DraftSchema {
    fn default() -> Self {
        Self {
            fields: vec![DraftField {
                name: "Name".to_string(),
                field_type: FieldType::String,
            }],
        }
    }
}

impl DraftSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[DraftField] {
        &self.fields
    }

    pub fn add_field(&mut self) {
        self.fields.push(DraftField {
            name: String::new(),
            field_type: FieldType::String,
        });
    }

    /// Removes the entry at `index`. Refused (returns false) when only one
    /// entry remains or the index is out of range.
    pub fn remove_field(&mut self, index: usize) -> bool {
        if self.fields.len() <= 1 || index >= self.fields.len() {
            return false;
        }
        self.fields.remove(index);
        true
    }

    pub fn set_name(&mut self, index: usize, name: impl Into<String>) {
        if let Some(f) = self.fields.get_mut(index) {
            f.name = name.into();
        }
    }

    pub fn set_field_type(&mut self, index: usize, field_type: FieldType) {
        if let Some(f) = self.fields.get_mut(index) {
            f.field_type = field_type;
        }
    }

    pub fn cycle_field_type(&mut self, index: usize) {
        if let Some(f) = self.fields.get_mut(index) {
            f.field_type = f.field_type.cycle();
        }
    }

    /// Serializes the draft into the final ordered mapping. Entries whose
    /// name trims to empty are dropped; if nothing remains the draft is not
    /// submittable and this fails.
    pub fn build(&self) -> Result<FieldSchema> {
        let mut schema = FieldSchema::new();
        for f in &self.fields {
            let name = f.name.trim();
            if name.is_empty() {
                continue;
            }
            schema.insert(name.to_string(), f.field_type);
        }
        if schema.is_empty() {
            bail!("schema has no named fields");
        }
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_builds_name_string() {
        let draft = DraftSchema::new();
        let schema = draft.build().unwrap();
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.get("Name"), Some(&FieldType::String));
    }

    #[test]
    fn removing_the_sole_entry_is_refused() {
        let mut draft = DraftSchema::new();
        assert!(!draft.remove_field(0));
        assert_eq!(draft.fields().len(), 1);
    }

    #[test]
    fn remove_out_of_range_is_refused() {
        let mut draft = DraftSchema::new();
        draft.add_field();
        assert!(!draft.remove_field(5));
        assert_eq!(draft.fields().len(), 2);
        assert!(draft.remove_field(1));
        assert_eq!(draft.fields().len(), 1);
    }

    #[test]
    fn blank_named_entries_are_dropped() {
        let mut draft = DraftSchema::new();
        draft.set_name(0, "  ");
        draft.add_field();
        draft.set_name(1, "Age");
        draft.set_field_type(1, FieldType::Number);

        let schema = draft.build().unwrap();
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.get("Age"), Some(&FieldType::Number));
    }

    #[test]
    fn all_blank_draft_fails_to_build() {
        let mut draft = DraftSchema::new();
        draft.set_name(0, "   ");
        assert!(draft.build().is_err());
    }

    #[test]
    fn build_preserves_author_order() {
        let mut draft = DraftSchema::new();
        draft.add_field();
        draft.set_name(1, "Email");
        draft.add_field();
        draft.set_name(2, "Hired");
        draft.set_field_type(2, FieldType::Date);

        let schema = draft.build().unwrap();
        let keys: Vec<&str> = schema.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Name", "Email", "Hired"]);
    }

    #[test]
    fn repeated_names_keep_first_position_last_type() {
        // Field-name uniqueness within one schema is unenforced; a repeat
        // follows map-insertion semantics.
        let mut draft = DraftSchema::new();
        draft.add_field();
        draft.set_name(1, "Name");
        draft.set_field_type(1, FieldType::Number);

        let schema = draft.build().unwrap();
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.get("Name"), Some(&FieldType::Number));
    }

    #[test]
    fn cycle_wraps_through_all_types() {
        let mut draft = DraftSchema::new();
        for expected in [
            FieldType::Number,
            FieldType::Boolean,
            FieldType::Date,
            FieldType::String,
        ] {
            draft.cycle_field_type(0);
            assert_eq!(draft.fields()[0].field_type, expected);
        }
    }
}
