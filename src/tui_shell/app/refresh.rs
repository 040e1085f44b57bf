//! Fetch orchestration: runs the sync effects navigation transitions demand
//! and reconciles the results into the resource-scoped cache slots.

use crate::nav::SyncEffect;
use crate::sync::Slot;
use crate::table;

use super::*;

impl App {
    pub(super) fn apply_effects(&mut self, effects: Vec<SyncEffect>) {
        for effect in effects {
            match effect {
                SyncEffect::FetchSpaceStacks { space } => self.fetch_stacks_for(&space),
                SyncEffect::FetchStackNameIndex => self.fetch_stack_names(),
                SyncEffect::FetchStackDetail { stack } => self.fetch_stack_detail(&stack),
            }
        }
    }

    pub(super) fn fetch_spaces(&mut self) {
        self.spaces.apply(self.client.list_spaces());
        let max = self.spaces.value.len();
        self.sidebar_selected = self.sidebar_selected.min(max);
    }

    pub(super) fn fetch_stacks_for(&mut self, space: &str) {
        if self.stacks_for.as_deref() != Some(space) {
            self.stacks = Slot::default();
            self.stacks_for = Some(space.to_string());
            self.grid_selected = 0;
        }
        self.stacks.apply(self.client.list_space_stacks(space));
        let max = self.stacks.value.len().saturating_sub(1);
        self.grid_selected = self.grid_selected.min(max);
    }

    pub(super) fn fetch_stack_names(&mut self) {
        self.stack_names.apply(self.client.list_stack_names());
        // Degradation silently changes validation behavior; say so distinctly
        // instead of through the generic error path.
        let warn = self.stack_names.fetch_failed().map(|err| {
            format!(
                "Name check unavailable ({}); duplicates cannot be verified.",
                err
            )
        });
        if let Some(text) = warn {
            self.push_banner(Severity::Warning, text);
        }
    }

    /// Schema first; documents are fetched only once the schema is in hand.
    pub(super) fn fetch_stack_detail(&mut self, stack: &str) {
        if self.detail_for.as_deref() != Some(stack) {
            self.schema = Slot::default();
            self.documents = Slot::default();
            self.detail_for = Some(stack.to_string());
            self.doc_selected = 0;
        }

        match self.client.stack_schema(stack) {
            Ok(schema) => {
                self.schema.accept(Some(schema));
                self.documents.apply(self.client.list_documents(stack));
                self.note_payload_failures(stack);
                let max = self.documents.value.len().saturating_sub(1);
                self.doc_selected = self.doc_selected.min(max);
            }
            Err(err) => {
                self.schema.reject(err);
            }
        }
    }

    fn note_payload_failures(&mut self, stack: &str) {
        let Some(schema) = self.schema.value.clone() else {
            return;
        };
        if self.documents.error.is_some() {
            return;
        }
        let notes: Vec<String> = table::document_rows(&schema, &self.documents.value)
            .into_iter()
            .filter_map(|row| {
                row.note
                    .map(|n| format!("{}: document {}: {}", stack, row.number, n))
            })
            .collect();
        for note in notes {
            self.push_log(note);
        }
    }

    /// Re-runs the fetches for whatever the current navigation state shows.
    pub(super) fn refresh_current(&mut self) {
        self.fetch_spaces();
        match (
            self.nav.active_space().map(str::to_string),
            self.nav.active_stack().map(str::to_string),
        ) {
            (Some(space), Some(stack)) => {
                self.fetch_stacks_for(&space);
                self.fetch_stack_names();
                self.fetch_stack_detail(&stack);
            }
            (Some(space), None) => {
                self.fetch_stacks_for(&space);
                self.fetch_stack_names();
            }
            _ => {}
        }
    }
}
