//! Navigation state machine: Queue, Space stack-list, Stack detail.
//!
//! The state is the single source of truth for what is on screen; the active
//! sidebar entry and the mounted view are derived from it at render time.
//! Each transition reports the fetches it requires as [`SyncEffect`]s so the
//! caller can run them against the remote and fill the local caches.

/// Which view is mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavState {
    /// Default/root view, active before any Space is selected.
    Queue,
    /// A Space is active; `stack` is the drilled-in Stack, if any.
    Space {
        space: String,
        stack: Option<String>,
    },
}

/// A fetch a navigation transition requires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncEffect {
    /// Pull the Stacks of `space`.
    FetchSpaceStacks { space: String },
    /// Pull the global Stack-name index used for uniqueness checks.
    FetchStackNameIndex,
    /// Pull `stack`'s schema, then — only if the schema fetch succeeded —
    /// its documents. A schema-less document fetch is never issued.
    FetchStackDetail { stack: String },
}

impl Default for NavState {
    fn default() -> Self {
        NavState::Queue
    }
}

impl NavState {
    /// Selecting a Space always lands on its stack list. Reselecting the
    /// currently active Space is idempotent for which Space is active but
    /// still clears any drilled-in Stack.
    #[must_use]
    pub fn select_space(&mut self, space: &str) -> Vec<SyncEffect> {
        *self = NavState::Space {
            space: space.to_string(),
            stack: None,
        };
        vec![
            SyncEffect::FetchSpaceStacks {
                space: space.to_string(),
            },
            SyncEffect::FetchStackNameIndex,
        ]
    }

    /// Drills into a Stack. Ignored while on the Queue (there is no owning
    /// Space to drill within).
    #[must_use]
    pub fn select_stack(&mut self, stack: &str) -> Vec<SyncEffect> {
        match self {
            NavState::Queue => Vec::new(),
            NavState::Space { stack: current, .. } => {
                *current = Some(stack.to_string());
                vec![SyncEffect::FetchStackDetail {
                    stack: stack.to_string(),
                }]
            }
        }
    }

    /// Leaves Stack detail for the owning Space's stack list. No refetch.
    #[must_use]
    pub fn back(&mut self) -> Vec<SyncEffect> {
        if let NavState::Space { stack, .. } = self {
            *stack = None;
        }
        Vec::new()
    }

    /// Returns to the Queue, discarding all Space/Stack context.
    #[must_use]
    pub fn select_queue(&mut self) -> Vec<SyncEffect> {
        *self = NavState::Queue;
        Vec::new()
    }

    pub fn is_queue(&self) -> bool {
        matches!(self, NavState::Queue)
    }

    pub fn active_space(&self) -> Option<&str> {
        match self {
            NavState::Queue => None,
            NavState::Space { space, .. } => Some(space),
        }
    }

    pub fn active_stack(&self) -> Option<&str> {
        match self {
            NavState::Queue => None,
            NavState::Space { stack, .. } => stack.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_spaces_never_preserves_stack_detail() {
        let mut nav = NavState::Queue;
        let _ = nav.select_space("A");
        let _ = nav.select_stack("X");
        assert_eq!(nav.active_stack(), Some("X"));

        let _ = nav.select_space("B");
        assert_eq!(
            nav,
            NavState::Space {
                space: "B".to_string(),
                stack: None,
            }
        );
    }

    #[test]
    fn reselecting_the_active_space_clears_stack_detail() {
        let mut nav = NavState::Queue;
        let _ = nav.select_space("A");
        let _ = nav.select_stack("X");

        let _ = nav.select_space("A");
        assert_eq!(nav.active_space(), Some("A"));
        assert_eq!(nav.active_stack(), None);
    }

    #[test]
    fn selecting_a_space_requests_stacks_and_the_name_index() {
        let mut nav = NavState::Queue;
        let effects = nav.select_space("HR");
        assert_eq!(
            effects,
            vec![
                SyncEffect::FetchSpaceStacks {
                    space: "HR".to_string()
                },
                SyncEffect::FetchStackNameIndex,
            ]
        );
    }

    #[test]
    fn drilling_into_a_stack_requests_its_detail() {
        let mut nav = NavState::Queue;
        let _ = nav.select_space("HR");
        let effects = nav.select_stack("Employees");
        assert_eq!(
            effects,
            vec![SyncEffect::FetchStackDetail {
                stack: "Employees".to_string()
            }]
        );
    }

    #[test]
    fn select_stack_on_queue_is_ignored() {
        let mut nav = NavState::Queue;
        assert!(nav.select_stack("X").is_empty());
        assert!(nav.is_queue());
    }

    #[test]
    fn back_returns_to_the_stack_list_without_refetch() {
        let mut nav = NavState::Queue;
        let _ = nav.select_space("A");
        let _ = nav.select_stack("X");
        let effects = nav.back();
        assert!(effects.is_empty());
        assert_eq!(nav.active_space(), Some("A"));
        assert_eq!(nav.active_stack(), None);
    }

    #[test]
    fn queue_discards_all_context() {
        let mut nav = NavState::Queue;
        let _ = nav.select_space("A");
        let _ = nav.select_stack("X");
        let effects = nav.select_queue();
        assert!(effects.is_empty());
        assert_eq!(nav, NavState::Queue);
    }
}
