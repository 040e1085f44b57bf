//! Local cache state for remote collections.
//!
//! Each remote collection lands in its own [`Slot`]: a successful fetch
//! replaces the cached value wholesale and clears the slot's error, a failed
//! fetch records the error and leaves the previous value untouched. Failures
//! are scoped to their slot — a failed document fetch never disturbs loaded
//! schema state, and vice versa.

use crate::remote::SyncError;
use crate::validate;

pub fn now_ts() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}

#[derive(Clone, Debug, Default)]
pub struct Slot<T> {
    pub value: T,
    pub error: Option<SyncError>,
    pub fetched_at: Option<String>,
}

impl<T> Slot<T> {
    pub fn accept(&mut self, value: T) {
        self.value = value;
        self.error = None;
        self.fetched_at = Some(now_ts());
    }

    pub fn reject(&mut self, err: SyncError) {
        self.error = Some(err);
    }

    pub fn apply(&mut self, outcome: Result<T, SyncError>) {
        match outcome {
            Ok(value) => self.accept(value),
            Err(err) => self.reject(err),
        }
    }
}

/// Outcome of a uniqueness check against the global Stack-name index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Uniqueness {
    Unique,
    Duplicate,
    /// The index could not be fetched; uniqueness cannot be verified and
    /// must stop blocking submission. The caller surfaces a distinct
    /// warning because validation behavior has silently changed.
    Unverified,
}

/// The global Stack-name index. Unlike an ordinary [`Slot`], a failed fetch
/// clears the cached names: a stale index would wrongly block (or wrongly
/// clear) names created elsewhere since the last successful pull.
#[derive(Clone, Debug, Default)]
pub struct NameIndex {
    names: Vec<String>,
    failed: Option<SyncError>,
    pub fetched_at: Option<String>,
}

impl NameIndex {
    pub fn accept(&mut self, names: Vec<String>) {
        self.names = names;
        self.failed = None;
        self.fetched_at = Some(now_ts());
    }

    pub fn degrade(&mut self, err: SyncError) {
        self.names.clear();
        self.failed = Some(err);
    }

    pub fn apply(&mut self, outcome: Result<Vec<String>, SyncError>) {
        match outcome {
            Ok(names) => self.accept(names),
            Err(err) => self.degrade(err),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn fetch_failed(&self) -> Option<&SyncError> {
        self.failed.as_ref()
    }

    pub fn check(&self, candidate: &str) -> Uniqueness {
        if self.failed.is_some() {
            return Uniqueness::Unverified;
        }
        if validate::is_duplicate(candidate, self.names.iter().map(String::as_str)) {
            Uniqueness::Duplicate
        } else {
            Uniqueness::Unique
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_failed_fetch_keeps_the_previous_slot_value() {
        let mut slot: Slot<Vec<String>> = Slot::default();
        slot.accept(vec!["HR".to_string()]);
        slot.reject(SyncError::Transport("connection refused".to_string()));

        assert_eq!(slot.value, vec!["HR".to_string()]);
        assert!(slot.error.is_some());
    }

    #[test]
    fn a_successful_fetch_clears_the_slot_error() {
        let mut slot: Slot<Vec<String>> = Slot::default();
        slot.reject(SyncError::Transport("connection refused".to_string()));
        slot.accept(vec!["HR".to_string()]);

        assert!(slot.error.is_none());
        assert_eq!(slot.value, vec!["HR".to_string()]);
    }

    #[test]
    fn degraded_index_reports_unverified_not_duplicate() {
        let mut index = NameIndex::default();
        index.accept(vec!["Employees".to_string()]);
        assert_eq!(index.check("employees"), Uniqueness::Duplicate);

        index.degrade(SyncError::NotFound("no stack index".to_string()));
        assert!(index.names().is_empty());
        assert_eq!(index.check("employees"), Uniqueness::Unverified);
    }

    #[test]
    fn index_recovers_after_a_successful_refetch() {
        let mut index = NameIndex::default();
        index.degrade(SyncError::Transport("timeout".to_string()));
        index.accept(vec!["Employees".to_string()]);

        assert!(index.fetch_failed().is_none());
        assert_eq!(index.check("Inventory"), Uniqueness::Unique);
        assert_eq!(index.check("EMPLOYEES"), Uniqueness::Duplicate);
    }

    #[test]
    fn blank_candidate_is_unique_even_with_matches_present() {
        let mut index = NameIndex::default();
        index.accept(vec!["".to_string(), "HR".to_string()]);
        assert_eq!(index.check("   "), Uniqueness::Unique);
    }
}
