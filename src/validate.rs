//! Name-uniqueness checks for Space and Stack creation.

/// True when `candidate` matches any existing name case-insensitively, both
/// sides trimmed. A candidate that trims to empty is never a duplicate; blank
/// input is a separate condition checked by the caller.
pub fn is_duplicate<'a, I>(candidate: &str, existing: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let candidate = candidate.trim().to_lowercase();
    if candidate.is_empty() {
        return false;
    }
    existing
        .into_iter()
        .any(|name| name.trim().to_lowercase() == candidate)
}

/// Field-scoped message shown next to a name input while the duplicate
/// condition holds.
pub fn duplicate_message(name: &str) -> String {
    format!("Already exists with name: \"{}\"", name.trim())
}
