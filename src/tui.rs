use anyhow::Result;

/// Runs the interactive shell against the given API base URL.
pub fn run(api_url: String) -> Result<()> {
    crate::tui_shell::run(api_url)
}
