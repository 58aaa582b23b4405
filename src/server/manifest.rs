use std::path::Path;

use super::error::ServerError;

/// Files that must exist directly under the root before the listener opens.
/// Checked once at startup, never re-checked per request.
pub const REQUIRED_FILES: &[&str] = &["index.html", "styles.css", "script.js"];

pub fn check(root: &Path) -> Result<(), ServerError> {
    let missing: Vec<String> = REQUIRED_FILES
        .iter()
        .filter(|name| !root.join(name).is_file())
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ServerError::MissingFiles(missing))
    }
}
