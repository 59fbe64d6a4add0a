//! Cached identity, persisted as a JSON file between invocations.
//!
//! This is the only durable state in the portal. A file that fails to parse
//! is cleared and treated as "not logged in", matching the original client's
//! handling of its cached user record.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use entity::Principal;
use tracing::warn;

pub fn save(path: &Path, principal: &Principal) -> Result<()> {
    let json = serde_json::to_string_pretty(principal)?;
    fs::write(path, json).with_context(|| format!("writing session file {}", path.display()))
}

pub fn load(path: &Path) -> Option<Principal> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(principal) => Some(principal),
        Err(err) => {
            warn!(%err, "session file unreadable; clearing it");
            let _ = fs::remove_file(path);
            None
        }
    }
}

pub fn clear(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("removing session file {}", path.display()))?;
    }
    Ok(())
}
