use std::path::PathBuf;

use anyhow::Result;

/// Default session file name; mirrors the storage key the original web
/// client used for the cached identity.
const DEFAULT_SESSION_FILE: &str = ".crew-user.json";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub session_file: PathBuf,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let session_file = std::env::var("PORTAL_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));
        Ok(Self { session_file })
    }
}
