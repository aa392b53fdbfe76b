//! Persistent bearer-token storage.
//!
//! The token is the only piece of session state that survives a restart. It
//! lives in a small JSON key/value file under the key `token`, next to any
//! other keys the file already holds.

use super::SessionError;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

const TOKEN_KEY: &str = "token";

/// Where the bearer token is kept between runs.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, SessionError>;

    fn save(&self, token: &str) -> Result<(), SessionError>;

    /// Removing an absent token is not an error.
    fn remove(&self) -> Result<(), SessionError>;
}

/// JSON key/value file on disk.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(Map::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        let entries = self.read_entries()?;
        Ok(entries
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .map(str::to_owned))
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        let mut entries = self.read_entries()?;
        entries.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_entries(&entries)?;
        debug!(path = %self.path.display(), "Token saved");
        Ok(())
    }

    fn remove(&self) -> Result<(), SessionError> {
        let mut entries = self.read_entries()?;
        if entries.remove(TOKEN_KEY).is_some() {
            self.write_entries(&entries)?;
            debug!(path = %self.path.display(), "Token removed");
        }
        Ok(())
    }
}

/// Process-local token store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(self.token.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), SessionError> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).take();
        Ok(())
    }
}
