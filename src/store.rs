use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Well-known keys shared with the presentation layer.
pub const USER_DATA_KEY: &str = "userData";
pub const PERSONA_KEY: &str = "persona";
pub const MISSIONS_KEY: &str = "missions";
pub const NOTIFICATIONS_KEY: &str = "notifications";

/// Key-value storage abstraction standing in for browser local storage, so
/// the engine modules can be exercised in isolation.
pub trait StateStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    fn put(&self, key: &str, value: Value) -> Result<(), StoreError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("malformed stored payload: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("state file unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Read a key and deserialize it, treating an absent key as `None`.
pub fn read_typed<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: StateStore + ?Sized,
{
    match store.get(key)? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Serialize and write a value wholesale under a key.
pub fn write_typed<T, S>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize,
    S: StateStore + ?Sized,
{
    store.put(key, serde_json::to_value(value)?)
}

/// Volatile store used by tests and the seeded demo flow.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Single-document JSON file store backing the CLI demo, mirroring how the
/// browser build keeps everything under one local-storage namespace.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_document(&self) -> Result<Map<String, Value>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(Map::new()),
            Ok(raw) => match serde_json::from_str::<Value>(&raw)? {
                Value::Object(map) => Ok(map),
                other => Err(StoreError::Unavailable(format!(
                    "state file must hold a JSON object, found {other}"
                ))),
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    fn save_document(&self, document: &Map<String, Value>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&Value::Object(document.clone()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.load_document()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut document = self.load_document()?;
        document.insert(key.to_string(), value);
        self.save_document(&document)
    }
}
