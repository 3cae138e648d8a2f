//! Key-value store for theme records
//!
//! This module provides a fast, type-safe key-value store using sled.
//! Values are JSON-encoded. The versioned operations wrap a value in an
//! envelope carrying a monotonically increasing version number so a
//! stale writer cannot overwrite a newer record.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sled::Db;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Storage error types
#[derive(Debug, Error)]
pub enum StorageError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database path
    pub path: String,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Enable compression
    pub use_compression: bool,
    /// Flush interval in milliseconds (None for immediate flush)
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: "huecraft_kv.db".to_string(),
            cache_capacity: 8 * 1024 * 1024, // 8MB
            use_compression: true,
            flush_every_ms: Some(500),
        }
    }
}

impl KvConfig {
    /// Create a new configuration with a custom path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Set cache capacity in bytes
    pub fn cache_capacity(mut self, bytes: u64) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Enable or disable compression
    pub fn use_compression(mut self, enabled: bool) -> Self {
        self.use_compression = enabled;
        self
    }

    /// Set flush interval in milliseconds
    pub fn flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }
}

/// Versioned envelope read back from the store
#[derive(Debug, Deserialize)]
struct VersionedOwned<T> {
    version: u64,
    data: T,
}

/// Versioned envelope written to the store (borrows the value)
#[derive(Serialize)]
struct VersionedRef<'a, T> {
    version: u64,
    data: &'a T,
}

/// Key-value store implementation
#[derive(Clone)]
pub struct KvStore {
    db: Arc<Db>,
}

impl KvStore {
    /// Open a key-value store with configuration
    pub fn open(config: KvConfig) -> Result<Self> {
        let mut db_config = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity)
            .use_compression(config.use_compression);

        if let Some(ms) = config.flush_every_ms {
            db_config = db_config.flush_every_ms(Some(ms));
        }

        let db = db_config.open()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Create an in-memory key-value store (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Get a value by key
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.db.get(key.as_bytes())? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value by key
    pub fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec(value)?;
        self.db.insert(key.as_bytes(), bytes)?;
        Ok(())
    }

    /// Get a versioned value, returning the value and its version
    ///
    /// Records written before versioning existed deserialize as the bare
    /// value and are treated as version 0.
    pub fn get_versioned<T>(&self, key: &str) -> Result<Option<(T, u64)>>
    where
        T: DeserializeOwned,
    {
        let Some(bytes) = self.db.get(key.as_bytes())? else {
            return Ok(None);
        };

        if let Ok(envelope) = serde_json::from_slice::<VersionedOwned<T>>(&bytes) {
            return Ok(Some((envelope.data, envelope.version)));
        }

        let value: T = serde_json::from_slice(&bytes)?;
        Ok(Some((value, 0)))
    }

    /// Set a versioned value, refusing writes that are not newer
    ///
    /// Returns `Ok(true)` when the record was written, `Ok(false)` when a
    /// record with an equal or higher version already exists.
    pub fn set_versioned<T>(&self, key: &str, value: &T, version: u64) -> Result<bool>
    where
        T: Serialize + DeserializeOwned,
    {
        if let Some((_, current)) = self.get_versioned::<T>(key)? {
            if version <= current {
                warn!(key, version, current, "Discarding stale versioned write");
                return Ok(false);
            }
        }

        let bytes = serde_json::to_vec(&VersionedRef { version, data: value })?;
        self.db.insert(key.as_bytes(), bytes)?;
        Ok(true)
    }

    /// Remove a value by key
    pub fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.db.remove(key.as_bytes())?.is_some())
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.db.contains_key(key.as_bytes())?)
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }

    /// Get the number of keys in the store
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}
