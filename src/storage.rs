//! Durable local storage boundary.
//!
//! JSON key-value persistence for cart/wishlist state, analogous to browser
//! local storage. The disk backend keeps one `<key>.json` file per key under a
//! root directory; the in-memory backend serves tests and degraded operation.
//! Reads and writes never fail: failures are logged and fall back to defaults.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

#[derive(Debug)]
pub struct Storage {
    backend: Backend,
}

#[derive(Debug)]
enum Backend {
    Disk(PathBuf),
    Memory(Mutex<HashMap<String, String>>),
}

impl Storage {
    pub fn disk(root: impl Into<PathBuf>) -> Self {
        Self {
            backend: Backend::Disk(root.into()),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Mutex::new(HashMap::new())),
        }
    }

    /// Reads the value stored under `key`, or `default` when the key is
    /// missing, unreadable, or holds malformed JSON.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match &self.backend {
            Backend::Disk(root) => match fs::read_to_string(root.join(format!("{key}.json"))) {
                Ok(raw) => raw,
                Err(e) if e.kind() == ErrorKind::NotFound => return default,
                Err(e) => {
                    warn!(key, error = %e, "storage read failed, using default");
                    return default;
                }
            },
            Backend::Memory(map) => match lock(map).get(key).cloned() {
                Some(raw) => raw,
                None => return default,
            },
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "stored value malformed, using default");
                default
            }
        }
    }

    /// Writes `value` under `key`. Serialization or I/O failures are logged
    /// and swallowed; persistence is best-effort, never fatal.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize value, skipping write");
                return;
            }
        };
        match &self.backend {
            Backend::Disk(root) => {
                let result = fs::create_dir_all(root)
                    .and_then(|_| fs::write(root.join(format!("{key}.json")), &raw));
                if let Err(e) = result {
                    warn!(key, error = %e, "storage write failed");
                }
            }
            Backend::Memory(map) => {
                lock(map).insert(key.to_string(), raw);
            }
        }
    }
}

fn lock(map: &Mutex<HashMap<String, String>>) -> MutexGuard<'_, HashMap<String, String>> {
    map.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
