//! Best-effort JSON persistence over a `KeyValueBackend`.

use super::KeyValueBackend;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// JSON view over a key/value backend.
///
/// Malformed data is a recoverable condition: `read` substitutes the
/// caller's fallback and `write` reports failure only through its return
/// value and the log.
#[derive(Debug, Clone)]
pub struct PersistentStore<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> PersistentStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns the value stored under `key`, or `fallback` when the entry is
    /// absent, empty, unreadable or does not deserialize as `T`.
    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return fallback,
            Err(err) => {
                warn!(
                    "event=store_read module=store status=fallback key={key} reason=backend_error error={err}"
                );
                return fallback;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "event=store_read module=store status=fallback key={key} reason=malformed error={err}"
                );
                fallback
            }
        }
    }

    /// Serializes `value` under `key`. Returns whether it was stored.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    "event=store_write module=store status=skipped key={key} reason=serialize error={err}"
                );
                return false;
            }
        };

        match self.backend.set(key, &raw) {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    "event=store_write module=store status=skipped key={key} reason=backend_error error={err}"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PersistentStore;
    use crate::store::{KeyValueBackend, MemoryBackend};

    #[test]
    fn read_returns_fallback_for_absent_empty_and_malformed() {
        let backend = MemoryBackend::new();
        let store = PersistentStore::new(backend.clone());

        assert_eq!(store.read("missing", 7_u32), 7);

        backend.set("empty", "").unwrap();
        assert_eq!(store.read("empty", 7_u32), 7);

        backend.set("bad", "{not json").unwrap();
        assert_eq!(store.read("bad", 7_u32), 7);

        backend.set("wrong_type", "\"text\"").unwrap();
        assert_eq!(store.read("wrong_type", 7_u32), 7);
    }

    #[test]
    fn write_then_read_roundtrips() {
        let store = PersistentStore::new(MemoryBackend::new());
        assert!(store.write("numbers", &vec![1, 2, 3]));
        assert_eq!(store.read::<Vec<i32>>("numbers", Vec::new()), vec![1, 2, 3]);
    }

    #[test]
    fn write_failure_is_reported_not_raised() {
        let store = PersistentStore::new(MemoryBackend::with_quota(4));
        assert!(!store.write("too_long", "value"));
        assert_eq!(store.read("too_long", String::from("default")), "default");
    }
}
