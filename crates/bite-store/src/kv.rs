//! Key-value store abstraction with JSON helpers.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};

/// A durable string key-value store.
///
/// Mirrors browser-local storage: string keys, string values, synchronous
/// calls. Implementations take `&self` so one store can be shared between
/// the components that own different slots.
pub trait KeyValueStore {
    /// Get the raw value stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a value. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }

    /// Get all keys in the store.
    fn keys(&self) -> Result<Vec<String>, StoreError>;

    /// Get a value and deserialize it from JSON.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let profile: Option<Profile> = store.get_json(keys::USER_PROFILE)?;
    /// ```
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize a value to JSON and store it.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// store.set_json(keys::USER_PROFILE, &profile)?;
    /// ```
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        (**self).exists(key)
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        (**self).keys()
    }
}

/// Reject `value` if it is larger than `quota` bytes.
pub(crate) fn check_quota(key: &str, value: &str, quota: Option<usize>) -> Result<(), StoreError> {
    match quota {
        Some(limit) if value.len() > limit => Err(StoreError::QuotaExceeded {
            key: key.to_string(),
            size: value.len(),
            limit,
        }),
        _ => Ok(()),
    }
}
