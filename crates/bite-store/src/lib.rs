//! Durable client-side key-value storage for the Bite cart.
//!
//! Provides a small synchronous store abstraction modelled on browser-local
//! storage, with JSON helpers on top.
//!
//! # Example
//!
//! ```rust,ignore
//! use bite_store::{keys, FileStore, KeyValueStore};
//!
//! let store = FileStore::open(".bite")?;
//!
//! // Store a value
//! store.set_json(keys::USER_PROFILE, &profile)?;
//!
//! // Retrieve a value
//! let profile: Option<Profile> = store.get_json(keys::USER_PROFILE)?;
//!
//! // Delete a value
//! store.delete(keys::USER_PROFILE)?;
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub mod keys;

pub use error::StoreError;
pub use file::FileStore;
pub use kv::KeyValueStore;
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{keys, FileStore, KeyValueStore, MemoryStore, StoreError};
}
