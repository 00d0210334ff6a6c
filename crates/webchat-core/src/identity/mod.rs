//! User identity: a stable correlation token kept in client-local storage.

mod provider;
mod store;

#[cfg(test)]
mod tests;

pub use provider::{generate_token, UserIdentity, DEFAULT_PREFIX, DEFAULT_STORAGE_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
