//! Identity token generation and reuse.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use tracing::{debug, warn};

use super::store::KeyValueStore;

pub const DEFAULT_STORAGE_KEY: &str = "chatUserId";
pub const DEFAULT_PREFIX: &str = "user";

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate `<prefix>_<unix millis>_<9 base36 chars>`.
pub fn generate_token(prefix: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{prefix}_{millis}_{suffix}")
}

/// Hands out the user's correlation token, creating it on first use.
///
/// Without a working store every call yields a fresh token.
#[derive(Clone)]
pub struct UserIdentity {
    store: Option<Arc<dyn KeyValueStore>>,
    key: String,
    prefix: String,
}

impl UserIdentity {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store: Some(store),
            key: DEFAULT_STORAGE_KEY.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// An identity with no backing store.
    pub fn ephemeral() -> Self {
        Self {
            store: None,
            key: DEFAULT_STORAGE_KEY.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get_or_create(&self) -> String {
        let Some(store) = &self.store else {
            debug!("no identity store, generating one-off user id");
            return generate_token(&self.prefix);
        };

        match store.get(&self.key) {
            Ok(Some(existing)) if !existing.is_empty() => existing,
            Ok(_) => {
                let token = generate_token(&self.prefix);
                if let Err(e) = store.set(&self.key, &token) {
                    warn!(error = %e, "failed to persist user id");
                }
                token
            }
            Err(e) => {
                warn!(error = %e, "identity store unavailable, generating one-off user id");
                generate_token(&self.prefix)
            }
        }
    }
}

impl std::fmt::Debug for UserIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserIdentity")
            .field("key", &self.key)
            .field("prefix", &self.prefix)
            .field("persistent", &self.store.is_some())
            .finish()
    }
}
