//! User identity persistence settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Key the identity token is stored under.
    pub storage_key: String,
    /// Leading segment of generated tokens (`<prefix>_<millis>_<random>`).
    pub prefix: String,
    /// Storage file override. Defaults to `<data_dir>/webchat/storage.json`.
    pub store_path: Option<String>,
    /// When false, no store is used and a fresh token is generated per call.
    pub persist: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            storage_key: "chatUserId".into(),
            prefix: "user".into(),
            store_path: None,
            persist: true,
        }
    }
}
