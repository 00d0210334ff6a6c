//! Configuration schema types for webchat.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod identity;
mod logging;
mod webhook;
mod widget;

pub use identity::*;
pub use logging::*;
pub use webhook::*;
pub use widget::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct WebchatConfig {
    pub webhook: WebhookConfig,
    pub identity: IdentityConfig,
    pub widget: WidgetConfig,
    pub logging: LoggingConfig,
}
