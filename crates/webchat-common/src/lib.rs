pub mod errors;
pub mod events;
pub mod id;
pub mod notifications;
pub mod types;

pub use errors::{ConfigError, StorageError, WebchatError};
pub use events::{ChatEvent, EventBus};
pub use id::{new_correlation_id, new_id, SessionId};
pub use notifications::{ErrorBanner, ERROR_BANNER_TEXT, ERROR_BANNER_TTL};
pub use types::{iso_timestamp_now, ConversationState, Message, Sender};

pub type Result<T> = std::result::Result<T, WebchatError>;
