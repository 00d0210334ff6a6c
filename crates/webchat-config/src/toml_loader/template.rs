//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Webchat Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[webhook]
url = "http://localhost:5678/webhook/chat"
# request_timeout_secs = 30   # 1-600, unset = wait indefinitely
# connect_timeout_secs = 10   # 1-600

[identity]
# storage_key = "chatUserId"
# prefix = "user"
# store_path = ""             # default: <data dir>/webchat/storage.json
# persist = true

[widget]
# title = "AI Assistant"
# status_line = "Online - Ask me anything!"
# welcome = "Hi! I'm your AI assistant. How can I help you today?"
# start_open = false
# event_capacity = 64         # 1-4096

[logging]
# level = "INFO"              # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
