//! Input line parsing.

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open,
    Close,
    Toggle,
    History,
    WhoAmI,
    Help,
    Quit,
    /// Anything that is not a known slash command is chat text.
    Send(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "/open" => Command::Open,
            "/close" => Command::Close,
            "/toggle" => Command::Toggle,
            "/history" => Command::History,
            "/whoami" => Command::WhoAmI,
            "/help" => Command::Help,
            "/quit" | "/exit" => Command::Quit,
            _ => Command::Send(line.to_string()),
        }
    }
}

pub const HELP: &str = "\
commands:
  /open /close /toggle   show or hide the chat panel
  /history               reprint the conversation
  /whoami                show the user id sent to the webhook
  /quit                  exit
anything else is sent as a chat message";
