use clap::Parser;

/// webchat — talk to a chat webhook from the terminal.
#[derive(Parser, Debug)]
#[command(name = "webchat", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Webhook URL override.
    #[arg(long)]
    pub webhook_url: Option<String>,

    /// Log level override (debug, info, warn, error) or a full filter directive.
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
