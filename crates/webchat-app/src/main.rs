mod cli;
mod commands;
mod renderer;
mod repl;
mod setup;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::BufReader;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use webchat_config::WebchatConfig;

use crate::renderer::TerminalRenderer;

/// Log filter: `--log-level`, then `RUST_LOG`, then `logging.level`.
fn build_filter(cli_level: Option<&str>, config: Option<&WebchatConfig>) -> EnvFilter {
    let config_level = config
        .map(|c| c.logging.level.as_directive())
        .unwrap_or("info");

    let Some(level) = cli_level else {
        return EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("webchat={config_level}")));
    };

    let directive = if level.contains('=') {
        level.to_string()
    } else {
        format!("webchat={level}")
    };
    EnvFilter::from_default_env().add_directive(
        directive
            .parse::<Directive>()
            .unwrap_or_else(|_| LevelFilter::INFO.into()),
    )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Installed before config loading so loader logs are kept; the filter is
    // swapped once `logging.level` is known.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(args.log_level.as_deref(), None))
        .with_writer(std::io::stderr)
        .with_filter_reloading();
    let filter_handle = builder.reload_handle();
    builder.init();

    tracing::info!("webchat v{} starting...", env!("CARGO_PKG_VERSION"));

    let config_path = args.config.as_deref().map(Path::new);
    let mut config = match webchat_config::load_config(config_path) {
        Ok(config) => config,
        Err(e) if config_path.is_some() => {
            tracing::error!("Config load failed: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            WebchatConfig::default()
        }
    };

    if let Err(e) = filter_handle.reload(build_filter(args.log_level.as_deref(), Some(&config))) {
        tracing::warn!("Failed to apply configured log level: {e}");
    }

    if let Some(url) = args.webhook_url {
        config.webhook.url = url;
    }
    if let Err(e) = webchat_config::validation::validate(&config) {
        tracing::error!("{e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Webhook: {}", config.webhook.url);

    let session = match setup::build_session(&config) {
        Ok(session) => Arc::new(session),
        Err(e) => {
            tracing::error!("Failed to create chat session: {e}");
            return ExitCode::FAILURE;
        }
    };

    let renderer = TerminalRenderer::new(std::io::stdout(), config.widget.clone());
    let render_task = tokio::spawn(renderer::run(renderer, session.subscribe()));

    if config.widget.start_open {
        session.open();
    } else {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "type /open to start chatting, /help for commands");
    }

    let mut code = ExitCode::SUCCESS;
    if let Err(e) = repl::run(Arc::clone(&session), BufReader::new(tokio::io::stdin())).await {
        tracing::error!("Failed to read input: {e}");
        code = ExitCode::FAILURE;
    }

    // Last handle to the session: dropping it closes the event bus, so the
    // renderer drains what is left and returns.
    drop(session);
    match render_task.await {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => tracing::warn!("Renderer stopped: {e}"),
        Err(e) => tracing::warn!("Renderer task failed: {e}"),
    }

    tracing::info!("Shutdown complete");
    code
}
