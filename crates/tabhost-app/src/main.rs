mod app;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use tabhost_common::TabhostError;
use tabhost_config::TabhostConfig;

/// `RUST_LOG` wins over the configured directive.
fn init_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> tabhost_common::Result<()> {
    let args = cli::parse();

    // Config is read before logging so its level can seed the filter.
    let loaded = tabhost_config::load_config(args.config.as_deref());
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => TabhostConfig::default(),
    };

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.directive().to_string());
    init_logging(&directive);

    tracing::info!("Tabhost v{} starting...", env!("CARGO_PKG_VERSION"));
    match loaded {
        Ok(_) => tracing::info!("Config loaded"),
        Err(e) => tracing::warn!("Config load failed, using defaults: {e}"),
    }

    let extension = config.extension.context();
    match extension.extension_id() {
        Some(id) => tracing::info!(extension = %id, "UI extension configured"),
        None => tracing::info!("No UI extension configured"),
    }

    let event_loop = EventLoop::new().map_err(|e| TabhostError::Window(e.to_string()))?;
    let mut app = app::TabhostApp::new(config, extension);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| TabhostError::Window(e.to_string()))?;
    tracing::info!("Shutdown complete");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("tabhost: {e}");
        std::process::exit(1);
    }
}
