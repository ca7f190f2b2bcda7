use std::sync::Arc;

use dispatch_kernel::{config, logger, modules, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1);
    let cfg = match config_path.as_deref() {
        Some(path) => config::Config::load_from(path)?,
        None => config::Config::load()?,
    };
    logger::init(&cfg)?;
    logger::log_info(&format!(
        "Configuration loaded from {}",
        config_path.as_deref().unwrap_or("config.toml (default)")
    ));

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let state: Arc<config::AppState> = config::AppState::shared(&cfg, modules::registry());
    logger::log_server_start(&addr, &cfg, state.registry.len());

    // Use LocalSet for spawn_local support
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::start_server_loop(listener, state))
        .await?;
    Ok(())
}
