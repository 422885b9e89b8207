use std::sync::Arc;

use spaserve::config::{Config, ServerState};
use spaserve::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg)?;

    // Build the Tokio runtime, sizing the worker pool from config
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    // Bind failure is the one fatal startup error
    let listener = server::create_listener(addr)?;

    let state = Arc::new(ServerState::new(cfg));
    logger::log_server_start(&addr, state.root_dir(), &state.config);

    server::serve(listener, state).await;
    Ok(())
}
