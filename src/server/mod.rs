// Server module entry point
// Accept loop and graceful shutdown handling

pub mod connection;
pub mod listener;
pub mod shutdown;

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::ServerState;
use crate::logger;

pub use listener::create_listener;

/// Accept connections forever, spawning a task per connection.
///
/// Accept errors are logged and non-fatal; the loop itself only ends
/// when the surrounding future is dropped (see [`serve`]).
pub async fn run(listener: TcpListener, state: Arc<ServerState>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                connection::spawn_connection(stream, peer_addr, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

/// Run the accept loop until a shutdown signal arrives.
pub async fn serve(listener: TcpListener, state: Arc<ServerState>) {
    tokio::select! {
        () = run(listener, state) => {}
        () = shutdown::wait_for_signal() => {}
    }
}
