// Connection handling module
// Serves a single accepted TCP connection in a spawned task

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::ServerState;
use crate::handler;
use crate::logger;

/// Serve one connection on its own task.
///
/// Each request on the connection is handled independently through
/// `handler::handle_request`; nothing is shared between requests beyond
/// the read-only server state, so tasks need no coordination.
pub fn spawn_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: Arc<ServerState>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let service = service_fn(move |req| {
            let state = Arc::clone(&state);
            async move { handler::handle_request(req, peer_addr, state).await }
        });

        let conn = http1::Builder::new()
            .keep_alive(true)
            .serve_connection(io, service);

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
