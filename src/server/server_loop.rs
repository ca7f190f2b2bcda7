// Server loop module
// Accepts connections until Ctrl-C

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config;
use crate::logger;

/// Accept connections until the process receives Ctrl-C.
///
/// Must run inside a `tokio::task::LocalSet`; connections are spawned locally.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<config::AppState>,
) -> std::io::Result<()> {
    let active_connections = Arc::new(AtomicUsize::new(0));
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            result = &mut shutdown => {
                logger::log_server_stop();
                return result;
            }
        }
    }
}
