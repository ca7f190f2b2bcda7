// Server module entry point
// Listener setup, accept loop and per-connection serving

pub mod connection;
pub mod listener;
pub mod server_loop;

pub use listener::create_reusable_listener;
pub use server_loop::start_server_loop;
