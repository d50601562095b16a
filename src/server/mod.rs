pub use config::*;
pub use connection::*;
pub use server::*;

/// Entry point for starting a listener.
mod server;
/// Config for a listener.
mod config;
/// Connection for reading a request from a client.
mod connection;
