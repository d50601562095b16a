use std::time::Duration;

use crate::parse::READ_CHUNK_SIZE;

/// The config for a request listener.
#[derive(Debug, Clone)]
pub struct Config {
    /// The address to bind the listener to. Port 0 picks a free port.
    pub addr: String,
    /// The number of threads to spawn for handling connections. Each thread is used for one
    /// connection at a time.
    pub connection_handler_threads: usize,
    /// The most bytes asked of a socket in one read.
    pub read_chunk_size: usize,
    /// Read timeout applied to every accepted socket. None blocks forever.
    pub read_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            addr: String::from("127.0.0.1:42069"),
            connection_handler_threads: 5,
            read_chunk_size: READ_CHUNK_SIZE,
            read_timeout: None,
        }
    }
}
