use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;

use log::{debug, info, warn};

use crate::common::request::Request;
use crate::server::config::Config;
use crate::server::connection::Connection;
use crate::server::connection::ReadRequestResult::{Closed, Error, Ready};
use crate::util::thread_pool::ThreadPool;

/// A blocking TCP listener that parses one request head per connection.
pub struct Server {
    listener: TcpListener,
    config: Config,
}

impl Server {
    /// Binds a listener to the address in the given config.
    pub fn bind(config: Config) -> std::io::Result<Server> {
        let listener = TcpListener::bind(&config.addr)?;
        info!("Listening on {}", listener.local_addr()?);
        Ok(Server { listener, config })
    }

    /// The address the listener is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections forever. Each connection is read on the thread pool, and the request
    /// read from it, if any, is passed to the handler with the client's address. The connection is
    /// dropped right after, without a response.
    pub fn serve<H>(self, handler: H) -> std::io::Result<()>
        where
            H: Fn(SocketAddr, Request) + Send + Sync + 'static,
    {
        let thread_pool = ThreadPool::new(self.config.connection_handler_threads, "connection-handler")?;
        let handler = Arc::new(handler);
        let config = Arc::new(self.config);

        for stream in self.listener.incoming() {
            let stream = match stream {
                Ok(stream) => stream,
                Err(err) => {
                    warn!("Error accepting connection: {}", err);
                    continue;
                }
            };

            let handler = Arc::clone(&handler);
            let config = Arc::clone(&config);
            thread_pool.execute(move || handle_connection(&config, stream, handler.as_ref()));
        }

        Ok(())
    }
}

/// Reads one request from the given stream and passes it to the handler.
fn handle_connection(config: &Config, stream: TcpStream, handler: &impl Fn(SocketAddr, Request)) {
    let addr = match stream.peer_addr() {
        Ok(addr) => addr,
        Err(err) => {
            warn!("Dropping connection without a peer address: {}", err);
            return;
        }
    };

    debug!("Accepted connection from {}", addr);

    if let Err(err) = stream.set_read_timeout(config.read_timeout) {
        warn!("Could not set read timeout for {}: {}", addr, err);
        return;
    }

    let mut connection = Connection::new(addr, stream, config.read_chunk_size);

    match connection.read_request() {
        Ready(request) => handler(addr, request),
        Closed => debug!("Connection from {} closed without sending data", addr),
        Error(err) => warn!("Error reading request from {}: {}", addr, err),
    }

    debug!("Connection from {} done", addr);
}
