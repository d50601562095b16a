use std::io::Error;
use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use httpfromtcp::args::Args;
use httpfromtcp::common::request::Request;
use httpfromtcp::server::{Config, Server};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

fn main() -> Result<(), Error> {
    let args = Args::parse();

    TermLogger::init(args.log_level, simplelog::Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .map_err(Error::other)?;

    let server = Server::bind(Config {
        addr: format!("{}:{}", args.host, args.port),
        connection_handler_threads: args.threads,
        read_chunk_size: args.read_chunk_size,
        read_timeout: args.read_timeout_ms.map(Duration::from_millis),
    })?;

    server.serve(print_request)
}

/// Prints the request line and headers of the given request in one write, so output from
/// concurrent connections doesn't interleave.
fn print_request(_: SocketAddr, request: Request) {
    let mut out = format!(
        "Request line:\n- Method: {}\n- Target: {}\n- Version: {}\nHeaders:\n",
        request.method(), request.target(), request.version()
    );
    for (key, value) in request.headers.iter() {
        out.push_str(&format!("- {}: {}\n", key, value));
    }

    print!("{}", out);
}
