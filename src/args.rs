use clap::Parser;
use log::LevelFilter;

const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// Listens for TCP connections and prints every HTTP request head it receives.
#[derive(Parser, Debug)]
#[command(author = AUTHORS, version, about)]
pub struct Args {
    /// (Optional) Host name or IP address to listen on.
    #[arg(long, default_value_t = String::from("127.0.0.1"))]
    pub host: String,
    /// (Optional) Port number to open on host.
    #[arg(short, long, default_value_t = 42069)]
    pub port: u16,
    /// (Optional) Number of threads handling connections.
    #[arg(long, default_value_t = 5, value_parser = positive)]
    pub threads: usize,
    /// (Optional) Most bytes read from a socket at a time.
    #[arg(long, default_value_t = 8, value_parser = positive)]
    pub read_chunk_size: usize,
    /// (Optional) Drop connections that send nothing for this many milliseconds.
    #[arg(long)]
    pub read_timeout_ms: Option<u64>,
    /// (Optional) Log level: off, error, warn, info, debug or trace.
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

/// Parses a number that must be at least 1.
fn positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err(String::from("must be at least 1")),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}
