//! Command-line and environment configuration.
//!
//! Every flag can also be supplied through a `RECEIPT_PROCESSOR_*`
//! environment variable; flags win over the environment.

use clap::{Args, Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(
        long,
        global = true,
        env = "RECEIPT_PROCESSOR_LOG_LEVEL",
        default_value = "info"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve(ServerConfig),
    /// Score a single receipt JSON document and print its points
    Score(ScoreArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "RECEIPT_PROCESSOR_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "RECEIPT_PROCESSOR_PORT", default_value_t = 8080)]
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ScoreArgs {
    /// Receipt JSON file, or `-` to read from stdin
    pub input: PathBuf,

    /// Print the points awarded by each rule before the total
    #[arg(long)]
    pub breakdown: bool,
}

impl ScoreArgs {
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}
