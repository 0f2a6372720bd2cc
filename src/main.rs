//! `sources-connect`: establish a TCP connection through the retry harness.
//!
//! Useful for checking a policy file against a live (or not yet live)
//! dependency before wiring it into an application.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpStream;

use sources::config::{load_config, SourcesConfig};
use sources::observability::logging;
use sources::{Establisher, Source};

#[derive(Parser)]
#[command(name = "sources-connect")]
#[command(about = "Establish a TCP connection using a retry policy", long_about = None)]
struct Cli {
    /// Policy file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Source name whose policy to apply.
    #[arg(short, long, default_value = "tcp")]
    name: String,

    /// Stop waiting after this many seconds.
    #[arg(short, long)]
    timeout_secs: Option<u64>,

    /// Address to connect to, e.g. 127.0.0.1:5432.
    address: String,
}

struct TcpSource {
    address: String,
}

impl Source for TcpSource {
    type Connection = TcpStream;
    type Error = std::io::Error;

    async fn connect(&self) -> std::io::Result<TcpStream> {
        TcpStream::connect(self.address.as_str()).await
    }

    fn is_open(&self, stream: &TcpStream) -> bool {
        stream.peer_addr().is_ok()
    }

    fn name(&self) -> &'static str {
        "tcp"
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SourcesConfig::default(),
    };
    logging::init(&config.logging.level);

    let policy = config.policy_for(&cli.name);
    tracing::info!(
        address = %cli.address,
        name = %cli.name,
        required = policy.required,
        retries = policy.retries,
        fallback_secs = policy.fallback.as_secs(),
        global = policy.global,
        "Establishing connection"
    );

    let establisher = Establisher::new(
        TcpSource {
            address: cli.address.clone(),
        },
        policy,
    );

    let stream = match cli.timeout_secs {
        Some(secs) => {
            match tokio::time::timeout(Duration::from_secs(secs), establisher.establish()).await {
                Ok(result) => result?,
                Err(_) => {
                    let stats = establisher.stats();
                    tracing::error!(
                        address = %cli.address,
                        attempts = stats.attempts,
                        "Gave up waiting for connection"
                    );
                    return Err(format!("no connection to {} within {}s", cli.address, secs).into());
                }
            }
        }
        None => establisher.establish().await?,
    };

    let stats = establisher.stats();
    println!(
        "connected to {} after {} attempt(s), {} backoff sleep(s), open: {}",
        stream.peer_addr()?,
        stats.attempts,
        stats.sleeps,
        establisher.is_open()
    );

    Ok(())
}
