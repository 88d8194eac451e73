use abbmock_core::probe::{self, ProbeRequest};
use clap::Parser;

#[derive(Parser)]
#[command(
    version,
    about = "Probe the AudiobookBay JSON search API",
    after_help = "Error codes:\n  \
        507      - Rate limit (Insufficient Storage)\n  \
        429      - Too Many Requests\n  \
        404      - Not Found\n  \
        500      - Server Error\n  \
        timeout  - Timeout (20 second delay)"
)]
struct Cli {
    /// Search query
    #[arg(default_value = "test")]
    query: String,

    /// API host
    #[arg(long, default_value = "localhost:5078")]
    host: String,

    /// Simulated error to request (507, 429, 404, 500, timeout)
    #[arg(long, value_name = "CODE")]
    error: Option<String>,

    /// Simulated response delay in seconds
    #[arg(long, value_name = "SECS")]
    delay: Option<u64>,

    /// Output raw JSON only (for machine parsing)
    #[arg(long)]
    raw: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let request = ProbeRequest {
        query: cli.query,
        host: cli.host,
        mock_error: cli.error,
        mock_delay: cli.delay,
        raw: cli.raw,
    };
    std::process::exit(probe::run(&request).await);
}
