use std::io::Write;

use abbmock_core::console::{paint, BLUE, GREEN, YELLOW};
use abbmock_core::{serve, AppState, FixtureStore};
use clap::Parser;

#[derive(Parser)]
#[command(version, about = "Mock AudiobookBay server for scraper testing")]
struct Cli {
    /// Port to listen on
    #[arg(long, default_value_t = 9999)]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Fixture root directory (containing search/ and detail/)
    #[arg(long, default_value = "mock_data", value_name = "DIR")]
    fixtures: String,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Request lines carry their own color and layout; keep env_logger's
    // decorations out of them.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let cli = Cli::parse();
    let state = AppState::new(FixtureStore::new(&cli.fixtures));

    let bar = "=".repeat(60);
    println!("\n{}", paint(&bar, BLUE));
    println!("{}", paint("Mock AudiobookBay Server", BLUE));
    println!("{}\n", paint(&bar, BLUE));
    println!(
        "Running on: {}",
        paint(&format!("http://{}:{}", cli.host, cli.port), GREEN)
    );
    println!(
        "Health check: {}",
        paint(&format!("http://localhost:{}/health", cli.port), GREEN)
    );
    println!("\nAvailable test queries:");
    for query in state.queries().phrases() {
        println!("  {} {}", paint("✓", GREEN), query);
    }
    println!(
        "\n{}",
        paint("Tip: Add ?_mock_error=507 to simulate rate limiting", YELLOW)
    );
    println!("{}\n", paint(&bar, BLUE));

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    serve(listener, state).await
}
