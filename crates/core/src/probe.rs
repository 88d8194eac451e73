use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::console::{paint, BLUE, BOLD, CYAN, GREEN, RED, RESET, YELLOW};

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("invalid host: {0}")]
    BadHost(#[from] url::ParseError),
    #[error("Request timeout")]
    Timeout,
    #[error("Connection failed")]
    ConnectionFailed,
    #[error("Invalid JSON response")]
    InvalidJson { body: String },
    #[error("{0}")]
    Other(String),
}

/// One probe invocation: a single GET against the JSON search API, no
/// retries.
#[derive(Clone, Debug)]
pub struct ProbeRequest {
    pub query: String,
    pub host: String,
    pub mock_error: Option<String>,
    pub mock_delay: Option<u64>,
    /// Print raw JSON only, for machine parsing.
    pub raw: bool,
}

/// A response that at least parsed as JSON. Any HTTP status counts as a
/// probe success; the payload speaks for itself.
#[derive(Debug)]
pub struct ProbeResponse {
    pub status: u16,
    pub json: serde_json::Value,
}

/// The fields the summary renders. Everything is optional so partial or
/// unknown payloads still display.
#[derive(Debug, Default, Deserialize)]
pub struct SearchSummary {
    #[serde(default)]
    pub result_count: u64,
    #[serde(default)]
    pub results: Vec<SearchHit>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub title: Option<String>,
    pub format: Option<String>,
    pub file_size: Option<String>,
    pub language: Option<String>,
}

impl SearchSummary {
    /// Best-effort extraction; payloads that do not match the expected
    /// shape summarize as empty rather than failing.
    pub fn from_value(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

/// `http://{host}/api/search?q={query}` plus mock-parameter passthrough.
pub fn build_url(req: &ProbeRequest) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!("http://{}/api/search", req.host))?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("q", &req.query);
        if let Some(code) = &req.mock_error {
            pairs.append_pair("_mock_error", code);
        }
        if let Some(secs) = req.mock_delay {
            pairs.append_pair("_mock_delay", &secs.to_string());
        }
    }
    Ok(url)
}

fn classify(err: reqwest::Error) -> ProbeError {
    if err.is_timeout() {
        ProbeError::Timeout
    } else if err.is_connect() {
        ProbeError::ConnectionFailed
    } else {
        ProbeError::Other(err.to_string())
    }
}

/// Issue the GET with a 30 second client-side timeout and parse the body
/// as JSON. One request, one attempt.
pub async fn fetch_report(url: &Url) -> Result<ProbeResponse, ProbeError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| ProbeError::Other(e.to_string()))?;

    let response = client.get(url.clone()).send().await.map_err(classify)?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(classify)?;
    let json = serde_json::from_str(&body).map_err(|_| ProbeError::InvalidJson { body })?;
    Ok(ProbeResponse { status, json })
}

/// Run the probe end to end and print the outcome. Returns the process
/// exit code: 0 for any response that parsed as JSON, 1 for everything
/// else (timeout, connection failure, non-JSON body).
pub async fn run(req: &ProbeRequest) -> i32 {
    let url = match build_url(req) {
        Ok(url) => url,
        Err(e) => {
            report_failure(&ProbeError::BadHost(e), req);
            return 1;
        }
    };

    if !req.raw {
        print_preamble(req, &url);
    }

    match fetch_report(&url).await {
        Ok(response) => {
            render(&response, req.raw);
            0
        }
        Err(err) => {
            report_failure(&err, req);
            1
        }
    }
}

fn print_header(text: &str) {
    let bar = "=".repeat(50);
    println!("\n{}", paint(&bar, BLUE));
    println!("{BLUE}{text:^50}{RESET}");
    println!("{}\n", paint(&bar, BLUE));
}

fn print_preamble(req: &ProbeRequest, url: &Url) {
    print_header("AudiobookBay API Test");
    println!("{}      {}", paint("Query:", CYAN), req.query);
    println!("{}       {}", paint("Host:", CYAN), req.host);
    println!("{}        {}", paint("URL:", CYAN), url);
    if let Some(code) = &req.mock_error {
        println!("{} {}", paint("Mock Error:", YELLOW), code);
    }
    if let Some(secs) = req.mock_delay {
        println!("{} {}s", paint("Mock Delay:", YELLOW), secs);
    }
    println!();
}

fn render(response: &ProbeResponse, raw: bool) {
    let pretty = serde_json::to_string_pretty(&response.json)
        .unwrap_or_else(|_| response.json.to_string());
    if raw {
        println!("{pretty}");
        return;
    }

    if response.status == 200 {
        println!("{}\n", paint(&format!("✓ HTTP {}", response.status), GREEN));
    } else {
        println!("{}\n", paint(&format!("✗ HTTP {}", response.status), RED));
    }
    println!("{pretty}\n");

    let summary = SearchSummary::from_value(&response.json);
    println!("{}", paint(&"=".repeat(50), BLUE));
    println!("{CYAN}{BOLD}Summary:{RESET}");
    println!("  Results: {}", paint(&summary.result_count.to_string(), GREEN));

    if let Some(first) = summary.results.first() {
        let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "N/A".to_string());
        println!("\n{CYAN}{BOLD}First Result:{RESET}");
        println!("  Title:    {}", field(&first.title));
        println!("  Format:   {}", field(&first.format));
        println!("  Size:     {}", field(&first.file_size));
        println!("  Language: {}", field(&first.language));
    }
    if let Some(warning) = &summary.warning {
        println!("\n{}", paint(&format!("⚠ Warning: {warning}"), YELLOW));
    }
    if let Some(error) = &summary.error {
        println!("\n{}", paint(&format!("✗ Error: {error}"), RED));
    }
    println!("{}\n", paint(&"=".repeat(50), BLUE));
}

fn report_failure(err: &ProbeError, req: &ProbeRequest) {
    if req.raw {
        match err {
            // Raw mode passes a non-JSON body through untouched.
            ProbeError::InvalidJson { body } => println!("{body}"),
            other => println!("{}", serde_json::json!({ "error": other.to_string() })),
        }
        return;
    }

    println!("{}", paint(&format!("✗ {err}"), RED));
    match err {
        ProbeError::ConnectionFailed => {
            println!("\nIs the server running on {}?", req.host);
        }
        ProbeError::InvalidJson { body } => {
            let excerpt: String = body.chars().take(500).collect();
            println!("\n{}", paint("Response body:", YELLOW));
            println!("{excerpt}");
        }
        _ => {}
    }
}
