use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use tokio::net::TcpListener;

use crate::console::log_request;
use crate::fixtures::FixtureStore;
use crate::query::KnownQueries;
use crate::simulate::{parse_delay, ErrorDirective, TIMEOUT_STALL};

/// Read-only state shared by every handler. Cheap to clone; nothing in it
/// mutates after startup.
#[derive(Clone)]
pub struct AppState {
    fixtures: FixtureStore,
    queries: KnownQueries,
    timeout_stall: Duration,
}

impl AppState {
    pub fn new(fixtures: FixtureStore) -> Self {
        Self {
            fixtures,
            queries: KnownQueries::default(),
            timeout_stall: TIMEOUT_STALL,
        }
    }

    pub fn with_queries(mut self, queries: KnownQueries) -> Self {
        self.queries = queries;
        self
    }

    /// Override the simulated-timeout stall. Tests use this to keep the
    /// 408 path fast.
    pub fn with_timeout_stall(mut self, stall: Duration) -> Self {
        self.timeout_stall = stall;
        self
    }

    pub fn queries(&self) -> &KnownQueries {
        &self.queries
    }
}

/// Build the dispatcher's routing table. No listener is started here, so
/// the routes can be exercised in tests without touching the network.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/page/:page", get(search_page))
        .route("/page/:page/", get(search_page))
        .route("/audio-books/*slug", get(book_detail))
        .route("/abss/*slug", get(book_detail))
        .with_state(Arc::new(state))
}

/// Bind the dispatcher to an already-open listener and serve until the
/// process is killed.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, build_router(state)).await
}

/// Delay-then-error precedence chain, run before any fixture resolution.
/// Returns the short-circuit response if an error directive fired.
async fn simulation_gate(
    state: &AppState,
    params: &HashMap<String, String>,
    path: &str,
    note: &str,
) -> Option<Response> {
    if let Some(delay) = parse_delay(params.get("_mock_delay").map(String::as_str)) {
        log_request(200, "GET", path, &format!("(delaying {}s)", delay.as_secs()));
        tokio::time::sleep(delay).await;
    }

    let directive = ErrorDirective::parse(params.get("_mock_error").map(String::as_str))?;
    let status = directive.status();
    log_request(
        status.as_u16(),
        "GET",
        path,
        &format!("{note} ({})", directive.annotation()),
    );
    if directive == ErrorDirective::Timeout {
        tokio::time::sleep(state.timeout_stall).await;
    }
    Some(status.into_response())
}

/// `/page/{page}/?s={query}` with optional `_mock_error`/`_mock_delay`.
async fn search_page(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let path = uri.path();
    let query = params.get("s").cloned().unwrap_or_default();
    let note = format!("?s={query}");

    // Match the upstream's integer path converter: bad pages are a 404,
    // not a 400.
    let Ok(page) = page.parse::<u32>() else {
        log_request(404, "GET", path, &note);
        return StatusCode::NOT_FOUND.into_response();
    };

    if let Some(short_circuit) = simulation_gate(&state, &params, path, &note).await {
        return short_circuit;
    }

    let file = state.fixtures.search_file(&state.queries, &query, page);
    match tokio::fs::read_to_string(&file).await {
        Ok(body) => {
            log_request(200, "GET", path, &format!("{note} page={page}"));
            Html(body).into_response()
        }
        Err(_) => {
            log_request(404, "GET", path, &format!("{note} (file not found)"));
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// `/audio-books/{slug}` and `/abss/{slug}`. The slug is logged but does
/// not select a fixture; see [`FixtureStore::detail_file`].
async fn book_detail(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let path = uri.path();

    if let Some(short_circuit) = simulation_gate(&state, &params, path, &slug).await {
        return short_circuit;
    }

    let Some(file) = state.fixtures.detail_file() else {
        log_request(404, "GET", path, &format!("{slug} (no detail file)"));
        return StatusCode::NOT_FOUND.into_response();
    };
    match tokio::fs::read_to_string(&file).await {
        Ok(body) => {
            log_request(200, "GET", path, &slug);
            Html(body).into_response()
        }
        Err(_) => {
            log_request(404, "GET", path, &format!("{slug} (no detail file)"));
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    mock: bool,
    available_queries: Vec<String>,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthPayload> {
    Json(HealthPayload {
        status: "ok",
        mock: true,
        available_queries: state.queries.phrases().map(str::to_owned).collect(),
    })
}

async fn index(State(state): State<Arc<AppState>>) -> String {
    let queries_list: String = state
        .queries
        .phrases()
        .map(|q| format!("  - {q}\n"))
        .collect();

    format!(
        "\nMock AudiobookBay Server is Running!\n\
         \n\
         Available test queries:\n\
         {queries_list}  - (any other query will return no results)\n\
         \n\
         Example URLs:\n\
         \x20 - http://localhost:{{port}}/page/1/?s=test\n\
         \x20 - http://localhost:{{port}}/page/1/?s=crime+and+punishment\n\
         \x20 - http://localhost:{{port}}/audio-books/some-book-slug\n\
         \n\
         Error Simulation:\n\
         \x20 Add _mock_error parameter to simulate errors:\n\
         \x20 - http://localhost:{{port}}/page/1/?s=test&_mock_error=507    (Rate limit)\n\
         \x20 - http://localhost:{{port}}/page/1/?s=test&_mock_error=429    (Too many requests)\n\
         \x20 - http://localhost:{{port}}/page/1/?s=test&_mock_error=404    (Not found)\n\
         \x20 - http://localhost:{{port}}/page/1/?s=test&_mock_error=500    (Server error)\n\
         \x20 - http://localhost:{{port}}/page/1/?s=test&_mock_error=timeout (Timeout - 20s)\n\
         \n\
         \x20 Add _mock_delay parameter to add response delay:\n\
         \x20 - http://localhost:{{port}}/page/1/?s=test&_mock_delay=3      (3 second delay)\n\
         \n\
         Health Check:\n\
         \x20 - http://localhost:{{port}}/health\n"
    )
}
