pub mod console;
pub mod fixtures;
pub mod probe;
pub mod query;
pub mod server;
pub mod simulate;

pub use fixtures::FixtureStore;
pub use probe::{ProbeError, ProbeRequest, ProbeResponse, SearchSummary};
pub use query::{normalize_query, KnownQueries};
pub use server::{build_router, serve, AppState};
pub use simulate::{parse_delay, ErrorDirective, TIMEOUT_STALL};
