use std::path::PathBuf;

use crate::query::KnownQueries;

/// Fallback page served for unknown queries and missing page files. Must
/// exist in `search/` for the resolver to be total.
pub const NO_RESULTS_FILE: &str = "no_results.html";

/// The single captured detail page.
pub const DETAIL_FILE: &str = "crime_and_punishment_detail.html";

/// Read-only view over the captured fixture tree: `search/` holds
/// `{stem}_page{N}.html` files plus `no_results.html`, `detail/` holds one
/// detail page. Nothing here is ever created or mutated.
#[derive(Clone, Debug)]
pub struct FixtureStore {
    root: PathBuf,
}

impl FixtureStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn search_dir(&self) -> PathBuf {
        self.root.join("search")
    }

    pub fn detail_dir(&self) -> PathBuf {
        self.root.join("detail")
    }

    /// Resolve a search request to a fixture path. Unknown queries and
    /// missing page files both fall back to `no_results.html`, so the
    /// returned path only fails to exist if the fixture tree itself is
    /// incomplete.
    pub fn search_file(&self, queries: &KnownQueries, query: &str, page: u32) -> PathBuf {
        if let Some(stem) = queries.stem_for(query) {
            let candidate = self.search_dir().join(format!("{stem}_page{page}.html"));
            if candidate.is_file() {
                return candidate;
            }
        }
        self.search_dir().join(NO_RESULTS_FILE)
    }

    /// The detail fixture, or `None` if it is absent on disk.
    ///
    /// The requested book slug is deliberately not consulted: only one
    /// detail fixture is supported, a known limitation of the capture
    /// set. A per-slug mapping would change observable behavior.
    pub fn detail_file(&self) -> Option<PathBuf> {
        let path = self.detail_dir().join(DETAIL_FILE);
        path.is_file().then_some(path)
    }
}
