use once_cell::sync::Lazy;

/// Normalize a raw search query for table lookup and fixture naming:
/// lowercase, trim surrounding whitespace, then map every space and `+`
/// (a URL-encoding leftover) to `_`.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase().replace([' ', '+'], "_")
}

/// Ordered mapping of canonical search phrases to fixture-file stems.
/// Lookup order matters: the first entry whose normalized phrase equals
/// the normalized input wins.
#[derive(Clone, Debug)]
pub struct KnownQueries {
    entries: Vec<(String, String)>,
}

static DEFAULT_QUERIES: Lazy<KnownQueries> = Lazy::new(|| {
    KnownQueries::new(vec![
        ("christmas carol", "christmas_carol"),
        ("crime and punishment", "crime_and_punishment"),
        ("holy bible", "holy_bible"),
        ("test", "test"),
    ])
});

impl KnownQueries {
    pub fn new<P, S>(entries: Vec<(P, S)>) -> Self
    where
        P: Into<String>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(phrase, stem)| (phrase.into(), stem.into()))
                .collect(),
        }
    }

    /// Fixture stem for a query, insensitive to case, surrounding
    /// whitespace, and `+`-for-space substitution.
    pub fn stem_for(&self, query: &str) -> Option<&str> {
        let wanted = normalize_query(query);
        self.entries
            .iter()
            .find(|(phrase, _)| normalize_query(phrase) == wanted)
            .map(|(_, stem)| stem.as_str())
    }

    /// Canonical phrases in their original, non-normalized form and
    /// original order.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(phrase, _)| phrase.as_str())
    }
}

/// The queries captured in the stock fixture set.
impl Default for KnownQueries {
    fn default() -> Self {
        DEFAULT_QUERIES.clone()
    }
}
