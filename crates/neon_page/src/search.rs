//! Search box redirect logic

/// Default search engine prefix the query is appended to
pub const DEFAULT_ENGINE: &str = "https://www.google.com/search?q=";

/// Turns submitted text into a URL to open.
///
/// Anything that already looks like an address (starts with `http` or
/// contains a dot) passes through untouched; everything else becomes an
/// engine query with the text percent-encoded.
pub struct SearchBox {
    engine_base: String,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            engine_base: DEFAULT_ENGINE.to_string(),
        }
    }

    pub fn with_engine(base: impl Into<String>) -> Self {
        Self {
            engine_base: base.into(),
        }
    }

    /// The URL for a submission, or None for blank input
    pub fn submit(&self, input: &str) -> Option<String> {
        let query = input.trim();
        if query.is_empty() {
            return None;
        }
        if query.starts_with("http") || query.contains('.') {
            Some(query.to_string())
        } else {
            Some(format!("{}{}", self.engine_base, urlencoding::encode(query)))
        }
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}
