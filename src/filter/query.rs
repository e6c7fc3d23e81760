//! Case-folded filter query.

/// Filter text folded to lowercase once, before matching.
///
/// Matching against every node compares lowercase haystacks with this
/// needle, so the fold must happen exactly once per keystroke rather than
/// once per node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterQuery(String);

impl FilterQuery {
    /// Fold user-entered text into a query.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self(text.to_lowercase())
    }

    /// The lowercased needle.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty query matches every node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for FilterQuery {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl std::fmt::Display for FilterQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
