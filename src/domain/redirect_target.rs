use std::fmt;

use super::processor_selection::ProcessorSelection;

/// Where a redirect sends the client. `Display` renders the exact
/// `Location` header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    path: String,
    query: Option<String>,
}

impl RedirectTarget {
    pub fn path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
        }
    }

    pub fn with_selection(mut self, selection: ProcessorSelection) -> Self {
        self.query = Some(selection.to_query());
        self
    }

    pub fn path_str(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.query {
            Some(query) => write!(f, "{}?{}", self.path, query),
            None => f.write_str(&self.path),
        }
    }
}
