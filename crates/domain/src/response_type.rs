use std::fmt;

/// Tag describing which kind of stage terminated a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseType {
    /// Answered by a downstream (upstream-facing) resolver.
    Resolved,
    /// Answer synthesized by the safe-search stage.
    SafeSearch,
    /// Query was blocked by a filtering stage.
    Blocked,
    /// Answer served from a caching stage.
    Cached,
}

impl ResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::Resolved => "RESOLVED",
            ResponseType::SafeSearch => "SAFESEARCH",
            ResponseType::Blocked => "BLOCKED",
            ResponseType::Cached => "CACHED",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
