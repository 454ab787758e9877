use std::fmt;

use uuid::Uuid;

/// Temporary reference to an allocated in-memory payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectUrl(Uuid);

impl ObjectUrl {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ObjectUrl {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blob:{}", self.0)
    }
}
