use std::fmt::{self, Display};

use uuid::Uuid;

/// Strongly typed ID for portfolio projects.
///
/// Every gallery widget on a page belongs to exactly one project card, so
/// project identity doubles as widget identity for scoped state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectID(pub Uuid);

impl Default for ProjectID {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectID {
    pub fn new() -> Self {
        ProjectID(Uuid::now_v7())
    }

    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for ProjectID {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ProjectID {
    fn from(value: Uuid) -> Self {
        ProjectID(value)
    }
}

impl Display for ProjectID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
