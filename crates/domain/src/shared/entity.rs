use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

pub trait Entity {
    fn id(&self) -> &ID;
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Opaque string identifier. An empty `ID` marks a transient entity that has
/// not been persisted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ID(String);

impl ID {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn inner(self) -> String {
        self.0
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ID {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ID {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_id_is_transient() {
        let id = ID::default();
        assert!(id.is_empty());
        assert_eq!(id.to_string(), "");
    }

    #[test]
    fn generated_ids_are_unique() {
        let id1 = ID::new();
        let id2 = ID::new();
        assert!(!id1.is_empty());
        assert_ne!(id1, id2);
    }

    #[test]
    fn id_round_trips_through_string() {
        let id = ID::from("event-42");
        assert_eq!(id.as_str(), "event-42");
        assert_eq!(ID::from(id.clone().inner()), id);
    }
}
