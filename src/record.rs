//! Name record - one row of the `names` table

use serde::{Deserialize, Serialize};

/// A stored name with its storage-assigned identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    /// Assigned by the database on insert, never changed afterwards
    pub id: i64,
    pub name: String,
}

impl NameRecord {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

impl std::fmt::Display for NameRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let record = NameRecord::new(7, "Khushi");
        assert_eq!(record.to_string(), "7: Khushi");
    }

    #[test]
    fn test_serializes_as_object() {
        let record = NameRecord::new(1, "Alice");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "name": "Alice" }));
    }
}
