use serde::{Deserialize, Serialize};

use crate::shared::wire::{de_id, de_string};

// ============================================================================
// Level
// ============================================================================

/// Position in the state → district → block → village hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationLevel {
    State,
    District,
    Block,
    Village,
}

impl LocationLevel {
    /// Path segment under `/locations`
    pub fn collection(&self) -> &'static str {
        match self {
            LocationLevel::State => "states",
            LocationLevel::District => "districts",
            LocationLevel::Block => "blocks",
            LocationLevel::Village => "villages",
        }
    }
}

// ============================================================================
// Wire record
// ============================================================================

/// Location row as the backend sends it
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationRecord {
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_string")]
    pub name: String,
    #[serde(default, deserialize_with = "de_string")]
    pub state_name: String,
    #[serde(default, deserialize_with = "de_string")]
    pub district_name: String,
    #[serde(default, deserialize_with = "de_string")]
    pub block_name: String,
    #[serde(default, deserialize_with = "de_string")]
    pub village_name: String,
}

impl LocationRecord {
    fn level_name(&self, level: LocationLevel) -> &str {
        match level {
            LocationLevel::State => &self.state_name,
            LocationLevel::District => &self.district_name,
            LocationLevel::Block => &self.block_name,
            LocationLevel::Village => &self.village_name,
        }
    }

    /// Collapse the alternative name columns into one display name.
    ///
    /// `name` wins when non-empty, then the level-specific column, then "".
    pub fn normalize(self, level: LocationLevel) -> LocationNode {
        let name = if !self.name.is_empty() {
            self.name.clone()
        } else {
            self.level_name(level).to_string()
        };
        LocationNode { id: self.id, name }
    }
}

// ============================================================================
// View model
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationNode {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> LocationRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_state_name_fallback() {
        let node = record(json!({"id": 1, "state_name": "Bihar"})).normalize(LocationLevel::State);
        assert_eq!(
            node,
            LocationNode {
                id: "1".into(),
                name: "Bihar".into()
            }
        );
    }

    #[test]
    fn test_generic_name_wins() {
        let node = record(json!({"id": "7", "name": "Patna", "district_name": "Old Patna"}))
            .normalize(LocationLevel::District);
        assert_eq!(node.name, "Patna");
        assert_eq!(node.id, "7");
    }

    #[test]
    fn test_empty_name_falls_through() {
        let node = record(json!({"id": 3, "name": "", "block_name": "Danapur"}))
            .normalize(LocationLevel::Block);
        assert_eq!(node.name, "Danapur");
    }

    #[test]
    fn test_other_level_column_is_ignored() {
        let node =
            record(json!({"id": 11, "district_name": "Gaya"})).normalize(LocationLevel::Village);
        assert_eq!(node.name, "");
    }

    #[test]
    fn test_null_name_defaults_to_empty() {
        let node = record(json!({"id": 5, "name": null, "village_name": null}))
            .normalize(LocationLevel::Village);
        assert_eq!(
            node,
            LocationNode {
                id: "5".into(),
                name: String::new(),
            }
        );
    }

    #[test]
    fn test_level_collections() {
        assert_eq!(LocationLevel::State.collection(), "states");
        assert_eq!(LocationLevel::Village.collection(), "villages");
    }
}
