use serde::{Deserialize, Serialize};

/// Location scope applied to the officer-level aggregate endpoints.
///
/// Only the keys that carry a value are emitted, always in the order
/// state, district, block, village.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village_id: Option<String>,
}

impl LocationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(mut self, id: impl Into<String>) -> Self {
        self.state_id = Some(id.into());
        self
    }

    pub fn district(mut self, id: impl Into<String>) -> Self {
        self.district_id = Some(id.into());
        self
    }

    pub fn block(mut self, id: impl Into<String>) -> Self {
        self.block_id = Some(id.into());
        self
    }

    pub fn village(mut self, id: impl Into<String>) -> Self {
        self.village_id = Some(id.into());
        self
    }

    /// Present, non-empty filter keys in their fixed order.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("state_id", &self.state_id),
            ("district_id", &self.district_id),
            ("block_id", &self.block_id),
            ("village_id", &self.village_id),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }
}
