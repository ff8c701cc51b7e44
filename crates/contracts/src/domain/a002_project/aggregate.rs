use serde::{Deserialize, Serialize};

use crate::shared::wire::{de_f64, de_id, de_opt_f64, de_opt_id, de_string};

/// Infrastructure project in a village
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_string")]
    pub name: String,
    #[serde(default, deserialize_with = "de_f64")]
    pub budget: f64,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub spent: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub village_id: Option<String>,
    /// Unbound when the contractor is deleted server-side
    #[serde(default, deserialize_with = "de_opt_id")]
    pub contractor_id: Option<String>,
}

impl Project {
    pub fn is_assigned(&self) -> bool {
        self.contractor_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// Create/update payload. Unset fields are left out of the JSON body
/// entirely, so the server sees exactly the keys the caller filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractor_id: Option<i64>,
}
