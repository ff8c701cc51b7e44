use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::wire::de_opt_id;

/// Citizen feedback on a project.
///
/// The body is free-form; only the id is normalized, everything else is
/// kept as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}
