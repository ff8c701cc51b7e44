use serde::{Deserialize, Serialize};

use crate::shared::wire::de_string;

/// Reply of `POST /ai/schemes/chat`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemeChatResponse {
    #[serde(default, deserialize_with = "de_string")]
    pub response: String,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub schemes_found: usize,
    #[serde(default)]
    pub scheme_names: Vec<String>,
    #[serde(default)]
    pub schemes: Vec<Scheme>,
}

/// One matched welfare scheme
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    #[serde(default)]
    pub name: String,
    /// Name in Hindi
    #[serde(default)]
    pub hindi: String,
    #[serde(default)]
    pub amount: String,
    /// Target group, `for` on the wire
    #[serde(rename = "for", default)]
    pub beneficiary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub how_to_apply: String,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Bot,
            text: text.into(),
        }
    }
}
