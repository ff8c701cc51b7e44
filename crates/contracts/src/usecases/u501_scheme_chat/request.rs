use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::shared::wire::parse_number;

/// Sent when the caller has no message of its own
pub const DEFAULT_SCHEME_PROMPT: &str = "मुझे मेरे लिए योजनाएं बताइए";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeLanguage {
    #[default]
    Hindi,
    English,
}

impl SchemeLanguage {
    pub fn code(&self) -> &'static str {
        match self {
            SchemeLanguage::Hindi => "hindi",
            SchemeLanguage::English => "english",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SchemeLanguage::Hindi => SchemeLanguage::English,
            SchemeLanguage::English => SchemeLanguage::Hindi,
        }
    }

    /// Opening question sent with a freshly submitted profile
    pub fn initial_prompt(&self) -> &'static str {
        match self {
            SchemeLanguage::Hindi => "मुझे मेरे लिए सरकारी योजनाएं बताइए",
            SchemeLanguage::English => "Show me government schemes for my profile",
        }
    }
}

/// Demographic form as typed by the citizen. Every field is raw input;
/// blank means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeProfile {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub education: String,
    pub occupation: String,
    pub income: String,
    pub caste: String,
    pub lang: String,
}

impl SchemeProfile {
    /// Fields that must be filled before asking for schemes
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("age", &self.age),
            ("gender", &self.gender),
            ("occupation", &self.occupation),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// Body of `POST /ai/schemes/chat`.
///
/// Blank profile fields are sent as explicit `null`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeChatRequest {
    pub message: String,
    pub age: Option<Number>,
    pub gender: Option<String>,
    pub education: Option<String>,
    pub occupation: Option<String>,
    pub income_per_month: Option<Number>,
    pub caste_category: Option<String>,
    pub lang: Option<String>,
}

fn non_blank(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl SchemeChatRequest {
    pub fn from_profile(profile: &SchemeProfile, message: &str) -> Self {
        let message = if message.is_empty() {
            DEFAULT_SCHEME_PROMPT
        } else {
            message
        };
        Self {
            message: message.to_string(),
            age: parse_number(&profile.age),
            gender: non_blank(&profile.gender),
            education: non_blank(&profile.education),
            occupation: non_blank(&profile.occupation),
            income_per_month: parse_number(&profile.income),
            caste_category: non_blank(&profile.caste),
            lang: non_blank(&profile.lang),
        }
    }
}
