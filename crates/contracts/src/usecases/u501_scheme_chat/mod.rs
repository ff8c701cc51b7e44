pub mod request;
pub mod response;

pub use request::{SchemeChatRequest, SchemeLanguage, SchemeProfile, DEFAULT_SCHEME_PROMPT};
pub use response::{ChatMessage, ChatRole, Scheme, SchemeChatResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct SchemeChat;

impl UseCaseMetadata for SchemeChat {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "scheme_chat"
    }
}
