//! Headless state of the "Yojana Saathi" scheme advisor widget.
//!
//! The widget walks the citizen through three steps: a profile form, the
//! list of matched schemes, and a free chat with the advisor. Every request
//! goes out with the current profile and language; replies of superseded
//! requests are dropped.

use contracts::usecases::u501_scheme_chat::{
    ChatMessage, Scheme, SchemeChatResponse, SchemeLanguage, SchemeProfile,
};

use super::api::ask_scheme_bot;
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::http::ApiClient;
use crate::shared::request_guard::{RequestGuard, RequestTicket};

pub const OCCUPATIONS: [&str; 8] = [
    "Farmer / किसान",
    "Student / छात्र",
    "Labor / मजदूर",
    "Self-Employed / व्यापारी",
    "Housewife / गृहिणी",
    "Street Vendor / रेहड़ी",
    "Unemployed / बेरोजगार",
    "Other / अन्य",
];

pub const CASTES: [&str; 4] = [
    "General / सामान्य",
    "OBC",
    "SC / अनुसूचित जाति",
    "ST / अनुसूचित जनजाति",
];

pub const EDUCATIONS: [&str; 7] = [
    "Illiterate / अनपढ़",
    "Primary (1-5)",
    "Middle (6-8)",
    "Matriculate (10th)",
    "Intermediate (12th)",
    "Graduate / स्नातक",
    "Post-Graduate / परास्नातक",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChatStep {
    #[default]
    Profile,
    Results,
    Chat,
}

#[derive(Debug, Default)]
pub struct SchemeChatWidget {
    step: ChatStep,
    lang: SchemeLanguage,
    pub profile: SchemeProfile,
    schemes: Vec<Scheme>,
    history: Vec<ChatMessage>,
    pub chat_input: String,
    loading: bool,
    guard: RequestGuard,
}

impl SchemeChatWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> ChatStep {
        self.step
    }

    pub fn lang(&self) -> SchemeLanguage {
        self.lang
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn toggle_language(&mut self) {
        self.lang = self.lang.toggled();
    }

    /// Chips that prefill the chat input
    pub fn suggestions(&self) -> [&'static str; 4] {
        match self.lang {
            SchemeLanguage::Hindi => [
                "मुझे घर चाहिए",
                "रोजगार कैसे मिलेगा?",
                "स्वास्थ्य बीमा",
                "लड़की के लिए योजना",
            ],
            SchemeLanguage::English => [
                "I need housing",
                "Job opportunities?",
                "Health insurance",
                "Women schemes",
            ],
        }
    }

    pub fn use_suggestion(&mut self, suggestion: &str) {
        self.chat_input = suggestion.to_string();
    }

    pub fn placeholder(&self) -> &'static str {
        match self.lang {
            SchemeLanguage::Hindi => "कोई भी सवाल पूछें...",
            SchemeLanguage::English => "Ask anything about schemes...",
        }
    }

    /// Switch between the scheme list and the chat. The profile step is
    /// only left through [`Self::submit_profile`] and never re-entered.
    pub fn go_to(&mut self, step: ChatStep) -> bool {
        let allowed = matches!(
            (self.step, step),
            (ChatStep::Results, ChatStep::Chat)
                | (ChatStep::Chat, ChatStep::Results)
                | (ChatStep::Results, ChatStep::Results)
                | (ChatStep::Chat, ChatStep::Chat)
        );
        if allowed {
            self.step = step;
        }
        allowed
    }

    pub fn validate_profile(&self) -> ApiResult<()> {
        if self.profile.missing_required().is_empty() {
            return Ok(());
        }
        let message = match self.lang {
            SchemeLanguage::Hindi => "कृपया Age, Gender और Occupation जरूर भरें।",
            SchemeLanguage::English => "Please fill in Age, Gender and Occupation.",
        };
        Err(ApiError::Validation(message.into()))
    }

    /// Profile as sent with every request, tagged with the current language
    fn outgoing_profile(&self) -> SchemeProfile {
        SchemeProfile {
            lang: self.lang.code().to_string(),
            ..self.profile.clone()
        }
    }

    /// Validate the form and start the first request. Refused while another
    /// reply is pending.
    pub fn begin_profile(&mut self) -> ApiResult<(RequestTicket, SchemeProfile, &'static str)> {
        if self.loading {
            return Err(ApiError::Validation("A request is already in progress".into()));
        }
        self.validate_profile()?;
        self.loading = true;
        Ok((
            self.guard.begin(),
            self.outgoing_profile(),
            self.lang.initial_prompt(),
        ))
    }

    pub fn apply_profile(&mut self, ticket: RequestTicket, result: ApiResult<SchemeChatResponse>) {
        if !self.guard.is_current(ticket) {
            return;
        }
        self.loading = false;
        if let Ok(reply) = result {
            self.schemes = reply.schemes;
            self.history = vec![ChatMessage::bot(reply.response)];
            self.step = ChatStep::Results;
        }
    }

    pub async fn submit_profile(&mut self, api: &ApiClient) -> ApiResult<()> {
        let (ticket, profile, prompt) = self.begin_profile()?;
        let result = ask_scheme_bot(api, &profile, prompt).await;
        self.apply_profile(ticket, result);
        Ok(())
    }

    /// Take the chat input as the next question. `None` when the input is
    /// blank or a reply is still pending.
    pub fn begin_send(&mut self) -> Option<(RequestTicket, SchemeProfile, String)> {
        let text = self.chat_input.trim();
        if text.is_empty() || self.loading {
            return None;
        }
        let text = text.to_string();
        self.chat_input.clear();
        self.history.push(ChatMessage::user(text.clone()));
        self.loading = true;
        Some((self.guard.begin(), self.outgoing_profile(), text))
    }

    pub fn apply_reply(&mut self, ticket: RequestTicket, result: ApiResult<SchemeChatResponse>) {
        if !self.guard.is_current(ticket) {
            return;
        }
        self.loading = false;
        if let Ok(reply) = result {
            self.history.push(ChatMessage::bot(reply.response));
        }
    }

    /// Returns `false` when nothing was sent
    pub async fn send_message(&mut self, api: &ApiClient) -> bool {
        let Some((ticket, profile, text)) = self.begin_send() else {
            return false;
        };
        let result = ask_scheme_bot(api, &profile, &text).await;
        self.apply_reply(ticket, result);
        true
    }

    /// Closing the widget forgets everything, including pending replies
    pub fn close(&mut self) {
        self.guard.invalidate();
        let guard = std::mem::take(&mut self.guard);
        *self = Self {
            guard,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u501_scheme_chat::ChatRole;

    fn reply(text: &str, schemes: usize) -> SchemeChatResponse {
        SchemeChatResponse {
            response: text.into(),
            schemes_found: schemes,
            schemes: (0..schemes)
                .map(|i| Scheme {
                    name: format!("Scheme {}", i),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn filled() -> SchemeChatWidget {
        let mut widget = SchemeChatWidget::new();
        widget.profile.age = "28".into();
        widget.profile.gender = "male".into();
        widget.profile.occupation = "Farmer / किसान".into();
        widget
    }

    #[test]
    fn test_validation_is_localized() {
        let mut widget = SchemeChatWidget::new();
        let err = widget.begin_profile().unwrap_err();
        assert_eq!(err.to_string(), "कृपया Age, Gender और Occupation जरूर भरें।");
        assert!(!widget.is_loading());

        widget.toggle_language();
        let err = widget.validate_profile().unwrap_err();
        assert_eq!(err.to_string(), "Please fill in Age, Gender and Occupation.");
    }

    #[test]
    fn test_profile_reply_moves_to_results() {
        let mut widget = filled();
        let (ticket, profile, prompt) = widget.begin_profile().unwrap();
        assert_eq!(profile.lang, "hindi");
        assert_eq!(prompt, "मुझे मेरे लिए सरकारी योजनाएं बताइए");

        widget.apply_profile(ticket, Ok(reply("नमस्ते", 2)));
        assert_eq!(widget.step(), ChatStep::Results);
        assert_eq!(widget.schemes().len(), 2);
        assert_eq!(widget.history(), &[ChatMessage::bot("नमस्ते")]);
    }

    #[test]
    fn test_failed_profile_stays_put() {
        let mut widget = filled();
        let (ticket, _, _) = widget.begin_profile().unwrap();
        widget.apply_profile(ticket, Err(ApiError::Validation("down".into())));
        assert_eq!(widget.step(), ChatStep::Profile);
        assert!(!widget.is_loading());
    }

    #[test]
    fn test_blank_input_and_reentry_are_ignored() {
        let mut widget = filled();
        widget.chat_input = "   ".into();
        assert!(widget.begin_send().is_none());

        widget.chat_input = "I need housing".into();
        let (ticket, _, text) = widget.begin_send().unwrap();
        assert_eq!(text, "I need housing");
        assert!(widget.chat_input.is_empty());

        widget.chat_input = "again".into();
        assert!(widget.begin_send().is_none());

        widget.apply_reply(ticket, Ok(reply("PMAY", 0)));
        let roles: Vec<ChatRole> = widget.history().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::User, ChatRole::Bot]);
    }

    #[test]
    fn test_profile_refused_while_reply_pending() {
        let mut widget = filled();
        let (first, _, _) = widget.begin_profile().unwrap();
        assert!(widget.begin_profile().is_err());

        widget.apply_profile(first, Ok(reply("नमस्ते", 1)));
        assert_eq!(widget.step(), ChatStep::Results);
        assert_eq!(widget.schemes().len(), 1);
        assert!(!widget.is_loading());
    }

    #[test]
    fn test_step_navigation() {
        let mut widget = filled();
        assert!(!widget.go_to(ChatStep::Chat));
        assert!(!widget.go_to(ChatStep::Results));

        let (ticket, _, _) = widget.begin_profile().unwrap();
        widget.apply_profile(ticket, Ok(reply("hi", 0)));
        assert!(widget.go_to(ChatStep::Chat));
        assert!(widget.go_to(ChatStep::Results));
        assert!(!widget.go_to(ChatStep::Profile));
        assert_eq!(widget.step(), ChatStep::Results);
    }

    #[test]
    fn test_language_dependent_texts() {
        let mut widget = SchemeChatWidget::new();
        assert_eq!(widget.placeholder(), "कोई भी सवाल पूछें...");
        assert_eq!(widget.suggestions()[0], "मुझे घर चाहिए");
        widget.toggle_language();
        assert_eq!(widget.placeholder(), "Ask anything about schemes...");
        let chip = widget.suggestions()[3];
        widget.use_suggestion(chip);
        assert_eq!(widget.chat_input, "Women schemes");
    }

    #[test]
    fn test_close_drops_pending_reply() {
        let mut widget = filled();
        let (ticket, _, _) = widget.begin_profile().unwrap();
        widget.close();
        widget.apply_profile(ticket, Ok(reply("late", 1)));
        assert_eq!(widget.step(), ChatStep::Profile);
        assert!(widget.history().is_empty());
        assert_eq!(widget.profile, SchemeProfile::default());
    }
}
