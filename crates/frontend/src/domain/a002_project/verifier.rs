//! Headless state of the on-chain verification badge shown next to a
//! project.

use contracts::domain::a002_project::{ChainOutcome, ChainRecord};

use super::api::verify_project_on_chain;
use crate::shared::error::ApiResult;
use crate::shared::http::ApiClient;
use crate::shared::request_guard::{RequestGuard, RequestTicket};

/// Block explorer the badge links to
pub const EXPLORER_URL: &str = "https://lora.algokit.io/testnet";

#[derive(Debug, Clone, PartialEq)]
pub enum VerifierState {
    Loading,
    /// No record on chain, or the check failed
    Unsynced,
    Checked {
        record: ChainRecord,
        outcome: ChainOutcome,
    },
}

#[derive(Debug)]
pub struct ChainVerifier {
    project_id: String,
    local_budget: f64,
    state: VerifierState,
    guard: RequestGuard,
}

impl ChainVerifier {
    pub fn new(project_id: impl Into<String>, local_budget: f64) -> Self {
        Self {
            project_id: project_id.into(),
            local_budget,
            state: VerifierState::Loading,
            guard: RequestGuard::new(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn state(&self) -> &VerifierState {
        &self.state
    }

    pub fn outcome(&self) -> Option<ChainOutcome> {
        match &self.state {
            VerifierState::Checked { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }

    pub fn explorer_url(&self) -> &'static str {
        EXPLORER_URL
    }

    /// Point the badge at another project. Returns `true` when a re-check
    /// is needed.
    pub fn set_project(&mut self, project_id: impl Into<String>, local_budget: f64) -> bool {
        let project_id = project_id.into();
        if project_id == self.project_id && local_budget == self.local_budget {
            return false;
        }
        self.project_id = project_id;
        self.local_budget = local_budget;
        self.state = VerifierState::Loading;
        self.guard.invalidate();
        true
    }

    /// Start a check; the ticket must come back with the result
    pub fn begin(&mut self) -> RequestTicket {
        self.state = VerifierState::Loading;
        self.guard.begin()
    }

    /// Apply a finished check. Results of superseded checks are dropped.
    pub fn apply(&mut self, ticket: RequestTicket, result: ApiResult<ChainRecord>) -> bool {
        if !self.guard.is_current(ticket) {
            tracing::debug!(project_id = %self.project_id, "stale chain check dropped");
            return false;
        }
        self.state = match result {
            Ok(record) => {
                let outcome = record.compare(self.local_budget);
                if !outcome.is_match() {
                    tracing::warn!(
                        project_id = %self.project_id,
                        local = self.local_budget,
                        chain = ?record.budget,
                        "on-chain budget differs"
                    );
                }
                VerifierState::Checked { record, outcome }
            }
            Err(e) => {
                tracing::warn!(project_id = %self.project_id, error = %e, "chain check failed");
                VerifierState::Unsynced
            }
        };
        true
    }

    pub async fn refresh(&mut self, api: &ApiClient) {
        let ticket = self.begin();
        let result = verify_project_on_chain(api, &self.project_id).await;
        self.apply(ticket, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ApiError;

    fn record(budget: i64) -> ChainRecord {
        ChainRecord {
            budget: Some(budget),
            hash: "ab12".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_loading() {
        let verifier = ChainVerifier::new("7", 100.0);
        assert_eq!(verifier.state(), &VerifierState::Loading);
        assert_eq!(verifier.outcome(), None);
        assert_eq!(verifier.explorer_url(), "https://lora.algokit.io/testnet");
    }

    #[test]
    fn test_apply_compares_budget() {
        let mut verifier = ChainVerifier::new("7", 100.0);
        let ticket = verifier.begin();
        assert!(verifier.apply(ticket, Ok(record(100))));
        assert_eq!(verifier.outcome(), Some(ChainOutcome::Verified));

        let ticket = verifier.begin();
        verifier.apply(ticket, Ok(record(99)));
        assert_eq!(verifier.outcome(), Some(ChainOutcome::Mismatch));
    }

    #[test]
    fn test_failure_is_unsynced() {
        let mut verifier = ChainVerifier::new("7", 100.0);
        let ticket = verifier.begin();
        verifier.apply(ticket, Err(ApiError::Validation("offline".into())));
        assert_eq!(verifier.state(), &VerifierState::Unsynced);
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut verifier = ChainVerifier::new("7", 100.0);
        let first = verifier.begin();
        let second = verifier.begin();
        assert!(verifier.apply(second, Ok(record(100))));
        assert!(!verifier.apply(first, Ok(record(1))));
        assert_eq!(verifier.outcome(), Some(ChainOutcome::Verified));
    }

    #[test]
    fn test_project_change_resets() {
        let mut verifier = ChainVerifier::new("7", 100.0);
        let ticket = verifier.begin();
        verifier.apply(ticket, Ok(record(100)));

        assert!(!verifier.set_project("7", 100.0));
        assert!(verifier.set_project("8", 100.0));
        assert_eq!(verifier.state(), &VerifierState::Loading);
        assert!(!verifier.apply(ticket, Ok(record(100))));
    }
}
