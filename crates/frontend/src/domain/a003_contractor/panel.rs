//! Headless state of the officer's contractor management tab.

use chrono::{DateTime, Utc};
use contracts::domain::a003_contractor::{Contractor, NewContractorDto};

use super::api;
use crate::shared::confirm::Confirm;
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::http::ApiClient;
use crate::shared::request_guard::{RequestGuard, RequestTicket};
use crate::shared::toast::Toast;

pub const REMOVE_PROMPT: &str =
    "Purge contractor records? This will unbind all associated project links.";

#[derive(Debug, Default)]
pub struct ContractorPanel {
    contractors: Vec<Contractor>,
    /// Registration form fields
    pub form: NewContractorDto,
    /// Contractor picked in the PIN provisioning card
    pub selected_contractor_id: String,
    pub new_pin: String,
    loading: bool,
    toast: Option<Toast>,
    guard: RequestGuard,
}

impl ContractorPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contractors(&self) -> &[Contractor] {
        &self.contractors
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Contractors that may be bound to a project
    pub fn assignable(&self) -> impl Iterator<Item = &Contractor> {
        self.contractors.iter().filter(|c| !c.is_blocked())
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn visible_toast(&self, now: DateTime<Utc>) -> Option<&Toast> {
        self.toast.as_ref().filter(|t| t.is_visible_at(now))
    }

    pub fn begin_load(&mut self) -> RequestTicket {
        self.loading = true;
        self.guard.begin()
    }

    /// Apply a finished list fetch; a failed fetch shows an empty list
    pub fn apply_load(&mut self, ticket: RequestTicket, result: ApiResult<Vec<Contractor>>) {
        if !self.guard.is_current(ticket) {
            return;
        }
        self.loading = false;
        self.contractors = result.unwrap_or_default();
    }

    pub async fn load(&mut self, api: &ApiClient) {
        let ticket = self.begin_load();
        let result = api::fetch_contractors(api).await;
        self.apply_load(ticket, result);
    }

    pub async fn register(&mut self, api: &ApiClient) -> ApiResult<()> {
        if self.form.name.is_empty() || self.form.company.is_empty() {
            return Err(ApiError::Validation("Missing required fields".into()));
        }

        api::add_contractor(api, &self.form).await?;
        tracing::info!(name = %self.form.name, "contractor registered");
        self.form = NewContractorDto::default();
        self.load(api).await;
        self.toast = Some(Toast::success("Contractor registered successfully! ✅"));
        Ok(())
    }

    pub async fn provision_pin(&mut self, api: &ApiClient) -> ApiResult<()> {
        if self.selected_contractor_id.is_empty() || self.new_pin.is_empty() {
            return Err(ApiError::Validation(
                "Please select a contractor and enter a 4-digit PIN.".into(),
            ));
        }

        api::update_contractor_pin(api, &self.selected_contractor_id, &self.new_pin).await?;
        self.toast = Some(Toast::success("Passkey Provisioned! ✅"));
        self.new_pin.clear();
        Ok(())
    }

    /// Delete after confirmation. Returns `Ok(false)` when declined.
    pub async fn remove(
        &mut self,
        api: &ApiClient,
        contractor_id: &str,
        confirm: &impl Confirm,
    ) -> ApiResult<bool> {
        if !confirm.confirm(REMOVE_PROMPT) {
            return Ok(false);
        }
        let result = api::delete_contractor(api, contractor_id).await;
        self.load(api).await;
        result.map(|_| true)
    }

    /// Flip a contractor's authority after confirmation. Returns `Ok(false)`
    /// when declined.
    pub async fn toggle_authority(
        &mut self,
        api: &ApiClient,
        contractor_id: &str,
        confirm: &impl Confirm,
    ) -> ApiResult<bool> {
        let contractor = self
            .contractors
            .iter()
            .find(|c| c.id == contractor_id)
            .cloned()
            .ok_or_else(|| ApiError::Validation(format!("Unknown contractor {}", contractor_id)))?;

        let next = contractor.is_active.toggled();
        let action = if next.is_blocked() { "REVOKE" } else { "GRANT" };
        if !confirm.confirm(&format!("{} authority for {}?", action, contractor.name)) {
            return Ok(false);
        }

        api::toggle_contractor_authority(api, &contractor.id, next).await?;
        self.toast = Some(if next.is_blocked() {
            Toast::warning(format!("🔒 Authority REVOKED from {}", contractor.name))
        } else {
            Toast::success(format!("✅ Authority GRANTED to {}", contractor.name))
        });
        self.load(api).await;
        Ok(true)
    }

    /// Bind a contractor to a project, then let the owning view refresh
    /// its project list.
    pub async fn assign(
        &self,
        api: &ApiClient,
        project_id: &str,
        contractor_id: &str,
        reload: impl FnOnce(),
    ) -> ApiResult<()> {
        let result = api::assign_contractor(api, project_id, contractor_id).await;
        reload();
        result.map(|_| ())
    }
}
