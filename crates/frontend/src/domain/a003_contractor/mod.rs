pub mod api;
pub mod panel;

pub use panel::ContractorPanel;
