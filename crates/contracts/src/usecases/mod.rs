pub mod common;
pub mod u501_scheme_chat;
pub mod u502_risk_assessment;
