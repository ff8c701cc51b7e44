pub mod api_utils;
pub mod config;
pub mod confirm;
pub mod error;
pub mod http;
pub mod logger;
pub mod query;
pub mod request_guard;
pub mod toast;
