//! HTTP handlers for the portfolio service.

pub mod chat;
pub mod health;
pub mod portfolio;
pub mod projects;

pub use chat::chat;
pub use health::{api_status, health_check, metrics_endpoint, not_found};
pub use portfolio::{personal_info, seo_settings, tech_stacks};
pub use projects::list_projects;
