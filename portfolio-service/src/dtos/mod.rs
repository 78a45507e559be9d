pub mod chat;
pub mod projects;

pub use chat::{ChatRequest, ChatResponse};
pub use projects::{PageRequest, ProjectListParams, ProjectListResponse};
