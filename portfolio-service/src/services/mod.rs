pub mod catalog;
pub mod chat;
pub mod metrics;
pub mod providers;
pub mod seed;

pub use catalog::Catalog;
pub use chat::ChatRelay;
pub use metrics::{get_metrics, init_metrics};
