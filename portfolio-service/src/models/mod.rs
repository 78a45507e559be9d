//! Domain models for the portfolio service.
//!
//! All records are read-only: they are built once at startup and only ever
//! serialized afterwards. Field names go over the wire in camelCase.

pub mod profile;
pub mod project;
pub mod seo;
pub mod tech_stack;

pub use profile::{Profile, SocialLinks};
pub use project::{Project, ProjectStatus};
pub use seo::SeoSettings;
pub use tech_stack::TechStackEntry;
