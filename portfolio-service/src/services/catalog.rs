//! In-memory portfolio content.
//!
//! A [`Catalog`] is assembled once at startup and shared read-only between
//! requests behind an `Arc`, so lookups never lock.

use super::seed;
use crate::models::{Profile, Project, SeoSettings, TechStackEntry};
use chrono::Utc;

#[derive(Debug, Clone)]
pub struct Catalog {
    profile: Profile,
    tech_stacks: Vec<TechStackEntry>,
    projects: Vec<Project>,
    seo_settings: SeoSettings,
}

impl Catalog {
    pub fn new(
        profile: Profile,
        tech_stacks: Vec<TechStackEntry>,
        projects: Vec<Project>,
        seo_settings: SeoSettings,
    ) -> Self {
        Self {
            profile,
            tech_stacks,
            projects,
            seo_settings,
        }
    }

    /// The published portfolio content, timestamped with the current instant.
    pub fn seeded() -> Self {
        let now = Utc::now();
        Self::new(
            seed::profile(now),
            seed::tech_stacks(),
            seed::projects(),
            seed::seo_settings(now),
        )
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn seo_settings(&self) -> &SeoSettings {
        &self.seo_settings
    }

    /// Active entries in insertion order. `order` is carried for the client
    /// and not used to re-sort.
    pub fn active_tech_stacks(&self) -> Vec<TechStackEntry> {
        self.tech_stacks
            .iter()
            .filter(|t| t.is_active)
            .cloned()
            .collect()
    }

    /// Projects whose status equals `status` exactly, or all of them.
    pub fn projects(&self, status: Option<&str>) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| status.map_or(true, |s| p.status.as_str() == s))
            .cloned()
            .collect()
    }
}
