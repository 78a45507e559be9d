use crate::models::{Profile, SeoSettings, TechStackEntry};
use crate::startup::AppState;
use axum::{extract::State, Json};

pub async fn personal_info(State(state): State<AppState>) -> Json<Profile> {
    Json(state.catalog.profile().clone())
}

pub async fn tech_stacks(State(state): State<AppState>) -> Json<Vec<TechStackEntry>> {
    Json(state.catalog.active_tech_stacks())
}

pub async fn seo_settings(State(state): State<AppState>) -> Json<SeoSettings> {
    Json(state.catalog.seo_settings().clone())
}
