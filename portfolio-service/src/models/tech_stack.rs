use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStackEntry {
    pub id: String,
    pub name: String,
    /// Icon slug understood by the frontend (e.g. `react`).
    pub icon: String,
    /// Brand color as a CSS hex string.
    pub color: String,
    pub order: i32,
    pub is_active: bool,
}
