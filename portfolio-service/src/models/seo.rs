use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Site-wide SEO metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSettings {
    pub id: String,
    pub site_title: String,
    pub site_description: String,
    pub keywords: Vec<String>,
    pub og_image: String,
    pub twitter_card: String,
    pub favicon: String,
    pub updated_at: DateTime<Utc>,
}
