use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The site owner's public profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub location: String,
    pub avatar: String,
    pub social_media: SocialLinks,
    pub updated_at: DateTime<Utc>,
}

/// Social-media links. A network the owner is not on is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub instagram: String,
}
