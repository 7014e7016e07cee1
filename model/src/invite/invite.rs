use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Snowflake;

/// An invite together with its metadata, as returned by the channel invite endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Invite {
    pub code: Box<str>,
    pub channel_id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inviter_id: Option<Snowflake>,
    #[serde(default)]
    pub uses: u32,
    #[serde(default)]
    pub max_uses: u32,
    #[serde(default)]
    pub max_age: u32,
    #[serde(default)]
    pub temporary: bool,
    pub created_at: DateTime<Utc>,
}

impl PartialEq for Invite {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}
