use serde::Serialize;

use super::PermissionOverwrite;
use crate::Snowflake;

/// Body of a channel modify request. Unset fields are left untouched by the API.
#[derive(Serialize, Debug, Clone, Default)]
pub struct ModifyGuildChannel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_overwrites: Option<Vec<PermissionOverwrite>>,
}

impl ModifyGuildChannel {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.position.is_none()
            && self.topic.is_none()
            && self.nsfw.is_none()
            && self.parent_id.is_none()
            && self.permission_overwrites.is_none()
    }
}
