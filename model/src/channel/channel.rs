use serde::{Deserialize, Serialize};

use super::{ChannelType, PermissionOverwrite};
use crate::Snowflake;

/// A guild channel as returned by the channel endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Channel {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub permission_overwrites: Vec<PermissionOverwrite>,
    pub name: Box<str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::PermissionOverwriteType;
    use crate::PermissionBitSet;

    #[test]
    fn test_deserialize_guild_channel() {
        let json = r#"{
            "id": "42",
            "type": 0,
            "guild_id": "1",
            "position": 3,
            "name": "general",
            "permission_overwrites": [
                {"id": "7", "type": 1, "allow": "1024", "deny": "0"},
                {"id": "9", "type": 0, "allow": "0", "deny": "2048"}
            ]
        }"#;

        let channel: Channel = serde_json::from_str(json).unwrap();
        assert_eq!(channel.id, Snowflake(42));
        assert_eq!(channel.guild_id, Some(Snowflake(1)));
        assert_eq!(channel.position, 3);
        assert_eq!(&*channel.name, "general");
        assert_eq!(channel.permission_overwrites.len(), 2);

        let member = &channel.permission_overwrites[0];
        assert_eq!(member.overwrite_type, PermissionOverwriteType::Member);
        assert_eq!(member.allow, PermissionBitSet(1024));

        let role = &channel.permission_overwrites[1];
        assert_eq!(role.overwrite_type, PermissionOverwriteType::Role);
        assert_eq!(role.deny, PermissionBitSet(2048));
    }

    #[test]
    fn test_missing_optional_fields() {
        let json = r#"{"id": 5, "type": 4, "name": "Tickets"}"#;
        let channel: Channel = serde_json::from_str(json).unwrap();
        assert_eq!(channel.position, 0);
        assert!(channel.permission_overwrites.is_empty());
        assert!(channel.channel_type.is_guild());
    }
}
