use chrono::{DateTime, Duration, Utc};
use model::invite::Invite;
use model::Snowflake;

#[derive(Debug, Clone, PartialEq)]
pub struct InviteMetadata {
    pub code: String,
    pub channel_id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub inviter_id: Option<Snowflake>,
    pub uses: u32,
    /// None if the invite can be used an unlimited number of times
    pub max_uses: Option<u32>,
    /// None if the invite never expires
    pub max_age: Option<Duration>,
    pub temporary: bool,
    pub created_at: DateTime<Utc>,
}

impl InviteMetadata {
    pub fn url(&self) -> String {
        format!("https://discord.gg/{}", self.code)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.max_age.map(|max_age| self.created_at + max_age)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().map_or(false, |expires_at| now >= expires_at)
    }

    pub fn is_exhausted(&self) -> bool {
        self.max_uses.map_or(false, |max_uses| self.uses >= max_uses)
    }
}

impl From<Invite> for InviteMetadata {
    fn from(other: Invite) -> Self {
        Self {
            code: other.code.into(),
            channel_id: other.channel_id,
            guild_id: other.guild_id,
            inviter_id: other.inviter_id,
            uses: other.uses,
            max_uses: Some(other.max_uses).filter(|&uses| uses > 0),
            max_age: Some(other.max_age)
                .filter(|&age| age > 0)
                .map(|age| Duration::seconds(i64::from(age))),
            temporary: other.temporary,
            created_at: other.created_at,
        }
    }
}
