use crate::service::{ChannelService, ServiceResult};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use model::channel::{
    Channel, CreateChannelInvite, EditChannelPermissions, ModifyGuildChannel, PermissionOverwrite,
};
use model::invite::Invite;
use model::Snowflake;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

#[derive(thiserror::Error, Debug)]
pub enum MemoryServiceError {
    #[error("Unknown channel {0}")]
    UnknownChannel(Snowflake),
}

/// In-process [`ChannelService`] holding channels and invites in memory.
pub struct MemoryChannelService {
    channels: DashMap<Snowflake, Channel>,
    invites: DashMap<Snowflake, Vec<Invite>>,
    invite_seq: AtomicU64,
}

impl MemoryChannelService {
    pub fn new() -> Self {
        MemoryChannelService {
            channels: DashMap::new(),
            invites: DashMap::new(),
            invite_seq: AtomicU64::new(1),
        }
    }

    pub fn insert_channel(&self, channel: Channel) {
        self.channels.insert(channel.id, channel);
    }

    pub fn channel(&self, id: Snowflake) -> Option<Channel> {
        self.channels.get(&id).map(|channel| channel.value().clone())
    }

    fn with_channel<T, F>(&self, id: Snowflake, f: F) -> ServiceResult<T>
    where
        F: FnOnce(&mut Channel) -> T,
    {
        match self.channels.get_mut(&id) {
            Some(mut channel) => Ok(f(channel.value_mut())),
            None => Err(MemoryServiceError::UnknownChannel(id).into()),
        }
    }

    fn next_code(&self, unguessable: bool) -> String {
        let seq = self.invite_seq.fetch_add(1, Ordering::Relaxed);
        if unguessable {
            // spread sequential ids over the whole u64 range
            format!("{:016x}", seq.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        } else {
            format!("{:08x}", seq)
        }
    }
}

impl Default for MemoryChannelService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChannelService for MemoryChannelService {
    async fn fetch_channel(&self, id: Snowflake) -> ServiceResult<Channel> {
        self.channel(id)
            .ok_or_else(|| MemoryServiceError::UnknownChannel(id).into())
    }

    async fn modify_channel(
        &self,
        id: Snowflake,
        params: ModifyGuildChannel,
    ) -> ServiceResult<Channel> {
        trace!(channel_id = %id, ?params, "Modifying channel");

        self.with_channel(id, |channel| {
            if let Some(name) = params.name {
                channel.name = name.into_boxed_str();
            }

            if let Some(position) = params.position {
                channel.position = position;
            }

            if let Some(topic) = params.topic {
                channel.topic = Some(topic.into_boxed_str());
            }

            if let Some(nsfw) = params.nsfw {
                channel.nsfw = Some(nsfw);
            }

            if let Some(parent_id) = params.parent_id {
                channel.parent_id = Some(parent_id);
            }

            if let Some(overwrites) = params.permission_overwrites {
                channel.permission_overwrites = overwrites;
            }

            channel.clone()
        })
    }

    async fn delete_channel(&self, id: Snowflake) -> ServiceResult<()> {
        self.invites.remove(&id);
        self.channels
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| MemoryServiceError::UnknownChannel(id).into())
    }

    async fn channel_invites(&self, channel_id: Snowflake) -> ServiceResult<Vec<Invite>> {
        self.with_channel(channel_id, |_| ())?;

        Ok(self
            .invites
            .get(&channel_id)
            .map(|invites| invites.value().clone())
            .unwrap_or_default())
    }

    async fn create_channel_invite(
        &self,
        channel_id: Snowflake,
        params: CreateChannelInvite,
    ) -> ServiceResult<Invite> {
        let guild_id = self.with_channel(channel_id, |channel| channel.guild_id)?;

        let invite = Invite {
            code: self.next_code(params.unguessable).into_boxed_str(),
            channel_id,
            guild_id,
            inviter_id: None,
            uses: 0,
            max_uses: params.max_uses,
            max_age: params.max_age,
            temporary: params.temporary,
            created_at: Utc::now(),
        };

        self.invites
            .entry(channel_id)
            .or_insert_with(Vec::new)
            .push(invite.clone());

        Ok(invite)
    }

    async fn edit_channel_permissions(
        &self,
        channel_id: Snowflake,
        target_id: Snowflake,
        params: EditChannelPermissions,
    ) -> ServiceResult<()> {
        let overwrite = PermissionOverwrite {
            id: target_id,
            overwrite_type: params.overwrite_type,
            allow: params.allow,
            deny: params.deny,
        };

        self.with_channel(channel_id, |channel| {
            let overwrites = &mut channel.permission_overwrites;
            match overwrites.iter_mut().find(|o| o.id == target_id) {
                Some(existing) => *existing = overwrite,
                None => overwrites.push(overwrite),
            }
        })
    }

    async fn delete_channel_permission(
        &self,
        channel_id: Snowflake,
        target_id: Snowflake,
    ) -> ServiceResult<()> {
        self.with_channel(channel_id, |channel| {
            channel.permission_overwrites.retain(|o| o.id != target_id);
        })
    }
}
