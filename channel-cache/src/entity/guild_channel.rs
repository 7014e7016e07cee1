use super::{Guild, InviteMetadata, Overwrite, OverwriteMap, OverwritePermissions, PermissionTarget};
use crate::{ChannelError, Result};
use model::channel::{Channel, CreateChannelInvite, ModifyGuildChannel};
use model::Snowflake;
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateSource {
    /// The entity is being built for the first time
    Creation,
    /// A channel object returned by the remote service
    RemoteFetch,
    LocalEdit,
}

#[derive(Debug, Default)]
struct ChannelState {
    name: String,
    position: i32,
}

/// Local copy of a guild channel and its permission overwrites.
///
/// An attached channel is the canonical entry tracked by a [`GuildState`](super::GuildState).
/// It only takes remote state through [`refresh`](Self::refresh) and [`modify`](Self::modify);
/// channel objects that turn up in unrelated responses are ignored, as they may carry a partial
/// view of the channel. A detached channel wraps a one-off response: it accepts any update but
/// cannot be refreshed.
pub struct GuildChannel {
    id: Snowflake,
    guild: Guild,
    state: RwLock<ChannelState>,
    overwrites: OverwriteMap,
    attached: AtomicBool,
}

impl GuildChannel {
    pub fn new(guild: Guild, channel: &Channel) -> Self {
        let entity = Self {
            id: channel.id,
            guild,
            state: RwLock::new(ChannelState::default()),
            overwrites: OverwriteMap::new(),
            attached: AtomicBool::new(false),
        };

        entity.update(channel, UpdateSource::Creation);
        entity
    }

    pub fn id(&self) -> Snowflake {
        self.id
    }

    pub fn name(&self) -> String {
        self.state.read().name.clone()
    }

    pub fn position(&self) -> i32 {
        self.state.read().position
    }

    pub fn guild(&self) -> &Guild {
        &self.guild
    }

    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Acquire)
    }

    pub fn attach(&self) {
        self.attached.store(true, Ordering::Release);
    }

    pub fn detach(&self) {
        self.attached.store(false, Ordering::Release);
    }

    pub fn update(&self, channel: &Channel, source: UpdateSource) {
        if source == UpdateSource::RemoteFetch && self.is_attached() {
            trace!(channel_id = %self.id, "Ignoring remote update for attached channel");
            return;
        }

        self.apply(channel, source);
    }

    fn apply(&self, channel: &Channel, source: UpdateSource) {
        if channel.id != self.id {
            warn!(
                channel_id = %self.id,
                other_id = %channel.id,
                "Ignoring update carrying a different channel id"
            );
            return;
        }

        {
            let mut state = self.state.write();
            state.name = channel.name.to_string();
            state.position = channel.position;
        }

        if self.guild.options().overwrites {
            self.overwrites.replace_all(
                channel
                    .permission_overwrites
                    .iter()
                    .copied()
                    .map(Overwrite::from),
            );
        } else {
            self.overwrites.replace_all(Vec::<Overwrite>::new());
        }

        debug!(
            channel_id = %self.id,
            ?source,
            overwrites = self.overwrites.len(),
            "Applied channel update"
        );
    }

    #[tracing::instrument(name = "refresh_channel", skip(self), fields(channel_id = %self.id))]
    pub async fn refresh(&self) -> Result<()> {
        if !self.is_attached() {
            return ChannelError::UnsupportedOperation {
                operation: "refresh",
                state: "detached",
                channel_id: self.id,
            }
            .into();
        }

        let channel = self
            .guild
            .service()
            .fetch_channel(self.id)
            .await
            .map_err(ChannelError::RemoteFailure)?;

        self.apply(&channel, UpdateSource::RemoteFetch);
        Ok(())
    }

    #[tracing::instrument(name = "modify_channel", skip(self, func), fields(channel_id = %self.id))]
    pub async fn modify<F>(&self, func: Option<F>) -> Result<()>
    where
        F: FnOnce(&mut ModifyGuildChannel) + Send,
    {
        let func = func.ok_or(ChannelError::InvalidArgument("func"))?;

        let mut params = ModifyGuildChannel::default();
        func(&mut params);

        let channel = self
            .guild
            .service()
            .modify_channel(self.id, params)
            .await
            .map_err(ChannelError::RemoteFailure)?;

        self.apply(&channel, UpdateSource::RemoteFetch);
        Ok(())
    }

    #[tracing::instrument(name = "delete_channel", skip(self), fields(channel_id = %self.id))]
    pub async fn delete(&self) -> Result<()> {
        self.guild
            .service()
            .delete_channel(self.id)
            .await
            .map_err(ChannelError::RemoteFailure)
    }

    pub async fn invites(&self) -> Result<Vec<InviteMetadata>> {
        let invites = self
            .guild
            .service()
            .channel_invites(self.id)
            .await
            .map_err(ChannelError::RemoteFailure)?;

        Ok(invites.into_iter().map(InviteMetadata::from).collect())
    }

    /// `None` for `max_age` or `max_uses` falls back to the configured defaults.
    #[tracing::instrument(name = "create_invite", skip(self), fields(channel_id = %self.id))]
    pub async fn create_invite(
        &self,
        max_age: Option<u32>,
        max_uses: Option<u32>,
        temporary: bool,
        unguessable: bool,
    ) -> Result<InviteMetadata> {
        let options = self.guild.options();
        let params = CreateChannelInvite {
            max_age: max_age.unwrap_or(options.invite_max_age),
            max_uses: max_uses.unwrap_or(options.invite_max_uses),
            temporary,
            unguessable,
        };

        let invite = self
            .guild
            .service()
            .create_channel_invite(self.id, params)
            .await
            .map_err(ChannelError::RemoteFailure)?;

        Ok(InviteMetadata::from(invite))
    }

    /// Only returns an overwrite stored for the same kind of principal as `target`.
    pub fn permission_overwrite(&self, target: PermissionTarget) -> Option<OverwritePermissions> {
        self.overwrites
            .get(target.id())
            .filter(|overwrite| overwrite.target() == target)
            .map(|overwrite| overwrite.permissions())
    }

    pub fn permission_overwrites(&self) -> Vec<Overwrite> {
        self.overwrites.snapshot_all()
    }

    #[tracing::instrument(
        name = "add_permission_overwrite",
        skip(self),
        fields(channel_id = %self.id)
    )]
    pub async fn add_permission_overwrite(
        &self,
        target: PermissionTarget,
        permissions: OverwritePermissions,
    ) -> Result<()> {
        let overwrite = Overwrite::new(target, permissions);

        self.guild
            .service()
            .edit_channel_permissions(self.id, target.id(), overwrite.into())
            .await
            .map_err(ChannelError::RemoteFailure)?;

        if self.guild.options().overwrites {
            self.overwrites.upsert(overwrite);
            debug!(channel_id = %self.id, %target, "Stored permission overwrite");
        }

        Ok(())
    }

    /// Removal is by principal id only, like the remote delete: an overwrite stored for the
    /// other kind of principal with the same id is removed as well.
    #[tracing::instrument(
        name = "remove_permission_overwrite",
        skip(self),
        fields(channel_id = %self.id)
    )]
    pub async fn remove_permission_overwrite(&self, target: PermissionTarget) -> Result<()> {
        self.guild
            .service()
            .delete_channel_permission(self.id, target.id())
            .await
            .map_err(ChannelError::RemoteFailure)?;

        if self.overwrites.remove(target.id()) {
            debug!(channel_id = %self.id, %target, "Removed permission overwrite");
        }

        Ok(())
    }
}

impl fmt::Display for GuildChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.state.read().name)
    }
}

impl fmt::Debug for GuildChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.state.read().name, self.id)
    }
}
