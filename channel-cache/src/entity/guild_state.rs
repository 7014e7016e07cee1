use super::{Guild, GuildChannel};
use dashmap::DashMap;
use model::channel::Channel;
use model::Snowflake;
use std::ops::Deref;
use std::sync::Arc;
use tracing::debug;

pub(crate) struct ChannelMap(DashMap<Snowflake, Arc<GuildChannel>>);

impl ChannelMap {
    pub fn new() -> Self {
        Self(DashMap::new())
    }

    pub fn get_cloned(&self, id: Snowflake) -> Option<Arc<GuildChannel>> {
        self.0.get(&id).map(|channel| Arc::clone(channel.value()))
    }
}

impl Default for ChannelMap {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for ChannelMap {
    type Target = DashMap<Snowflake, Arc<GuildChannel>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Owner of the canonical channel entries of one guild. Channels registered here are attached;
/// evicted channels are detached.
pub struct GuildState {
    guild: Guild,
    channels: ChannelMap,
}

impl GuildState {
    pub fn new(guild: Guild) -> Self {
        Self {
            guild,
            channels: ChannelMap::new(),
        }
    }

    pub fn guild(&self) -> &Guild {
        &self.guild
    }

    /// Registers the channel as the canonical entry. An already tracked channel is returned as
    /// is; the snapshot is not merged into it.
    pub fn add_channel(&self, channel: &Channel) -> Arc<GuildChannel> {
        let entry = self.channels.entry(channel.id).or_insert_with(|| {
            let entity = GuildChannel::new(self.guild.clone(), channel);
            entity.attach();
            debug!(guild_id = %self.guild.id(), channel_id = %channel.id, "Tracking channel");
            Arc::new(entity)
        });

        Arc::clone(entry.value())
    }

    pub fn add_channels(&self, channels: &[Channel]) {
        channels.iter().for_each(|c| {
            self.add_channel(c);
        });
    }

    /// Builds a throwaway channel that is not tracked by this guild.
    pub fn wrap_channel(&self, channel: &Channel) -> GuildChannel {
        GuildChannel::new(self.guild.clone(), channel)
    }

    pub fn channel(&self, id: Snowflake) -> Option<Arc<GuildChannel>> {
        self.channels.get_cloned(id)
    }

    /// Tracked channels ordered by position, then id
    pub fn channels(&self) -> Vec<Arc<GuildChannel>> {
        let mut channels: Vec<_> = self
            .channels
            .iter()
            .map(|channel| Arc::clone(channel.value()))
            .collect();

        channels.sort_by_key(|channel| (channel.position(), channel.id()));
        channels
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn remove_channel(&self, id: Snowflake) -> Option<Arc<GuildChannel>> {
        self.channels.remove(&id).map(|(_, channel)| {
            channel.detach();
            debug!(guild_id = %self.guild.id(), channel_id = %id, "Evicted channel");
            channel
        })
    }
}
