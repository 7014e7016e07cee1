use crate::BoxError;
use async_trait::async_trait;
use model::channel::{Channel, CreateChannelInvite, EditChannelPermissions, ModifyGuildChannel};
use model::invite::Invite;
use model::Snowflake;

pub type ServiceResult<T> = std::result::Result<T, BoxError>;

/// The remote side of a guild channel. Implementations own transport, retries and
/// ratelimiting; failures are passed through to callers untouched.
#[async_trait]
pub trait ChannelService: Send + Sync + 'static {
    async fn fetch_channel(&self, id: Snowflake) -> ServiceResult<Channel>;
    async fn modify_channel(
        &self,
        id: Snowflake,
        params: ModifyGuildChannel,
    ) -> ServiceResult<Channel>;
    async fn delete_channel(&self, id: Snowflake) -> ServiceResult<()>;

    async fn channel_invites(&self, channel_id: Snowflake) -> ServiceResult<Vec<Invite>>;
    async fn create_channel_invite(
        &self,
        channel_id: Snowflake,
        params: CreateChannelInvite,
    ) -> ServiceResult<Invite>;

    async fn edit_channel_permissions(
        &self,
        channel_id: Snowflake,
        target_id: Snowflake,
        params: EditChannelPermissions,
    ) -> ServiceResult<()>;
    async fn delete_channel_permission(
        &self,
        channel_id: Snowflake,
        target_id: Snowflake,
    ) -> ServiceResult<()>;
}
