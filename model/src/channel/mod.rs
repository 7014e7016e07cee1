mod channel;
pub use channel::Channel;

mod channel_type;
pub use channel_type::ChannelType;

mod permission_overwrite;
pub use permission_overwrite::*;

mod permission;
pub use permission::Permission;

mod modify_guild_channel;
pub use modify_guild_channel::ModifyGuildChannel;

mod create_channel_invite;
pub use create_channel_invite::CreateChannelInvite;

mod edit_channel_permissions;
pub use edit_channel_permissions::EditChannelPermissions;
