mod overwrite;
pub use overwrite::*;

mod overwrite_map;
pub use overwrite_map::OverwriteMap;

mod invite_metadata;
pub use invite_metadata::InviteMetadata;

mod guild;
pub use guild::Guild;

mod guild_channel;
pub use guild_channel::{GuildChannel, UpdateSource};

mod guild_state;
pub use guild_state::GuildState;
