mod error;
pub use error::{BoxError, ChannelError, Result};

mod options;
pub use options::Options;

mod service;
pub use service::{ChannelService, ServiceResult};

mod memory;
pub use memory::{MemoryChannelService, MemoryServiceError};

pub mod entity;
pub use crate::entity::{
    Guild, GuildChannel, GuildState, InviteMetadata, Overwrite, OverwriteMap,
    OverwritePermissions, PermValue, PermissionTarget, UpdateSource,
};
