use crate::{ChannelService, Options};
use model::Snowflake;
use std::fmt;
use std::sync::Arc;

/// Handle to the guild a channel belongs to. Cheap to clone; resolves the remote service.
#[derive(Clone)]
pub struct Guild {
    id: Snowflake,
    service: Arc<dyn ChannelService>,
    options: Options,
}

impl Guild {
    pub fn new(id: Snowflake, service: Arc<dyn ChannelService>, options: Options) -> Self {
        Self {
            id,
            service,
            options,
        }
    }

    pub fn id(&self) -> Snowflake {
        self.id
    }

    pub fn service(&self) -> &dyn ChannelService {
        self.service.as_ref()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl fmt::Debug for Guild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guild")
            .field("id", &self.id)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
