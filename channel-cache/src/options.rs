use crate::Result;
use serde::Deserialize;

const ENV_PREFIX: &str = "CHANNEL_CACHE_";

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Options {
    /// Keep permission overwrites in memory. When disabled, the remote calls are still made
    /// but the local overwrite stores stay empty.
    #[serde(default = "default_true")]
    pub overwrites: bool,

    /// Used by `create_invite` when no max age is given, in seconds. 0 never expires
    #[serde(default)]
    pub invite_max_age: u32,

    #[serde(default)]
    pub invite_max_uses: u32,
}

impl Options {
    pub fn new(overwrites: bool, invite_max_age: u32, invite_max_uses: u32) -> Options {
        Options {
            overwrites,
            invite_max_age,
            invite_max_uses,
        }
    }

    pub fn from_env() -> Result<Options> {
        envy::prefixed(ENV_PREFIX).from_env().map_err(Into::into)
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            overwrites: true,
            invite_max_age: 0,
            invite_max_uses: 0,
        }
    }
}

fn default_true() -> bool {
    true
}
