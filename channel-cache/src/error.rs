use model::Snowflake;

pub type Result<T> = std::result::Result<T, ChannelError>;

/// Opaque failure surfaced by a [`ChannelService`](crate::ChannelService).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(thiserror::Error, Debug)]
pub enum ChannelError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Operation {operation} is not supported on {state} channel {channel_id}")]
    UnsupportedOperation {
        operation: &'static str,
        state: &'static str,
        channel_id: Snowflake,
    },

    #[error("Error returned by remote channel service: {0}")]
    RemoteFailure(#[source] BoxError),

    #[error("Error occurred while loading options from env: {0}")]
    EnvyError(#[from] envy::Error),
}

impl ChannelError {
    pub fn is_remote(&self) -> bool {
        matches!(self, ChannelError::RemoteFailure(_))
    }
}

impl<T> From<ChannelError> for Result<T> {
    fn from(e: ChannelError) -> Self {
        Err(e)
    }
}
