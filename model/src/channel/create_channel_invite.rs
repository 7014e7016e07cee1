use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateChannelInvite {
    /// Seconds until expiry, 0 for never
    pub max_age: u32,
    /// 0 for unlimited
    pub max_uses: u32,
    pub temporary: bool,
    /// Request a long, hard to guess invite code
    #[serde(rename = "xkcdpass")]
    pub unguessable: bool,
}
