use serde::Serialize;

use super::PermissionOverwriteType;
use crate::PermissionBitSet;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditChannelPermissions {
    pub allow: PermissionBitSet,
    pub deny: PermissionBitSet,
    #[serde(rename = "type")]
    pub overwrite_type: PermissionOverwriteType,
}
