use crate::channel::Permission;
use crate::util;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::fmt::Formatter;

/// Raw permission bitmask as sent by the API (a stringified u64).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PermissionBitSet(pub u64);

impl PermissionBitSet {
    pub const fn empty() -> Self {
        PermissionBitSet(0)
    }

    pub fn from_permissions(permissions: &[Permission]) -> Self {
        PermissionBitSet(Permission::sum(permissions))
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        let perm = permission as u64;
        self.0 & perm == perm
    }

    #[must_use]
    pub fn with(self, permission: Permission) -> Self {
        PermissionBitSet(self.0 | permission as u64)
    }

    #[must_use]
    pub fn without(self, permission: Permission) -> Self {
        PermissionBitSet(self.0 & !(permission as u64))
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Serialize for PermissionBitSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for PermissionBitSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Value = Deserialize::deserialize(deserializer)?;

        if let Some(s) = value.as_str() {
            return Ok(PermissionBitSet(s.parse().map_err(Error::custom)?));
        }

        // older API versions sent numbers
        if let Some(i) = value.as_u64() {
            return Ok(PermissionBitSet(i));
        }

        Err(Error::invalid_type(
            util::to_unexpected(value),
            &"a stringified u64 bitmask",
        ))
    }
}

impl fmt::Display for PermissionBitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PermissionBitSet {
    fn from(bits: u64) -> Self {
        PermissionBitSet(bits)
    }
}
