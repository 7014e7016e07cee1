use model::channel::{
    EditChannelPermissions, Permission, PermissionOverwrite, PermissionOverwriteType,
};
use model::{PermissionBitSet, Snowflake};
use std::fmt;

/// The principal an overwrite applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionTarget {
    User(Snowflake),
    Role(Snowflake),
}

impl PermissionTarget {
    pub fn id(&self) -> Snowflake {
        match self {
            PermissionTarget::User(id) | PermissionTarget::Role(id) => *id,
        }
    }

    pub fn overwrite_type(&self) -> PermissionOverwriteType {
        match self {
            PermissionTarget::User(_) => PermissionOverwriteType::Member,
            PermissionTarget::Role(_) => PermissionOverwriteType::Role,
        }
    }

    pub fn from_parts(id: Snowflake, overwrite_type: PermissionOverwriteType) -> Self {
        match overwrite_type {
            PermissionOverwriteType::Member => PermissionTarget::User(id),
            PermissionOverwriteType::Role => PermissionTarget::Role(id),
        }
    }
}

impl fmt::Display for PermissionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionTarget::User(id) => write!(f, "user {}", id),
            PermissionTarget::Role(id) => write!(f, "role {}", id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermValue {
    Allow,
    Deny,
    Inherit,
}

/// Allow/deny pair. Overlapping bits are kept exactly as received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OverwritePermissions {
    allow: PermissionBitSet,
    deny: PermissionBitSet,
}

impl OverwritePermissions {
    pub fn new(allow: u64, deny: u64) -> Self {
        Self::from_bit_sets(PermissionBitSet(allow), PermissionBitSet(deny))
    }

    pub fn from_bit_sets(allow: PermissionBitSet, deny: PermissionBitSet) -> Self {
        Self { allow, deny }
    }

    pub fn from_permissions(allow: &[Permission], deny: &[Permission]) -> Self {
        Self::from_bit_sets(
            PermissionBitSet::from_permissions(allow),
            PermissionBitSet::from_permissions(deny),
        )
    }

    pub fn inherit_all() -> Self {
        Self::default()
    }

    pub fn allow(&self) -> PermissionBitSet {
        self.allow
    }

    pub fn deny(&self) -> PermissionBitSet {
        self.deny
    }

    pub fn allow_value(&self) -> u64 {
        self.allow.0
    }

    pub fn deny_value(&self) -> u64 {
        self.deny.0
    }

    pub fn value(&self, permission: Permission) -> PermValue {
        if self.allow.has_permission(permission) {
            PermValue::Allow
        } else if self.deny.has_permission(permission) {
            PermValue::Deny
        } else {
            PermValue::Inherit
        }
    }

    pub fn is_allowed(&self, permission: Permission) -> bool {
        self.allow.has_permission(permission)
    }

    pub fn is_denied(&self, permission: Permission) -> bool {
        self.deny.has_permission(permission)
    }

    #[must_use]
    pub fn modify(self, permission: Permission, value: PermValue) -> Self {
        let (allow, deny) = match value {
            PermValue::Allow => (self.allow.with(permission), self.deny.without(permission)),
            PermValue::Deny => (self.allow.without(permission), self.deny.with(permission)),
            PermValue::Inherit => (self.allow.without(permission), self.deny.without(permission)),
        };

        Self { allow, deny }
    }
}

/// One principal's overwrite on a channel. Replaced, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overwrite {
    target: PermissionTarget,
    permissions: OverwritePermissions,
}

impl Overwrite {
    pub fn new(target: PermissionTarget, permissions: OverwritePermissions) -> Self {
        Self {
            target,
            permissions,
        }
    }

    pub fn target(&self) -> PermissionTarget {
        self.target
    }

    pub fn target_id(&self) -> Snowflake {
        self.target.id()
    }

    pub fn target_type(&self) -> PermissionOverwriteType {
        self.target.overwrite_type()
    }

    pub fn permissions(&self) -> OverwritePermissions {
        self.permissions
    }
}

impl From<PermissionOverwrite> for Overwrite {
    fn from(other: PermissionOverwrite) -> Self {
        Self {
            target: PermissionTarget::from_parts(other.id, other.overwrite_type),
            permissions: OverwritePermissions::from_bit_sets(other.allow, other.deny),
        }
    }
}

impl From<Overwrite> for PermissionOverwrite {
    fn from(other: Overwrite) -> Self {
        PermissionOverwrite {
            id: other.target_id(),
            overwrite_type: other.target_type(),
            allow: other.permissions.allow,
            deny: other.permissions.deny,
        }
    }
}

impl From<Overwrite> for EditChannelPermissions {
    fn from(other: Overwrite) -> Self {
        EditChannelPermissions {
            allow: other.permissions.allow,
            deny: other.permissions.deny,
            overwrite_type: other.target_type(),
        }
    }
}
