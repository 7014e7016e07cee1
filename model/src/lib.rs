mod snowflake;
pub use snowflake::Snowflake;

mod permission_bit_set;
pub use permission_bit_set::PermissionBitSet;

pub mod channel;
pub mod invite;

mod util;
