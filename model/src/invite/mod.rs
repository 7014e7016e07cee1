mod invite;
pub use invite::Invite;
