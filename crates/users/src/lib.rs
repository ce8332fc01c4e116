//! `orderdesk-users`: system users and salesperson selection.
//!
//! Users are only read here; authentication and group management live
//! elsewhere.

pub mod convert;
pub mod directory;
pub mod user;

pub use convert::{resolve_user, user_key};
pub use directory::UserDirectory;
pub use user::{Group, User, UserId};
