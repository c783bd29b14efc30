mod core;
pub mod backend;
pub mod server;

pub use crate::core::{User, UserId, UserDirectory, parse_user_id};
pub use crate::core::{directory, user};
