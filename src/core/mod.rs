pub mod user;
pub mod directory;

pub use user::{User, UserId, RecordError, parse_user_id};
pub use directory::UserDirectory;
