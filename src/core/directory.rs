use std::sync::Arc;

use serde::Deserialize;

use crate::core::user::{User, UserId};

/// The user collection served by the process. Built once at startup
/// and only ever read afterwards.
#[derive(Debug, Deserialize)]
pub struct UserDirectory {
    users: Arc<[User]>
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> UserDirectory {
        UserDirectory { users: users.into() }
    }

    /// All users, in the order they were loaded.
    pub fn list_users(&self) -> &[User] {
        return &self.users;
    }

    /// Same as `list_users`, as a handle that can outlive the borrow.
    pub fn shared_users(&self) -> Arc<[User]> {
        Arc::clone(&self.users)
    }

    /// First user carrying `id`. Ids are expected to be unique but
    /// this is not checked.
    pub fn find_user_by_id(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        UserDirectory::new(Vec::new())
    }
}
