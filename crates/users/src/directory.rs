//! Read-only user lookup port.

use std::sync::Arc;

use crate::user::{User, UserId};

pub trait UserDirectory: Send + Sync {
    /// Users in the salespeople group, sorted by name.
    fn salespeople(&self) -> Vec<User>;

    fn find_by_id(&self, id: UserId) -> Option<User>;
}

impl<D> UserDirectory for Arc<D>
where
    D: UserDirectory + ?Sized,
{
    fn salespeople(&self) -> Vec<User> {
        (**self).salespeople()
    }

    fn find_by_id(&self, id: UserId) -> Option<User> {
        (**self).find_by_id(id)
    }
}
