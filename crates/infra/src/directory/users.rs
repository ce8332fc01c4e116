use orderdesk_users::{User, UserDirectory, UserId};

use crate::store::{InMemoryStore, KeyedStore};

#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    store: InMemoryStore<UserId, User>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let directory = Self::new();
        for user in users {
            directory.upsert(user);
        }
        directory
    }

    pub fn upsert(&self, user: User) {
        self.store.upsert(user.id_typed(), user);
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn salespeople(&self) -> Vec<User> {
        let mut found: Vec<User> = self
            .store
            .list()
            .into_iter()
            .filter(User::is_salesperson)
            .collect();
        found.sort_by(|a, b| a.name().cmp(b.name()));
        found
    }

    fn find_by_id(&self, id: UserId) -> Option<User> {
        self.store.get(&id)
    }
}
