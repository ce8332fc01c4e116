//! User entity.

use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainResult, Entity, Violations};

orderdesk_core::aggregate_id_newtype!(
    /// Unique identifier for a user.
    UserId
);

// ─────────────────────────────────────────────────────────────────────────────
// Groups
// ─────────────────────────────────────────────────────────────────────────────

/// Group a user belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    /// Users allowed to appear as the salesperson of an order.
    Salespeople,
    Auxiliaries,
    Administrators,
}

impl core::fmt::Display for Group {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Group::Salespeople => write!(f, "Salespeople"),
            Group::Auxiliaries => write!(f, "Auxiliaries"),
            Group::Administrators => write!(f, "Administrators"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User
// ─────────────────────────────────────────────────────────────────────────────

const MAX_NAME_CHARS: usize = 100;
const MAX_EMAIL_CHARS: usize = 100;

/// System user.
///
/// # Invariants
/// - Name is not blank and at most 100 characters.
/// - Email is not blank, at most 100 characters, and email-shaped.
/// - Two users are the same user when their ids match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    groups: Vec<Group>,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        groups: Vec<Group>,
    ) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        let email = email.into().trim().to_lowercase();

        Self::validate(&name, &email).into_result()?;

        let mut unique = Vec::with_capacity(groups.len());
        for g in groups {
            if !unique.contains(&g) {
                unique.push(g);
            }
        }

        Ok(Self {
            id,
            name,
            email,
            groups: unique,
        })
    }

    /// Field checks for a prospective user.
    pub fn validate(name: &str, email: &str) -> Violations {
        let mut v = Violations::new();
        if v.require_text("name", name) {
            v.max_chars("name", name, MAX_NAME_CHARS);
        }
        if v.require_text("email", email) {
            v.max_chars("email", email, MAX_EMAIL_CHARS);
            v.email("email", email);
        }
        v
    }

    pub fn id_typed(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn in_group(&self, group: Group) -> bool {
        self.groups.contains(&group)
    }

    pub fn is_salesperson(&self) -> bool {
        self.in_group(Group::Salespeople)
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl core::hash::Hash for User {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
