//! Conversion between users and the string keys used by selection widgets.

use orderdesk_core::DomainResult;

use crate::user::{User, UserId};

/// Selection key for `user`: its id, or an empty string for "no selection".
pub fn user_key(user: Option<&User>) -> String {
    user.map(|u| u.id_typed().to_string()).unwrap_or_default()
}

/// Resolve a selection key back to a user.
///
/// An empty key means "no selection". A key that is not an id is an error;
/// a well-formed id that `find` does not know resolves to `None`.
pub fn resolve_user<F>(key: &str, find: F) -> DomainResult<Option<User>>
where
    F: FnOnce(UserId) -> Option<User>,
{
    let key = key.trim();
    if key.is_empty() {
        return Ok(None);
    }
    let id: UserId = key.parse()?;
    Ok(find(id))
}
