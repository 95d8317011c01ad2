use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Denied,
}

/// Decide whether `acting_user` may modify a resource owned by `owner_id`.
///
/// Only the owner may. There are no roles or scopes.
pub fn authorize(acting_user: &User, owner_id: &UserId) -> Access {
    if acting_user.id == *owner_id {
        Access::Allowed
    } else {
        Access::Denied
    }
}
