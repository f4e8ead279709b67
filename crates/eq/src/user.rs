//! Users compared by identifier only.

use serde::{Deserialize, Serialize};

use crate::contramap::{Contramap, contramap};
use crate::equivalence::{Strict, eq_strict};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: u64,
    pub name: String,
}

impl User {
    pub fn new(user_id: u64, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
        }
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }
}

/// Relation identifying users by `user_id`.
pub type UserEq = Contramap<fn(&User) -> u64, Strict<u64>, u64>;

/// Two users are equal iff their `user_id` is equal; `name` is ignored.
///
/// This is an equivalence on the id, not on the whole record: users with
/// different names but the same id are considered equal.
pub fn user_eq() -> UserEq {
    contramap(User::user_id as fn(&User) -> u64, eq_strict::<u64>())
}
