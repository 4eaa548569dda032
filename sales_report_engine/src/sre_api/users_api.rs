//! Unified API for accessing the account directory.
use std::fmt::Debug;

use crate::{
    db_types::{User, UserAttributeKind},
    traits::{UserApiError, UserManagement},
};

/// The `UserApi` provides a unified API for accessing the account directory.
pub struct UserApi<B> {
    db: B,
}

impl<B: Debug> Debug for UserApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserApi ({:?})", self.db)
    }
}

impl<B> UserApi<B>
where B: UserManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Fetches the user with the given id. If no user exists, `None` is returned.
    pub async fn user_by_id(&self, id: &str) -> Result<Option<User>, UserApiError> {
        self.db.fetch_user_by_id(id).await
    }

    /// Fetches the first user matching the given attribute exactly.
    pub async fn first_user_by_attribute(
        &self,
        attribute: UserAttributeKind,
        value: &str,
    ) -> Result<Option<User>, UserApiError> {
        self.db.fetch_first_user_by_attribute(attribute, value).await
    }

    /// Convenience wrapper for the lookup the authorization gate performs on every request: exact match on the
    /// email attribute kind.
    pub async fn user_by_email(&self, email: &str) -> Result<Option<User>, UserApiError> {
        self.db.fetch_first_user_by_attribute(UserAttributeKind::Email, email).await
    }

    pub async fn create_user(&self, user: &User) -> Result<(), UserApiError> {
        self.db.create_user(user).await
    }

    pub async fn upsert_user(&self, user: &User) -> Result<(), UserApiError> {
        self.db.upsert_user(user).await
    }
}
