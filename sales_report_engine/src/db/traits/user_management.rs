use thiserror::Error;

use crate::db_types::{User, UserAttributeKind};

#[derive(Debug, Clone, Error)]
pub enum UserApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("A user with id {0} already exists")]
    UserAlreadyExists(String),
}

impl From<sqlx::Error> for UserApiError {
    fn from(e: sqlx::Error) -> Self {
        UserApiError::DatabaseError(e.to_string())
    }
}

/// The `UserManagement` trait is the account directory: the lookup store that maps verified identity attributes
/// to local account records.
///
/// The authorization gate resolves every verified token against this directory before a request is allowed to
/// proceed, so the lookup methods are on the hot path of every authenticated request.
#[allow(async_fn_in_trait)]
pub trait UserManagement {
    /// Fetches the user with the given id. If no user exists, `None` is returned.
    async fn fetch_user_by_id(&self, id: &str) -> Result<Option<User>, UserApiError>;

    /// Fetches the first user whose `attribute` column is exactly equal to `value`. Matching is exact; there is
    /// no pattern or prefix semantics here.
    async fn fetch_first_user_by_attribute(
        &self,
        attribute: UserAttributeKind,
        value: &str,
    ) -> Result<Option<User>, UserApiError>;

    /// Inserts a new user record. Fails with [`UserApiError::UserAlreadyExists`] if the id is taken.
    async fn create_user(&self, user: &User) -> Result<(), UserApiError>;

    /// Inserts the user record, or updates name and email if a record with the same id already exists.
    async fn upsert_user(&self, user: &User) -> Result<(), UserApiError>;
}
