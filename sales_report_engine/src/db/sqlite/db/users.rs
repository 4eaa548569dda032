use log::trace;
use sqlx::SqliteConnection;

use crate::{
    db_types::{User, UserAttributeKind},
    traits::UserApiError,
};

pub async fn user_by_id(id: &str, conn: &mut SqliteConnection) -> Result<Option<User>, UserApiError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email
        FROM users
        WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(user)
}

/// Fetches the first user whose `attribute` column matches `value` exactly. The column name is taken from the
/// closed [`UserAttributeKind`] enum, never from caller-supplied text.
pub async fn first_user_by_attribute(
    attribute: UserAttributeKind,
    value: &str,
    conn: &mut SqliteConnection,
) -> Result<Option<User>, UserApiError> {
    trace!("🧑️ Fetching first user with {attribute} = [{value}]");
    let query = format!(
        "SELECT id, name, email FROM users WHERE {column} = $1 LIMIT 1",
        column = attribute.column()
    );
    let user = sqlx::query_as::<_, User>(&query).bind(value).fetch_optional(conn).await?;
    Ok(user)
}

pub async fn insert_user(user: &User, conn: &mut SqliteConnection) -> Result<(), UserApiError> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (id, name, email)
        VALUES ($1, $2, $3)"#,
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.email)
    .execute(conn)
    .await;
    match result {
        Ok(_) => {
            trace!("🧑️ User [{}] has been saved in the DB", user.id);
            Ok(())
        },
        Err(sqlx::Error::Database(de)) if de.is_unique_violation() => {
            Err(UserApiError::UserAlreadyExists(user.id.clone()))
        },
        Err(e) => Err(e.into()),
    }
}

pub async fn upsert_user(user: &User, conn: &mut SqliteConnection) -> Result<(), UserApiError> {
    sqlx::query(
        r#"
        INSERT INTO users (id, name, email)
        VALUES ($1, $2, $3)
        ON CONFLICT (id) DO UPDATE SET name = excluded.name, email = excluded.email"#,
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.email)
    .execute(conn)
    .await?;
    Ok(())
}
