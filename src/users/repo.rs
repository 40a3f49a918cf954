use axum::async_trait;
use sqlx::SqlitePool;

use crate::error::StoreError;
use crate::users::repo_types::{NewUser, UserRecord};

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        email TEXT UNIQUE,
        password TEXT,
        address TEXT,
        travel_time TEXT,
        roster TEXT
    )
"#;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Creates the `users` table if it does not exist yet.
    async fn init_schema(&self) -> Result<(), StoreError>;

    /// Inserts a user and returns the id storage assigned to it.
    async fn insert_user(&self, user: &NewUser) -> Result<i64, StoreError>;

    /// All users whose roster equals `roster` exactly, oldest first.
    /// `None` is bound as NULL and matches nothing.
    async fn find_users_by_roster(
        &self,
        roster: Option<&str>,
    ) -> Result<Vec<UserRecord>, StoreError>;
}

#[derive(Clone)]
pub struct SqliteUserStore {
    db: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_USERS).execute(&self.db).await?;
        Ok(())
    }

    async fn insert_user(&self, user: &NewUser) -> Result<i64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (name, email, password, address, travel_time, roster)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.address)
        .bind(&user.travel_time)
        .bind(&user.roster)
        .execute(&self.db)
        .await
        .map_err(StoreError::from_insert)?;
        Ok(result.last_insert_rowid())
    }

    async fn find_users_by_roster(
        &self,
        roster: Option<&str>,
    ) -> Result<Vec<UserRecord>, StoreError> {
        let rows = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT name, email, address, roster
            FROM users
            WHERE roster = ?
            ORDER BY id ASC
            "#,
        )
        .bind(roster)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_in_memory;

    async fn store() -> SqliteUserStore {
        let store = SqliteUserStore::new(connect_in_memory().await);
        store.init_schema().await.unwrap();
        store
    }

    fn user(email: &str, roster: &str) -> NewUser {
        NewUser {
            name: format!("name of {email}"),
            email: email.into(),
            password: "hunter2".into(),
            address: "1 Main St".into(),
            travel_time: "15 min".into(),
            roster: roster.into(),
        }
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let store = store().await;
        store.init_schema().await.unwrap();
        store.init_schema().await.unwrap();
        store.insert_user(&user("a@x.io", "R")).await.unwrap();
    }

    #[tokio::test]
    async fn ids_strictly_increase() {
        let store = store().await;
        let a = store.insert_user(&user("a@x.io", "R")).await.unwrap();
        let b = store.insert_user(&user("b@x.io", "R")).await.unwrap();
        let c = store.insert_user(&user("c@x.io", "S")).await.unwrap();
        assert!(a < b && b < c);
    }

    #[tokio::test]
    async fn duplicate_email_is_reported_and_not_inserted() {
        let store = store().await;
        store.insert_user(&user("dup@x.io", "R")).await.unwrap();
        let err = store.insert_user(&user("dup@x.io", "S")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind("dup@x.io")
            .fetch_one(&store.db)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn email_uniqueness_is_case_sensitive() {
        let store = store().await;
        store.insert_user(&user("case@x.io", "R")).await.unwrap();
        store.insert_user(&user("CASE@x.io", "R")).await.unwrap();
    }

    #[tokio::test]
    async fn roster_lookup_is_exact_and_ordered() {
        let store = store().await;
        store.insert_user(&user("r1@x.io", "R")).await.unwrap();
        store.insert_user(&user("s1@x.io", "S")).await.unwrap();
        store.insert_user(&user("r2@x.io", "R")).await.unwrap();
        store.insert_user(&user("lower@x.io", "r")).await.unwrap();

        let found = store.find_users_by_roster(Some("R")).await.unwrap();
        let emails: Vec<_> = found.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, ["r1@x.io", "r2@x.io"]);
        assert_eq!(
            found[0],
            UserRecord {
                name: "name of r1@x.io".into(),
                email: "r1@x.io".into(),
                address: "1 Main St".into(),
                roster: "R".into(),
            }
        );
    }

    #[tokio::test]
    async fn unknown_or_missing_roster_matches_nothing() {
        let store = store().await;
        store.insert_user(&user("a@x.io", "R")).await.unwrap();
        assert!(store.find_users_by_roster(Some("nope")).await.unwrap().is_empty());
        assert!(store.find_users_by_roster(None).await.unwrap().is_empty());
    }
}
