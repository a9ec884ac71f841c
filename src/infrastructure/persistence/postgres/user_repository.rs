use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::auth::{
  entities::User,
  errors::{AuthError, RepositoryError},
  ports::UserRepository,
  value_objects::{Email, UserRole},
};

/// PostgreSQL implementation of the UserRepository trait
pub struct PostgresUserRepository {
  pool: PgPool,
}

impl PostgresUserRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for the users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
  id: Uuid,
  email: String,
  first_name: String,
  last_name: String,
  password_hash: String,
  role: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
  deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<UserRow> for User {
  type Error = AuthError;

  fn try_from(row: UserRow) -> Result<Self, Self::Error> {
    let role = UserRole::from_str(&row.role)?;

    Ok(User::from_db(
      row.id,
      row.email,
      row.first_name,
      row.last_name,
      row.password_hash,
      role,
      row.created_at,
      row.updated_at,
      row.deleted_at,
    ))
  }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
  async fn create(&self, user: User) -> Result<User, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            INSERT INTO users (
                id, email, first_name, last_name, password_hash, role,
                created_at, updated_at, deleted_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING
                id, email, first_name, last_name, password_hash, role,
                created_at, updated_at, deleted_at
            "#,
    )
    .bind(user.id)
    .bind(&user.email)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.password_hash)
    .bind(user.role.as_str())
    .bind(user.created_at)
    .bind(user.updated_at)
    .bind(user.deleted_at)
    .fetch_one(&self.pool)
    .await?;

    row.try_into()
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, email, first_name, last_name, password_hash, role,
                   created_at, updated_at, deleted_at
            FROM users
            WHERE id = $1 AND deleted_at IS NULL
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, email, first_name, last_name, password_hash, role,
                   created_at, updated_at, deleted_at
            FROM users
            WHERE email = $1 AND deleted_at IS NULL
            "#,
    )
    .bind(email.as_str())
    .fetch_optional(&self.pool)
    .await?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn list_all(&self) -> Result<Vec<User>, AuthError> {
    let rows = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, email, first_name, last_name, password_hash, role,
                   created_at, updated_at, deleted_at
            FROM users
            WHERE deleted_at IS NULL
            ORDER BY id ASC
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }

  async fn soft_delete(&self, id: Uuid) -> Result<(), AuthError> {
    let result = sqlx::query(
      r#"
            UPDATE users
            SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
    )
    .bind(id)
    .execute(&self.pool)
    .await?;

    if result.rows_affected() == 0 {
      return Err(AuthError::Repository(RepositoryError::NotFound));
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::postgres::test_support::setup_test_db;

  fn sample_user(email: &str) -> User {
    User::new(
      email.to_string(),
      "Test".to_string(),
      "User".to_string(),
      "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
      UserRole::Student,
    )
  }

  #[tokio::test]
  #[ignore = "requires a local Docker daemon"]
  async fn test_create_and_find_user() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    let user = sample_user("create@example.com");
    let created = repo.create(user.clone()).await.unwrap();
    assert_eq!(created.email, user.email);
    assert_eq!(created.role, UserRole::Student);

    let email = Email::new("create@example.com").unwrap();
    let found = repo.find_by_email(&email).await.unwrap();
    assert_eq!(found.unwrap().id, created.id);
  }

  #[tokio::test]
  #[ignore = "requires a local Docker daemon"]
  async fn test_duplicate_email_is_rejected() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    repo.create(sample_user("dup@example.com")).await.unwrap();
    let result = repo.create(sample_user("dup@example.com")).await;

    match result.unwrap_err() {
      AuthError::Repository(RepositoryError::DuplicateKey(_)) => {}
      other => panic!("Expected DuplicateKey, got {:?}", other),
    }
  }

  #[tokio::test]
  #[ignore = "requires a local Docker daemon"]
  async fn test_list_all_is_ordered_by_id() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    for i in 0..3 {
      repo
        .create(sample_user(&format!("user{}@example.com", i)))
        .await
        .unwrap();
    }

    let users = repo.list_all().await.unwrap();
    assert_eq!(users.len(), 3);
    assert!(users.windows(2).all(|w| w[0].id < w[1].id));
  }

  #[tokio::test]
  #[ignore = "requires a local Docker daemon"]
  async fn test_soft_delete_twice() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    let created = repo.create(sample_user("gone@example.com")).await.unwrap();

    repo.soft_delete(created.id).await.unwrap();
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());

    let second = repo.soft_delete(created.id).await;
    assert!(matches!(
      second.unwrap_err(),
      AuthError::Repository(RepositoryError::NotFound)
    ));
  }

  #[tokio::test]
  #[ignore = "requires a local Docker daemon"]
  async fn test_deleted_email_can_be_reused() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    let first = repo.create(sample_user("reuse@example.com")).await.unwrap();
    repo.soft_delete(first.id).await.unwrap();

    // the partial unique index only covers active rows
    let second = repo.create(sample_user("reuse@example.com")).await;
    assert!(second.is_ok());
  }
}
