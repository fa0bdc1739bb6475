use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::user_dto::{CreateUserPayload, UpdateUserPayload};
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::crypto;
use crate::utils::pagination::{offset, total_pages};

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

pub struct UserList {
    pub items: Vec<User>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, page: i64, page_size: i64) -> Result<UserList> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        let items = sqlx::query_as::<_, User>(
            "SELECT * FROM users ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page_size)
        .bind(offset(page, page_size))
        .fetch_all(&self.pool)
        .await?;

        Ok(UserList {
            items,
            total,
            page,
            page_size,
            total_pages: total_pages(total, page_size),
        })
    }

    pub async fn create(&self, payload: CreateUserPayload) -> Result<User> {
        let exists: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
            .bind(&payload.email)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_some() {
            return Err(Error::BadRequest("Email already registered".to_string()));
        }

        let hashed = crypto::hash_password(&payload.password)
            .map_err(|e| Error::Internal(format!("Password hashing failed: {}", e)))?;

        let now = Utc::now();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, full_name, role, hashed_password, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, TRUE, $6, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&payload.email)
        .bind(&payload.full_name)
        .bind(payload.role)
        .bind(hashed)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))
    }

    /// Partial update; absent fields are left untouched. A supplied password
    /// is re-hashed before storage.
    pub async fn update(&self, id: Uuid, payload: UpdateUserPayload) -> Result<User> {
        self.get_by_id(id).await?;

        let hashed = match &payload.password {
            Some(password) => Some(
                crypto::hash_password(password)
                    .map_err(|e| Error::Internal(format!("Password hashing failed: {}", e)))?,
            ),
            None => None,
        };

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                email = COALESCE($2, email),
                full_name = COALESCE($3, full_name),
                role = COALESCE($4, role),
                is_active = COALESCE($5, is_active),
                hashed_password = COALESCE($6, hashed_password),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.email)
        .bind(payload.full_name)
        .bind(payload.role)
        .bind(payload.is_active)
        .bind(hashed)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("User not found".to_string()));
        }
        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}
