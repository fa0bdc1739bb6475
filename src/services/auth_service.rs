use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::{crypto, token};

#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
    jwt_secret: String,
    access_token_expire_minutes: i64,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt_secret: String, access_token_expire_minutes: i64) -> Self {
        Self {
            pool,
            jwt_secret,
            access_token_expire_minutes,
        }
    }

    /// Exchange credentials for a signed access token. Absent user, inactive
    /// user and wrong password all produce the same 401.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        let Some(user) = user else {
            return Err(invalid_credentials());
        };

        let ok = crypto::verify_password(password, &user.hashed_password)
            .map_err(|e| Error::Internal(format!("Password verification failed: {}", e)))?;
        if !ok || !user.is_active {
            return Err(invalid_credentials());
        }

        token::create_access_token(
            user.id,
            user.role,
            &self.jwt_secret,
            self.access_token_expire_minutes,
        )
        .map_err(|e| Error::Internal(format!("Token creation failed: {}", e)))
    }

    /// Resolve a bearer token to its user. Any verification failure, a
    /// missing user or a deactivated account is a generic 401.
    pub async fn resolve_token(&self, bearer: &str) -> Result<User> {
        let claims = token::decode_access_token(bearer, &self.jwt_secret)
            .ok_or_else(|| Error::Unauthorized("Could not validate credentials".to_string()))?;

        let user_id: Uuid = claims
            .sub
            .parse()
            .map_err(|_| Error::Unauthorized("Could not validate credentials".to_string()))?;

        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::Unauthorized("Could not validate credentials".to_string()))?;

        if !user.is_active {
            return Err(Error::Unauthorized("Inactive user".to_string()));
        }

        Ok(user)
    }
}

fn invalid_credentials() -> Error {
    Error::Unauthorized("Incorrect email or password".to_string())
}
