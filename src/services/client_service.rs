use chrono::Utc;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::Result;
use crate::models::client::Client;

/// Look up a client by exact email, creating one when no row matches. Runs on
/// the caller's transaction so the subsequent ticket insert commits or rolls
/// back together with it.
///
/// The first match wins and any differing name/phone/address in the payload
/// is ignored. There is no uniqueness constraint on clients.email, so two
/// concurrent submissions with the same address can both insert; dedup is
/// best-effort by design.
pub async fn find_or_create_by_email(
    conn: &mut PgConnection,
    full_name: &str,
    email: &str,
    phone: &str,
    address: Option<&str>,
) -> Result<Client> {
    let existing = sqlx::query_as::<_, Client>(
        "SELECT * FROM clients WHERE email = $1 ORDER BY created_at LIMIT 1",
    )
    .bind(email)
    .fetch_optional(&mut *conn)
    .await?;

    if let Some(client) = existing {
        return Ok(client);
    }

    let now = Utc::now();
    let client = sqlx::query_as::<_, Client>(
        r#"
        INSERT INTO clients (id, full_name, email, phone, address, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(full_name)
    .bind(email)
    .bind(phone)
    .bind(address)
    .bind(now)
    .fetch_one(&mut *conn)
    .await?;

    Ok(client)
}
