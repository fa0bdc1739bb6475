use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::public_dto::CreateRepairRequestPayload;
use crate::dto::ticket_dto::TicketListQuery;
use crate::error::{Error, Result};
use crate::models::ticket::{Ticket, TicketStatus};
use crate::models::user::{User, UserRole};
use crate::services::client_service;
use crate::utils::pagination::{offset, total_pages};
use crate::utils::permissions::{can, require_admin, TicketAction};

#[derive(Clone)]
pub struct TicketService {
    pool: PgPool,
}

/// One listing row: a ticket joined with its client and optional assignee.
#[derive(Debug, Clone, FromRow)]
pub struct TicketDetailRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub client_id: Uuid,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub client_full_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub assignee_full_name: Option<String>,
    pub assignee_email: Option<String>,
}

impl TicketDetailRow {
    fn as_ticket(&self) -> Ticket {
        Ticket {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            client_id: self.client_id,
            assigned_to: self.assigned_to,
            created_at: self.created_at,
            updated_at: self.updated_at,
            completed_at: self.completed_at,
        }
    }
}

pub struct TicketList {
    pub items: Vec<TicketDetailRow>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

const DETAIL_COLUMNS: &str = "t.id, t.title, t.description, t.status, t.client_id, t.assigned_to, \
     t.created_at, t.updated_at, t.completed_at, \
     c.full_name AS client_full_name, c.email AS client_email, c.phone AS client_phone, \
     u.full_name AS assignee_full_name, u.email AS assignee_email";

const DETAIL_JOINS: &str =
    " FROM tickets t JOIN clients c ON c.id = t.client_id LEFT JOIN users u ON u.id = t.assigned_to";

impl TicketService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Public intake: find-or-create the client by email and create the
    /// ticket in the same transaction, so both commit or neither does.
    pub async fn create_repair_request(
        &self,
        payload: CreateRepairRequestPayload,
    ) -> Result<Ticket> {
        let mut tx = self.pool.begin().await?;

        let client = client_service::find_or_create_by_email(
            &mut *tx,
            &payload.client_full_name,
            &payload.client_email,
            &payload.client_phone,
            payload.client_address.as_deref(),
        )
        .await?;

        let now = Utc::now();
        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets (id, title, description, status, client_id, created_at, updated_at)
            VALUES ($1, $2, $3, 'new', $4, $5, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(client.id)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(ticket)
    }

    /// Role-scoped listing. Workers only ever see tickets assigned to them;
    /// the scope narrows the count as well, so totals reflect the filtered
    /// set. Search is a case-insensitive substring match on the title.
    pub async fn list(&self, actor: &User, query: &TicketListQuery) -> Result<TicketList> {
        let mut count_qb: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM tickets t");
        push_filters(&mut count_qb, actor, query);
        let total: i64 = count_qb.build_query_scalar().fetch_one(&self.pool).await?;

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        qb.push(DETAIL_COLUMNS).push(DETAIL_JOINS);
        push_filters(&mut qb, actor, query);
        qb.push(" ORDER BY t.created_at DESC LIMIT ")
            .push_bind(query.page_size)
            .push(" OFFSET ")
            .push_bind(offset(query.page, query.page_size));

        let items = qb
            .build_query_as::<TicketDetailRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(TicketList {
            items,
            total,
            page: query.page,
            page_size: query.page_size,
            total_pages: total_pages(total, query.page_size),
        })
    }

    pub async fn get(&self, actor: &User, ticket_id: Uuid) -> Result<TicketDetailRow> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        qb.push(DETAIL_COLUMNS)
            .push(DETAIL_JOINS)
            .push(" WHERE t.id = ")
            .push_bind(ticket_id);

        let row = qb
            .build_query_as::<TicketDetailRow>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Ticket not found".to_string()))?;

        if !can(actor, TicketAction::View, &row.as_ticket()) {
            return Err(Error::Forbidden("Access denied".to_string()));
        }

        Ok(row)
    }

    /// Bind a worker to a ticket. Admin only. The worker is validated before
    /// the ticket is looked up, so a bad worker id is a 400 even when the
    /// ticket does not exist. Assignment resets status to ASSIGNED no matter
    /// what the prior status was.
    pub async fn assign(&self, actor: &User, ticket_id: Uuid, worker_id: Uuid) -> Result<Ticket> {
        require_admin(actor)?;

        let mut tx = self.pool.begin().await?;

        let worker = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(worker_id)
            .fetch_optional(&mut *tx)
            .await?;
        let valid_worker = worker.map_or(false, |w| w.role == UserRole::Worker);
        if !valid_worker {
            return Err(Error::BadRequest("Worker not found".to_string()));
        }

        let mut ticket = sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE id = $1")
            .bind(ticket_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| Error::NotFound("Ticket not found".to_string()))?;

        ticket.apply_assignment(worker_id, Utc::now());

        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            UPDATE tickets
            SET assigned_to = $2, status = $3, updated_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(ticket.id)
        .bind(ticket.assigned_to)
        .bind(ticket.status)
        .bind(ticket.updated_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(ticket)
    }

    /// Set the status. No transition table is enforced; any authorized caller
    /// may move a ticket to any status. Workers may only touch their own
    /// tickets. Concurrent updates are last-write-wins.
    pub async fn update_status(
        &self,
        actor: &User,
        ticket_id: Uuid,
        status: TicketStatus,
    ) -> Result<Ticket> {
        let mut tx = self.pool.begin().await?;

        let mut ticket = sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE id = $1")
            .bind(ticket_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| Error::NotFound("Ticket not found".to_string()))?;

        if !can(actor, TicketAction::UpdateStatus, &ticket) {
            return Err(Error::Forbidden(
                "You can only update your own tickets".to_string(),
            ));
        }

        ticket.apply_status(status, Utc::now());

        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            UPDATE tickets
            SET status = $2, completed_at = $3, updated_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(ticket.id)
        .bind(ticket.status)
        .bind(ticket.completed_at)
        .bind(ticket.updated_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(ticket)
    }
}

fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, actor: &User, query: &TicketListQuery) {
    qb.push(" WHERE 1 = 1");
    if actor.role == UserRole::Worker {
        qb.push(" AND t.assigned_to = ").push_bind(actor.id);
    }
    if let Some(status) = query.status {
        qb.push(" AND t.status = ").push_bind(status);
    }
    if let Some(ref search) = query.search {
        qb.push(" AND t.title ILIKE ")
            .push_bind(format!("%{}%", search));
    }
}
