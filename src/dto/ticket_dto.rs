use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::ticket::{Ticket, TicketStatus};
use crate::services::ticket_service::{TicketDetailRow, TicketList};
use crate::utils::pagination::PaginatedResponse;

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TicketListQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: i64,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    pub page_size: i64,
    pub status: Option<TicketStatus>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignTicketPayload {
    pub assigned_to: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTicketStatusPayload {
    pub status: TicketStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct TicketResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub client_id: Uuid,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<Ticket> for TicketResponse {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id,
            title: ticket.title,
            description: ticket.description,
            status: ticket.status,
            client_id: ticket.client_id,
            assigned_to: ticket.assigned_to,
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
            completed_at: ticket.completed_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientSummary {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssigneeSummary {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TicketDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub client_id: Uuid,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub client: ClientSummary,
    pub assigned_user: Option<AssigneeSummary>,
}

impl From<TicketDetailRow> for TicketDetailResponse {
    fn from(row: TicketDetailRow) -> Self {
        let assigned_user = match (row.assigned_to, row.assignee_full_name, row.assignee_email) {
            (Some(id), Some(full_name), Some(email)) => Some(AssigneeSummary {
                id,
                full_name,
                email,
            }),
            _ => None,
        };
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            status: row.status,
            client_id: row.client_id,
            assigned_to: row.assigned_to,
            created_at: row.created_at,
            updated_at: row.updated_at,
            completed_at: row.completed_at,
            client: ClientSummary {
                id: row.client_id,
                full_name: row.client_full_name,
                email: row.client_email,
                phone: row.client_phone,
            },
            assigned_user,
        }
    }
}

impl From<TicketList> for PaginatedResponse<TicketDetailResponse> {
    fn from(list: TicketList) -> Self {
        PaginatedResponse {
            items: list
                .items
                .into_iter()
                .map(TicketDetailResponse::from)
                .collect(),
            total: list.total,
            page: list.page,
            page_size: list.page_size,
            total_pages: list.total_pages,
        }
    }
}
