use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum TicketStatus {
    New,
    Assigned,
    InProgress,
    Done,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
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

impl Ticket {
    /// Apply a status change. The first transition to DONE stamps
    /// `completed_at`; it is never cleared afterwards, even when the status
    /// later moves away from DONE.
    pub fn apply_status(&mut self, status: TicketStatus, now: DateTime<Utc>) {
        self.status = status;
        if status == TicketStatus::Done && self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
        self.updated_at = now;
    }

    /// Bind a worker to the ticket. Resets status to ASSIGNED regardless of
    /// the prior status, so re-assigning an in-progress or done ticket moves
    /// it back to ASSIGNED.
    pub fn apply_assignment(&mut self, worker_id: Uuid, now: DateTime<Utc>) {
        self.assigned_to = Some(worker_id);
        self.status = TicketStatus::Assigned;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket() -> Ticket {
        let now = Utc::now();
        Ticket {
            id: Uuid::new_v4(),
            title: "Broken screen".to_string(),
            description: "Dropped on concrete".to_string(),
            status: TicketStatus::New,
            client_id: Uuid::new_v4(),
            assigned_to: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    #[test]
    fn completed_at_is_stamped_on_first_done_only() {
        let mut t = ticket();
        assert!(t.completed_at.is_none());

        let first = Utc::now();
        t.apply_status(TicketStatus::Done, first);
        assert_eq!(t.completed_at, Some(first));

        t.apply_status(TicketStatus::InProgress, Utc::now());
        assert_eq!(t.completed_at, Some(first), "never cleared");

        t.apply_status(TicketStatus::Done, Utc::now());
        assert_eq!(t.completed_at, Some(first), "not re-stamped");
    }

    #[test]
    fn assignment_resets_status_from_any_state() {
        let worker = Uuid::new_v4();
        for status in [
            TicketStatus::New,
            TicketStatus::Assigned,
            TicketStatus::InProgress,
            TicketStatus::Done,
            TicketStatus::Cancelled,
        ] {
            let mut t = ticket();
            t.apply_status(status, Utc::now());
            t.apply_assignment(worker, Utc::now());
            assert_eq!(t.status, TicketStatus::Assigned);
            assert_eq!(t.assigned_to, Some(worker));
        }
    }

    #[test]
    fn reassignment_keeps_completed_at() {
        let mut t = ticket();
        let done_at = Utc::now();
        t.apply_status(TicketStatus::Done, done_at);
        t.apply_assignment(Uuid::new_v4(), Utc::now());
        assert_eq!(t.status, TicketStatus::Assigned);
        assert_eq!(t.completed_at, Some(done_at));
    }
}
