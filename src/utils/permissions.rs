use crate::error::{Error, Result};
use crate::models::ticket::Ticket;
use crate::models::user::{User, UserRole};

/// What a staff member is trying to do to a ticket. Admins can do everything;
/// workers are limited to tickets assigned to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketAction {
    View,
    UpdateStatus,
    Assign,
}

pub fn can(user: &User, action: TicketAction, ticket: &Ticket) -> bool {
    match user.role {
        UserRole::Admin => true,
        UserRole::Worker => match action {
            TicketAction::Assign => false,
            TicketAction::View | TicketAction::UpdateStatus => {
                ticket.assigned_to == Some(user.id)
            }
        },
    }
}

pub fn require_admin(user: &User) -> Result<()> {
    if user.role != UserRole::Admin {
        return Err(Error::Forbidden("Admin access required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn user(role: UserRole) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: format!("{}@example.com", role.as_str()),
            full_name: "Test User".to_string(),
            role,
            hashed_password: String::new(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn ticket(assigned_to: Option<Uuid>) -> Ticket {
        let now = Utc::now();
        Ticket {
            id: Uuid::new_v4(),
            title: "t".to_string(),
            description: "d".to_string(),
            status: crate::models::ticket::TicketStatus::New,
            client_id: Uuid::new_v4(),
            assigned_to,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    #[test]
    fn admin_can_do_everything() {
        let admin = user(UserRole::Admin);
        let t = ticket(None);
        for action in [TicketAction::View, TicketAction::UpdateStatus, TicketAction::Assign] {
            assert!(can(&admin, action, &t));
        }
    }

    #[test]
    fn worker_is_scoped_to_own_tickets() {
        let worker = user(UserRole::Worker);
        let own = ticket(Some(worker.id));
        let other = ticket(Some(Uuid::new_v4()));
        let unassigned = ticket(None);

        assert!(can(&worker, TicketAction::View, &own));
        assert!(can(&worker, TicketAction::UpdateStatus, &own));
        assert!(!can(&worker, TicketAction::View, &other));
        assert!(!can(&worker, TicketAction::UpdateStatus, &other));
        assert!(!can(&worker, TicketAction::View, &unassigned));
    }

    #[test]
    fn worker_never_assigns() {
        let worker = user(UserRole::Worker);
        let own = ticket(Some(worker.id));
        assert!(!can(&worker, TicketAction::Assign, &own));
    }

    #[test]
    fn require_admin_rejects_workers() {
        assert!(require_admin(&user(UserRole::Admin)).is_ok());
        assert!(require_admin(&user(UserRole::Worker)).is_err());
    }
}
