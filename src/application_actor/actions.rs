//! Custom actions for the application book.
//!
//! Review decisions are the only mutation an application sees after it is
//! recorded. They are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::ApplicationStatus;

#[derive(Debug, Clone)]
pub enum ApplicationAction {
    /// Records an employer's decision.
    SetStatus(ApplicationStatus),
}

/// Results from [`ApplicationAction`]s; variants match 1:1.
#[derive(Debug, Clone)]
pub enum ApplicationActionResult {
    /// The status the application held before the change.
    SetStatus(ApplicationStatus),
}
