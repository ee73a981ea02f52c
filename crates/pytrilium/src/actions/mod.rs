//! Action groups for ETAPI operations.
//!
//! Each module provides a set of related operations grouped by resource.

mod attachments;
mod attributes;
mod auth;
mod branches;
mod calendar;
mod notes;

pub use attachments::AttachmentActions;
pub use attributes::AttributeActions;
pub use auth::AuthActions;
pub use branches::BranchActions;
pub use calendar::CalendarActions;
pub use notes::{EXPORT_FILE_PREFIX, NoteActions};
