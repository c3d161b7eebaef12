mod cancellation;
mod request_scope;

pub use cancellation::{CancelOnDrop, Cancellation, DeadlineGuard};
pub use request_scope::{RequestScope, ScopeError};
