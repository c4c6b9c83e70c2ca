// Submission identity and the append-only submission log.

pub mod handlers;
pub mod identity;
pub mod store;
