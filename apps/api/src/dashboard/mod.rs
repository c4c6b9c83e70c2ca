// HR dashboard: aggregate statistics and candidate listing over the submission log.

pub mod aggregator;
pub mod candidates;
pub mod handlers;
