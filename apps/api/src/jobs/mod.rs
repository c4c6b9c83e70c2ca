// Job catalog: the postings whose skill lists drive analysis.

pub mod catalog;
pub mod handlers;
pub mod seed;
