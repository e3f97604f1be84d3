//! Periodic background jobs.

pub mod auto_close;
