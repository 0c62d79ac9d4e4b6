//! CLI commands for kiwiland

pub mod dispatch;
pub mod output;
pub mod query;
pub mod session;
