//! Kiwiland Core Library
//!
//! Graph model and route queries for the kiwiland route planner.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
