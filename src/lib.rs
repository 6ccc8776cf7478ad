//! sqlcrew library — capability-scoped task roles and SQL script file access.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod error;
