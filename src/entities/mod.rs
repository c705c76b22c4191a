//! Persistence models for the three generated entities.
//!
//! Associations are stored as foreign-key columns only; related rows are
//! resolved on demand by the repositories (joined reads or finder queries),
//! never held as live object graphs.

pub mod department;
pub mod employee;
pub mod job;
