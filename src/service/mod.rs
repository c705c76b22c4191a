//! Per-entity services: DTO conversion and orchestration over the
//! repositories. Multi-step flows (exists-then-update, find-then-merge) open
//! an explicit transaction and commit or roll back on the single call path;
//! single-statement operations run on the plain connection and rely on the
//! store's own atomicity.

pub mod department;
pub mod employee;
pub mod job;

pub use department::{DepartmentService, SqlDepartmentService};
pub use employee::{EmployeeService, SqlEmployeeService};
pub use job::{JobService, SqlJobService};
