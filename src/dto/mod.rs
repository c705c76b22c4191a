//! Wire-facing shapes, distinct from the persisted models.
//!
//! Parent references are flattened to their id plus minimal display fields,
//! so the Employee↔Job↔Department graph can never serialize cyclically. The
//! reverse direction is documented lossy: a DTO converts back to a row with
//! its scalar fields and foreign-key id, dropping the nested summary.
//!
//! Each entity has one input shape covering create and full update; the same
//! shape applied through `apply_to` performs a partial update, where an
//! absent field keeps the stored value and can never null it out.

pub mod department;
pub mod employee;
pub mod job;

pub use department::{DepartmentDto, DepartmentInput};
pub use employee::{EmployeeDto, EmployeeInput};
pub use job::{JobDto, JobInput};
