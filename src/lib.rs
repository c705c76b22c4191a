//! Reactive CRUD backend for employees, jobs and departments.
//!
//! Request flow: handler → service → repository → (criteria builder, row
//! mapper) → Sea-ORM driver, with results mapped to DTOs and serialized as
//! JSON. Store access is the only suspension point; everything layered on
//! top is a pure transformation.

pub mod config;
pub mod criteria;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod migrations;
pub mod openapi;
pub mod pagination;
pub mod repository;
pub mod service;
pub mod web;

pub use errors::{ApiError, StoreError};
pub use web::{AppState, api_router};
