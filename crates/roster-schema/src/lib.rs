//! # roster-schema
//!
//! Field rules, submission validation, and JSON Schema registry for Roster.
//!
//! This crate provides:
//! - `EmployeeSchema`: the declarative rule set (field name to rules) an
//!   employee submission must satisfy
//! - `validate`: a pure function from a raw submission to either a normalized
//!   `EmployeeRecord` or every field error at once
//! - `SchemaRegistry`: JSON Schemas for the stored types, used to check
//!   rehydrated payloads and to export schemas for external tooling
//!
//! ## Architecture
//!
//! Entity types are defined in `roster-core` with `#[derive(JsonSchema)]`.
//! This crate owns the write-time rules; `roster-store` calls `validate` on
//! every submit and the registry on every rehydrate.

pub mod error;
pub mod registry;
pub mod rules;
pub mod validator;

pub use error::{FieldError, FieldErrors, SchemaError};
pub use registry::SchemaRegistry;
pub use rules::{EmployeeSchema, FieldKind, FieldSpec, Rule};
pub use validator::validate;
