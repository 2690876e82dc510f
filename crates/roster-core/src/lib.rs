//! # roster-core
//!
//! Core types, ID generation, and error types for Roster.
//!
//! This crate provides the foundational types shared across all Roster crates:
//! - The `EmployeeRecord` entity and its list-row projection
//! - The employee status enum and ID strategy enum
//! - ID sources (monotonic counter, random) behind the `IdSource` trait
//! - Raw form submissions and form defaults
//! - Command events returned by the command surface
//! - The versioned envelope used for the persisted collection

pub mod entities;
pub mod enums;
pub mod errors;
pub mod fields;
pub mod ids;
pub mod payload;
pub mod responses;
pub mod submission;
