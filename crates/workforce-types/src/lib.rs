//! Shared type definitions for the workforce history synthesizer.
//!
//! This crate is the single source of truth for the data model used across
//! the workspace: the yearly [`EmployeeSnapshot`] record, its identifier,
//! and the enumerations it is built from.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe identifier wrappers
//! - [`enums`] -- Employment status, demographics, salary tiers
//! - [`structs`] -- The employee snapshot, generated names, yearly summaries

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{EmploymentStatus, Gender, MaritalStatus, SalaryTier};
pub use ids::EmployeeId;
pub use structs::{CountryYearSummary, EmployeeSnapshot, PersonName};
