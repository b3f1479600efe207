//! Sampling primitives and per-year lifecycle policies for the workforce
//! history synthesizer.
//!
//! This crate holds every decision rule the simulation applies, with no I/O
//! and no owned randomness: each policy draws from the generator it is
//! handed, so the caller controls seeding and draw order. It sits between
//! `workforce-types` (the data model) and `workforce-core` (which owns the
//! year loop and the history).
//!
//! # Modules
//!
//! - [`attrition`] -- Voluntary leavers ([`AttritionPolicy`])
//! - [`calendar`] -- Date arithmetic: year bounds, birth dates, tenure
//! - [`compensation`] -- Rating, salary growth, bonus, engagement ([`CompensationEngine`])
//! - [`config`] -- Typed configuration sections with reference defaults
//! - [`error`] -- Error types ([`PolicyError`], [`SamplerError`])
//! - [`exit`] -- Terminal snapshots for leavers and retirees ([`Departure`])
//! - [`factory`] -- New employee construction ([`EmployeeFactory`])
//! - [`hiring`] -- Backfill-plus-growth hiring ([`HiringPolicy`])
//! - [`identity`] -- Name generation ([`IdentityProvider`], [`LocaleNameBank`])
//! - [`initializer`] -- The first year's cohort ([`PopulationInitializer`])
//! - [`retirement`] -- Age-based retirement ([`RetirementPolicy`])
//! - [`sampler`] -- Weighted and uniform sampling ([`WeightedTable`], [`RateRange`], [`IntRange`])
//! - [`sequence`] -- Employee id allocation ([`EmployeeIdSequence`])
//! - [`titles`] -- Title resolution from department and salary ([`JobTitleResolver`])

pub mod attrition;
pub mod calendar;
pub mod compensation;
pub mod config;
pub mod error;
pub mod exit;
pub mod factory;
pub mod hiring;
pub mod identity;
pub mod initializer;
pub mod retirement;
pub mod sampler;
pub mod sequence;
pub mod titles;

// Re-export primary types at crate root for convenience.
pub use attrition::AttritionPolicy;
pub use compensation::CompensationEngine;
pub use config::{
    AttritionConfig, CompensationConfig, CountryConfig, DepartmentConfig, GrowthShock,
    HiringConfig, RatingWeight, RetirementConfig, SalaryBand, SalaryBands, SalaryConfig,
    TierRoles, TierWeights, WeightedLabel, WorkforceConfig,
};
pub use error::{PolicyError, SamplerError};
pub use exit::Departure;
pub use factory::{EmployeeFactory, Placement};
pub use hiring::HiringPolicy;
pub use identity::{IdentityProvider, LocaleNameBank};
pub use initializer::PopulationInitializer;
pub use retirement::RetirementPolicy;
pub use sampler::{IntRange, RateRange, WeightedTable};
pub use sequence::EmployeeIdSequence;
pub use titles::{JobTitleResolver, TitleAssignment};
