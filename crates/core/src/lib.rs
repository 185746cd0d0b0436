//! `accountech-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! strongly-typed identifiers, the domain error taxonomy, and minor-unit money
//! arithmetic shared by the chart, journal, and report crates.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AccountId, CompanyId, EntryId, LineId, UserId};
pub use money::{Amount, AmountError, REPORTING_EPSILON};
pub use value_object::ValueObject;
