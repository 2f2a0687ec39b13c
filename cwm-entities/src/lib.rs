#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # cwm-entities
//!
//! Reusable, agnostic domain entities for coworkmap.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod listing;
pub mod social;

#[cfg(any(test, feature = "builders"))]
pub mod builders;

/// Placeholder that marks a cell without data in the input table.
pub const DEFAULT_SENTINEL: &str = "Non disponible";
