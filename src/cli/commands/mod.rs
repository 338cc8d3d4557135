//! Command implementations

pub mod anonymize;
pub mod transplant;
