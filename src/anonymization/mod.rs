//! Anonymization module for Maskera
//!
//! This module holds the mapping-consistent anonymization engine: random
//! alias generation, the identity mapper that keeps names, usernames and
//! emails consistent with each other, and the sidecar mapping-file model.
//!
//! # Usage
//!
//! ```
//! use maskera::anonymization::{IdentityMapper, MappingFile};
//!
//! let mut mapper = IdentityMapper::new();
//! let anonymized = mapper.anonymize_email("anna.svensson@example.com");
//! assert!(anonymized.ends_with("@example.com"));
//!
//! let mapping = MappingFile::from_mapper(&mapper);
//! assert_eq!(mapping.email_mapping.len(), 1);
//! ```

pub mod alias;
pub mod mapper;
pub mod mapping;

// Re-export main types
pub use alias::AliasGenerator;
pub use mapper::IdentityMapper;
pub use mapping::{MappingFile, MAPPING_EXTENSION};
