//! Domain types for Maskera.
//!
//! The domain layer provides:
//! - **Error types** ([`MaskeraError`])
//! - **Result type alias** ([`Result`])
//!
//! All fallible operations in the library return [`Result<T, MaskeraError>`]:
//!
//! ```rust
//! use maskera::domain::{MaskeraError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let raw = std::fs::read_to_string("maskera.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::MaskeraError;
pub use result::Result;
