//! Shared primitives for the kripo pharmacophore fingerprint workspace.
//!
//! `kripo-core` provides the foundation that the fingerprint crate builds on:
//!
//! - **Error types**: [`KripoError`] and [`Result`] for structured error handling
//! - **Traits**: [`Summarizable`] for one-line descriptions of domain values
//! - **Compression**: zstd and gzip resource decoding with auto-detection
//! - **Memory mapping**: Zero-copy access to static resources (std feature only)

pub mod error;
pub mod traits;

#[cfg(feature = "std")]
pub mod compress;

#[cfg(feature = "std")]
pub mod mmap;

pub use error::{KripoError, Result};
pub use traits::*;
