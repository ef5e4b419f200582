//! ## Crate layout
//! - `core`: restriction values, operands, pattern compiler, factories,
//!   errors, and observability.
//!
//! The `prelude` mirrors the surface used by code that builds restrictions;
//! query compilers usually import `core::restriction` directly.

pub use restrict_core as core;

pub use restrict_core::{ErrorClass, RestrictError};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// Core vocabulary plus the pattern compiler and normalization pass.
///

pub mod prelude {
    pub use crate::core::{
        pattern::{Wildcards, to_like_escaped},
        prelude::*,
        restriction::normalize,
    };
}
