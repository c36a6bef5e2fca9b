//! Business logic layer
//!
//! Pure functions over the data models: input validation (the gate run
//! before calculation) and the split calculation itself.

pub mod split;
pub mod validation;

pub use split::calculate;
pub use validation::validate;
