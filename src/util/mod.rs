#![warn(missing_docs)]
//! Crate-internal helpers shared between collections.

#[cfg(test)]
pub mod alloc;
pub mod error;
#[cfg(test)]
pub mod panic;
pub mod result;
