//! Various general-purpose collection types.
//!
//! # Purpose
//! These types are written to learn about each of the data structures themselves, but also
//! concepts such as pointers, allocations and iterators.

#[cfg(feature = "circ")]
pub mod circ;
