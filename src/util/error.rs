//! Error types returned by the fallible (`try_`) collection methods.

use derive_more::{Display, Error};

/// The length of a collection would exceed `usize::MAX`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
