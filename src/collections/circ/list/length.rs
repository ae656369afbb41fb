use std::num::NonZero;

use crate::util::error::CapacityOverflow;

/// The length of a non-empty list. An empty list has no length value at all, it is represented by
/// [`ListState::Empty`](super::ListState::Empty) instead.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    pub const fn checked_add(self, other: usize) -> Option<Length> {
        match self.0.checked_add(other) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }

    pub const fn checked_sub(self, other: usize) -> Option<Length> {
        match self.0.get().checked_sub(other) {
            Some(res) => match NonZero::new(res) {
                Some(res) => Some(Length(res)),
                None => None,
            },
            None => None,
        }
    }

    /// The length after one more node is linked in.
    pub const fn try_increment(self) -> Result<Length, CapacityOverflow> {
        match self.checked_add(1) {
            Some(len) => Ok(len),
            None => Err(CapacityOverflow),
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
