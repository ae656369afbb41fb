//! Values for observing how a collection manages the lifetime of its elements.

use std::cell::RefCell;
use std::rc::Rc;

/// A value that increments a shared counter whenever any of its clones is dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    /// Creates a new counter, starting at `value`.
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }

    /// The number of drops recorded so far.
    pub fn count(&self) -> usize {
        *self.0.borrow()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}
