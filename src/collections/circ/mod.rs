//! Circular collection types, where the last element links back around to the first. Currently
//! this is just [`CircularSinglyLinkedList`] and its iterators.

pub mod list;

#[doc(inline)]
pub use list::CircularSinglyLinkedList;
