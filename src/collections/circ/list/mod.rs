mod circular_singly_linked_list;
mod iter;
mod length;
mod node;

pub use circular_singly_linked_list::*;
pub use iter::*;
pub(crate) use length::*;
pub(crate) use node::*;
