pub(crate) mod arena;
mod array;
mod dll;
mod dring;
mod ring;

pub use self::{
    arena::NodeId, array::DynamicArray, dll::LinkedList, dring::CircularDoublyLinkedList,
    ring::CircularList,
};

use std::fmt;

/// Writes `[e0, e1, ..., eN]`, or `[]` for no elements.
pub(crate) fn write_seq<'a, Item, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    Item: fmt::Display + 'a,
    I: IntoIterator<Item = &'a Item>,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}
