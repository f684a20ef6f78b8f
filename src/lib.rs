//! Growable arrays, linked lists and circular lists.
//!
//! Every linked container keeps its nodes in an index arena, so ring
//! topologies are released slot by slot instead of by chasing links.
//! The circular lists run the Josephus elimination game, see [`josephus`].

pub mod prelude {
    pub use super::Error;

    pub use super::{
        config::Config,
        ds::{CircularDoublyLinkedList, CircularList, DynamicArray, LinkedList, NodeId},
    };

    pub type IResult<T> = Result<T, Error>;
}

mod config;
mod ds;
mod iter;
pub mod josephus;
pub mod primes;

pub use config::{Config, ConfigInner};
pub use ds::{CircularDoublyLinkedList, CircularList, DynamicArray, LinkedList, NodeId};
pub use iter::Iter;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Index outside the valid range of the operation
    #[error("{op}: index {index} out of range for length {len}")]
    IndexError {
        index: usize,
        len: usize,
        op: &'static str,
    },
    /// Operation needs at least one element
    #[error("{op}: container is empty")]
    RangeError { op: &'static str },
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
