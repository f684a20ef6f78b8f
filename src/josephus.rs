//! The Josephus elimination game.
//!
//! `n` people stand in a ring numbered `1..=n`. Starting at person 1, every
//! `k`-th person still standing is eliminated until one is left. The
//! simulations here run the game on the ring containers; [`survivor`] and
//! [`survivor_k2`] compute the answer directly and serve as references.

use crate::{
    ds::{CircularDoublyLinkedList, CircularList},
    prelude::*,
};

/// Survivor of the game on a singly linked ring.
pub fn last_man_standing(n: usize, k: usize) -> IResult<usize> {
    let order = CircularList::people(n).josephus_sequence(k)?;
    order.last().copied().ok_or(Error::RangeError { op: "last_man_standing" })
}

/// Survivor of the game on a doubly linked ring; a negative `k` counts
/// backwards.
pub fn last_man_standing_bidirectional(n: usize, k: isize) -> IResult<usize> {
    let order = CircularDoublyLinkedList::people(n).josephus_sequence(k)?;
    order.last().copied().ok_or(Error::RangeError { op: "last_man_standing" })
}

/// Survivor from the recurrence `J(1) = 0, J(i) = (J(i - 1) + k) mod i`,
/// shifted to 1-based numbering.
pub fn survivor(n: usize, k: usize) -> IResult<usize> {
    if k == 0 {
        return Err(Error::InvalidArgument("josephus step must not be 0"))
    }
    if n == 0 {
        return Err(Error::RangeError { op: "survivor" })
    }

    let mut position = 0;
    for i in 2..=n {
        position = (position + k) % i;
    }
    Ok(position + 1)
}

/// Closed form for `k = 2`: `2 * (n - 2^floor(log2 n)) + 1`.
pub fn survivor_k2(n: usize) -> IResult<usize> {
    if n == 0 {
        return Err(Error::RangeError { op: "survivor_k2" })
    }

    let highest = 1 << (usize::BITS - 1 - n.leading_zeros());
    Ok(2 * (n - highest) + 1)
}
