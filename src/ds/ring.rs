// singly linked ring
use super::arena::{Arena, Key};
use crate::{iter::Iter, prelude::*};
use std::{fmt, iter::FromIterator};

/// A ring linked in one direction: the tail's `next` is the head.
///
/// Positions wrap around, so `get(len)` is the head again. Removal needs the
/// predecessor, which a one-way ring can only reach by walking forward.
#[derive(Debug)]
pub struct CircularList<Item> {
    arena: Arena<Item>,
    head: Option<Key>,
    tail: Option<Key>,
    size: usize,
}

impl<Item> Default for CircularList<Item> {
    fn default() -> Self {
        Self { arena: Arena::default(), head: None, tail: None, size: 0 }
    }
}

impl CircularList<usize> {
    /// A ring of the people `1..=n`, in order.
    pub fn people(n: usize) -> Self {
        (1..=n).collect()
    }
}

impl<Item> CircularList<Item> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// One lap, starting at the head.
    pub fn iter(&self) -> Iter<'_, Item> {
        Iter::forward(&self.arena, self.head, self.size)
    }

    pub fn append(&mut self, item: Item) {
        let key = self.arena.insert(item);

        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                self.arena[tail].next = key;
                self.arena[key].next = head;
            }
            _ => {
                self.arena[key].next = key;
                self.head = Some(key);
            }
        }

        self.tail = Some(key);
        self.size += 1;
    }

    /// The item `index` steps forward from the head.
    pub fn get(&self, index: usize) -> IResult<&Item> {
        let key = self.locate(index, "get")?;
        Ok(&self.arena[key].item)
    }

    pub fn get_mut(&mut self, index: usize) -> IResult<&mut Item> {
        let key = self.locate(index, "get_mut")?;
        Ok(&mut self.arena[key].item)
    }

    pub fn set(&mut self, index: usize, item: Item) -> IResult<Item> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, item))
    }

    pub fn remove(&mut self, index: usize) -> IResult<()> {
        self.take(index, "remove").map(drop)
    }

    /// Removes the item `index` steps forward from the head.
    pub fn pop_at(&mut self, index: usize) -> IResult<Item> {
        self.take(index, "pop")
    }

    /// Removes the tail.
    pub fn pop(&mut self) -> IResult<Item> {
        match self.size {
            0 => Err(Error::RangeError { op: "pop" }),
            size => self.pop_at(size - 1),
        }
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.size = 0;
    }

    pub fn print(&self)
    where
        Item: fmt::Display,
    {
        println!("{}", self);
    }

    /// Plays the Josephus game on the ring and returns the elimination
    /// order; the survivor comes last.
    ///
    /// Counting starts at the head, which counts as 1. The `k`-th node is
    /// eliminated and counting resumes at its successor. The ring is empty
    /// afterwards.
    pub fn josephus_sequence(&mut self, k: usize) -> IResult<Vec<Item>> {
        if k == 0 {
            return Err(Error::InvalidArgument("josephus step must not be 0"))
        }

        log::debug!("josephus: {} in the ring, eliminating every {}", self.size, k);

        let mut order = Vec::with_capacity(self.size);
        let mut pred = match self.tail {
            Some(tail) => tail,
            None => return Ok(order),
        };

        // k == 1 never moves: every round takes the successor of `pred`
        while self.size > 0 {
            pred = self.arena.forward(pred, (k - 1) % self.size);
            order.push(self.unlink_after(pred));
            log::trace!("josephus: eliminated #{}, {} left", order.len(), self.size);
        }

        Ok(order)
    }

    fn take(&mut self, index: usize, op: &'static str) -> IResult<Item> {
        let tail = self.tail.ok_or(Error::RangeError { op })?;
        let pred = self.arena.forward(tail, index % self.size);
        Ok(self.unlink_after(pred))
    }

    fn locate(&self, index: usize, op: &'static str) -> IResult<Key> {
        match self.head {
            Some(head) => Ok(self.arena.forward(head, index % self.size)),
            None => Err(Error::RangeError { op }),
        }
    }

    /// Splices out the successor of `pred`.
    fn unlink_after(&mut self, pred: Key) -> Item {
        let key = self.arena.next(pred);

        if key == pred {
            self.head = None;
            self.tail = None;
        } else {
            let next = self.arena.next(key);
            self.arena[pred].next = next;

            if self.head == Some(key) {
                self.head = Some(next);
            }
            if self.tail == Some(key) {
                self.tail = Some(pred);
            }
        }

        self.size -= 1;
        self.arena.remove(key)
    }
}

impl<Item> From<Vec<Item>> for CircularList<Item> {
    fn from(items: Vec<Item>) -> Self {
        items.into_iter().collect()
    }
}

impl<Item> FromIterator<Item> for CircularList<Item> {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.append(item);
        }
        list
    }
}

impl<'a, Item> IntoIterator for &'a CircularList<Item> {
    type Item = &'a Item;
    type IntoIter = Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<Item: fmt::Display> fmt::Display for CircularList<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_seq(f, self.iter())
    }
}
