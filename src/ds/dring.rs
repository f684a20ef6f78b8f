// doubly linked ring
use super::arena::{Arena, Key, NodeId};
use crate::{iter::Iter, prelude::*};
use std::{fmt, iter::FromIterator};

/// A ring linked in both directions: the tail's `next` is the head and the
/// head's `prev` is the tail.
///
/// Negative positions count backwards from the head, so `-1` is the tail.
/// Nodes can be addressed through [`NodeId`] handles, which makes removal
/// O(1) and lets the Josephus game run in either direction.
#[derive(Debug)]
pub struct CircularDoublyLinkedList<Item> {
    arena: Arena<Item>,
    head: Option<Key>,
    tail: Option<Key>,
    size: usize,
}

impl<Item> Default for CircularDoublyLinkedList<Item> {
    fn default() -> Self {
        Self { arena: Arena::default(), head: None, tail: None, size: 0 }
    }
}

impl CircularDoublyLinkedList<usize> {
    /// A ring of the people `1..=n`, in order.
    pub fn people(n: usize) -> Self {
        (1..=n).collect()
    }
}

impl<Item> CircularDoublyLinkedList<Item> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// One lap forward, starting at the head.
    pub fn iter(&self) -> Iter<'_, Item> {
        Iter::forward(&self.arena, self.head, self.size)
    }

    /// One lap backward, starting at the tail.
    pub fn iter_rev(&self) -> Iter<'_, Item> {
        Iter::backward(&self.arena, self.tail, self.size)
    }

    pub fn append(&mut self, item: Item) -> NodeId {
        let key = self.arena.insert(item);

        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                self.arena[key].prev = tail;
                self.arena[key].next = head;
                self.arena[tail].next = key;
                self.arena[head].prev = key;
            }
            _ => {
                self.arena[key].prev = key;
                self.arena[key].next = key;
                self.head = Some(key);
            }
        }

        self.tail = Some(key);
        self.size += 1;
        self.arena.id(key)
    }

    pub fn get(&self, index: isize) -> IResult<&Item> {
        let key = self.locate(index, "get")?;
        Ok(&self.arena[key].item)
    }

    pub fn get_mut(&mut self, index: isize) -> IResult<&mut Item> {
        let key = self.locate(index, "get_mut")?;
        Ok(&mut self.arena[key].item)
    }

    pub fn set(&mut self, index: isize, item: Item) -> IResult<Item> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, item))
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head.map(|key| self.arena.id(key))
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail.map(|key| self.arena.id(key))
    }

    pub fn node_at(&self, index: isize) -> IResult<NodeId> {
        let key = self.locate(index, "node_at")?;
        Ok(self.arena.id(key))
    }

    pub fn next(&self, id: NodeId) -> IResult<NodeId> {
        let key = self.resolve(id, "next")?;
        Ok(self.arena.id(self.arena.next(key)))
    }

    pub fn prev(&self, id: NodeId) -> IResult<NodeId> {
        let key = self.resolve(id, "prev")?;
        Ok(self.arena.id(self.arena.prev(key)))
    }

    pub fn value(&self, id: NodeId) -> IResult<&Item> {
        let key = self.resolve(id, "value")?;
        Ok(&self.arena[key].item)
    }

    pub fn value_mut(&mut self, id: NodeId) -> IResult<&mut Item> {
        let key = self.resolve(id, "value_mut")?;
        Ok(&mut self.arena[key].item)
    }

    /// Splices the node out in O(1).
    pub fn remove_node(&mut self, id: NodeId) -> IResult<()> {
        let key = self.resolve(id, "remove_node")?;
        self.unlink(key);
        Ok(())
    }

    pub fn pop_node(&mut self, id: NodeId) -> IResult<Item> {
        let key = self.resolve(id, "pop_node")?;
        Ok(self.unlink(key))
    }

    pub fn remove(&mut self, index: isize) -> IResult<()> {
        let key = self.locate(index, "remove")?;
        self.unlink(key);
        Ok(())
    }

    pub fn pop_at(&mut self, index: isize) -> IResult<Item> {
        let key = self.locate(index, "pop")?;
        Ok(self.unlink(key))
    }

    /// Removes the tail.
    pub fn pop(&mut self) -> IResult<Item> {
        self.pop_at(-1)
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

    /// Plays the Josephus game and returns the elimination order, survivor
    /// last.
    ///
    /// Counting starts at the head, which counts as 1. A positive `k` counts
    /// along `next` and resumes at the eliminated node's successor; a
    /// negative `k` counts along `prev` and resumes at its predecessor. The
    /// ring is empty afterwards.
    pub fn josephus_sequence(&mut self, k: isize) -> IResult<Vec<Item>> {
        if k == 0 {
            return Err(Error::InvalidArgument("josephus step must not be 0"))
        }

        log::debug!("josephus: {} in the ring, eliminating every {}", self.size, k);

        let mut order = Vec::with_capacity(self.size);
        let mut cursor = match self.head {
            Some(head) => head,
            None => return Ok(order),
        };
        let steps = k.unsigned_abs() - 1;

        while self.size > 0 {
            let hops = steps % self.size;
            let resume = if k > 0 {
                cursor = self.arena.forward(cursor, hops);
                self.arena.next(cursor)
            } else {
                cursor = self.arena.backward(cursor, hops);
                self.arena.prev(cursor)
            };

            order.push(self.unlink(cursor));
            log::trace!("josephus: eliminated #{}, {} left", order.len(), self.size);
            cursor = resume;
        }

        Ok(order)
    }

    fn locate(&self, index: isize, op: &'static str) -> IResult<Key> {
        let head = self.head.ok_or(Error::RangeError { op })?;
        let steps = index.unsigned_abs() % self.size;

        if index >= 0 {
            Ok(self.arena.forward(head, steps))
        } else {
            Ok(self.arena.backward(head, steps))
        }
    }

    fn resolve(&self, id: NodeId, op: &'static str) -> IResult<Key> {
        if self.size == 0 {
            return Err(Error::RangeError { op })
        }

        self.arena
            .resolve(id)
            .ok_or(Error::InvalidArgument("node handle is not part of this ring"))
    }

    fn unlink(&mut self, key: Key) -> Item {
        if self.size == 1 {
            self.head = None;
            self.tail = None;
        } else {
            let prev = self.arena.prev(key);
            let next = self.arena.next(key);
            self.arena[prev].next = next;
            self.arena[next].prev = prev;

            if self.head == Some(key) {
                self.head = Some(next);
            }
            if self.tail == Some(key) {
                self.tail = Some(prev);
            }
        }

        self.size -= 1;
        self.arena.remove(key)
    }
}

impl<Item> From<Vec<Item>> for CircularDoublyLinkedList<Item> {
    fn from(items: Vec<Item>) -> Self {
        items.into_iter().collect()
    }
}

impl<Item> FromIterator<Item> for CircularDoublyLinkedList<Item> {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.append(item);
        }
        list
    }
}

impl<'a, Item> IntoIterator for &'a CircularDoublyLinkedList<Item> {
    type Item = &'a Item;
    type IntoIter = Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<Item: fmt::Display> fmt::Display for CircularDoublyLinkedList<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_seq(f, self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ds::CircularList;

    type Ring = CircularDoublyLinkedList<usize>;

    fn items(list: &Ring) -> Vec<usize> {
        list.iter().copied().collect()
    }

    /// Walks the ring both ways and checks every `next` has a matching `prev`.
    fn assert_links(list: &Ring) {
        let (head, tail) = match (list.head, list.tail) {
            (Some(head), Some(tail)) => (head, tail),
            (None, None) => return assert_eq!(list.size, 0),
            _ => panic!("head and tail disagree"),
        };

        assert_eq!(list.arena.prev(head), tail);
        assert_eq!(list.arena.next(tail), head);

        let mut key = head;
        for _ in 0..list.size {
            let next = list.arena.next(key);
            assert_eq!(list.arena.prev(next), key);
            key = next;
        }
        assert_eq!(key, head, "ring must close after len steps");
        assert_eq!(list.arena.live(), list.size);
    }

    fn mirror(n: usize, v: usize) -> usize {
        if v == 1 {
            1
        } else {
            n + 2 - v
        }
    }

    #[test]
    fn test_signed_index() {
        let mut list = Ring::people(9);
        assert_links(&list);

        assert_eq!(list.get(0), Ok(&1));
        assert_eq!(list.get(-1), Ok(&9));
        assert_eq!(list.get(-2), Ok(&8));
        assert_eq!(list.get(-9), Ok(&1));
        assert_eq!(list.get(-10), Ok(&9));
        assert_eq!(list.get(11), Ok(&3));

        assert_eq!(list.set(-1, 90), Ok(9));
        *list.get_mut(-3).unwrap() = 70;
        assert_eq!(list.to_string(), "[1, 2, 3, 4, 5, 6, 70, 8, 90]");
    }

    #[test]
    fn test_iter_both_ways() {
        let list = Ring::people(4);
        assert_eq!(items(&list), vec![1, 2, 3, 4]);
        assert_eq!(list.iter_rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
        assert_eq!(list.iter().len(), 4);
    }

    #[test]
    fn test_node_handles() {
        let mut list = Ring::new();
        let one = list.append(1);
        let two = list.append(2);
        let three = list.append(3);

        assert_eq!(list.head(), Some(one));
        assert_eq!(list.tail(), Some(three));
        assert_eq!(list.next(three), Ok(one));
        assert_eq!(list.prev(one), Ok(three));
        assert_eq!(list.node_at(-2), Ok(two));
        assert_eq!(list.value(two), Ok(&2));

        *list.value_mut(two).unwrap() = 20;
        assert_eq!(items(&list), vec![1, 20, 3]);
    }

    #[test]
    fn test_remove_node() {
        let mut list = Ring::new();
        let ids: Vec<NodeId> = (1..=5).map(|i| list.append(i)).collect();

        // middle
        assert_eq!(list.pop_node(ids[2]), Ok(3));
        assert_links(&list);
        assert_eq!(items(&list), vec![1, 2, 4, 5]);

        // head
        list.remove_node(ids[0]).unwrap();
        assert_links(&list);
        assert_eq!(list.head(), Some(ids[1]));

        // tail
        list.remove_node(ids[4]).unwrap();
        assert_links(&list);
        assert_eq!(list.tail(), Some(ids[3]));
        assert_eq!(items(&list), vec![2, 4]);

        // stale handle
        assert!(matches!(list.remove_node(ids[2]), Err(Error::InvalidArgument(_))));
        assert_eq!(items(&list), vec![2, 4]);

        list.remove_node(ids[1]).unwrap();
        list.remove_node(ids[3]).unwrap();
        assert_links(&list);
        assert_eq!(list.remove_node(ids[3]), Err(Error::RangeError { op: "remove_node" }));
        assert_eq!(list.pop_node(ids[3]), Err(Error::RangeError { op: "pop_node" }));
    }

    #[test]
    fn test_stale_handle_after_slot_reuse() {
        let mut list = Ring::new();
        let old = list.append(1);
        list.remove_node(old).unwrap();

        let new = list.append(2);
        assert_ne!(old, new);
        assert!(matches!(list.value(old), Err(Error::InvalidArgument(_))));
        assert_eq!(list.value(new), Ok(&2));
    }

    #[test]
    fn test_stale_handle_after_clear() {
        let mut list = Ring::new();
        let old = list.append(1);
        list.append(5);
        list.clear();

        let new = list.append(2);
        assert_ne!(old, new);
        assert!(matches!(list.value(old), Err(Error::InvalidArgument(_))));
        assert!(matches!(list.remove_node(old), Err(Error::InvalidArgument(_))));
        assert_eq!(items(&list), vec![2]);
    }

    #[test]
    fn test_removal_by_index() {
        let mut list = Ring::people(6);
        assert_eq!(list.pop(), Ok(6));
        assert_eq!(list.pop_at(-1), Ok(5));
        assert_eq!(list.pop_at(0), Ok(1));
        // wraps: 7 % 3 == 1
        list.remove(7).unwrap();
        assert_links(&list);
        assert_eq!(items(&list), vec![2, 4]);
    }

    #[test]
    fn test_empty_ring() {
        let mut list = Ring::new();
        assert_eq!(list.get(-1), Err(Error::RangeError { op: "get" }));
        assert_eq!(list.pop(), Err(Error::RangeError { op: "pop" }));
        assert_eq!(list.remove(0), Err(Error::RangeError { op: "remove" }));
        assert_eq!(list.node_at(0), Err(Error::RangeError { op: "node_at" }));
        assert_eq!(list.head(), None);
        assert_eq!(list.to_string(), "[]");
        assert_eq!(list.josephus_sequence(-2), Ok(vec![]));
    }

    #[test]
    fn test_josephus_forward_matches_singly_linked() {
        for n in 1..30 {
            for k in 1..10 {
                let expected = CircularList::people(n).josephus_sequence(k).unwrap();
                let mut list = Ring::people(n);
                assert_eq!(list.josephus_sequence(k as isize).unwrap(), expected);
                assert_links(&list);
            }
        }
    }

    #[test]
    fn test_josephus_backward() {
        let mut list = Ring::people(5);
        assert_eq!(list.josephus_sequence(-2), Ok(vec![5, 3, 1, 2, 4]));

        let mut list = Ring::people(5);
        assert_eq!(list.josephus_sequence(-1), Ok(vec![1, 5, 4, 3, 2]));

        let mut list = Ring::people(7);
        assert!(matches!(list.josephus_sequence(0), Err(Error::InvalidArgument(_))));
        assert_eq!(items(&list), (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn test_josephus_mirror_symmetry() {
        for n in 1..40 {
            for k in 1..12isize {
                let forward = Ring::people(n).josephus_sequence(k).unwrap();
                let backward = Ring::people(n).josephus_sequence(-k).unwrap();

                let mirrored: Vec<usize> = forward.iter().map(|&v| mirror(n, v)).collect();
                assert_eq!(backward, mirrored, "n = {}, k = {}", n, k);
            }
        }
    }
}
