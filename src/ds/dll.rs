// double linked list
use super::arena::{Arena, Key, NIL};
use crate::{iter::Iter, prelude::*};
use std::{fmt, iter::FromIterator};

/// An acyclic list linked in both directions.
///
/// The head has no `prev`, the tail no `next`. Appends go through the stored
/// tail; indexed access walks from whichever end is nearer.
#[derive(Debug)]
pub struct LinkedList<Item> {
    arena: Arena<Item>,
    head: Option<Key>,
    tail: Option<Key>,
    size: usize,
}

impl<Item> Default for LinkedList<Item> {
    fn default() -> Self {
        Self { arena: Arena::default(), head: None, tail: None, size: 0 }
    }
}

impl<Item> LinkedList<Item> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn iter(&self) -> Iter<'_, Item> {
        Iter::forward(&self.arena, self.head, self.size)
    }

    pub fn append(&mut self, item: Item) {
        let key = self.arena.insert(item);

        match self.tail {
            Some(tail) => {
                self.arena[tail].next = key;
                self.arena[key].prev = tail;
            }
            None => self.head = Some(key),
        }

        self.tail = Some(key);
        self.size += 1;
    }

    pub fn push_front(&mut self, item: Item) {
        let key = self.arena.insert(item);

        match self.head {
            Some(head) => {
                self.arena[head].prev = key;
                self.arena[key].next = head;
            }
            None => self.tail = Some(key),
        }

        self.head = Some(key);
        self.size += 1;
    }

    /// Inserts so that the item ends up at `index`; `index == len` appends.
    pub fn insert(&mut self, item: Item, index: usize) -> IResult<()> {
        if index > self.size {
            return Err(Error::IndexError { index, len: self.size, op: "insert" })
        }

        if index == self.size {
            self.append(item);
            return Ok(())
        }

        if index == 0 {
            self.push_front(item);
            return Ok(())
        }

        let after = self.locate(index);
        let before = self.arena.prev(after);
        let key = self.arena.insert(item);

        self.arena[key].prev = before;
        self.arena[key].next = after;
        self.arena[before].next = key;
        self.arena[after].prev = key;
        self.size += 1;

        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> IResult<()> {
        self.take(index, "remove").map(drop)
    }

    pub fn get(&self, index: usize) -> IResult<&Item> {
        self.check(index, "get")?;
        Ok(&self.arena[self.locate(index)].item)
    }

    pub fn get_mut(&mut self, index: usize) -> IResult<&mut Item> {
        self.check(index, "get_mut")?;
        let key = self.locate(index);
        Ok(&mut self.arena[key].item)
    }

    /// Replaces the item at `index`, returning the old one.
    pub fn set(&mut self, index: usize, item: Item) -> IResult<Item> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, item))
    }

    pub fn pop_at(&mut self, index: usize) -> IResult<Item> {
        self.take(index, "pop")
    }

    pub fn pop(&mut self) -> IResult<Item> {
        match self.tail {
            Some(tail) => Ok(self.unlink(tail)),
            None => Err(Error::RangeError { op: "pop" }),
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

    fn take(&mut self, index: usize, op: &'static str) -> IResult<Item> {
        self.check(index, op)?;
        let key = self.locate(index);
        Ok(self.unlink(key))
    }

    fn check(&self, index: usize, op: &'static str) -> IResult<()> {
        if self.size == 0 {
            return Err(Error::RangeError { op })
        }

        if index >= self.size {
            return Err(Error::IndexError { index, len: self.size, op })
        }

        Ok(())
    }

    /// Key of the node at a checked `index`.
    fn locate(&self, index: usize) -> Key {
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                if index <= self.size / 2 {
                    self.arena.forward(head, index)
                } else {
                    self.arena.backward(tail, self.size - 1 - index)
                }
            }
            _ => unreachable!("locate on an empty list"),
        }
    }

    fn unlink(&mut self, key: Key) -> Item {
        let prev = self.arena.prev(key);
        let next = self.arena.next(key);

        if prev == NIL {
            self.head = if next == NIL { None } else { Some(next) };
        } else {
            self.arena[prev].next = next;
        }

        if next == NIL {
            self.tail = if prev == NIL { None } else { Some(prev) };
        } else {
            self.arena[next].prev = prev;
        }

        self.size -= 1;
        self.arena.remove(key)
    }
}

impl<Item> From<Vec<Item>> for LinkedList<Item> {
    fn from(items: Vec<Item>) -> Self {
        items.into_iter().collect()
    }
}

impl<Item> FromIterator<Item> for LinkedList<Item> {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.append(item);
        }
        list
    }
}

impl<'a, Item> IntoIterator for &'a LinkedList<Item> {
    type Item = &'a Item;
    type IntoIter = Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<Item: fmt::Display> fmt::Display for LinkedList<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_seq(f, self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(list: &LinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_round_trip() {
        let list: LinkedList<i32> = (1..=9).collect();
        assert_eq!(list.len(), 9);
        for i in 0..9 {
            assert_eq!(list.get(i), Ok(&(i as i32 + 1)));
        }
    }

    #[test]
    fn test_pop_and_insert() {
        let mut list = LinkedList::from(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(list.pop_at(1), Ok(2));
        assert_eq!(list.pop_at(2), Ok(4));
        assert_eq!(list.pop_at(3), Ok(6));
        assert_eq!(list.pop_at(4), Ok(8));
        assert_eq!(items(&list), vec![1, 3, 5, 7, 9]);

        list.insert(-1, 0).unwrap();
        list.append(11);
        assert_eq!(items(&list), vec![-1, 1, 3, 5, 7, 9, 11]);
        assert_eq!(list.pop(), Ok(11));

        for &i in &[0, 2, 4] {
            list.set(i, 42).unwrap();
        }
        assert_eq!(items(&list), vec![42, 1, 42, 5, 42, 9]);

        list.insert(7, 1).unwrap();
        list.insert(7, 3).unwrap();
        list.insert(7, 7).unwrap();
        assert_eq!(items(&list), vec![42, 7, 1, 7, 42, 5, 42, 7, 9]);
        assert_eq!(list.len(), 9);
    }

    #[test]
    fn test_ends_stay_linked() {
        let mut list = LinkedList::new();
        list.append(2);
        list.push_front(1);
        list.append(3);

        assert_eq!(list.pop_at(0), Ok(1));
        assert_eq!(list.pop(), Ok(3));
        assert_eq!(items(&list), vec![2]);

        assert_eq!(list.pop(), Ok(2));
        assert!(list.is_empty());
        assert_eq!(list.head, None);
        assert_eq!(list.tail, None);

        // reusable after draining
        list.insert(5, 0).unwrap();
        list.insert(6, 1).unwrap();
        assert_eq!(items(&list), vec![5, 6]);
        assert_eq!(list.iter().len(), 2);
    }

    #[test]
    fn test_every_other_from_the_back() {
        let mut list: LinkedList<i32> = (1..12).map(|i| i * (i + 1)).collect();
        assert_eq!(list.to_string(), "[2, 6, 12, 20, 30, 42, 56, 72, 90, 110, 132]");

        let len = list.len();
        for i in (0..len).rev().step_by(2) {
            list.remove(i).unwrap();
        }
        assert_eq!(list.to_string(), "[6, 20, 42, 72, 110]");

        let len = list.len();
        for i in (0..=len * 2).step_by(2) {
            list.insert(((i + 1) * (i + 3)) as i32, i).unwrap();
        }
        assert_eq!(
            list.to_string(),
            "[3, 6, 15, 20, 35, 42, 63, 72, 99, 110, 143]"
        );
    }

    #[test]
    fn test_errors_leave_list_untouched() {
        let mut list: LinkedList<i32> = LinkedList::new();
        assert_eq!(list.get(0), Err(Error::RangeError { op: "get" }));
        assert_eq!(list.pop(), Err(Error::RangeError { op: "pop" }));
        assert_eq!(list.remove(0), Err(Error::RangeError { op: "remove" }));
        assert_eq!(list.to_string(), "[]");

        list.append(1);
        assert_eq!(
            list.insert(0, 2),
            Err(Error::IndexError { index: 2, len: 1, op: "insert" })
        );
        assert_eq!(list.get(1), Err(Error::IndexError { index: 1, len: 1, op: "get" }));
        assert_eq!(
            list.remove(1),
            Err(Error::IndexError { index: 1, len: 1, op: "remove" })
        );
        assert_eq!(list.pop_at(1), Err(Error::IndexError { index: 1, len: 1, op: "pop" }));
        assert_eq!(items(&list), vec![1]);
    }

    #[test]
    fn test_clear_releases_nodes() {
        let mut list: LinkedList<i32> = (0..10).collect();
        list.pop_at(4).unwrap();
        assert_eq!(list.arena.live(), 9);

        list.clear();
        assert_eq!(list.arena.live(), 0);
        assert!(list.is_empty());
        assert_eq!(list.iter().next(), None);
    }
}
