// Iterator over the linked containers
use crate::ds::arena::{Arena, Key};

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

/// Walks the nodes of a linked container.
///
/// Bounded by the element count rather than by an end marker, so it stops
/// after one lap on a ring.
#[derive(Debug)]
pub struct Iter<'a, Item> {
    arena: &'a Arena<Item>,
    cursor: Key,
    remaining: usize,
    direction: Direction,
}

impl<'a, Item> Iter<'a, Item> {
    pub(crate) fn forward(arena: &'a Arena<Item>, start: Option<Key>, len: usize) -> Self {
        Self::new(arena, start, len, Direction::Forward)
    }

    pub(crate) fn backward(arena: &'a Arena<Item>, start: Option<Key>, len: usize) -> Self {
        Self::new(arena, start, len, Direction::Backward)
    }

    fn new(arena: &'a Arena<Item>, start: Option<Key>, len: usize, direction: Direction) -> Self {
        match start {
            Some(cursor) => Iter { arena, cursor, remaining: len, direction },
            None => Iter { arena, cursor: 0, remaining: 0, direction },
        }
    }
}

impl<'a, Item> Iterator for Iter<'a, Item> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None
        }

        let arena = self.arena;
        let node = &arena[self.cursor];
        self.remaining -= 1;

        // don't step past the last element, an acyclic list has no link there
        if self.remaining > 0 {
            self.cursor = match self.direction {
                Direction::Forward => node.next,
                Direction::Backward => node.prev,
            };
        }

        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, Item> ExactSizeIterator for Iter<'a, Item> {}
