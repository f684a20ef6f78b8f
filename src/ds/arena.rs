//! Slot storage with stable keys for the linked containers.
//!
//! Nodes live in a [`Slab`]; links are its `usize` keys. Each key also has a
//! generation that is bumped whenever its node is released, so a [`NodeId`]
//! handed out earlier no longer resolves once its node is gone, not even
//! after the slab hands the same key out again.

use slab::Slab;
use std::ops::{Index, IndexMut};

pub(crate) type Key = usize;

/// Link value of an end without a neighbour in the acyclic list.
pub(crate) const NIL: Key = usize::MAX;

#[derive(Debug)]
pub(crate) struct Node<Item> {
    pub(crate) item: Item,
    pub(crate) prev: Key,
    pub(crate) next: Key,
}

/// A generation-checked handle to a node of a `CircularDoublyLinkedList`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) key: Key,
    pub(crate) generation: u32,
}

#[derive(Debug)]
pub(crate) struct Arena<Item> {
    nodes: Slab<Node<Item>>,
    /// Indexed by key, outlives the nodes
    generations: Vec<u32>,
}

impl<Item> Default for Arena<Item> {
    fn default() -> Self {
        Self { nodes: Slab::new(), generations: Vec::new() }
    }
}

impl<Item> Arena<Item> {
    /// Stores an unlinked node, reusing a released key when there is one.
    pub(crate) fn insert(&mut self, item: Item) -> Key {
        let key = self.nodes.insert(Node { item, prev: NIL, next: NIL });
        if key >= self.generations.len() {
            self.generations.resize(key + 1, 0);
        }
        key
    }

    /// Releases the node and hands back its item. Links are not touched.
    pub(crate) fn remove(&mut self, key: Key) -> Item {
        match self.nodes.try_remove(key) {
            Some(node) => {
                self.bump(key);
                node.item
            }
            None => panic!("arena slot {} released twice", key),
        }
    }

    pub(crate) fn id(&self, key: Key) -> NodeId {
        NodeId { key, generation: self.generations[key] }
    }

    /// Resolves a handle to its key if the node it names is still alive.
    pub(crate) fn resolve(&self, id: NodeId) -> Option<Key> {
        match self.generations.get(id.key) {
            Some(&generation) if generation == id.generation && self.nodes.contains(id.key) => {
                Some(id.key)
            }
            _ => None,
        }
    }

    pub(crate) fn next(&self, key: Key) -> Key {
        self[key].next
    }

    pub(crate) fn prev(&self, key: Key) -> Key {
        self[key].prev
    }

    /// Follows `next` links `steps` times.
    pub(crate) fn forward(&self, mut key: Key, steps: usize) -> Key {
        for _ in 0..steps {
            key = self.next(key);
        }
        key
    }

    /// Follows `prev` links `steps` times.
    pub(crate) fn backward(&self, mut key: Key, steps: usize) -> Key {
        for _ in 0..steps {
            key = self.prev(key);
        }
        key
    }

    /// Drops every node at once, whatever shape the links form. Live keys
    /// get a new generation first, the slab reissues them from 0.
    pub(crate) fn clear(&mut self) {
        let live: Vec<Key> = self.nodes.iter().map(|(key, _)| key).collect();
        for key in live {
            self.bump(key);
        }
        self.nodes.clear();
    }

    fn bump(&mut self, key: Key) {
        let generation = &mut self.generations[key];
        *generation = generation.wrapping_add(1);
    }

    #[cfg(test)]
    pub(crate) fn live(&self) -> usize {
        self.nodes.len()
    }
}

impl<Item> Index<Key> for Arena<Item> {
    type Output = Node<Item>;

    fn index(&self, key: Key) -> &Node<Item> {
        match self.nodes.get(key) {
            Some(node) => node,
            None => panic!("arena slot {} is vacant", key),
        }
    }
}

impl<Item> IndexMut<Key> for Arena<Item> {
    fn index_mut(&mut self, key: Key) -> &mut Node<Item> {
        match self.nodes.get_mut(key) {
            Some(node) => node,
            None => panic!("arena slot {} is vacant", key),
        }
    }
}
