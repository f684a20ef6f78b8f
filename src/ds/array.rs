// A growable array with an explicit capacity policy
use crate::{config::Config, prelude::*};
use std::{fmt, iter::FromIterator};

/// Contiguous sequence whose capacity is always a power of the configured
/// growth factor.
///
/// Grows by `growth_factor` when full and shrinks back to the smallest
/// fitting power once a removal leaves it at most `1 / shrink_ratio` full.
/// Every resize moves the items into a fresh buffer.
#[derive(Debug)]
pub struct DynamicArray<Item> {
    buffer: Vec<Item>,
    capacity: usize,
    config: Config,
}

impl<Item> Default for DynamicArray<Item> {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl<Item> DynamicArray<Item> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { buffer: Vec::with_capacity(1), capacity: 1, config }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.buffer
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.buffer.iter()
    }

    pub fn append(&mut self, item: Item) {
        if self.len() >= self.capacity {
            self.grow();
        }
        self.buffer.push(item);
    }

    /// Inserts at `index`, shifting `[index, len)` one slot right.
    /// `index == len` appends.
    pub fn insert(&mut self, item: Item, index: usize) -> IResult<()> {
        if index > self.len() {
            return Err(self.out_of_range(index, "insert"))
        }

        if self.len() >= self.capacity {
            self.grow();
        }
        self.buffer.insert(index, item);

        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> IResult<()> {
        self.take(index, "remove").map(drop)
    }

    pub fn get(&self, index: usize) -> IResult<&Item> {
        self.check(index, "get")?;
        Ok(&self.buffer[index])
    }

    pub fn get_mut(&mut self, index: usize) -> IResult<&mut Item> {
        self.check(index, "get_mut")?;
        Ok(&mut self.buffer[index])
    }

    /// Replaces the item at `index`, returning the old one.
    pub fn set(&mut self, index: usize, item: Item) -> IResult<Item> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, item))
    }

    /// Removes and returns the item at `index`, then shrinks if the array
    /// became sparse enough.
    pub fn pop_at(&mut self, index: usize) -> IResult<Item> {
        self.take(index, "pop")
    }

    /// Removes and returns the last item.
    pub fn pop(&mut self) -> IResult<Item> {
        match self.len() {
            0 => Err(Error::RangeError { op: "pop" }),
            len => self.pop_at(len - 1),
        }
    }

    /// Reallocates to the smallest power of the growth factor holding
    /// `len` items, once `len <= capacity / shrink_ratio`.
    pub fn shrink_to_fit(&mut self) {
        if self.len() > self.capacity / self.config.shrink_ratio {
            return
        }

        let capacity = self.config.fitting_capacity(self.len());
        if capacity != self.capacity {
            self.reallocate(capacity);
        }
    }

    pub fn print(&self)
    where
        Item: fmt::Display,
    {
        println!("{}", self);
    }

    fn take(&mut self, index: usize, op: &'static str) -> IResult<Item> {
        self.check(index, op)?;
        let item = self.buffer.remove(index);
        self.shrink_to_fit();
        Ok(item)
    }

    fn grow(&mut self) {
        let capacity = self.capacity * self.config.growth_factor;
        self.reallocate(capacity);
    }

    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len());
        log::debug!("reallocating array: capacity {} -> {}", self.capacity, capacity);

        let mut buffer = Vec::with_capacity(capacity);
        buffer.extend(self.buffer.drain(..));
        self.buffer = buffer;
        self.capacity = capacity;
    }

    fn check(&self, index: usize, op: &'static str) -> IResult<()> {
        if self.is_empty() {
            return Err(Error::RangeError { op })
        }

        if index >= self.len() {
            return Err(self.out_of_range(index, op))
        }

        Ok(())
    }

    fn out_of_range(&self, index: usize, op: &'static str) -> Error {
        Error::IndexError { index, len: self.len(), op }
    }
}

impl<Item> From<Vec<Item>> for DynamicArray<Item> {
    fn from(items: Vec<Item>) -> Self {
        items.into_iter().collect()
    }
}

impl<Item> FromIterator<Item> for DynamicArray<Item> {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut array = Self::new();
        for item in iter {
            array.append(item);
        }
        array
    }
}

// `Vec::clone` only reserves `len`, the copy keeps the full capacity.
impl<Item: Clone> Clone for DynamicArray<Item> {
    fn clone(&self) -> Self {
        let mut buffer = Vec::with_capacity(self.capacity);
        buffer.extend(self.buffer.iter().cloned());
        Self { buffer, capacity: self.capacity, config: self.config.clone() }
    }
}

impl<Item: PartialEq> PartialEq for DynamicArray<Item> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
    }
}

impl<'a, Item> IntoIterator for &'a DynamicArray<Item> {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<Item: fmt::Display> fmt::Display for DynamicArray<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_seq(f, self.iter())
    }
}
