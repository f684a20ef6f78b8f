// Capacity policy of a `DynamicArray`
use crate::prelude::*;
use std::sync::Arc;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config(Arc<ConfigInner>);

impl Config {
    /// Validated policy: `growth_factor >= 2` and
    /// `shrink_ratio >= growth_factor`.
    pub fn new(growth_factor: usize, shrink_ratio: usize) -> IResult<Self> {
        if growth_factor < 2 {
            return Err(Error::InvalidArgument("growth factor must be at least 2"))
        }

        if shrink_ratio < growth_factor {
            return Err(Error::InvalidArgument(
                "shrink ratio must not be smaller than the growth factor",
            ))
        }

        let inner = ConfigInner { growth_factor, shrink_ratio };
        Ok(Self(Arc::new(inner)))
    }

    /// Smallest power of `growth_factor` that holds `len` items, at least 1.
    pub(crate) fn fitting_capacity(&self, len: usize) -> usize {
        let mut capacity = 1;
        while capacity < len {
            capacity *= self.growth_factor;
        }
        capacity
    }
}

impl std::ops::Deref for Config {
    type Target = ConfigInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigInner {
    /// Capacity multiplier applied when the buffer is full
    pub growth_factor: usize,
    /// Shrink once `len <= capacity / shrink_ratio`
    pub shrink_ratio: usize,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self { growth_factor: 2, shrink_ratio: 4 }
    }
}
