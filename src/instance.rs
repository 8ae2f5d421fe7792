//! Validated knapsack instances.
//!
//! The graph builder and solvers accept raw slices and do not check them.
//! [`KnapsackInstance::new`] performs the input checks a caller needs before
//! handing data to the core: equal lengths, at least one item, and strictly
//! positive finite capacity, volumes and values.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InstanceError {
    #[error("values and volumes must have the same length ({values} != {volumes})")]
    LengthMismatch { values: usize, volumes: usize },

    #[error("instance has no items")]
    Empty,

    #[error("capacity must be a positive number, got {0}")]
    NonPositiveCapacity(f64),

    #[error("volume of item {index} must be a positive number, got {volume}")]
    NonPositiveVolume { index: usize, volume: f64 },

    #[error("value of item {index} must be a positive number, got {value}")]
    NonPositiveValue { index: usize, value: f64 },
}

/// Item values, item volumes and a capacity that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct KnapsackInstance {
    values: Vec<f64>,
    volumes: Vec<f64>,
    capacity: f64,
}

#[inline]
fn positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

impl KnapsackInstance {
    pub fn new(values: Vec<f64>, volumes: Vec<f64>, capacity: f64) -> Result<Self, InstanceError> {
        if values.len() != volumes.len() {
            return Err(InstanceError::LengthMismatch {
                values: values.len(),
                volumes: volumes.len(),
            });
        }
        if values.is_empty() {
            return Err(InstanceError::Empty);
        }
        if !positive(capacity) {
            return Err(InstanceError::NonPositiveCapacity(capacity));
        }
        if let Some((index, &volume)) = volumes.iter().enumerate().find(|(_, w)| !positive(**w)) {
            return Err(InstanceError::NonPositiveVolume { index, volume });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !positive(**v)) {
            return Err(InstanceError::NonPositiveValue { index, value });
        }
        Ok(Self {
            values,
            volumes,
            capacity,
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn volumes(&self) -> &[f64] {
        &self.volumes
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a validated instance.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of values of `items`.
    ///
    /// # Panics
    /// Panics if an index is out of range.
    pub fn total_value(&self, items: &[usize]) -> f64 {
        items.iter().map(|&i| self.values[i]).sum()
    }

    /// Sum of volumes of `items`.
    ///
    /// # Panics
    /// Panics if an index is out of range.
    pub fn total_volume(&self, items: &[usize]) -> f64 {
        items.iter().map(|&i| self.volumes[i]).sum()
    }
}
