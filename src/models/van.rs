//! Van type with capacity and fuel cost parameters.

use serde::{Deserialize, Serialize};

/// A delivery van with a carrying capacity and a fuel cost per distance unit.
///
/// Vans are immutable once constructed and are identified by their index
/// within the fleet slice handed to the optimizers.
///
/// # Examples
///
/// ```
/// use van_routing::models::Van;
///
/// let v = Van::new(10, 8.0);
/// assert_eq!(v.capacity(), 10);
/// assert_eq!(v.fuel_per_unit(), 8.0);
/// assert!(v.can_carry(10));
/// assert!(!v.can_carry(11));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Van {
    capacity: i32,
    fuel_per_unit: f64,
}

impl Van {
    /// Creates a van with the given capacity and fuel cost per distance unit.
    ///
    /// Input validation (non-negative capacity, positive fuel rate) happens
    /// at the tuple boundary; see [`crate::api`].
    pub fn new(capacity: i32, fuel_per_unit: f64) -> Self {
        Self {
            capacity,
            fuel_per_unit,
        }
    }

    /// Maximum in-transit load this van may hold at any point of a route.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Fuel consumed per unit of distance traveled.
    pub fn fuel_per_unit(&self) -> f64 {
        self.fuel_per_unit
    }

    /// Returns `true` if a single item of the given weight fits at all.
    pub fn can_carry(&self, weight: i32) -> bool {
        weight <= self.capacity
    }
}
