//! Input validation errors.

use thiserror::Error;

use crate::models::Location;

/// Malformed input detected at the tuple boundary, before any search runs.
///
/// Infeasibility (no van can carry the packages) is not an error; it is a
/// first-class result state on the solution types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A van was declared with a negative capacity.
    #[error("van {index} has negative capacity {capacity}")]
    InvalidCapacity {
        /// Index of the van in the input list.
        index: usize,
        /// The offending capacity.
        capacity: i32,
    },
    /// A van was declared with a non-positive or non-finite fuel rate.
    #[error("van {index} has invalid fuel rate {fuel_per_unit}")]
    InvalidFuelRate {
        /// Index of the van in the input list.
        index: usize,
        /// The offending fuel rate.
        fuel_per_unit: f64,
    },
    /// A package was declared with a non-positive weight.
    #[error("package {index} has non-positive weight {weight}")]
    InvalidWeight {
        /// Index of the package in the input list.
        index: usize,
        /// The offending weight.
        weight: i32,
    },
    /// A package picks up and delivers at the same location.
    #[error("package {index} has identical pickup and delivery location {location}")]
    SamePickupAndDelivery {
        /// Index of the package in the input list.
        index: usize,
        /// The repeated location.
        location: Location,
    },
    /// Packages were supplied but the van list is empty.
    #[error("no vans available for a non-empty package list")]
    NoVans,
}
