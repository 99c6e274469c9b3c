//! Package and location types.

use serde::{Deserialize, Serialize};

/// A scalar location identifier.
///
/// Locations are opaque comparable scalars; the distance between two of them
/// is defined by the active [`DistanceMetric`](crate::distance::DistanceMetric).
pub type Location = i64;

/// The scalar position of the depot under the default metric.
///
/// Routes start here and return here after the last delivery.
pub const DEPOT: Location = 0;

/// A package to be picked up at one location and delivered at another.
///
/// `pickup == None` means the package originates at the depot. The `-1`
/// sentinel of the tuple encoding is translated to `None` at the boundary
/// only ([`crate::api`]); internal logic never tests magic values.
///
/// # Examples
///
/// ```
/// use van_routing::models::{Package, DEPOT};
///
/// let p = Package::new(6, 2, 9);
/// assert_eq!(p.pickup(), Some(6));
/// assert_eq!(p.delivery(), 2);
/// assert_eq!(p.weight(), 9);
///
/// let d = Package::from_depot(5, 4);
/// assert_eq!(d.pickup(), None);
/// assert_eq!(d.pickup_or(DEPOT), DEPOT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pickup: Option<Location>,
    delivery: Location,
    weight: i32,
}

impl Package {
    /// Creates a package with an explicit pickup location.
    pub fn new(pickup: Location, delivery: Location, weight: i32) -> Self {
        Self {
            pickup: Some(pickup),
            delivery,
            weight,
        }
    }

    /// Creates a package that originates at the depot.
    pub fn from_depot(delivery: Location, weight: i32) -> Self {
        Self {
            pickup: None,
            delivery,
            weight,
        }
    }

    /// Pickup location, or `None` if the package originates at the depot.
    pub fn pickup(&self) -> Option<Location> {
        self.pickup
    }

    /// Pickup location, resolving depot-origin packages to the given depot.
    pub fn pickup_or(&self, depot: Location) -> Location {
        self.pickup.unwrap_or(depot)
    }

    /// Delivery location.
    pub fn delivery(&self) -> Location {
        self.delivery
    }

    /// Package weight.
    pub fn weight(&self) -> i32 {
        self.weight
    }
}
