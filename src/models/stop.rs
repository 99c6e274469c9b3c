//! Stop and route types.

use serde::{Deserialize, Serialize};

use super::Location;

/// Whether a stop picks a package up or drops it off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopKind {
    /// The package is taken on board.
    Pickup,
    /// The package is dropped off.
    Delivery,
}

/// A single pickup or delivery event for exactly one package.
///
/// Every routed package contributes two stops: one pickup and one delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// Index of the package within the route's package set.
    pub package_id: usize,
    /// Location where the event happens.
    pub location: Location,
    /// Pickup or delivery.
    pub kind: StopKind,
}

/// An ordered sequence of stops driven by a single van.
///
/// A route starts at the depot and ends with a return leg to the depot;
/// neither depot visit is stored in `stops`, but both legs are included in
/// the distance and fuel totals.
///
/// # Examples
///
/// ```
/// use van_routing::models::{Route, Stop, StopKind};
///
/// let mut route = Route::new(1);
/// route.push_stop(Stop {
///     package_id: 0,
///     location: 5,
///     kind: StopKind::Pickup,
/// });
/// assert_eq!(route.van_index(), 1);
/// assert_eq!(route.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    van_index: usize,
    stops: Vec<Stop>,
    total_distance: f64,
    total_fuel: f64,
}

impl Route {
    /// Creates an empty route for the van at the given fleet index.
    pub fn new(van_index: usize) -> Self {
        Self {
            van_index,
            stops: Vec::new(),
            total_distance: 0.0,
            total_fuel: 0.0,
        }
    }

    /// Appends a stop to the end of this route.
    pub fn push_stop(&mut self, stop: Stop) {
        self.stops.push(stop);
    }

    /// Index of the van driving this route.
    pub fn van_index(&self) -> usize {
        self.van_index
    }

    /// The ordered stop sequence (depot legs excluded).
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops. Always `2 × packages routed`.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// IDs of the packages this route serves, in pickup order.
    pub fn package_ids(&self) -> Vec<usize> {
        self.stops
            .iter()
            .filter(|s| s.kind == StopKind::Pickup)
            .map(|s| s.package_id)
            .collect()
    }

    /// Total distance including the final return leg to the depot.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Total fuel consumed over [`total_distance`](Self::total_distance).
    pub fn total_fuel(&self) -> f64 {
        self.total_fuel
    }

    /// Sets the total distance (used by the enumerator).
    pub fn set_total_distance(&mut self, d: f64) {
        self.total_distance = d;
    }

    /// Sets the total fuel (used by the enumerator).
    pub fn set_total_fuel(&mut self, f: f64) {
        self.total_fuel = f;
    }
}
