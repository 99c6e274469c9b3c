//! Solution and violation types.

use serde::{Deserialize, Serialize};

use super::Route;

/// A constraint violation found when re-checking a finished route.
///
/// The search never returns a violating route; a non-empty violation list
/// from [`RouteChecker::verify`](crate::evaluation::RouteChecker::verify)
/// indicates a bug in the search itself, not bad input.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// A delivery occurred before its pickup.
    PrecedenceViolated {
        /// Package whose delivery came first.
        package_id: usize,
    },
    /// In-transit load exceeded the van's capacity after a pickup.
    CapacityExceeded {
        /// Stop position where the load peaked.
        position: usize,
        /// Load after the offending pickup.
        load: i32,
        /// Van capacity.
        capacity: i32,
    },
    /// A package was picked up but never delivered.
    MissingStop {
        /// Package left in transit.
        package_id: usize,
    },
    /// A package was picked up or delivered more than once.
    DuplicateStop {
        /// Package with the repeated event.
        package_id: usize,
    },
    /// A stop referenced a package outside the route's package set.
    UnknownPackage {
        /// Out-of-range package ID.
        package_id: usize,
    },
}

/// The result of optimizing one package set over a list of candidate vans.
///
/// `feasible == false` means no van in the list could serve the full set;
/// that is an expected domain outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VanSolution {
    van_index: Option<usize>,
    total_distance: f64,
    total_fuel: f64,
    route: Option<Route>,
    feasible: bool,
}

impl VanSolution {
    /// Wraps the winning route; totals are taken from the route.
    pub fn feasible(route: Route) -> Self {
        Self {
            van_index: Some(route.van_index()),
            total_distance: route.total_distance(),
            total_fuel: route.total_fuel(),
            route: Some(route),
            feasible: true,
        }
    }

    /// The infeasible outcome: no van can serve the package set.
    pub fn infeasible() -> Self {
        Self {
            van_index: None,
            total_distance: 0.0,
            total_fuel: 0.0,
            route: None,
            feasible: false,
        }
    }

    /// The vacuous outcome: nothing to route and no van to pick.
    pub fn trivial() -> Self {
        Self {
            van_index: None,
            total_distance: 0.0,
            total_fuel: 0.0,
            route: None,
            feasible: true,
        }
    }

    /// Index of the selected van, if any.
    pub fn van_index(&self) -> Option<usize> {
        self.van_index
    }

    /// Distance of the winning route (0 if none).
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Fuel of the winning route (0 if none).
    pub fn total_fuel(&self) -> f64 {
        self.total_fuel
    }

    /// The winning route, if any.
    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// Whether any van could serve the full package set.
    pub fn is_feasible(&self) -> bool {
        self.feasible
    }
}

/// The result of partitioning a package set across a fleet.
///
/// `routes[i]` is driven by `vans_used[i]`. An infeasible fleet result has
/// empty `vans_used`/`routes` and `feasible == false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetSolution {
    vans_used: Vec<usize>,
    total_distance: f64,
    total_fuel: f64,
    routes: Vec<Route>,
    feasible: bool,
}

impl FleetSolution {
    /// Wraps the winning routes; van indices and totals are derived from them.
    pub fn feasible(routes: Vec<Route>) -> Self {
        Self {
            vans_used: routes.iter().map(|r| r.van_index()).collect(),
            total_distance: routes.iter().map(|r| r.total_distance()).sum(),
            total_fuel: routes.iter().map(|r| r.total_fuel()).sum(),
            routes,
            feasible: true,
        }
    }

    /// The infeasible outcome: no capacity-feasible assignment exists.
    pub fn infeasible() -> Self {
        Self {
            vans_used: Vec::new(),
            total_distance: 0.0,
            total_fuel: 0.0,
            routes: Vec::new(),
            feasible: false,
        }
    }

    /// The vacuous outcome: an empty package set needs no van.
    pub fn trivial() -> Self {
        Self {
            vans_used: Vec::new(),
            total_distance: 0.0,
            total_fuel: 0.0,
            routes: Vec::new(),
            feasible: true,
        }
    }

    /// Indices of the vans used, aligned with [`routes`](Self::routes).
    pub fn vans_used(&self) -> &[usize] {
        &self.vans_used
    }

    /// Total distance across all routes.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Total fuel across all routes.
    pub fn total_fuel(&self) -> f64 {
        self.total_fuel
    }

    /// The routes, one per used van.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Whether a capacity-feasible assignment of all packages was found.
    pub fn is_feasible(&self) -> bool {
        self.feasible
    }
}
