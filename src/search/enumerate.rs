//! Exhaustive route enumeration for one van and one package set.
//!
//! Depth-first search over all valid pickup/delivery orderings. A pickup is
//! only tried while the package fits the remaining capacity; a delivery is
//! only tried for packages currently in transit. Branches whose accumulated
//! distance already reaches the best complete distance are abandoned (safe
//! because the metric is non-negative).
//!
//! # Complexity
//!
//! Exponential in the package count. Intended for the small instances this
//! crate targets; recursion depth is bounded by `2n + 1`.

use tracing::debug;

use crate::distance::{fuel_cost, DistanceMetric};
use crate::evaluation::RouteChecker;
use crate::models::{Location, Package, Route, Stop, StopKind, Van};

/// Finds the minimum-distance feasible route for `van` through every pickup
/// and delivery in `packages`, starting at `depot` and returning to it.
///
/// Returns `None` if no feasible ordering exists, which with a positive
/// capacity can only happen when a single package outweighs the van. An
/// empty package set yields the empty route with distance 0.
///
/// Ties on total distance keep the first route found; candidate events are
/// tried in ascending package index order (each package contributes at most
/// one pending event per state), so the result is deterministic for a fixed
/// input order.
///
/// # Examples
///
/// ```
/// use van_routing::distance::AbsoluteDistance;
/// use van_routing::models::{Package, Van, DEPOT};
/// use van_routing::search::best_route;
///
/// let van = Van::new(5, 2.0);
/// let packages = vec![Package::new(3, 7, 5)];
/// let route = best_route(0, &van, &packages, &AbsoluteDistance, DEPOT).unwrap();
/// // depot -> 3 -> 7 -> depot
/// assert_eq!(route.total_distance(), 14.0);
/// assert_eq!(route.total_fuel(), 28.0);
/// ```
pub fn best_route<M: DistanceMetric>(
    van_index: usize,
    van: &Van,
    packages: &[Package],
    metric: &M,
    depot: Location,
) -> Option<Route> {
    // Picked/delivered state is tracked in u64 bitmasks.
    assert!(
        packages.len() <= 64,
        "route enumeration supports at most 64 packages"
    );
    if packages.iter().any(|p| !van.can_carry(p.weight())) {
        return None;
    }

    let mut dfs = Dfs {
        packages,
        metric,
        capacity: van.capacity(),
        depot,
        best: None,
        completed: 0,
    };
    let mut stops = Vec::with_capacity(packages.len() * 2);
    dfs.explore(&mut stops, 0, 0, 0, depot, 0.0);

    let (total_distance, stops) = dfs.best?;
    debug!(
        van_index,
        packages = packages.len(),
        completed = dfs.completed,
        total_distance,
        "route enumeration finished"
    );

    let mut route = Route::new(van_index);
    for stop in stops {
        route.push_stop(stop);
    }
    route.set_total_distance(total_distance);
    route.set_total_fuel(fuel_cost(total_distance, van.fuel_per_unit()));

    debug_assert!(
        RouteChecker::new(packages, metric, depot)
            .verify(&route, van.capacity())
            .is_empty(),
        "enumerator produced a route violating its own constraints"
    );
    debug_assert_eq!(route.len(), packages.len() * 2);

    Some(route)
}

struct Dfs<'a, M> {
    packages: &'a [Package],
    metric: &'a M,
    capacity: i32,
    depot: Location,
    /// Best complete (distance, stops) found so far. Each branch owns its
    /// own partial state; this is the only value shared across branches.
    best: Option<(f64, Vec<Stop>)>,
    completed: usize,
}

impl<M: DistanceMetric> Dfs<'_, M> {
    fn explore(
        &mut self,
        stops: &mut Vec<Stop>,
        picked: u64,
        delivered: u64,
        load: i32,
        at: Location,
        distance: f64,
    ) {
        if let Some((best_distance, _)) = &self.best {
            if distance >= *best_distance {
                return;
            }
        }

        if delivered.count_ones() as usize == self.packages.len() {
            let total = distance + self.metric.distance(at, self.depot);
            self.completed += 1;
            if self.best.as_ref().map_or(true, |(b, _)| total < *b) {
                self.best = Some((total, stops.clone()));
            }
            return;
        }

        for (id, package) in self.packages.iter().enumerate() {
            let bit = 1u64 << id;
            if picked & bit == 0 {
                if load + package.weight() <= self.capacity {
                    let location = package.pickup_or(self.depot);
                    stops.push(Stop {
                        package_id: id,
                        location,
                        kind: StopKind::Pickup,
                    });
                    self.explore(
                        stops,
                        picked | bit,
                        delivered,
                        load + package.weight(),
                        location,
                        distance + self.metric.distance(at, location),
                    );
                    stops.pop();
                }
            } else if delivered & bit == 0 {
                let location = package.delivery();
                stops.push(Stop {
                    package_id: id,
                    location,
                    kind: StopKind::Delivery,
                });
                self.explore(
                    stops,
                    picked,
                    delivered | bit,
                    load - package.weight(),
                    location,
                    distance + self.metric.distance(at, location),
                );
                stops.pop();
            }
        }
    }
}
