//! Route checker that re-verifies constraints and recomputes cost.

use crate::distance::DistanceMetric;
use crate::models::{Location, Package, Route, Stop, StopKind, Violation};

/// Re-checks a finished route against the precedence and capacity
/// invariants, independently of the search that produced it.
///
/// The search `debug_assert!`s that every route it returns verifies clean;
/// tests use the checker as an oracle. A violation reported here means the
/// search itself is buggy, never that the input was bad.
///
/// # Examples
///
/// ```
/// use van_routing::distance::AbsoluteDistance;
/// use van_routing::evaluation::RouteChecker;
/// use van_routing::models::{Package, Route, Stop, StopKind, DEPOT};
///
/// let packages = vec![Package::new(3, 7, 5)];
/// let checker = RouteChecker::new(&packages, &AbsoluteDistance, DEPOT);
///
/// let mut route = Route::new(0);
/// route.push_stop(Stop { package_id: 0, location: 3, kind: StopKind::Pickup });
/// route.push_stop(Stop { package_id: 0, location: 7, kind: StopKind::Delivery });
///
/// assert!(checker.verify(&route, 5).is_empty());
/// // depot -> 3 -> 7 -> depot
/// assert_eq!(checker.route_distance(route.stops()), 14.0);
/// ```
pub struct RouteChecker<'a, M> {
    packages: &'a [Package],
    metric: &'a M,
    depot: Location,
}

impl<'a, M: DistanceMetric> RouteChecker<'a, M> {
    /// Creates a checker for the given package set, metric, and depot.
    pub fn new(packages: &'a [Package], metric: &'a M, depot: Location) -> Self {
        Self {
            packages,
            metric,
            depot,
        }
    }

    /// Verifies a route against the given van capacity.
    ///
    /// Checks, for every package touched by the route: exactly one pickup,
    /// exactly one delivery, pickup strictly before delivery; and that the
    /// in-transit load never exceeds `capacity` at any prefix. Whether the
    /// route covers a particular package set is the caller's concern (see
    /// [`Route::package_ids`]).
    pub fn verify(&self, route: &Route, capacity: i32) -> Vec<Violation> {
        let n = self.packages.len();
        let mut picked = vec![false; n];
        let mut delivered = vec![false; n];
        let mut load: i32 = 0;
        let mut violations = Vec::new();

        for (position, stop) in route.stops().iter().enumerate() {
            let id = stop.package_id;
            let Some(package) = self.packages.get(id) else {
                violations.push(Violation::UnknownPackage { package_id: id });
                continue;
            };
            match stop.kind {
                StopKind::Pickup => {
                    if picked[id] {
                        violations.push(Violation::DuplicateStop { package_id: id });
                        continue;
                    }
                    picked[id] = true;
                    load += package.weight();
                    if load > capacity {
                        violations.push(Violation::CapacityExceeded {
                            position,
                            load,
                            capacity,
                        });
                    }
                }
                StopKind::Delivery => {
                    if delivered[id] {
                        violations.push(Violation::DuplicateStop { package_id: id });
                        continue;
                    }
                    if !picked[id] {
                        violations.push(Violation::PrecedenceViolated { package_id: id });
                        continue;
                    }
                    delivered[id] = true;
                    load -= package.weight();
                }
            }
        }

        for id in 0..n {
            if picked[id] && !delivered[id] {
                violations.push(Violation::MissingStop { package_id: id });
            }
        }

        violations
    }

    /// Distance of a stop sequence, starting at the depot and including the
    /// final return leg to the depot.
    pub fn route_distance(&self, stops: &[Stop]) -> f64 {
        let mut at = self.depot;
        let mut distance = 0.0;
        for stop in stops {
            distance += self.metric.distance(at, stop.location);
            at = stop.location;
        }
        distance + self.metric.distance(at, self.depot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::AbsoluteDistance;
    use crate::models::DEPOT;

    fn packages() -> Vec<Package> {
        vec![Package::from_depot(5, 4), Package::new(6, 2, 9)]
    }

    fn stop(package_id: usize, location: Location, kind: StopKind) -> Stop {
        Stop {
            package_id,
            location,
            kind,
        }
    }

    #[test]
    fn test_verify_clean_route() {
        let packages = packages();
        let checker = RouteChecker::new(&packages, &AbsoluteDistance, DEPOT);
        let mut route = Route::new(0);
        route.push_stop(stop(0, 0, StopKind::Pickup));
        route.push_stop(stop(0, 5, StopKind::Delivery));
        route.push_stop(stop(1, 6, StopKind::Pickup));
        route.push_stop(stop(1, 2, StopKind::Delivery));
        assert!(checker.verify(&route, 10).is_empty());
    }

    #[test]
    fn test_verify_precedence_violation() {
        let packages = packages();
        let checker = RouteChecker::new(&packages, &AbsoluteDistance, DEPOT);
        let mut route = Route::new(0);
        route.push_stop(stop(0, 5, StopKind::Delivery));
        route.push_stop(stop(0, 0, StopKind::Pickup));
        let violations = checker.verify(&route, 10);
        assert!(violations.contains(&Violation::PrecedenceViolated { package_id: 0 }));
        // Pickup without a later delivery is also flagged.
        assert!(violations.contains(&Violation::MissingStop { package_id: 0 }));
    }

    #[test]
    fn test_verify_capacity_violation() {
        let packages = packages();
        let checker = RouteChecker::new(&packages, &AbsoluteDistance, DEPOT);
        let mut route = Route::new(0);
        route.push_stop(stop(0, 0, StopKind::Pickup));
        route.push_stop(stop(1, 6, StopKind::Pickup));
        route.push_stop(stop(0, 5, StopKind::Delivery));
        route.push_stop(stop(1, 2, StopKind::Delivery));
        let violations = checker.verify(&route, 10);
        assert_eq!(
            violations,
            vec![Violation::CapacityExceeded {
                position: 1,
                load: 13,
                capacity: 10,
            }]
        );
        // A bigger van makes the same interleaving legal.
        assert!(checker.verify(&route, 13).is_empty());
    }

    #[test]
    fn test_verify_duplicate_and_unknown() {
        let packages = packages();
        let checker = RouteChecker::new(&packages, &AbsoluteDistance, DEPOT);
        let mut route = Route::new(0);
        route.push_stop(stop(0, 0, StopKind::Pickup));
        route.push_stop(stop(0, 0, StopKind::Pickup));
        route.push_stop(stop(7, 1, StopKind::Pickup));
        let violations = checker.verify(&route, 100);
        assert!(violations.contains(&Violation::DuplicateStop { package_id: 0 }));
        assert!(violations.contains(&Violation::UnknownPackage { package_id: 7 }));
    }

    #[test]
    fn test_route_distance_with_return_leg() {
        let packages = packages();
        let checker = RouteChecker::new(&packages, &AbsoluteDistance, DEPOT);
        let stops = [
            stop(0, 0, StopKind::Pickup),
            stop(0, 5, StopKind::Delivery),
            stop(1, 6, StopKind::Pickup),
            stop(1, 2, StopKind::Delivery),
        ];
        // 0 + 5 + 1 + 4, plus 2 back to the depot.
        assert!((checker.route_distance(&stops) - 12.0).abs() < 1e-10);
        assert_eq!(checker.route_distance(&[]), 0.0);
    }
}
