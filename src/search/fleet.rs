//! Fleet assignment: partition packages across vans, route each group.

use std::collections::HashMap;

use itertools::Itertools;
use tracing::debug;

use crate::distance::DistanceMetric;
use crate::models::{FleetSolution, Location, Package, Route, Van};

use super::{best_route, Partitions};

/// Partitions the package set across the fleet (each van used at most once),
/// routes every group with the enumerator, and selects the assignment with
/// minimum total fuel; ties go to total distance, then to the first
/// candidate reached in enumeration order.
///
/// The search walks every partition of the package set into at most
/// `|vans|` non-empty groups, and for each partition every injective
/// assignment of groups to vans. A (group, van) cell is skipped when the
/// group's heaviest package outweighs the van; a group's total weight may
/// legally exceed capacity, since packages need not be in transit
/// simultaneously. Per-cell route results are memoized across assignments,
/// which does not change observable results.
///
/// Exact and super-exponential in the package count; intended for small
/// instances. Returns the infeasible solution when no capacity-feasible
/// assignment of all packages exists; an empty package set is vacuously
/// feasible with no van used.
///
/// # Examples
///
/// ```
/// use van_routing::distance::AbsoluteDistance;
/// use van_routing::models::{Package, Van, DEPOT};
/// use van_routing::search::optimize_fleet;
///
/// let vans = vec![Van::new(10, 10.0), Van::new(9, 8.0)];
/// let packages = vec![Package::from_depot(5, 4), Package::new(6, 2, 9)];
/// let solution = optimize_fleet(&vans, &packages, &AbsoluteDistance, DEPOT);
/// assert_eq!(solution.vans_used(), &[1]);
/// assert_eq!(solution.total_fuel(), 96.0);
/// ```
pub fn optimize_fleet<M: DistanceMetric>(
    vans: &[Van],
    packages: &[Package],
    metric: &M,
    depot: Location,
) -> FleetSolution {
    if packages.is_empty() {
        return FleetSolution::trivial();
    }
    if vans.is_empty() {
        return FleetSolution::infeasible();
    }

    let mut cells = CellCache::new(vans, packages, metric, depot);
    let mut best: Option<(f64, f64, Vec<Route>)> = None;
    let mut assignments_examined = 0usize;

    for groups in Partitions::new(packages.len(), vans.len()) {
        for assignment in (0..vans.len()).permutations(groups.len()) {
            assignments_examined += 1;

            let mut total_fuel = 0.0;
            let mut total_distance = 0.0;
            let mut routes = Vec::with_capacity(groups.len());
            let mut feasible = true;

            for (group, &van_index) in groups.iter().zip(&assignment) {
                if group
                    .iter()
                    .any(|&p| !vans[van_index].can_carry(packages[p].weight()))
                {
                    feasible = false;
                    break;
                }
                match cells.route_for(van_index, group) {
                    Some(route) => {
                        total_fuel += route.total_fuel();
                        total_distance += route.total_distance();
                        routes.push(route);
                    }
                    None => {
                        feasible = false;
                        break;
                    }
                }
                // Partial sums only grow; a worse-than-best prefix cannot win.
                if let Some((best_fuel, _, _)) = &best {
                    if total_fuel > *best_fuel {
                        feasible = false;
                        break;
                    }
                }
            }

            if !feasible {
                continue;
            }
            let better = match &best {
                None => true,
                Some((best_fuel, best_distance, _)) => {
                    total_fuel < *best_fuel
                        || (total_fuel == *best_fuel && total_distance < *best_distance)
                }
            };
            if better {
                best = Some((total_fuel, total_distance, routes));
            }
        }
    }

    debug!(
        packages = packages.len(),
        vans = vans.len(),
        assignments_examined,
        cells_routed = cells.len(),
        feasible = best.is_some(),
        "fleet search finished"
    );

    match best {
        Some((_, _, routes)) => FleetSolution::feasible(routes),
        None => FleetSolution::infeasible(),
    }
}

/// Memoized (van, package-subset) route results, keyed by van index and a
/// bitmask over package indices.
struct CellCache<'a, M> {
    vans: &'a [Van],
    packages: &'a [Package],
    metric: &'a M,
    depot: Location,
    cache: HashMap<(usize, u64), Option<Route>>,
}

impl<'a, M: DistanceMetric> CellCache<'a, M> {
    fn new(vans: &'a [Van], packages: &'a [Package], metric: &'a M, depot: Location) -> Self {
        Self {
            vans,
            packages,
            metric,
            depot,
            cache: HashMap::new(),
        }
    }

    /// Best route for the van through the given group of package indices,
    /// with stop IDs remapped back to the full package set.
    fn route_for(&mut self, van_index: usize, group: &[usize]) -> Option<Route> {
        let key = (van_index, group_mask(group));
        let cached = self.cache.entry(key).or_insert_with(|| {
            let subset: Vec<Package> =
                group.iter().map(|&p| self.packages[p].clone()).collect();
            best_route(
                van_index,
                &self.vans[van_index],
                &subset,
                self.metric,
                self.depot,
            )
        });

        cached.as_ref().map(|route| {
            let mut remapped = Route::new(route.van_index());
            for stop in route.stops() {
                let mut stop = *stop;
                stop.package_id = group[stop.package_id];
                remapped.push_stop(stop);
            }
            remapped.set_total_distance(route.total_distance());
            remapped.set_total_fuel(route.total_fuel());
            remapped
        })
    }

    fn len(&self) -> usize {
        self.cache.len()
    }
}

fn group_mask(group: &[usize]) -> u64 {
    group.iter().fold(0u64, |mask, &p| mask | (1u64 << p))
}
