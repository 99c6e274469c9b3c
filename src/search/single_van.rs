//! Best single (van, route) pairing for a package set.

use rayon::prelude::*;
use tracing::debug;

use crate::distance::DistanceMetric;
use crate::models::{Location, Package, Route, Van, VanSolution};

use super::best_route;

/// Tries every candidate van against the route enumerator and selects the
/// pairing with minimum fuel; ties go to minimum distance, then to the
/// lowest van index.
///
/// Candidate vans are evaluated in parallel; results are collected by index
/// and scanned sequentially, so the selection stays deterministic. Inputs
/// are never mutated and the function is pure given its inputs.
///
/// Returns the infeasible solution if no van can serve the full set. With
/// no vans and no packages the outcome is vacuously feasible with no van
/// selected.
///
/// # Examples
///
/// ```
/// use van_routing::distance::AbsoluteDistance;
/// use van_routing::models::{Package, Van, DEPOT};
/// use van_routing::search::optimize_single_van;
///
/// let vans = vec![Van::new(10, 10.0), Van::new(9, 8.0)];
/// let packages = vec![Package::from_depot(5, 4), Package::new(6, 2, 9)];
/// let solution = optimize_single_van(&vans, &packages, &AbsoluteDistance, DEPOT);
/// assert_eq!(solution.van_index(), Some(1));
/// assert_eq!(solution.total_fuel(), 96.0);
/// ```
pub fn optimize_single_van<M: DistanceMetric>(
    vans: &[Van],
    packages: &[Package],
    metric: &M,
    depot: Location,
) -> VanSolution {
    if vans.is_empty() {
        return if packages.is_empty() {
            VanSolution::trivial()
        } else {
            VanSolution::infeasible()
        };
    }

    let candidates: Vec<_> = vans
        .par_iter()
        .enumerate()
        .map(|(index, van)| best_route(index, van, packages, metric, depot))
        .collect();

    let feasible = candidates.iter().flatten().count();
    debug!(
        vans = vans.len(),
        feasible,
        packages = packages.len(),
        "single-van candidates evaluated"
    );

    let mut best = None;
    for route in candidates.into_iter().flatten() {
        let replace = match &best {
            None => true,
            Some(current) => is_better(&route, current),
        };
        if replace {
            best = Some(route);
        }
    }

    match best {
        Some(route) => VanSolution::feasible(route),
        None => VanSolution::infeasible(),
    }
}

/// Strict improvement on (fuel, distance). Equal costs keep the incumbent,
/// which has the lower van index because candidates are scanned in order.
fn is_better(candidate: &Route, incumbent: &Route) -> bool {
    candidate.total_fuel() < incumbent.total_fuel()
        || (candidate.total_fuel() == incumbent.total_fuel()
            && candidate.total_distance() < incumbent.total_distance())
}
