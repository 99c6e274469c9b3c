//! Tuple-encoded entry points.
//!
//! Data crosses this boundary as ordered tuples: vans as
//! `(capacity, fuel_per_unit)`, packages as `(pickup, delivery, weight)`
//! with `-1` as the "originates at the depot" pickup sentinel, and routes
//! as `(location, action, weight)` triples bracketed by depot markers. The
//! sentinel is translated here and nowhere else; input is validated before
//! any search begins.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::distance::AbsoluteDistance;
use crate::error::ValidationError;
use crate::models::{Location, Package, Route, StopKind, Van, DEPOT};
use crate::search::{optimize_fleet, optimize_single_van};

/// Pickup value that marks a package as originating at the depot.
pub const DEPOT_SENTINEL: Location = -1;

/// A van described as `(capacity, fuel_per_unit)`.
pub type VanStats = (i32, f64);

/// A package described as `(pickup, delivery, weight)`.
pub type PackageTuple = (Location, Location, i32);

/// One entry of an encoded route: `(location, action, weight)`.
pub type EncodedStop = (Location, StopAction, i32);

/// An encoded route: depot start marker, pickups and drops, depot end marker.
pub type EncodedRoute = Vec<EncodedStop>;

/// Action taken at an encoded route entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopAction {
    /// Leaving the depot (weight 0).
    Start,
    /// Picking a package up.
    Pick,
    /// Dropping a package off.
    Drop,
    /// Returning to the depot (weight 0).
    End,
}

/// Finds the best van and route to serve the whole package set.
///
/// Returns `(selected_van_index, route_distance, total_fuel, route,
/// feasible)`. The selected index points into `van_stats`; selection
/// minimizes fuel, then distance, then the van index. `feasible == false`
/// (with no route and no van) means no single van can carry the set.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the offending record if the input
/// is malformed; no search runs on invalid input.
///
/// # Examples
///
/// ```
/// use van_routing::api::find_optimal_route_for_single_van;
///
/// let (van, distance, fuel, route, feasible) = find_optimal_route_for_single_van(
///     &[(10, 10.0), (9, 8.0)],
///     &[(-1, 5, 4), (6, 2, 9)],
/// ).unwrap();
///
/// assert!(feasible);
/// assert_eq!(van, Some(1));
/// assert_eq!(distance, 12.0);
/// assert_eq!(fuel, 96.0);
/// assert_eq!(route.len(), 6); // start, two picks, two drops, end
/// ```
pub fn find_optimal_route_for_single_van(
    van_stats: &[VanStats],
    packages: &[PackageTuple],
) -> Result<(Option<usize>, f64, f64, EncodedRoute, bool), ValidationError> {
    validate(van_stats, packages)?;
    let vans = decode_vans(van_stats);
    let packages = decode_packages(packages);

    let solution = optimize_single_van(&vans, &packages, &AbsoluteDistance, DEPOT);
    if !solution.is_feasible() {
        warn!(
            vans = vans.len(),
            packages = packages.len(),
            "no single van can serve the package set"
        );
    }

    let route = solution
        .route()
        .map(|r| encode_route(r, &packages))
        .unwrap_or_default();
    Ok((
        solution.van_index(),
        solution.total_distance(),
        solution.total_fuel(),
        route,
        solution.is_feasible(),
    ))
}

/// Assigns every package to exactly one van and routes each van optimally,
/// minimizing total fleet fuel.
///
/// Returns `(vans_used, total_distance, total_fuel, routes)` with `routes`
/// aligned with `vans_used`. Empty `vans_used` with a non-empty package
/// list means no capacity-feasible assignment exists.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the offending record if the input
/// is malformed; no search runs on invalid input.
///
/// # Examples
///
/// ```
/// use van_routing::api::find_optimal_route_for_multiple_vans;
///
/// let (vans_used, distance, fuel, routes) = find_optimal_route_for_multiple_vans(
///     &[(10, 10.0), (9, 8.0)],
///     &[(-1, 5, 4), (6, 2, 9)],
/// ).unwrap();
///
/// // One van suffices: deliver the first package, then fetch the second.
/// assert_eq!(vans_used, vec![1]);
/// assert_eq!(distance, 12.0);
/// assert_eq!(fuel, 96.0);
/// assert_eq!(routes.len(), 1);
/// ```
pub fn find_optimal_route_for_multiple_vans(
    van_stats: &[VanStats],
    packages: &[PackageTuple],
) -> Result<(Vec<usize>, f64, f64, Vec<EncodedRoute>), ValidationError> {
    validate(van_stats, packages)?;
    let vans = decode_vans(van_stats);
    let packages = decode_packages(packages);

    let solution = optimize_fleet(&vans, &packages, &AbsoluteDistance, DEPOT);
    if !solution.is_feasible() {
        warn!(
            vans = vans.len(),
            packages = packages.len(),
            "no capacity-feasible fleet assignment exists"
        );
    }

    let routes = solution
        .routes()
        .iter()
        .map(|r| encode_route(r, &packages))
        .collect();
    Ok((
        solution.vans_used().to_vec(),
        solution.total_distance(),
        solution.total_fuel(),
        routes,
    ))
}

fn validate(van_stats: &[VanStats], packages: &[PackageTuple]) -> Result<(), ValidationError> {
    for (index, &(capacity, fuel_per_unit)) in van_stats.iter().enumerate() {
        if capacity < 0 {
            return Err(ValidationError::InvalidCapacity { index, capacity });
        }
        if !fuel_per_unit.is_finite() || fuel_per_unit <= 0.0 {
            return Err(ValidationError::InvalidFuelRate {
                index,
                fuel_per_unit,
            });
        }
    }
    for (index, &(pickup, delivery, weight)) in packages.iter().enumerate() {
        if weight <= 0 {
            return Err(ValidationError::InvalidWeight { index, weight });
        }
        if pickup == delivery {
            return Err(ValidationError::SamePickupAndDelivery {
                index,
                location: pickup,
            });
        }
    }
    if van_stats.is_empty() && !packages.is_empty() {
        return Err(ValidationError::NoVans);
    }
    Ok(())
}

fn decode_vans(van_stats: &[VanStats]) -> Vec<Van> {
    van_stats
        .iter()
        .map(|&(capacity, fuel_per_unit)| Van::new(capacity, fuel_per_unit))
        .collect()
}

fn decode_packages(packages: &[PackageTuple]) -> Vec<Package> {
    packages
        .iter()
        .map(|&(pickup, delivery, weight)| {
            if pickup == DEPOT_SENTINEL {
                Package::from_depot(delivery, weight)
            } else {
                Package::new(pickup, delivery, weight)
            }
        })
        .collect()
}

fn encode_route(route: &Route, packages: &[Package]) -> EncodedRoute {
    let mut encoded = Vec::with_capacity(route.len() + 2);
    encoded.push((DEPOT, StopAction::Start, 0));
    for stop in route.stops() {
        let action = match stop.kind {
            StopKind::Pickup => StopAction::Pick,
            StopKind::Delivery => StopAction::Drop,
        };
        encoded.push((stop.location, action, packages[stop.package_id].weight()));
    }
    encoded.push((DEPOT, StopAction::End, 0));
    encoded
}
