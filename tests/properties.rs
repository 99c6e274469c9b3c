//! Property tests: the optimizers against a brute-force oracle, plus the
//! structural invariants every returned solution must satisfy.

use itertools::Itertools;
use proptest::prelude::*;

use van_routing::distance::{AbsoluteDistance, DistanceMetric};
use van_routing::evaluation::RouteChecker;
use van_routing::models::{Package, StopKind, Van, DEPOT};
use van_routing::search::{optimize_fleet, optimize_single_van};

const EPS: f64 = 1e-6;

fn vans_strategy() -> impl Strategy<Value = Vec<Van>> {
    prop::collection::vec(
        (0i32..=12, 1u8..=5).prop_map(|(c, f)| Van::new(c, f as f64)),
        1..=3,
    )
}

fn packages_strategy(max_len: usize) -> impl Strategy<Value = Vec<Package>> {
    prop::collection::vec(
        (-1i64..=12, -8i64..=12, 1i32..=6)
            .prop_filter("pickup != delivery", |(p, d, _)| p != d)
            .prop_map(|(pickup, delivery, weight)| {
                if pickup == -1 {
                    Package::from_depot(delivery, weight)
                } else {
                    Package::new(pickup, delivery, weight)
                }
            }),
        0..=max_len,
    )
}

/// Minimum feasible route distance for one van, by trying every ordering of
/// the 2n pickup/delivery events.
fn oracle_route_distance(van: &Van, packages: &[Package]) -> Option<f64> {
    if packages.iter().any(|p| !van.can_carry(p.weight())) {
        return None;
    }
    let n = packages.len();
    if n == 0 {
        return Some(0.0);
    }
    let events: Vec<(usize, StopKind)> = (0..n)
        .flat_map(|i| [(i, StopKind::Pickup), (i, StopKind::Delivery)])
        .collect();
    let metric = AbsoluteDistance;
    let mut best: Option<f64> = None;

    for perm in events.iter().permutations(events.len()) {
        let mut picked = vec![false; n];
        let mut delivered = vec![false; n];
        let mut load = 0i32;
        let mut at = DEPOT;
        let mut distance = 0.0;
        let mut valid = true;

        for &&(id, kind) in &perm {
            let package = &packages[id];
            match kind {
                StopKind::Pickup => {
                    picked[id] = true;
                    load += package.weight();
                    if load > van.capacity() {
                        valid = false;
                        break;
                    }
                    let loc = package.pickup_or(DEPOT);
                    distance += metric.distance(at, loc);
                    at = loc;
                }
                StopKind::Delivery => {
                    if !picked[id] || delivered[id] {
                        valid = false;
                        break;
                    }
                    delivered[id] = true;
                    load -= package.weight();
                    distance += metric.distance(at, package.delivery());
                    at = package.delivery();
                }
            }
        }
        if !valid {
            continue;
        }
        distance += metric.distance(at, DEPOT);
        if best.map_or(true, |b| distance < b) {
            best = Some(distance);
        }
    }
    best
}

/// Minimum fuel over all vans serving the full set alone.
fn oracle_single_van_fuel(vans: &[Van], packages: &[Package]) -> Option<f64> {
    vans.iter()
        .filter_map(|van| {
            oracle_route_distance(van, packages).map(|d| d * van.fuel_per_unit())
        })
        .min_by(|a, b| a.partial_cmp(b).expect("fuel is never NaN"))
}

/// Minimum total fuel over all assignments of packages to vans (a van may
/// receive no packages; used vans are distinct by construction).
fn oracle_fleet_fuel(vans: &[Van], packages: &[Package]) -> Option<f64> {
    let n = packages.len();
    let m = vans.len();
    if n == 0 {
        return Some(0.0);
    }
    let mut best: Option<f64> = None;

    // Each package independently chooses its van: m^n assignments.
    for code in 0..m.pow(n as u32) {
        let mut groups = vec![Vec::new(); m];
        let mut rest = code;
        for p in 0..n {
            groups[rest % m].push(packages[p].clone());
            rest /= m;
        }
        let mut total = 0.0;
        let mut valid = true;
        for (van, group) in vans.iter().zip(&groups) {
            match oracle_route_distance(van, group) {
                Some(d) => total += d * van.fuel_per_unit(),
                None => {
                    valid = false;
                    break;
                }
            }
        }
        if valid && best.map_or(true, |b| total < b) {
            best = Some(total);
        }
    }
    best
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_single_van_matches_oracle(
        vans in vans_strategy(),
        packages in packages_strategy(3),
    ) {
        let solution = optimize_single_van(&vans, &packages, &AbsoluteDistance, DEPOT);
        match oracle_single_van_fuel(&vans, &packages) {
            Some(fuel) => {
                prop_assert!(solution.is_feasible());
                prop_assert!((solution.total_fuel() - fuel).abs() < EPS);
            }
            None => prop_assert!(!solution.is_feasible()),
        }
    }

    #[test]
    fn prop_single_van_route_verifies(
        vans in vans_strategy(),
        packages in packages_strategy(4),
    ) {
        let solution = optimize_single_van(&vans, &packages, &AbsoluteDistance, DEPOT);
        if let Some(route) = solution.route() {
            let van_index = solution.van_index().expect("feasible solution has a van");
            let checker = RouteChecker::new(&packages, &AbsoluteDistance, DEPOT);
            prop_assert!(checker.verify(route, vans[van_index].capacity()).is_empty());
            prop_assert_eq!(route.len(), packages.len() * 2);
            let mut served = route.package_ids();
            served.sort_unstable();
            prop_assert_eq!(served, (0..packages.len()).collect::<Vec<_>>());
            prop_assert!(
                (checker.route_distance(route.stops()) - route.total_distance()).abs() < EPS
            );
        }
    }

    #[test]
    fn prop_fleet_matches_oracle(
        vans in vans_strategy(),
        packages in packages_strategy(3),
    ) {
        let solution = optimize_fleet(&vans, &packages, &AbsoluteDistance, DEPOT);
        match oracle_fleet_fuel(&vans, &packages) {
            Some(fuel) => {
                prop_assert!(solution.is_feasible());
                prop_assert!((solution.total_fuel() - fuel).abs() < EPS);
            }
            None => prop_assert!(!solution.is_feasible()),
        }
    }

    #[test]
    fn prop_fleet_partition_is_complete_and_disjoint(
        vans in vans_strategy(),
        packages in packages_strategy(4),
    ) {
        let solution = optimize_fleet(&vans, &packages, &AbsoluteDistance, DEPOT);
        if solution.is_feasible() {
            // Every package appears exactly once across all routes.
            let mut served: Vec<usize> = solution
                .routes()
                .iter()
                .flat_map(|r| r.package_ids())
                .collect();
            served.sort_unstable();
            prop_assert_eq!(served, (0..packages.len()).collect::<Vec<_>>());

            // Used vans are distinct and aligned with their routes.
            let mut used = solution.vans_used().to_vec();
            used.sort_unstable();
            used.dedup();
            prop_assert_eq!(used.len(), solution.vans_used().len());

            let checker = RouteChecker::new(&packages, &AbsoluteDistance, DEPOT);
            for route in solution.routes() {
                prop_assert!(checker
                    .verify(route, vans[route.van_index()].capacity())
                    .is_empty());
            }
        }
    }

    #[test]
    fn prop_deterministic(
        vans in vans_strategy(),
        packages in packages_strategy(3),
    ) {
        let a = optimize_single_van(&vans, &packages, &AbsoluteDistance, DEPOT);
        let b = optimize_single_van(&vans, &packages, &AbsoluteDistance, DEPOT);
        prop_assert_eq!(a, b);

        let a = optimize_fleet(&vans, &packages, &AbsoluteDistance, DEPOT);
        let b = optimize_fleet(&vans, &packages, &AbsoluteDistance, DEPOT);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_overweight_package_is_never_routed(
        vans in vans_strategy(),
        packages in packages_strategy(2),
        pickup in 0i64..=10,
    ) {
        // Add one package heavier than every van.
        let heaviest = vans.iter().map(Van::capacity).max().expect("non-empty fleet");
        let mut packages = packages;
        packages.push(Package::new(pickup, pickup + 1, heaviest + 1));

        let single = optimize_single_van(&vans, &packages, &AbsoluteDistance, DEPOT);
        prop_assert!(!single.is_feasible());
        prop_assert!(single.route().is_none());

        let fleet = optimize_fleet(&vans, &packages, &AbsoluteDistance, DEPOT);
        prop_assert!(!fleet.is_feasible());
        prop_assert!(fleet.vans_used().is_empty());
    }
}
