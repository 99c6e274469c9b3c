//! Pluggable distance metric and fuel cost.

use crate::models::Location;

/// Distance policy between two scalar locations.
///
/// Implementations must be pure and total: no side effects, never fail, and
/// never return a negative or non-finite value. The search relies on
/// non-negativity for its branch-and-bound pruning.
///
/// # Examples
///
/// ```
/// use van_routing::distance::{AbsoluteDistance, DistanceMetric};
/// use van_routing::models::Location;
///
/// struct Doubled;
///
/// impl DistanceMetric for Doubled {
///     fn distance(&self, a: Location, b: Location) -> f64 {
///         2.0 * (a - b).abs() as f64
///     }
/// }
///
/// assert_eq!(AbsoluteDistance.distance(2, 6), 4.0);
/// assert_eq!(Doubled.distance(2, 6), 8.0);
/// ```
pub trait DistanceMetric: Send + Sync {
    /// Distance traveled going from `a` to `b`.
    fn distance(&self, a: Location, b: Location) -> f64;
}

/// The default metric: absolute difference of scalar location identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsoluteDistance;

impl DistanceMetric for AbsoluteDistance {
    fn distance(&self, a: Location, b: Location) -> f64 {
        (a - b).abs() as f64
    }
}

/// Fuel consumed driving the given distance at the given per-unit rate.
pub fn fuel_cost(distance: f64, fuel_per_unit: f64) -> f64 {
    distance * fuel_per_unit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_distance() {
        let m = AbsoluteDistance;
        assert_eq!(m.distance(0, 5), 5.0);
        assert_eq!(m.distance(5, 0), 5.0);
        assert_eq!(m.distance(-3, 4), 7.0);
        assert_eq!(m.distance(2, 2), 0.0);
    }

    #[test]
    fn test_absolute_distance_commutative() {
        let m = AbsoluteDistance;
        for (a, b) in [(0, 7), (-5, 3), (10, -10)] {
            assert_eq!(m.distance(a, b), m.distance(b, a));
        }
    }

    #[test]
    fn test_fuel_cost() {
        assert!((fuel_cost(12.0, 8.0) - 96.0).abs() < 1e-10);
        assert_eq!(fuel_cost(0.0, 10.0), 0.0);
    }

    #[test]
    fn test_custom_metric_substitutable() {
        struct Scaled(f64);
        impl DistanceMetric for Scaled {
            fn distance(&self, a: Location, b: Location) -> f64 {
                self.0 * (a - b).abs() as f64
            }
        }
        let m = Scaled(0.5);
        assert_eq!(m.distance(0, 8), 4.0);
    }
}
