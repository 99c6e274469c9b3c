//! Distance metrics and fuel cost.
//!
//! The metric is an injectable policy; the default is the absolute
//! difference of scalar location identifiers.

mod metric;

pub use metric::{fuel_cost, AbsoluteDistance, DistanceMetric};
