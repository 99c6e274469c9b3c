//! Exact search over routes, van choices, and fleet assignments.
//!
//! - [`best_route`] — depth-first route enumeration for one (van, package
//!   set) pair with capacity/precedence pruning
//! - [`optimize_single_van`] — best single (van, route) pairing
//! - [`Partitions`] — lazy set-partition generator feeding the fleet search
//! - [`optimize_fleet`] — partition packages across vans, minimize total fuel

mod enumerate;
mod fleet;
mod partition;
mod single_van;

pub use enumerate::best_route;
pub use fleet::optimize_fleet;
pub use partition::Partitions;
pub use single_van::optimize_single_van;
