//! Domain model types for van routing problems.
//!
//! Provides the core abstractions: packages with pickup/delivery locations
//! and weights, vans with capacity and fuel rates, routes as ordered stop
//! sequences, and the solution types returned by the optimizers.

mod package;
mod solution;
mod stop;
mod van;

pub use package::{Location, Package, DEPOT};
pub use solution::{FleetSolution, VanSolution, Violation};
pub use stop::{Route, Stop, StopKind};
pub use van::Van;
