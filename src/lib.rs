//! # van-routing
//!
//! Exact route optimization for small van fleets: pickup-and-delivery
//! packages, per-van capacity limits, and per-van fuel costs. Supports
//! selecting the single best (van, route) pairing for a package set, and
//! partitioning packages across a fleet while minimizing total fuel.
//!
//! The search is exact (exhaustive with pruning), so it is meant for small
//! batches, not large-scale instances.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Van, Package, Stop, Route, solutions)
//! - [`distance`] — Pluggable distance metric and fuel cost
//! - [`evaluation`] — Post-hoc route verification and cost recomputation
//! - [`search`] — Route enumeration, single-van selection, fleet assignment
//! - [`api`] — Tuple-encoded entry points with input validation
//! - [`error`] — Input validation errors

pub mod api;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod search;
