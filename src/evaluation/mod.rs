//! Post-hoc route verification and cost recomputation.

mod checker;

pub use checker::RouteChecker;
