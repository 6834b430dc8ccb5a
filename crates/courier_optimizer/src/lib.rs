pub mod balancer;
pub mod error;
pub mod planner;
pub mod problem;
pub mod report;

pub use error::PlanningError;

#[cfg(test)]
pub(crate) mod test_utils;
