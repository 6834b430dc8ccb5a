use courier_routing::RoutingError;
use thiserror::Error;

use crate::problem::order::OrderIdx;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanningError {
    #[error("Vehicle count {vehicles} does not match the {capacities} capacities supplied")]
    ConfigMismatch { vehicles: usize, capacities: usize },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Total order weight {total_weight} exceeds the total fleet capacity {total_capacity}")]
    InfeasibleCapacity {
        total_weight: f64,
        total_capacity: f64,
    },
    #[error("Order {order} to {destination} (weight {weight}) does not fit in any vehicle")]
    OrderTooHeavy {
        order: OrderIdx,
        destination: String,
        weight: f64,
    },
    #[error(transparent)]
    Routing(#[from] RoutingError),
}
