use courier_routing::{graph::CityGraph, graph_builder::GraphBuilder};

// Also compiled into the integration tests, where `crate::problem` is re-imported at the root
use crate::problem::order::Order;

/// Depot D at the origin and three cities one degree away: A east, B north, C north-east.
pub fn create_square_graph() -> CityGraph {
    let mut builder = GraphBuilder::default();
    builder
        .add_city("D", 0.0, 0.0)
        .add_city("A", 0.0, 1.0)
        .add_city("B", 1.0, 0.0)
        .add_city("C", 1.0, 1.0);

    builder.build().unwrap()
}

pub fn orders(orders: &[(&str, f64)]) -> Vec<Order> {
    orders
        .iter()
        .map(|&(destination, weight)| Order::new(destination, weight))
        .collect()
}
