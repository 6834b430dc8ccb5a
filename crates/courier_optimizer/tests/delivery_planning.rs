use courier_optimizer::{
    PlanningError,
    balancer::{OrderBalancer, TieBreak, balance},
    planner::{DeliveryRequest, PlanningParams, plan_deliveries},
    problem::{self, order::Order},
    report::DeliveryReport,
};
use courier_routing::{
    RoutingError, graph::CityGraph, graph_builder::GraphBuilder, kilometers::Kilometers,
    shortest_path::ShortestPathEngine,
};

#[path = "../src/test_utils.rs"]
mod test_utils;

use test_utils::{create_square_graph, orders};

fn indian_cities() -> CityGraph {
    let mut builder = GraphBuilder::default();
    builder
        .add_city("Delhi", 28.6139, 77.2090)
        .add_city("Mumbai", 19.0760, 72.8777)
        .add_city("Bangalore", 12.9716, 77.5946)
        .add_city("Chennai", 13.0827, 80.2707)
        .add_city("Kolkata", 22.5726, 88.3639)
        .add_city("Hyderabad", 17.3850, 78.4867)
        .add_city("Pune", 18.5204, 73.8567)
        .add_city("Jaipur", 26.9124, 75.7873)
        .add_city("Lucknow", 26.8467, 80.9462)
        .add_city("Ahmedabad", 23.0225, 72.5714);
    builder.build().unwrap()
}

fn indian_orders() -> Vec<Order> {
    [
        ("Mumbai", 3.0),
        ("Bangalore", 5.0),
        ("Chennai", 2.5),
        ("Kolkata", 4.0),
        ("Hyderabad", 1.5),
        ("Pune", 2.0),
        ("Jaipur", 3.5),
        ("Lucknow", 1.0),
        ("Ahmedabad", 2.5),
        ("Mumbai", 1.0),
    ]
    .into_iter()
    .map(|(destination, weight)| Order::new(destination, weight))
    .collect()
}

fn request(orders: Vec<Order>, capacities: Vec<f64>) -> DeliveryRequest {
    DeliveryRequest {
        depot: String::from("Delhi"),
        orders,
        vehicle_count: capacities.len(),
        capacities,
        vehicle_types: vec![],
    }
}

#[test]
fn square_scenario_end_to_end() {
    let graph = create_square_graph();
    let engine = ShortestPathEngine::new(&graph);
    let orders = orders(&[("A", 4.0), ("B", 4.0), ("C", 4.0)]);

    let partition = balance(&orders, 2, &[8.0, 8.0], &graph, "D").unwrap();
    assert_eq!(
        partition,
        vec![
            vec![Order::new("A", 4.0), Order::new("C", 4.0)],
            vec![Order::new("B", 4.0)]
        ]
    );

    let plan = plan_deliveries(
        &graph,
        &DeliveryRequest {
            depot: String::from("D"),
            orders,
            vehicle_count: 2,
            capacities: vec![8.0, 8.0],
            vehicle_types: vec![],
        },
        &PlanningParams::default(),
    )
    .unwrap();

    let first = &plan.routes()[0];
    assert_eq!(first.route().names(&graph), vec!["D", "A", "C"]);
    assert_eq!(
        first.distance(),
        engine.total_distance(&["D", "A", "C"]).unwrap()
    );
    assert_eq!(plan.routes()[1].route().names(&graph), vec!["D", "B"]);
}

#[test]
fn capacity_is_never_exceeded() {
    let graph = indian_cities();

    for tie_break in [TieBreak::LowestIndex, TieBreak::Proximity] {
        let assignment = OrderBalancer::new(&graph)
            .with_tie_break(tie_break)
            .balance(&indian_orders(), 3, &[12.0, 10.0, 11.0], "Delhi")
            .unwrap();

        for (vehicle_id, vehicle) in assignment.vehicles_iter() {
            let carried: f64 = assignment.vehicle_orders(vehicle_id).map(Order::weight).sum();
            assert!(carried <= vehicle.capacity());
        }
    }
}

#[test]
fn every_order_is_delivered_exactly_once() {
    let graph = indian_cities();
    let orders = indian_orders();

    let plan = plan_deliveries(
        &graph,
        &request(orders.clone(), vec![12.0, 10.0, 11.0]),
        &PlanningParams::default(),
    )
    .unwrap();

    let mut delivered: Vec<Order> = plan
        .routes()
        .iter()
        .flat_map(|route| route.orders().iter().cloned())
        .collect();
    let mut expected = orders;
    let by_name_then_weight =
        |a: &Order, b: &Order| a.destination().cmp(b.destination()).then(a.weight().total_cmp(&b.weight()));
    delivered.sort_by(by_name_then_weight);
    expected.sort_by(by_name_then_weight);

    assert_eq!(delivered, expected);

    for route in plan.routes() {
        let names = route.route().names(&graph);
        assert_eq!(names.first().map(String::as_str), Some("Delhi"));
        for order in route.orders() {
            assert!(names.iter().any(|name| name == order.destination()));
        }
    }
}

#[test]
fn route_distances_are_additive() {
    let graph = indian_cities();
    let engine = ShortestPathEngine::new(&graph);

    let plan = plan_deliveries(
        &graph,
        &request(indian_orders(), vec![12.0, 10.0, 11.0]),
        &PlanningParams::default(),
    )
    .unwrap();

    let mut total = Kilometers::ZERO;
    for route in plan.routes() {
        let names = route.route().names(&graph);
        assert_eq!(engine.total_distance(&names[..]).unwrap(), route.distance());
        total += route.distance();
    }
    assert_eq!(plan.total_distance(), total);
}

#[test]
fn infeasible_capacity_is_rejected() {
    let graph = create_square_graph();
    let orders = orders(&[("A", 10.0), ("B", 10.0), ("C", 10.0)]);

    assert_eq!(
        balance(&orders, 2, &[10.0, 10.0], &graph, "D").unwrap_err(),
        PlanningError::InfeasibleCapacity {
            total_weight: 30.0,
            total_capacity: 20.0
        }
    );
}

#[test]
fn unknown_destination_aborts_planning() {
    let graph = indian_cities();
    let mut orders = indian_orders();
    orders.push(Order::new("Atlantis", 1.0));

    assert_eq!(
        plan_deliveries(
            &graph,
            &request(orders, vec![20.0, 20.0]),
            &PlanningParams::default()
        )
        .unwrap_err(),
        PlanningError::Routing(RoutingError::UnknownCity(String::from("Atlantis")))
    );
}

#[test]
fn report_covers_every_vehicle() {
    let graph = indian_cities();
    let plan = plan_deliveries(
        &graph,
        &request(indian_orders(), vec![12.0, 10.0, 11.0]),
        &PlanningParams::default(),
    )
    .unwrap();

    let report = DeliveryReport::new(&graph, &plan).unwrap();

    assert_eq!(report.vehicles.len(), 3);
    for (vehicle, route) in report.vehicles.iter().zip(plan.routes()) {
        assert_eq!(vehicle.direct_legs.len(), route.orders().len());
        assert!(vehicle.map_link.starts_with("https://www.google.com/maps/dir/28.6139,77.209/"));
    }
}
