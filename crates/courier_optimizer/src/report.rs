use std::fmt;

use courier_routing::{
    graph::CityGraph, kilometers::Kilometers, route::Route, shortest_path::ShortestPathEngine,
};
use jiff::SignedDuration;
use serde::Serialize;

use crate::{
    error::PlanningError,
    planner::{DeliveryPlan, VehicleRoute},
    problem::order::Order,
};

const GOOGLE_MAPS_DIR_URL: &str = "https://www.google.com/maps/dir/";

/// Directions link that walks through every city of the route in order.
pub fn google_maps_link(graph: &CityGraph, route: &Route) -> String {
    let mut link = String::from(GOOGLE_MAPS_DIR_URL);
    for city in route.iter(graph) {
        link.push_str(&format!("{},{}/", city.lat(), city.lng()));
    }
    link
}

/// Shortest path from the depot straight to one order's destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLeg {
    pub destination: String,
    pub weight: f64,
    pub path: Vec<String>,
    pub distance: Kilometers,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleReport {
    /// 1-based, as shown to users
    pub vehicle: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    pub capacity: f64,
    pub load: f64,
    pub orders: Vec<Order>,
    pub route: Vec<String>,
    pub distance: Kilometers,
    pub estimated_duration: SignedDuration,
    pub direct_legs: Vec<OrderLeg>,
    pub map_link: String,
}

impl VehicleReport {
    fn new(
        graph: &CityGraph,
        engine: ShortestPathEngine<'_>,
        plan: &DeliveryPlan,
        vehicle_route: &VehicleRoute,
    ) -> Result<Self, PlanningError> {
        let direct_legs = vehicle_route
            .orders()
            .iter()
            .map(|order| {
                let destination = graph.city_idx(order.destination())?;
                let leg = engine.shortest_path_between(plan.depot(), destination)?;
                Ok(OrderLeg {
                    destination: order.destination().to_owned(),
                    weight: order.weight(),
                    path: leg.names(graph),
                    distance: leg.distance(),
                })
            })
            .collect::<Result<Vec<_>, PlanningError>>()?;

        Ok(VehicleReport {
            vehicle: vehicle_route.vehicle_id().get() + 1,
            vehicle_type: vehicle_route.vehicle_type().map(String::from),
            capacity: vehicle_route.capacity(),
            load: vehicle_route.load(),
            orders: vehicle_route.orders().to_vec(),
            route: vehicle_route.route().names(graph),
            distance: vehicle_route.distance(),
            estimated_duration: vehicle_route.estimated_duration(),
            direct_legs,
            map_link: google_maps_link(graph, vehicle_route.route()),
        })
    }

    pub fn estimated_hours(&self) -> f64 {
        self.estimated_duration.as_secs_f64() / 3600.0
    }
}

/// Everything a user needs to read a [`DeliveryPlan`] without the graph at hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryReport {
    pub depot: String,
    pub speed_kmh: f64,
    pub total_distance: Kilometers,
    pub vehicles: Vec<VehicleReport>,
}

impl DeliveryReport {
    pub fn new(graph: &CityGraph, plan: &DeliveryPlan) -> Result<Self, PlanningError> {
        let engine = ShortestPathEngine::new(graph);
        let vehicles = plan
            .routes()
            .iter()
            .map(|vehicle_route| VehicleReport::new(graph, engine, plan, vehicle_route))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DeliveryReport {
            depot: graph.city(plan.depot()).name().to_owned(),
            speed_kmh: plan.speed().value(),
            total_distance: plan.total_distance(),
            vehicles,
        })
    }
}

impl fmt::Display for VehicleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.vehicle_type {
            Some(vehicle_type) => write!(f, "Vehicle {} ({vehicle_type})", self.vehicle)?,
            None => write!(f, "Vehicle {}", self.vehicle)?,
        }

        if self.orders.is_empty() {
            writeln!(f, " has no orders")?;
        } else {
            let orders = self
                .orders
                .iter()
                .map(|order| format!("{} ({})", order.destination(), order.weight()))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, " handles the following orders: {orders}")?;
        }

        writeln!(f, "  Load: {} / {}", self.load, self.capacity)?;
        for leg in &self.direct_legs {
            writeln!(
                f,
                "  Order to {}: {} ({})",
                leg.destination,
                leg.path.join(" -> "),
                leg.distance
            )?;
        }
        writeln!(f, "  Route: {}", self.route.join(" -> "))?;
        writeln!(f, "  Total distance: {}", self.distance)?;
        writeln!(f, "  Estimated total time: {:.2} hours", self.estimated_hours())?;
        writeln!(f, "  Map: {}", self.map_link)
    }
}

impl fmt::Display for DeliveryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Depot: {} (speed {} km/h)", self.depot, self.speed_kmh)?;
        for vehicle in &self.vehicles {
            writeln!(f)?;
            write!(f, "{vehicle}")?;
        }
        writeln!(f)?;
        writeln!(f, "Total distance: {}", self.total_distance)
    }
}
