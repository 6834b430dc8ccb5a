use courier_routing::{
    city::CityIdx, graph::CityGraph, kilometers::Kilometers, kmh::Kmh, route::Route,
    shortest_path::ShortestPathEngine,
};
use jiff::SignedDuration;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    balancer::{OrderBalancer, TieBreak},
    error::PlanningError,
    problem::{fleet::Fleet, order::Order, vehicle::VehicleIdx},
};

pub const DEFAULT_VEHICLE_SPEED_KMH: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanningParams {
    /// Constant speed used to turn route distances into travel times
    pub speed: Kmh,
    pub tie_break: TieBreak,
}

impl Default for PlanningParams {
    fn default() -> Self {
        Self {
            speed: Kmh::new(DEFAULT_VEHICLE_SPEED_KMH),
            tie_break: TieBreak::default(),
        }
    }
}

/// Everything needed to plan one round of deliveries from a depot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    pub depot: String,
    pub orders: Vec<Order>,
    pub vehicle_count: usize,
    pub capacities: Vec<f64>,
    /// One label per vehicle, or empty
    #[serde(default)]
    pub vehicle_types: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleRoute {
    vehicle_id: VehicleIdx,
    vehicle_type: Option<String>,
    capacity: f64,
    load: f64,
    orders: Vec<Order>,
    route: Route,
    estimated_duration: SignedDuration,
}

impl VehicleRoute {
    pub fn vehicle_id(&self) -> VehicleIdx {
        self.vehicle_id
    }

    pub fn vehicle_type(&self) -> Option<&str> {
        self.vehicle_type.as_deref()
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn load(&self) -> f64 {
        self.load
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Starts at the depot and visits every assigned destination.
    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn distance(&self) -> Kilometers {
        self.route.distance()
    }

    pub fn estimated_duration(&self) -> SignedDuration {
        self.estimated_duration
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeliveryPlan {
    depot: CityIdx,
    speed: Kmh,
    routes: Vec<VehicleRoute>,
}

impl DeliveryPlan {
    pub fn depot(&self) -> CityIdx {
        self.depot
    }

    pub fn speed(&self) -> Kmh {
        self.speed
    }

    /// One entry per vehicle, in vehicle order. Vehicles without orders stay at the depot.
    pub fn routes(&self) -> &[VehicleRoute] {
        &self.routes
    }

    pub fn total_distance(&self) -> Kilometers {
        self.routes.iter().map(VehicleRoute::distance).sum()
    }
}

/// Balances the requested orders over the fleet and routes every vehicle from the depot through
/// its destinations.
///
/// The graph is only read. Any failure aborts the whole request.
pub fn plan_deliveries(
    graph: &CityGraph,
    request: &DeliveryRequest,
    params: &PlanningParams,
) -> Result<DeliveryPlan, PlanningError> {
    if !params.speed.is_valid() {
        return Err(PlanningError::InvalidInput(format!(
            "vehicle speed must be positive, got {} km/h",
            params.speed.value()
        )));
    }

    let fleet = Fleet::new(request.vehicle_count, &request.capacities)?
        .with_vehicle_types(&request.vehicle_types)?;
    let depot = graph.city_idx(&request.depot)?;

    let assignment = OrderBalancer::new(graph)
        .with_tie_break(params.tie_break)
        .balance_fleet(&request.orders, &fleet, &request.depot)?;

    let engine = ShortestPathEngine::new(graph);
    let vehicles: Vec<_> = assignment.vehicles_iter().collect();

    let routes = vehicles
        .into_par_iter()
        .map(|(vehicle_id, load)| -> Result<VehicleRoute, PlanningError> {
            let orders: Vec<Order> = assignment.vehicle_orders(vehicle_id).cloned().collect();
            let stops = orders
                .iter()
                .map(|order| graph.city_idx(order.destination()))
                .collect::<Result<Vec<_>, _>>()?;

            let route = engine.route_through_cities(depot, &stops)?;
            let estimated_duration = route
                .distance()
                .travel_time(params.speed)
                .ok_or_else(|| {
                    PlanningError::InvalidInput(format!(
                        "travel time for vehicle {vehicle_id} over {} at {} km/h is out of range",
                        route.distance(),
                        params.speed.value()
                    ))
                })?;

            debug!(
                vehicle = vehicle_id.get(),
                orders = orders.len(),
                load = load.load(),
                distance = route.distance().value(),
                "Routed vehicle"
            );

            Ok(VehicleRoute {
                vehicle_id,
                vehicle_type: fleet.vehicle(vehicle_id).vehicle_type().map(String::from),
                capacity: load.capacity(),
                load: load.load(),
                orders,
                route,
                estimated_duration,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let plan = DeliveryPlan {
        depot,
        speed: params.speed,
        routes,
    };

    info!(
        vehicles = plan.routes.len(),
        orders = request.orders.len(),
        total_distance = plan.total_distance().value(),
        "Planned deliveries"
    );

    Ok(plan)
}
