use courier_routing::{
    RoutingError,
    city::CityIdx,
    graph::CityGraph,
    kilometers::Kilometers,
    shortest_path::ShortestPathEngine,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::PlanningError,
    problem::{
        fleet::Fleet,
        order::{Order, OrderIdx},
        vehicle::VehicleIdx,
    },
};

/// Two load ratios closer than this are considered equal.
const RATIO_EPSILON: f64 = 1e-9;

/// Slack on capacity checks so that decimal weights such as 0.1 + 0.2 fill a capacity of 0.3.
const CAPACITY_EPSILON: f64 = 1e-9;

/// How to choose between vehicles that would end up equally loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// The vehicle with the lowest index.
    #[default]
    LowestIndex,
    /// The vehicle whose last assigned stop (the depot when it has none) is closest to the
    /// order's destination, then the lowest index.
    Proximity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleLoad {
    capacity: f64,
    load: f64,
    orders: Vec<OrderIdx>,
}

impl VehicleLoad {
    fn new(capacity: f64) -> Self {
        VehicleLoad {
            capacity,
            load: 0.0,
            orders: vec![],
        }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn load(&self) -> f64 {
        self.load
    }

    pub fn remaining_capacity(&self) -> f64 {
        self.capacity - self.load
    }

    pub fn orders(&self) -> &[OrderIdx] {
        &self.orders
    }

    #[inline]
    fn can_fit(&self, weight: f64) -> bool {
        self.load + weight <= self.capacity + CAPACITY_EPSILON
    }

    #[inline]
    fn ratio_with(&self, weight: f64) -> f64 {
        (self.load + weight) / self.capacity
    }

    fn assign(&mut self, order: OrderIdx, weight: f64) {
        self.load += weight;
        self.orders.push(order);
    }
}

/// Complete and disjoint partition of the requested orders over the fleet.
#[derive(Debug, Clone)]
pub struct Assignment {
    orders: Vec<Order>,
    vehicles: Vec<VehicleLoad>,
}

impl Assignment {
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, order_id: OrderIdx) -> &Order {
        &self.orders[order_id]
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn vehicle(&self, vehicle_id: VehicleIdx) -> &VehicleLoad {
        &self.vehicles[vehicle_id.get()]
    }

    pub fn vehicles_iter(&self) -> impl Iterator<Item = (VehicleIdx, &VehicleLoad)> {
        self.vehicles
            .iter()
            .enumerate()
            .map(|(index, load)| (VehicleIdx::new(index), load))
    }

    pub fn vehicle_orders(&self, vehicle_id: VehicleIdx) -> impl Iterator<Item = &Order> {
        self.vehicle(vehicle_id)
            .orders
            .iter()
            .map(|&order_id| &self.orders[order_id])
    }

    /// Orders per vehicle, in vehicle order.
    pub fn into_partition(self) -> Vec<Vec<Order>> {
        self.vehicles
            .iter()
            .map(|vehicle| {
                vehicle
                    .orders
                    .iter()
                    .map(|&order_id| self.orders[order_id].clone())
                    .collect()
            })
            .collect()
    }
}

/// Greedy least-loaded-first assignment of orders to capacity-limited vehicles.
///
/// Orders are placed in input order. Each goes to the vehicle that can still carry it and whose
/// load relative to its capacity is the smallest once the order is added.
pub struct OrderBalancer<'a> {
    graph: &'a CityGraph,
    tie_break: TieBreak,
}

impl<'a> OrderBalancer<'a> {
    pub fn new(graph: &'a CityGraph) -> Self {
        OrderBalancer {
            graph,
            tie_break: TieBreak::default(),
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn balance(
        &self,
        orders: &[Order],
        vehicle_count: usize,
        capacities: &[f64],
        depot: &str,
    ) -> Result<Assignment, PlanningError> {
        let fleet = Fleet::new(vehicle_count, capacities)?;
        self.balance_fleet(orders, &fleet, depot)
    }

    pub fn balance_fleet(
        &self,
        orders: &[Order],
        fleet: &Fleet,
        depot: &str,
    ) -> Result<Assignment, PlanningError> {
        if fleet.is_empty() {
            return Err(PlanningError::InvalidInput(String::from(
                "at least one vehicle is required",
            )));
        }

        let depot = self.graph.city_idx(depot)?;
        let destinations = orders
            .iter()
            .map(|order| self.graph.city_idx(order.destination()))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some((order_id, order)) = OrderIdx::enumerate(orders)
            .find(|(_, order)| !order.weight().is_finite() || order.weight() <= 0.0)
        {
            return Err(PlanningError::InvalidInput(format!(
                "order {order_id} to {} has invalid weight {}",
                order.destination(),
                order.weight()
            )));
        }

        let total_weight: f64 = orders.iter().map(Order::weight).sum();
        let total_capacity = fleet.total_capacity();
        if total_weight > total_capacity + CAPACITY_EPSILON {
            return Err(PlanningError::InfeasibleCapacity {
                total_weight,
                total_capacity,
            });
        }

        let engine = ShortestPathEngine::new(self.graph);
        let mut vehicles: Vec<VehicleLoad> = fleet
            .vehicles()
            .iter()
            .map(|vehicle| VehicleLoad::new(vehicle.capacity()))
            .collect();
        let mut last_stops: Vec<CityIdx> = vec![depot; vehicles.len()];

        for (order_id, order) in OrderIdx::enumerate(orders) {
            let destination = destinations[order_id.get()];
            let weight = order.weight();

            let mut best: Option<(usize, f64)> = None;
            for (vehicle_index, vehicle) in vehicles.iter().enumerate() {
                if !vehicle.can_fit(weight) {
                    continue;
                }

                let ratio = vehicle.ratio_with(weight);
                let is_better = match best {
                    None => true,
                    Some((_, best_ratio)) if ratio < best_ratio - RATIO_EPSILON => true,
                    Some((best_index, best_ratio)) if (ratio - best_ratio).abs() <= RATIO_EPSILON => {
                        match self.tie_break {
                            TieBreak::LowestIndex => false,
                            TieBreak::Proximity => {
                                let candidate =
                                    proximity(&engine, last_stops[vehicle_index], destination)?;
                                let current =
                                    proximity(&engine, last_stops[best_index], destination)?;
                                candidate < current
                            }
                        }
                    }
                    Some(_) => false,
                };

                if is_better {
                    best = Some((vehicle_index, ratio));
                }
            }

            let Some((vehicle_index, _)) = best else {
                return Err(PlanningError::OrderTooHeavy {
                    order: order_id,
                    destination: order.destination().to_owned(),
                    weight,
                });
            };

            debug!(
                order = order_id.get(),
                vehicle = vehicle_index,
                destination = order.destination(),
                weight,
                "Assigned order"
            );

            vehicles[vehicle_index].assign(order_id, weight);
            last_stops[vehicle_index] = destination;
        }

        Ok(Assignment {
            orders: orders.to_vec(),
            vehicles,
        })
    }
}

/// Shortest-path distance between two cities, infinite when they are not connected.
fn proximity(
    engine: &ShortestPathEngine<'_>,
    from: CityIdx,
    to: CityIdx,
) -> Result<Kilometers, PlanningError> {
    match engine.shortest_path_between(from, to) {
        Ok(route) => Ok(route.distance()),
        Err(RoutingError::Unreachable { .. }) => Ok(Kilometers::INFINITY),
        Err(error) => Err(error.into()),
    }
}

/// Balances `orders` over `vehicle_count` vehicles with the default tie-break.
pub fn balance(
    orders: &[Order],
    vehicle_count: usize,
    capacities: &[f64],
    graph: &CityGraph,
    depot: &str,
) -> Result<Vec<Vec<Order>>, PlanningError> {
    OrderBalancer::new(graph)
        .balance(orders, vehicle_count, capacities, depot)
        .map(Assignment::into_partition)
}
