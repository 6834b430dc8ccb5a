use crate::{
    error::PlanningError,
    problem::vehicle::{Vehicle, VehicleIdx},
};

/// Fixed set of vehicles available for one planning request.
#[derive(Debug, Clone)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    /// Fails with [`PlanningError::ConfigMismatch`] unless there is exactly one capacity per
    /// vehicle, and with [`PlanningError::InvalidInput`] for an empty fleet or a capacity that is
    /// not a positive number.
    pub fn new(vehicle_count: usize, capacities: &[f64]) -> Result<Fleet, PlanningError> {
        if vehicle_count != capacities.len() {
            return Err(PlanningError::ConfigMismatch {
                vehicles: vehicle_count,
                capacities: capacities.len(),
            });
        }

        if vehicle_count == 0 {
            return Err(PlanningError::InvalidInput(String::from(
                "at least one vehicle is required",
            )));
        }

        if let Some((index, capacity)) = capacities
            .iter()
            .enumerate()
            .find(|(_, capacity)| !capacity.is_finite() || **capacity <= 0.0)
        {
            return Err(PlanningError::InvalidInput(format!(
                "vehicle {index} has invalid capacity {capacity}"
            )));
        }

        Ok(Fleet {
            vehicles: capacities.iter().copied().map(Vehicle::new).collect(),
        })
    }

    /// Labels vehicles in order. An empty list leaves every vehicle unlabeled.
    pub fn with_vehicle_types<S: AsRef<str>>(
        mut self,
        vehicle_types: &[S],
    ) -> Result<Fleet, PlanningError> {
        if vehicle_types.is_empty() {
            return Ok(self);
        }

        if vehicle_types.len() != self.vehicles.len() {
            return Err(PlanningError::InvalidInput(format!(
                "{} vehicle types supplied for {} vehicles",
                vehicle_types.len(),
                self.vehicles.len()
            )));
        }

        for (vehicle, vehicle_type) in self.vehicles.iter_mut().zip(vehicle_types) {
            vehicle.set_vehicle_type(vehicle_type.as_ref().trim());
        }

        Ok(self)
    }

    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[inline]
    pub fn vehicle(&self, vehicle_id: VehicleIdx) -> &Vehicle {
        &self.vehicles[vehicle_id]
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn total_capacity(&self) -> f64 {
        self.vehicles.iter().map(Vehicle::capacity).sum()
    }
}
