use courier_routing::define_index_newtype;
use serde::Serialize;

define_index_newtype!(VehicleIdx => Vehicle);

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Vehicle {
    capacity: f64,
    vehicle_type: Option<String>,
}

impl Vehicle {
    pub fn new(capacity: f64) -> Self {
        Vehicle {
            capacity,
            vehicle_type: None,
        }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Free-form label such as "truck" or "van".
    pub fn vehicle_type(&self) -> Option<&str> {
        self.vehicle_type.as_deref()
    }

    pub fn set_vehicle_type(&mut self, vehicle_type: impl Into<String>) {
        self.vehicle_type = Some(vehicle_type.into());
    }
}
