use courier_routing::define_index_newtype;
use serde::{Deserialize, Serialize};

define_index_newtype!(
    /// Position of an order in the request, as reported back in errors
    OrderIdx => Order
);

/// A single delivery: a destination city and the load carried there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    destination: String,
    weight: f64,
}

impl Order {
    pub fn new(destination: impl Into<String>, weight: f64) -> Self {
        Order {
            destination: destination.into(),
            weight,
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}
