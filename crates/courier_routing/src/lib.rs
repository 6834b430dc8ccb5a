pub mod city;
pub mod error;
pub mod geopoint;
pub mod graph;
pub mod graph_builder;
pub mod kilometers;
pub mod kmh;
pub mod route;
pub mod shortest_path;
mod newtype_index;

pub use error::RoutingError;

#[cfg(test)]
pub(crate) mod test_utils;
