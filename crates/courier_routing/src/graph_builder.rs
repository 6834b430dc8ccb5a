use tracing::info;

use crate::{
    city::{City, CityIdx},
    error::RoutingError,
    graph::CityGraph,
};

/// Builds a complete [`CityGraph`] where every pair of cities is connected by its great-circle
/// distance. There is no road data, so the graph approximates travel as straight lines.
#[derive(Default)]
pub struct GraphBuilder {
    cities: Vec<City>,
}

impl GraphBuilder {
    pub fn new(cities: Vec<City>) -> Self {
        GraphBuilder { cities }
    }

    pub fn add_city(&mut self, name: impl Into<String>, lat: f64, lng: f64) -> &mut GraphBuilder {
        self.cities.push(City::new(name, lat, lng));
        self
    }

    pub fn build(self) -> Result<CityGraph, RoutingError> {
        if self.cities.len() < 2 {
            return Err(RoutingError::InvalidInput(format!(
                "at least 2 cities are required, got {}",
                self.cities.len()
            )));
        }

        if let Some(city) = self.cities.iter().find(|city| !city.point().is_valid()) {
            return Err(RoutingError::InvalidInput(format!(
                "city {} has out of range coordinates ({}, {})",
                city.name(),
                city.lat(),
                city.lng()
            )));
        }

        let mut graph = CityGraph::with_cities(self.cities)?;
        let count = graph.city_count();

        for from in 0..count {
            for to in (from + 1)..count {
                let (from, to) = (CityIdx::new(from), CityIdx::new(to));
                let distance = graph
                    .city(from)
                    .point()
                    .haversine_distance(graph.city(to).point());
                graph.add_edge(from, to, distance);
            }
        }

        info!(
            cities = graph.city_count(),
            edges = graph.edge_count(),
            "Built city graph"
        );

        Ok(graph)
    }
}

impl FromIterator<City> for GraphBuilder {
    fn from_iter<T: IntoIterator<Item = City>>(iter: T) -> Self {
        GraphBuilder::new(iter.into_iter().collect())
    }
}
