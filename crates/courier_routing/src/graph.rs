use fxhash::FxHashMap;

use crate::{
    city::{City, CityIdx},
    error::RoutingError,
    kilometers::Kilometers,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphEdge {
    adj_city: CityIdx,
    distance: Kilometers,
}

impl GraphEdge {
    pub fn adj_city(&self) -> CityIdx {
        self.adj_city
    }

    pub fn distance(&self) -> Kilometers {
        self.distance
    }
}

/// Undirected weighted graph over named cities.
///
/// A graph is immutable once built. Every edge is stored in the adjacency list of both of its
/// endpoints, in insertion order, and its weight is reachable from either direction through
/// [`CityGraph::weight`].
#[derive(Debug, Clone)]
pub struct CityGraph {
    cities: Vec<City>,
    city_ids: FxHashMap<String, CityIdx>,
    adjacency_list: Vec<Vec<GraphEdge>>,
    weights: FxHashMap<(CityIdx, CityIdx), Kilometers>,
}

#[inline]
fn edge_key(a: CityIdx, b: CityIdx) -> (CityIdx, CityIdx) {
    if a <= b { (a, b) } else { (b, a) }
}

impl CityGraph {
    /// Creates a graph with the given vertices and no edges.
    pub(crate) fn with_cities(cities: Vec<City>) -> Result<CityGraph, RoutingError> {
        let mut city_ids = FxHashMap::default();
        city_ids.reserve(cities.len());

        for (index, city) in cities.iter().enumerate() {
            if city.name().trim().is_empty() {
                return Err(RoutingError::InvalidInput(format!(
                    "city at position {index} has an empty name"
                )));
            }

            if city_ids
                .insert(city.name().to_owned(), CityIdx::new(index))
                .is_some()
            {
                return Err(RoutingError::InvalidInput(format!(
                    "duplicate city name {}",
                    city.name()
                )));
            }
        }

        Ok(CityGraph {
            adjacency_list: vec![vec![]; cities.len()],
            cities,
            city_ids,
            weights: FxHashMap::default(),
        })
    }

    /// Builds a graph from an explicit list of undirected edges.
    ///
    /// Unlike [`crate::graph_builder::GraphBuilder`], no edge is implied: two cities are only
    /// connected when `edges` says so.
    pub fn from_edges<S: AsRef<str>>(
        cities: Vec<City>,
        edges: &[(S, S, Kilometers)],
    ) -> Result<CityGraph, RoutingError> {
        let mut graph = CityGraph::with_cities(cities)?;

        for (from, to, distance) in edges {
            let from = graph.city_idx(from.as_ref())?;
            let to = graph.city_idx(to.as_ref())?;

            if !distance.is_finite() || distance.value() < 0.0 {
                return Err(RoutingError::InvalidInput(format!(
                    "edge {} - {} has invalid weight {}",
                    graph.city(from).name(),
                    graph.city(to).name(),
                    distance.value()
                )));
            }

            match graph.weight(from, to) {
                Some(existing) if existing != *distance => {
                    return Err(RoutingError::InvalidInput(format!(
                        "edge {} - {} declared with conflicting weights {} and {}",
                        graph.city(from).name(),
                        graph.city(to).name(),
                        existing,
                        distance
                    )));
                }
                Some(_) => {}
                None => graph.add_edge(from, to, *distance),
            }
        }

        Ok(graph)
    }

    pub(crate) fn add_edge(&mut self, from: CityIdx, to: CityIdx, distance: Kilometers) {
        self.weights.insert(edge_key(from, to), distance);
        self.adjacency_list[from.get()].push(GraphEdge {
            adj_city: to,
            distance,
        });
        if from != to {
            self.adjacency_list[to.get()].push(GraphEdge {
                adj_city: from,
                distance,
            });
        }
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city(&self, city: CityIdx) -> &City {
        &self.cities[city]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.city_ids.contains_key(name)
    }

    /// Resolves a city name, failing with [`RoutingError::UnknownCity`] when it is not a vertex.
    pub fn city_idx(&self, name: &str) -> Result<CityIdx, RoutingError> {
        self.city_ids
            .get(name)
            .copied()
            .ok_or_else(|| RoutingError::UnknownCity(name.to_owned()))
    }

    pub(crate) fn check_idx(&self, city: CityIdx) -> Result<CityIdx, RoutingError> {
        if city.is_within(self.cities.len()) {
            Ok(city)
        } else {
            Err(RoutingError::UnknownCity(format!("#{city}")))
        }
    }

    pub fn city_edges(&self, city: CityIdx) -> &[GraphEdge] {
        &self.adjacency_list[city.get()]
    }

    pub fn weight(&self, from: CityIdx, to: CityIdx) -> Option<Kilometers> {
        self.weights.get(&edge_key(from, to)).copied()
    }

    pub fn city_iter(&self) -> impl Iterator<Item = (CityIdx, &City)> {
        CityIdx::enumerate(&self.cities)
    }
}
