use serde::Serialize;

use crate::{
    city::{City, CityIdx},
    graph::CityGraph,
    kilometers::Kilometers,
};

/// Ordered sequence of cities with the sum of the edge weights traversed between them.
///
/// A route only makes sense against the graph that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    cities: Vec<CityIdx>,
    distance: Kilometers,
}

impl Route {
    pub(crate) fn new(cities: Vec<CityIdx>, distance: Kilometers) -> Route {
        Route { cities, distance }
    }

    pub fn cities(&self) -> &[CityIdx] {
        &self.cities
    }

    pub fn distance(&self) -> Kilometers {
        self.distance
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn start(&self) -> Option<CityIdx> {
        self.cities.first().copied()
    }

    pub fn end(&self) -> Option<CityIdx> {
        self.cities.last().copied()
    }

    pub fn iter<'g>(&self, graph: &'g CityGraph) -> impl Iterator<Item = &'g City> {
        self.cities.iter().map(move |&city| graph.city(city))
    }

    pub fn names(&self, graph: &CityGraph) -> Vec<String> {
        self.iter(graph).map(|city| city.name().to_owned()).collect()
    }
}
