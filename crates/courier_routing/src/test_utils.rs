use crate::{city::City, graph::CityGraph, graph_builder::GraphBuilder, kilometers::Kilometers};

// https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
const ROMANIA_ROADS: [(&str, &str, f64); 23] = [
    ("Oradea", "Zerind", 71.0),
    ("Oradea", "Sibiu", 151.0),
    ("Zerind", "Arad", 75.0),
    ("Arad", "Sibiu", 140.0),
    ("Arad", "Timisoara", 118.0),
    ("Timisoara", "Lugoj", 111.0),
    ("Lugoj", "Mehadia", 70.0),
    ("Mehadia", "Dobreta", 75.0),
    ("Dobreta", "Craiova", 120.0),
    ("Craiova", "Rimnicu Vilcea", 146.0),
    ("Craiova", "Pitesti", 138.0),
    ("Rimnicu Vilcea", "Pitesti", 97.0),
    ("Rimnicu Vilcea", "Sibiu", 80.0),
    ("Sibiu", "Fagaras", 99.0),
    ("Fagaras", "Bucharest", 211.0),
    ("Pitesti", "Bucharest", 101.0),
    ("Bucharest", "Giurgiu", 90.0),
    ("Bucharest", "Urziceni", 85.0),
    ("Urziceni", "Hirsova", 98.0),
    ("Hirsova", "Eforie", 86.0),
    ("Urziceni", "Vaslui", 142.0),
    ("Vaslui", "Iasi", 92.0),
    ("Iasi", "Neamt", 87.0),
];

fn romania_cities() -> Vec<City> {
    vec![
        City::new("Arad", 46.18, 21.31),
        City::new("Bucharest", 44.43, 26.10),
        City::new("Craiova", 44.32, 23.80),
        City::new("Dobreta", 44.63, 22.66),
        City::new("Eforie", 44.06, 28.63),
        City::new("Fagaras", 45.84, 24.97),
        City::new("Giurgiu", 43.90, 25.97),
        City::new("Hirsova", 44.69, 27.95),
        City::new("Iasi", 47.16, 27.59),
        City::new("Lugoj", 45.69, 21.90),
        City::new("Mehadia", 44.90, 22.36),
        City::new("Neamt", 46.93, 26.37),
        City::new("Oradea", 47.07, 21.92),
        City::new("Pitesti", 44.86, 24.87),
        City::new("Rimnicu Vilcea", 45.10, 24.37),
        City::new("Sibiu", 45.79, 24.15),
        City::new("Timisoara", 45.75, 21.23),
        City::new("Urziceni", 44.72, 26.64),
        City::new("Vaslui", 46.64, 27.73),
        City::new("Zerind", 46.62, 21.52),
    ]
}

/// Sparse road map from the classic AI textbook example.
pub fn create_romania_graph() -> CityGraph {
    let edges: Vec<(&str, &str, Kilometers)> = ROMANIA_ROADS
        .iter()
        .map(|&(from, to, km)| (from, to, Kilometers::new(km)))
        .collect();

    CityGraph::from_edges(romania_cities(), &edges).unwrap()
}

/// Depot D at the origin and three cities one degree away: A east, B north, C north-east.
pub fn create_square_graph() -> CityGraph {
    let mut builder = GraphBuilder::default();
    builder
        .add_city("D", 0.0, 0.0)
        .add_city("A", 0.0, 1.0)
        .add_city("B", 1.0, 0.0)
        .add_city("C", 1.0, 1.0);

    builder.build().unwrap()
}
