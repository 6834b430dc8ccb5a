use std::{cmp::Ordering, collections::BinaryHeap};

use tracing::debug;

use crate::{
    city::CityIdx, error::RoutingError, graph::CityGraph, kilometers::Kilometers, route::Route,
};

/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm

#[derive(Eq, Copy, Clone, Debug)]
struct HeapItem {
    city: CityIdx,
    distance: Kilometers,

    /// Push order, so that equal distances pop first-in first-out
    sequence: usize,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.distance == other.distance && self.sequence == other.sequence
    }
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip both keys to make this a min-heap
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

#[derive(Clone)]
struct NodeData {
    settled: bool,
    distance: Kilometers,
    parent: Option<CityIdx>,
}

impl NodeData {
    fn new() -> Self {
        NodeData {
            settled: false,
            distance: Kilometers::INFINITY,
            parent: None,
        }
    }
}

struct Dijkstra<'a> {
    graph: &'a CityGraph,
    heap: BinaryHeap<HeapItem>,
    data: Vec<NodeData>,
    sequence: usize,
}

impl<'a> Dijkstra<'a> {
    fn new(graph: &'a CityGraph, source: CityIdx) -> Self {
        let mut dijkstra = Dijkstra {
            graph,
            heap: BinaryHeap::with_capacity(graph.city_count()),
            data: vec![NodeData::new(); graph.city_count()],
            sequence: 0,
        };

        dijkstra.data[source.get()].distance = Kilometers::ZERO;
        dijkstra.push(source, Kilometers::ZERO);
        dijkstra
    }

    fn push(&mut self, city: CityIdx, distance: Kilometers) {
        self.heap.push(HeapItem {
            city,
            distance,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// Settles cities until `target` is settled, or every reachable city when `target` is `None`.
    fn run(mut self, target: Option<CityIdx>) -> ShortestPathTree {
        let graph = self.graph;
        let mut iterations = 0;

        while let Some(HeapItem { city, distance, .. }) = self.heap.pop() {
            let node = &self.data[city.get()];

            // Stale entry or already settled
            if node.settled || distance > node.distance {
                continue;
            }

            self.data[city.get()].settled = true;
            iterations += 1;

            if Some(city) == target {
                break;
            }

            for edge in graph.city_edges(city) {
                let adj_city = edge.adj_city();
                let adj_node = &self.data[adj_city.get()];

                if adj_node.settled {
                    continue;
                }

                let candidate = distance + edge.distance();

                if candidate < adj_node.distance {
                    let adj_node = &mut self.data[adj_city.get()];
                    adj_node.distance = candidate;
                    adj_node.parent = Some(city);
                    self.push(adj_city, candidate);
                }
            }
        }

        debug!(iterations, "Dijkstra finished");

        ShortestPathTree { data: self.data }
    }
}

/// Shortest distances and predecessor links from a single source city.
pub struct ShortestPathTree {
    data: Vec<NodeData>,
}

impl ShortestPathTree {
    /// `None` when the city cannot be reached from the source.
    pub fn distance_to(&self, city: CityIdx) -> Option<Kilometers> {
        self.data
            .get(city.get())
            .filter(|node| node.settled)
            .map(|node| node.distance)
    }

    /// Cities from the source to `city`, both included.
    pub fn path_to(&self, city: CityIdx) -> Option<Vec<CityIdx>> {
        self.distance_to(city)?;

        let mut path = vec![city];
        let mut current = city;
        while let Some(parent) = self.data[current.get()].parent {
            path.push(parent);
            current = parent;
        }

        path.reverse();
        Some(path)
    }
}

/// Shortest paths and multi-stop routes over one [`CityGraph`].
///
/// The engine only borrows the graph. Every query allocates its own search state, so a single
/// engine can serve queries from several threads.
#[derive(Clone, Copy)]
pub struct ShortestPathEngine<'a> {
    graph: &'a CityGraph,
}

impl<'a> ShortestPathEngine<'a> {
    pub fn new(graph: &'a CityGraph) -> Self {
        ShortestPathEngine { graph }
    }

    pub fn graph(&self) -> &'a CityGraph {
        self.graph
    }

    pub fn shortest_path(&self, source: &str, target: &str) -> Result<Route, RoutingError> {
        let source = self.graph.city_idx(source)?;
        let target = self.graph.city_idx(target)?;
        self.shortest_path_between(source, target)
    }

    pub fn shortest_path_between(
        &self,
        source: CityIdx,
        target: CityIdx,
    ) -> Result<Route, RoutingError> {
        self.graph.check_idx(source)?;
        self.graph.check_idx(target)?;

        let tree = Dijkstra::new(self.graph, source).run(Some(target));
        let path = tree
            .path_to(target)
            .ok_or_else(|| self.unreachable(source, target))?;
        let distance = self.path_distance(&path)?;

        Ok(Route::new(path, distance))
    }

    /// Runs Dijkstra from `source` until every reachable city is settled.
    pub fn shortest_path_tree(&self, source: CityIdx) -> Result<ShortestPathTree, RoutingError> {
        self.graph.check_idx(source)?;
        Ok(Dijkstra::new(self.graph, source).run(None))
    }

    pub fn route_through<S: AsRef<str>>(
        &self,
        source: &str,
        stops: &[S],
    ) -> Result<Route, RoutingError> {
        let source = self.graph.city_idx(source)?;
        let stops = stops
            .iter()
            .map(|stop| self.graph.city_idx(stop.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        self.route_through_cities(source, &stops)
    }

    /// Nearest-neighbor chaining: from the current city, always travel to the closest stop not yet
    /// visited, ties going to the stop listed first. Not an optimal tour.
    pub fn route_through_cities(
        &self,
        source: CityIdx,
        stops: &[CityIdx],
    ) -> Result<Route, RoutingError> {
        self.graph.check_idx(source)?;

        let mut remaining: Vec<CityIdx> = Vec::with_capacity(stops.len());
        for &stop in stops {
            self.graph.check_idx(stop)?;
            if !remaining.contains(&stop) {
                remaining.push(stop);
            }
        }

        let mut path = vec![source];
        let mut current = source;

        while !remaining.is_empty() {
            let tree = self.shortest_path_tree(current)?;

            let mut nearest: Option<(usize, Kilometers)> = None;
            for (position, &stop) in remaining.iter().enumerate() {
                let distance = tree
                    .distance_to(stop)
                    .ok_or_else(|| self.unreachable(current, stop))?;

                if nearest.is_none_or(|(_, best)| distance < best) {
                    nearest = Some((position, distance));
                }
            }

            let Some((position, _)) = nearest else {
                break;
            };

            let stop = remaining.remove(position);
            let segment = tree
                .path_to(stop)
                .ok_or_else(|| self.unreachable(current, stop))?;

            // The segment starts at the current city, which already ends the path
            path.extend(segment.into_iter().skip(1));
            current = stop;
        }

        let distance = self.path_distance(&path)?;
        Ok(Route::new(path, distance))
    }

    pub fn total_distance<S: AsRef<str>>(&self, path: &[S]) -> Result<Kilometers, RoutingError> {
        let path = path
            .iter()
            .map(|city| self.graph.city_idx(city.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        self.path_distance(&path)
    }

    /// Sums the edge weights between consecutive cities. Staying on the same city costs nothing.
    pub fn path_distance(&self, path: &[CityIdx]) -> Result<Kilometers, RoutingError> {
        for &city in path {
            self.graph.check_idx(city)?;
        }

        let mut distance = Kilometers::ZERO;
        for window in path.windows(2) {
            let (from, to) = (window[0], window[1]);
            if from == to {
                continue;
            }

            distance += self
                .graph
                .weight(from, to)
                .ok_or_else(|| RoutingError::DisconnectedPath {
                    from: self.graph.city(from).name().to_owned(),
                    to: self.graph.city(to).name().to_owned(),
                })?;
        }

        Ok(distance)
    }

    fn unreachable(&self, from: CityIdx, to: CityIdx) -> RoutingError {
        RoutingError::Unreachable {
            from: self.graph.city(from).name().to_owned(),
            to: self.graph.city(to).name().to_owned(),
        }
    }
}
