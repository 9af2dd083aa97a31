// Copyright  (C) 2020, Hove and/or its affiliates. All rights reserved.
//
// This file is part of Navitia,
// the software to build cool stuff with public transport.
//
// Hope you'll enjoy and contribute to this project,
// powered by Hove (www.kisio.com).
// Help us simplify mobility and open public transport:
// a non ending quest to the responsive locomotion way of traveling!
//
// This contribution is a part of the research and development work of the
// IVA Project which aims to enhance traveler information and is carried out
// under the leadership of the Technological Research Institute SystemX,
// with the partnership and support of the transport organization authority
// Ile-De-France Mobilités (IDFM), SNCF, and public funds
// under the scope of the French Program "Investissements d’Avenir".
//
// LICENCE: This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.
//
// Stay tuned using
// twitter @navitia
// channel `#navitia` on riot https://riot.im/app/#/room/#navitia:matrix.org
// https://groups.google.com/d/forum/navitia
// www.navitia.io

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{DirectedWeightedGraph, EdgeId, VertexId};

/// Answer of a shortest-path query: the accumulated weight and the edge
/// ids to traverse, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub weight: f64,
    pub edges: Vec<EdgeId>,
}

// best known way to reach a vertex from the source of the run:
// accumulated weight plus the last edge taken and the vertex it came from
#[derive(Debug, Clone, Copy)]
struct VertexState {
    weight: f64,
    pred: Option<(EdgeId, VertexId)>,
}

/// All-pairs shortest paths over a graph with non-negative edge weights.
///
/// One Dijkstra run per source vertex at construction time; a query then
/// only walks the stored predecessor edges, linear in the answer length.
/// The whole cost of routing is paid once, when the engine is built.
/// Behavior is undefined if any edge weight is negative.
pub struct ShortestPaths {
    states: Vec<Vec<Option<VertexState>>>,
}

impl ShortestPaths {
    pub fn new(graph: &DirectedWeightedGraph) -> Self {
        let states = (0..graph.vertex_count())
            .map(|source| dijkstra_from(graph, source))
            .collect();
        Self { states }
    }

    /// The lightest path between two vertices, `None` when `to` is not
    /// reachable from `from`. For `from == to` the path is empty with
    /// weight 0.
    pub fn path(&self, from: VertexId, to: VertexId) -> Option<Path> {
        let row = self.states.get(from)?;
        let arrival = row.get(to).copied().flatten()?;

        let mut edges = Vec::new();
        let mut vertex = to;
        while vertex != from {
            let state = row[vertex]?;
            let (edge, previous) = state.pred?;
            edges.push(edge);
            vertex = previous;
        }
        edges.reverse();
        Some(Path {
            weight: arrival.weight,
            edges,
        })
    }
}

fn dijkstra_from(graph: &DirectedWeightedGraph, source: VertexId) -> Vec<Option<VertexState>> {
    let mut states: Vec<Option<VertexState>> = vec![None; graph.vertex_count()];
    states[source] = Some(VertexState {
        weight: 0.0,
        pred: None,
    });

    let mut queue = BinaryHeap::new();
    queue.push(QueueEntry {
        weight: 0.0,
        vertex: source,
    });

    while let Some(entry) = queue.pop() {
        let settled_weight = match states[entry.vertex] {
            Some(state) => state.weight,
            None => continue,
        };
        // an outdated queue entry, the vertex was reached cheaper already
        if entry.weight > settled_weight {
            continue;
        }
        for edge_id in graph.incident_edges(entry.vertex) {
            let edge = graph.edge(*edge_id);
            let candidate = entry.weight + edge.weight;
            let improves = match states[edge.to] {
                Some(state) => candidate < state.weight,
                None => true,
            };
            if improves {
                states[edge.to] = Some(VertexState {
                    weight: candidate,
                    pred: Some((*edge_id, entry.vertex)),
                });
                queue.push(QueueEntry {
                    weight: candidate,
                    vertex: edge.to,
                });
            }
        }
    }
    states
}

// ordered so that the BinaryHeap pops the smallest weight first;
// weights are finite non-negative, total_cmp keeps the ordering total
struct QueueEntry {
    weight: f64,
    vertex: VertexId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}
