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

use std::fmt;

pub type VertexId = usize;
pub type EdgeId = usize;

/// An edge of the routing graph. Besides the travel-time weight it
/// carries what answer reconstruction needs: the route the edge belongs
/// to and the number of stop-to-stop hops it covers. Keeping both on the
/// edge avoids a parallel lookup table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
    pub span_count: u32,
    pub route_id: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    VertexOutOfRange { edge: EdgeId, vertex: VertexId },
    EdgeOutOfRange { vertex: VertexId, edge: EdgeId },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::VertexOutOfRange { edge, vertex } => write!(
                f,
                "edge {} refers to vertex {} which is not in the graph",
                edge, vertex
            ),
            GraphError::EdgeOutOfRange { vertex, edge } => write!(
                f,
                "the incidence list of vertex {} refers to edge {} which is not in the graph",
                vertex, edge
            ),
        }
    }
}

impl std::error::Error for GraphError {}

/// A directed graph with weighted edges over dense integer vertex ids.
/// Edge ids are handed out monotonically from 0 by [`add_edge`].
///
/// [`add_edge`]: DirectedWeightedGraph::add_edge
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectedWeightedGraph {
    edges: Vec<Edge>,
    incidence_lists: Vec<Vec<EdgeId>>,
}

impl DirectedWeightedGraph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence_lists: vec![Vec::new(); vertex_count],
        }
    }

    /// Rebuild a graph from its serialized parts, checking that every
    /// vertex and edge reference is in range.
    pub fn from_parts(
        edges: Vec<Edge>,
        incidence_lists: Vec<Vec<EdgeId>>,
    ) -> Result<Self, GraphError> {
        let vertex_count = incidence_lists.len();
        for (edge_id, edge) in edges.iter().enumerate() {
            for vertex in [edge.from, edge.to].iter() {
                if *vertex >= vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        edge: edge_id,
                        vertex: *vertex,
                    });
                }
            }
        }
        for (vertex, list) in incidence_lists.iter().enumerate() {
            for edge in list {
                if *edge >= edges.len() {
                    return Err(GraphError::EdgeOutOfRange {
                        vertex,
                        edge: *edge,
                    });
                }
            }
        }
        Ok(Self {
            edges,
            incidence_lists,
        })
    }

    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        let id = self.edges.len();
        self.incidence_lists[edge.from].push(id);
        self.edges.push(edge);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence_lists.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        &self.incidence_lists[vertex]
    }

    pub fn incidence_lists(&self) -> &[Vec<EdgeId>] {
        &self.incidence_lists
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_ids_are_handed_out_monotonically_from_zero() {
        let mut graph = DirectedWeightedGraph::new(2);
        let first = graph.add_edge(Edge {
            from: 0,
            to: 1,
            weight: 1.0,
            span_count: 1,
            route_id: 0,
        });
        let second = graph.add_edge(Edge {
            from: 1,
            to: 0,
            weight: 2.0,
            span_count: 1,
            route_id: 0,
        });
        assert_eq!((first, second), (0, 1));
        assert_eq!(graph.incident_edges(0), &[first][..]);
        assert_eq!(graph.incident_edges(1), &[second][..]);
    }

    #[test]
    fn from_parts_rejects_out_of_range_references() {
        let dangling_edge = Edge {
            from: 0,
            to: 5,
            weight: 1.0,
            span_count: 1,
            route_id: 0,
        };
        assert_eq!(
            DirectedWeightedGraph::from_parts(vec![dangling_edge], vec![vec![], vec![]]),
            Err(GraphError::VertexOutOfRange { edge: 0, vertex: 5 })
        );
        assert_eq!(
            DirectedWeightedGraph::from_parts(vec![], vec![vec![3]]),
            Err(GraphError::EdgeOutOfRange { vertex: 0, edge: 3 })
        );
    }
}
