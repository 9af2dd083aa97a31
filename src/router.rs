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

use tracing::info;

use crate::catalogue::{RouteId, RouteKind, StopId, TransportCatalogue};
use crate::config::RoutingSettings;
use crate::engine::ShortestPaths;
use crate::graph::{DirectedWeightedGraph, Edge};
use crate::response::{Itinerary, ItineraryItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JourneyError {
    UnknownStop(String),
    NoJourney,
}

impl fmt::Display for JourneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JourneyError::UnknownStop(name) => {
                write!(f, "the stop '{}' is not in the catalogue", name)
            }
            JourneyError::NoJourney => write!(f, "no journey connects the two stops"),
        }
    }
}

impl std::error::Error for JourneyError {}

/// Plans time-optimal journeys over the bus network.
///
/// The router projects the catalogue onto a directed graph with one
/// vertex per stop and a quadratic family of edges per route: boarding at
/// stop i and alighting at stop j > i of a traversal is one edge, so the
/// shortest path never has to chain artificial transfers to skip
/// intermediate stops. The fixed wait before each boarding is folded into
/// every edge weight, which keeps weights positive and makes each
/// transfer cost exactly one wait.
///
/// All weights are minutes.
pub struct TransportRouter {
    settings: RoutingSettings,
    graph: DirectedWeightedGraph,
    engine: ShortestPaths,
}

impl TransportRouter {
    /// Build the time-weighted graph from the catalogue and prepare the
    /// shortest-path engine. The catalogue must not gain stops or routes
    /// afterwards.
    pub fn new(catalogue: &TransportCatalogue, settings: RoutingSettings) -> Self {
        let graph = build_graph(catalogue, &settings);
        info!(
            "routing graph built: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        let engine = ShortestPaths::new(&graph);
        Self {
            settings,
            graph,
            engine,
        }
    }

    /// Restore a router from a snapshot: the settings and the graph are
    /// taken verbatim, only the shortest-path engine is reconstructed.
    pub fn from_parts(settings: RoutingSettings, graph: DirectedWeightedGraph) -> Self {
        let engine = ShortestPaths::new(&graph);
        Self {
            settings,
            graph,
            engine,
        }
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    /// The fastest journey between two stops, as alternating Wait and Bus
    /// items. Staying where one is yields the empty itinerary.
    pub fn journey(
        &self,
        catalogue: &TransportCatalogue,
        from: &str,
        to: &str,
    ) -> Result<Itinerary, JourneyError> {
        let from_stop = catalogue
            .stop_by_name(from)
            .ok_or_else(|| JourneyError::UnknownStop(from.to_string()))?;
        let to_stop = catalogue
            .stop_by_name(to)
            .ok_or_else(|| JourneyError::UnknownStop(to.to_string()))?;
        if from_stop.id == to_stop.id {
            return Ok(Itinerary::default());
        }

        let path = self
            .engine
            .path(from_stop.id.index(), to_stop.id.index())
            .ok_or(JourneyError::NoJourney)?;

        let wait_time = self.settings.bus_wait_time;
        let mut items = Vec::with_capacity(2 * path.edges.len());
        let mut total_time = 0.0;
        for edge_id in path.edges {
            let edge = self.graph.edge(edge_id);
            let boarding_stop = catalogue.stop(StopId(edge.from));
            items.push(ItineraryItem::Wait {
                stop_name: boarding_stop.name.clone(),
                time: wait_time,
            });
            total_time += f64::from(wait_time);

            let ride_time = edge.weight - f64::from(wait_time);
            items.push(ItineraryItem::Bus {
                bus: catalogue.route(RouteId(edge.route_id)).name.clone(),
                span_count: edge.span_count,
                time: ride_time,
            });
            total_time += ride_time;
        }
        Ok(Itinerary { total_time, items })
    }
}

fn build_graph(catalogue: &TransportCatalogue, settings: &RoutingSettings) -> DirectedWeightedGraph {
    let mut graph = DirectedWeightedGraph::new(catalogue.nb_of_stops());
    // meters per minute
    let speed = settings.bus_velocity * 1000.0 / 60.0;
    let wait = f64::from(settings.bus_wait_time);
    for route in catalogue.routes() {
        add_edges_along(&mut graph, catalogue, &route.stops, route.id, wait, speed);
        if route.kind == RouteKind::Linear {
            let backward: Vec<StopId> = route.stops.iter().rev().copied().collect();
            add_edges_along(&mut graph, catalogue, &backward, route.id, wait, speed);
        }
    }
    graph
}

// one edge per ordered pair (i, j) with i < j along the traversal:
// board at stop i, ride j - i hops, alight at stop j
fn add_edges_along(
    graph: &mut DirectedWeightedGraph,
    catalogue: &TransportCatalogue,
    traversal: &[StopId],
    route_id: RouteId,
    wait: f64,
    speed: f64,
) {
    for (board_index, board_stop) in traversal.iter().enumerate() {
        let mut length = 0.0;
        for alight_index in (board_index + 1)..traversal.len() {
            length += catalogue.distance(traversal[alight_index - 1], traversal[alight_index]) as f64;
            graph.add_edge(Edge {
                from: board_stop.index(),
                to: traversal[alight_index].index(),
                weight: wait + length / speed,
                span_count: (alight_index - board_index) as u32,
                route_id: route_id.index(),
            });
        }
    }
}
