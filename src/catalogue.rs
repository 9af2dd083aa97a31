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

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use crate::geo::{self, Coordinates};

/// Identifier of a stop. Equals the insertion index of the stop and is
/// used as the vertex id of the routing graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub(crate) usize);

impl StopId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Identifier of a route. Equals the insertion index of the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub(crate) usize);

impl RouteId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named geographic point of the network.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    pub coordinates: Coordinates,
    pub id: StopId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Traveled forward then backward; the stored sequence is the forward leg.
    Linear,
    /// Traveled forward only; the stored sequence ends on its first stop.
    Circle,
}

/// A named ordered sequence of stops traveled by one bus line.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub name: String,
    pub kind: RouteKind,
    pub stops: Vec<StopId>,
    pub id: RouteId,
}

/// Statistics of one route, computed on demand from the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStats {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    /// Sum of road distances along the traversal, in meters.
    pub road_length: u64,
    /// Sum of great-circle distances along the traversal, in meters.
    pub geo_length: f64,
    /// road_length / geo_length; 0.0 when all stops share coordinates.
    pub curvature: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    DuplicateStop(String),
    DuplicateRoute(String),
    UnknownStop(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::DuplicateStop(name) => {
                write!(f, "a stop named '{}' is already in the catalogue", name)
            }
            ModelError::DuplicateRoute(name) => {
                write!(f, "a route named '{}' is already in the catalogue", name)
            }
            ModelError::UnknownStop(name) => {
                write!(f, "the stop '{}' is not in the catalogue", name)
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// The in-memory database of the bus network.
///
/// Owns the backing storage for stops, routes and road distances; every
/// other component refers to its content through [`StopId`]/[`RouteId`],
/// which stay valid for the whole life of the catalogue. Stops and routes
/// are only ever inserted, never removed or mutated.
#[derive(Debug, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    routes: Vec<Route>,
    stop_index: HashMap<String, StopId>,
    route_index: HashMap<String, RouteId>,
    // names of the routes passing through each stop, keyed by stop index
    routes_through: Vec<BTreeSet<String>>,
    distances: HashMap<(StopId, StopId), u64>,
}

impl TransportCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop. The returned id is the insertion index.
    pub fn add_stop(
        &mut self,
        name: &str,
        coordinates: Coordinates,
    ) -> Result<StopId, ModelError> {
        if self.stop_index.contains_key(name) {
            return Err(ModelError::DuplicateStop(name.to_string()));
        }
        let id = StopId(self.stops.len());
        self.stops.push(Stop {
            name: name.to_string(),
            coordinates,
            id,
        });
        self.routes_through.push(BTreeSet::new());
        self.stop_index.insert(name.to_string(), id);
        Ok(id)
    }

    /// Record the road distance from one stop to another, in meters.
    /// Overwrites any previous entry for the same ordered pair.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: u64) -> Result<(), ModelError> {
        let from = self.existing_stop_id(from)?;
        let to = self.existing_stop_id(to)?;
        self.distances.insert((from, to), meters);
        Ok(())
    }

    /// Register a route over already-registered stops. For a linear route
    /// the given sequence is the forward leg.
    pub fn add_route<'a>(
        &mut self,
        name: &str,
        kind: RouteKind,
        stop_names: impl IntoIterator<Item = &'a str>,
    ) -> Result<RouteId, ModelError> {
        if self.route_index.contains_key(name) {
            return Err(ModelError::DuplicateRoute(name.to_string()));
        }
        let stops = stop_names
            .into_iter()
            .map(|stop_name| self.existing_stop_id(stop_name))
            .collect::<Result<Vec<_>, _>>()?;
        let id = RouteId(self.routes.len());
        for stop in &stops {
            self.routes_through[stop.0].insert(name.to_string());
        }
        self.routes.push(Route {
            name: name.to_string(),
            kind,
            stops,
            id,
        });
        self.route_index.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn stop_by_name(&self, name: &str) -> Option<&Stop> {
        self.stop_index.get(name).map(|id| &self.stops[id.0])
    }

    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        self.route_index.get(name).map(|id| &self.routes[id.0])
    }

    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    pub fn route(&self, id: RouteId) -> &Route {
        &self.routes[id.0]
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn nb_of_stops(&self) -> usize {
        self.stops.len()
    }

    pub fn nb_of_routes(&self) -> usize {
        self.routes.len()
    }

    /// Names of the routes passing through a stop, in lexicographic
    /// order. `None` when the stop itself is unknown; an empty set when
    /// it is known but no route visits it.
    pub fn routes_through(&self, stop_name: &str) -> Option<&BTreeSet<String>> {
        self.stop_index
            .get(stop_name)
            .map(|id| &self.routes_through[id.0])
    }

    /// Road distance from one stop to another. Falls back to the reverse
    /// pair when the forward pair has no entry, and to 0 when neither has.
    pub fn distance(&self, from: StopId, to: StopId) -> u64 {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .unwrap_or(0)
    }

    pub fn distances(&self) -> impl Iterator<Item = ((StopId, StopId), u64)> + '_ {
        self.distances.iter().map(|(pair, meters)| (*pair, *meters))
    }

    /// Statistics of the route with the given name, `None` when absent.
    pub fn route_stats(&self, route_name: &str) -> Option<RouteStats> {
        self.route_by_name(route_name).map(|route| self.stats_of(route))
    }

    fn stats_of(&self, route: &Route) -> RouteStats {
        let stop_count = match route.kind {
            RouteKind::Circle => route.stops.len(),
            RouteKind::Linear => {
                if route.stops.is_empty() {
                    0
                } else {
                    2 * route.stops.len() - 1
                }
            }
        };
        let unique_stop_count = route.stops.iter().collect::<HashSet<_>>().len();

        let mut road_length = 0;
        let mut geo_length = 0.0;
        for pair in route.stops.windows(2) {
            road_length += self.distance(pair[0], pair[1]);
            geo_length += geo::distance_between(
                self.stops[pair[0].0].coordinates,
                self.stops[pair[1].0].coordinates,
            );
        }
        if route.kind == RouteKind::Linear {
            // road distances may differ per direction, the geographic ones do not
            for pair in route.stops.windows(2) {
                road_length += self.distance(pair[1], pair[0]);
            }
            geo_length *= 2.0;
        }

        let curvature = if geo_length > 0.0 {
            road_length as f64 / geo_length
        } else {
            0.0
        };
        RouteStats {
            stop_count,
            unique_stop_count,
            road_length,
            geo_length,
            curvature,
        }
    }

    fn existing_stop_id(&self, name: &str) -> Result<StopId, ModelError> {
        self.stop_index
            .get(name)
            .copied()
            .ok_or_else(|| ModelError::UnknownStop(name.to_string()))
    }
}
