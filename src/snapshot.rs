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

pub mod schema;

use std::convert::TryFrom;
use std::fmt;
use std::io::{Read, Write};

use prost::Message;
use tracing::info;

use crate::catalogue::{RouteKind, TransportCatalogue};
use crate::config::{Color, RenderSettings, RoutingSettings};
use crate::graph::{DirectedWeightedGraph, Edge};
use crate::router::TransportRouter;

/// Bumped on every incompatible change of the wire format.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug)]
pub enum SnapshotError {
    Io(std::io::Error),
    Encode(prost::EncodeError),
    Decode(prost::DecodeError),
    UnsupportedVersion(u32),
    MissingBlock(&'static str),
    Corrupt(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Io(err) => write!(f, "snapshot i/o failed: {}", err),
            SnapshotError::Encode(err) => write!(f, "could not encode the snapshot: {}", err),
            SnapshotError::Decode(err) => write!(f, "could not decode the snapshot: {}", err),
            SnapshotError::UnsupportedVersion(version) => write!(
                f,
                "the snapshot has format version {} while this build reads version {}",
                version, FORMAT_VERSION
            ),
            SnapshotError::MissingBlock(block) => {
                write!(f, "the snapshot has no '{}' block", block)
            }
            SnapshotError::Corrupt(detail) => write!(f, "the snapshot is corrupt: {}", detail),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<std::io::Error> for SnapshotError {
    fn from(err: std::io::Error) -> Self {
        SnapshotError::Io(err)
    }
}

impl From<prost::EncodeError> for SnapshotError {
    fn from(err: prost::EncodeError) -> Self {
        SnapshotError::Encode(err)
    }
}

impl From<prost::DecodeError> for SnapshotError {
    fn from(err: prost::DecodeError) -> Self {
        SnapshotError::Decode(err)
    }
}

/// Serialize the catalogue, both settings records and the pre-built
/// routing graph as one length-delimited protobuf message.
pub fn save<W: Write>(
    writer: &mut W,
    catalogue: &TransportCatalogue,
    render_settings: &RenderSettings,
    router: &TransportRouter,
) -> Result<(), SnapshotError> {
    let base = schema::Base {
        version: FORMAT_VERSION,
        catalogue: Some(catalogue_to_proto(catalogue)),
        render_settings: Some(render_settings_to_proto(render_settings)),
        routing_settings: Some(routing_settings_to_proto(router.settings())),
        graph: Some(graph_to_proto(router.graph())),
    };
    let mut buffer = Vec::with_capacity(base.encoded_len() + 16);
    base.encode_length_delimited(&mut buffer)?;
    writer.write_all(&buffer)?;
    writer.flush()?;
    Ok(())
}

/// Restore a catalogue, the render settings and a queryable router from a
/// snapshot written by [`save`]. A missing or malformed block fails the
/// whole load.
pub fn load<R: Read>(
    reader: &mut R,
) -> Result<(TransportCatalogue, RenderSettings, TransportRouter), SnapshotError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    let base = schema::Base::decode_length_delimited(buffer.as_slice())?;
    if base.version != FORMAT_VERSION {
        return Err(SnapshotError::UnsupportedVersion(base.version));
    }

    let catalogue = catalogue_from_proto(
        base.catalogue
            .ok_or(SnapshotError::MissingBlock("catalogue"))?,
    )?;
    let render_settings = render_settings_from_proto(
        base.render_settings
            .ok_or(SnapshotError::MissingBlock("render_settings"))?,
    )?;
    let routing_settings = routing_settings_from_proto(
        &base
            .routing_settings
            .ok_or(SnapshotError::MissingBlock("routing_settings"))?,
    );
    let graph = graph_from_proto(
        base.graph.ok_or(SnapshotError::MissingBlock("graph"))?,
        catalogue.nb_of_stops(),
        catalogue.nb_of_routes(),
    )?;

    info!(
        "base loaded: {} stops, {} routes, {} graph edges",
        catalogue.nb_of_stops(),
        catalogue.nb_of_routes(),
        graph.edge_count()
    );
    let router = TransportRouter::from_parts(routing_settings, graph);
    Ok((catalogue, render_settings, router))
}

// ---------------------------------------------------------- catalogue ----

fn catalogue_to_proto(catalogue: &TransportCatalogue) -> schema::Catalogue {
    let stops = catalogue
        .stops()
        .iter()
        .map(|stop| schema::Stop {
            name: stop.name.clone(),
            lat: stop.coordinates.lat,
            lng: stop.coordinates.lng,
            id: stop.id.index() as u64,
        })
        .collect();

    let routes = catalogue
        .routes()
        .iter()
        .map(|route| schema::Route {
            name: route.name.clone(),
            is_circular: route.kind == RouteKind::Circle,
            stop_ids: route.stops.iter().map(|stop| stop.index() as u64).collect(),
            id: route.id.index() as u64,
        })
        .collect();

    // the backing map has no defined order, the file should
    let mut distances: Vec<schema::Distance> = catalogue
        .distances()
        .map(|((from, to), meters)| schema::Distance {
            from_id: from.index() as u64,
            to_id: to.index() as u64,
            meters,
        })
        .collect();
    distances.sort_by_key(|distance| (distance.from_id, distance.to_id));

    schema::Catalogue {
        stops,
        routes,
        distances,
    }
}

fn catalogue_from_proto(
    mut proto: schema::Catalogue,
) -> Result<TransportCatalogue, SnapshotError> {
    let mut catalogue = TransportCatalogue::new();

    // ids equal insertion indices, so inserting in id order restores them
    proto.stops.sort_by_key(|stop| stop.id);
    for (index, stop) in proto.stops.iter().enumerate() {
        if stop.id != index as u64 {
            return Err(SnapshotError::Corrupt(format!(
                "stop ids are not contiguous: found id {} at position {}",
                stop.id, index
            )));
        }
        catalogue
            .add_stop(
                &stop.name,
                crate::geo::Coordinates::new(stop.lat, stop.lng),
            )
            .map_err(|err| SnapshotError::Corrupt(err.to_string()))?;
    }

    for distance in &proto.distances {
        let from = stop_name(&proto.stops, distance.from_id)?;
        let to = stop_name(&proto.stops, distance.to_id)?;
        catalogue
            .set_distance(from, to, distance.meters)
            .map_err(|err| SnapshotError::Corrupt(err.to_string()))?;
    }

    proto.routes.sort_by_key(|route| route.id);
    for (index, route) in proto.routes.iter().enumerate() {
        if route.id != index as u64 {
            return Err(SnapshotError::Corrupt(format!(
                "route ids are not contiguous: found id {} at position {}",
                route.id, index
            )));
        }
        let kind = if route.is_circular {
            RouteKind::Circle
        } else {
            RouteKind::Linear
        };
        let stop_names = route
            .stop_ids
            .iter()
            .map(|id| stop_name(&proto.stops, *id))
            .collect::<Result<Vec<_>, _>>()?;
        catalogue
            .add_route(&route.name, kind, stop_names)
            .map_err(|err| SnapshotError::Corrupt(err.to_string()))?;
    }

    Ok(catalogue)
}

fn stop_name(stops: &[schema::Stop], id: u64) -> Result<&str, SnapshotError> {
    let index = usize::try_from(id)
        .map_err(|_| SnapshotError::Corrupt(format!("stop id {} does not fit in memory", id)))?;
    stops
        .get(index)
        .map(|stop| stop.name.as_str())
        .ok_or_else(|| SnapshotError::Corrupt(format!("no stop with id {}", id)))
}

// ----------------------------------------------------------- settings ----

fn render_settings_to_proto(settings: &RenderSettings) -> schema::RenderSettings {
    schema::RenderSettings {
        width: settings.width,
        height: settings.height,
        padding: settings.padding,
        line_width: settings.line_width,
        stop_radius: settings.stop_radius,
        bus_label_font_size: settings.bus_label_font_size,
        bus_label_offset: vec![settings.bus_label_offset.0, settings.bus_label_offset.1],
        stop_label_font_size: settings.stop_label_font_size,
        stop_label_offset: vec![settings.stop_label_offset.0, settings.stop_label_offset.1],
        underlayer_color: Some(color_to_proto(&settings.underlayer_color)),
        underlayer_width: settings.underlayer_width,
        color_palette: settings.color_palette.iter().map(color_to_proto).collect(),
    }
}

fn render_settings_from_proto(
    proto: schema::RenderSettings,
) -> Result<RenderSettings, SnapshotError> {
    Ok(RenderSettings {
        width: proto.width,
        height: proto.height,
        padding: proto.padding,
        line_width: proto.line_width,
        stop_radius: proto.stop_radius,
        bus_label_font_size: proto.bus_label_font_size,
        bus_label_offset: offset_from_proto(&proto.bus_label_offset, "bus_label_offset")?,
        stop_label_font_size: proto.stop_label_font_size,
        stop_label_offset: offset_from_proto(&proto.stop_label_offset, "stop_label_offset")?,
        underlayer_color: proto
            .underlayer_color
            .map(|color| color_from_proto(&color))
            .unwrap_or_default(),
        underlayer_width: proto.underlayer_width,
        color_palette: proto
            .color_palette
            .iter()
            .map(color_from_proto)
            .collect(),
    })
}

fn offset_from_proto(values: &[f64], field: &str) -> Result<(f64, f64), SnapshotError> {
    match values {
        [x, y] => Ok((*x, *y)),
        _ => Err(SnapshotError::Corrupt(format!(
            "{} holds {} values instead of 2",
            field,
            values.len()
        ))),
    }
}

fn color_to_proto(color: &Color) -> schema::Color {
    let kind = match color {
        Color::Text(name) => schema::color::Kind::Text(name.clone()),
        Color::Rgb(red, green, blue) => schema::color::Kind::Rgb(schema::Rgb {
            red: u32::from(*red),
            green: u32::from(*green),
            blue: u32::from(*blue),
        }),
        Color::Rgba(red, green, blue, opacity) => schema::color::Kind::Rgba(schema::Rgba {
            red: u32::from(*red),
            green: u32::from(*green),
            blue: u32::from(*blue),
            opacity: *opacity,
        }),
    };
    schema::Color { kind: Some(kind) }
}

fn color_from_proto(proto: &schema::Color) -> Color {
    match &proto.kind {
        Some(schema::color::Kind::Text(name)) => Color::Text(name.clone()),
        Some(schema::color::Kind::Rgb(rgb)) => {
            Color::Rgb(rgb.red as u8, rgb.green as u8, rgb.blue as u8)
        }
        Some(schema::color::Kind::Rgba(rgba)) => Color::Rgba(
            rgba.red as u8,
            rgba.green as u8,
            rgba.blue as u8,
            rgba.opacity,
        ),
        None => Color::default(),
    }
}

fn routing_settings_to_proto(settings: &RoutingSettings) -> schema::RoutingSettings {
    schema::RoutingSettings {
        bus_wait_time: settings.bus_wait_time,
        bus_velocity: settings.bus_velocity,
    }
}

fn routing_settings_from_proto(proto: &schema::RoutingSettings) -> RoutingSettings {
    RoutingSettings {
        bus_wait_time: proto.bus_wait_time,
        bus_velocity: proto.bus_velocity,
    }
}

// -------------------------------------------------------------- graph ----

fn graph_to_proto(graph: &DirectedWeightedGraph) -> schema::Graph {
    let edges = graph
        .edges()
        .iter()
        .map(|edge| schema::Edge {
            from: edge.from as u64,
            to: edge.to as u64,
            weight: edge.weight,
            span_count: edge.span_count,
            route_id: edge.route_id as u64,
        })
        .collect();
    let incidence_lists = graph
        .incidence_lists()
        .iter()
        .map(|list| schema::IncidenceList {
            edge_ids: list.iter().map(|edge_id| *edge_id as u64).collect(),
        })
        .collect();
    schema::Graph {
        edges,
        incidence_lists,
    }
}

fn graph_from_proto(
    proto: schema::Graph,
    expected_vertex_count: usize,
    route_count: usize,
) -> Result<DirectedWeightedGraph, SnapshotError> {
    if proto.incidence_lists.len() != expected_vertex_count {
        return Err(SnapshotError::Corrupt(format!(
            "the graph has {} vertices while the catalogue has {} stops",
            proto.incidence_lists.len(),
            expected_vertex_count
        )));
    }
    let edges = proto
        .edges
        .iter()
        .map(|edge| {
            let route_id = index_from_u64(edge.route_id)?;
            if route_id >= route_count {
                return Err(SnapshotError::Corrupt(format!(
                    "an edge refers to route id {} while the catalogue has {} routes",
                    route_id, route_count
                )));
            }
            Ok(Edge {
                from: index_from_u64(edge.from)?,
                to: index_from_u64(edge.to)?,
                weight: edge.weight,
                span_count: edge.span_count,
                route_id,
            })
        })
        .collect::<Result<Vec<_>, SnapshotError>>()?;
    let incidence_lists = proto
        .incidence_lists
        .iter()
        .map(|list| {
            list.edge_ids
                .iter()
                .map(|edge_id| index_from_u64(*edge_id))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, SnapshotError>>()?;
    DirectedWeightedGraph::from_parts(edges, incidence_lists)
        .map_err(|err| SnapshotError::Corrupt(err.to_string()))
}

fn index_from_u64(value: u64) -> Result<usize, SnapshotError> {
    usize::try_from(value)
        .map_err(|_| SnapshotError::Corrupt(format!("index {} does not fit in memory", value)))
}
