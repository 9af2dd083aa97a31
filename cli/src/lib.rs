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

pub mod input;
pub mod logger;
pub mod output;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};

use anyhow::Context;
use tracing::{error, info, warn};

use mimir::geo::Coordinates;
use mimir::snapshot;
use mimir::{MapRenderer, RouteKind, RoutingSettings, TransportCatalogue, TransportRouter};

/// Ingest a network description, build the routing graph and persist the
/// base snapshot at the path named by `serialization_settings.file`.
pub fn run_make_base<R: Read>(reader: R) -> anyhow::Result<()> {
    let document = input::read_document(reader)?;
    let serialization = document
        .serialization_settings
        .context("the input document has no serialization_settings")?;
    let routing_settings = match document.routing_settings {
        Some(settings) => {
            check_routing_settings(&settings);
            settings
        }
        None => {
            warn!("no routing_settings in the input, route queries will find nothing");
            RoutingSettings::default()
        }
    };

    let catalogue = build_catalogue(&document.base_requests);
    info!(
        "catalogue populated: {} stops, {} routes",
        catalogue.nb_of_stops(),
        catalogue.nb_of_routes()
    );
    let render_settings = document.render_settings.unwrap_or_default();
    let router = TransportRouter::new(&catalogue, routing_settings);

    let file = File::create(&serialization.file).with_context(|| {
        format!(
            "could not create the snapshot file {}",
            serialization.file.display()
        )
    })?;
    let mut writer = BufWriter::new(file);
    snapshot::save(&mut writer, &catalogue, &render_settings, &router)?;
    info!("base written to {}", serialization.file.display());
    Ok(())
}

/// Load the base snapshot and answer the stat requests, in request
/// order, as a json array on `writer`.
pub fn run_process_requests<R: Read, W: Write>(reader: R, mut writer: W) -> anyhow::Result<()> {
    let document = input::read_document(reader)?;
    let serialization = document
        .serialization_settings
        .context("the input document has no serialization_settings")?;

    let file = match File::open(&serialization.file) {
        Ok(file) => file,
        Err(err) => {
            warn!(
                "could not open the snapshot file {} ({}), skipping the batch",
                serialization.file.display(),
                err
            );
            return Ok(());
        }
    };
    let (catalogue, render_settings, router) = snapshot::load(&mut BufReader::new(file))?;
    let renderer = MapRenderer::new(render_settings);

    let answers = output::answer_all(&document.stat_requests, &catalogue, &renderer, &router);
    serde_json::to_writer_pretty(&mut writer, &answers).context("could not write the answers")?;
    writeln!(writer)?;
    Ok(())
}

// stops first, then distances, then routes: the later stages may only
// refer to stops the first one registered
fn build_catalogue(raw_requests: &[serde_json::Value]) -> TransportCatalogue {
    let mut requests = Vec::with_capacity(raw_requests.len());
    for raw in raw_requests {
        match serde_json::from_value::<input::BaseRequest>(raw.clone()) {
            Ok(request) => requests.push(request),
            Err(err) => error!("dropping a malformed base request: {}", err),
        }
    }

    let mut catalogue = TransportCatalogue::new();
    for request in &requests {
        if let input::BaseRequest::Stop(stop) = request {
            let coordinates = Coordinates::new(stop.latitude, stop.longitude);
            if let Err(err) = catalogue.add_stop(&stop.name, coordinates) {
                error!("dropping the stop descriptor '{}': {}", stop.name, err);
            }
        }
    }
    for request in &requests {
        if let input::BaseRequest::Stop(stop) = request {
            for (neighbor, meters) in &stop.road_distances {
                if let Err(err) = catalogue.set_distance(&stop.name, neighbor, *meters) {
                    error!(
                        "dropping the distance from '{}' to '{}': {}",
                        stop.name, neighbor, err
                    );
                }
            }
        }
    }
    for request in &requests {
        if let input::BaseRequest::Bus(bus) = request {
            let kind = if bus.is_roundtrip {
                RouteKind::Circle
            } else {
                RouteKind::Linear
            };
            let stop_names = bus.stops.iter().map(String::as_str);
            if let Err(err) = catalogue.add_route(&bus.name, kind, stop_names) {
                error!("dropping the bus descriptor '{}': {}", bus.name, err);
            }
        }
    }
    catalogue
}

fn check_routing_settings(settings: &RoutingSettings) {
    if settings.bus_wait_time < 1 || settings.bus_wait_time > 1000 {
        warn!(
            "bus_wait_time {} is outside 1..=1000, I'll use it anyway",
            settings.bus_wait_time
        );
    }
    if settings.bus_velocity < 1.0 || settings.bus_velocity > 1000.0 {
        warn!(
            "bus_velocity {} is outside 1..=1000, I'll use it anyway",
            settings.bus_velocity
        );
    }
}
