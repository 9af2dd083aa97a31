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

use serde_json::{json, Value};
use tracing::error;

use mimir::{Itinerary, ItineraryItem, MapRenderer, TransportCatalogue, TransportRouter};

use crate::input::StatRequest;

/// Answer every stat request, in request order. Malformed requests are
/// dropped with a log line; `NotFound` and `NoJourney` are regular
/// answers, not errors.
pub fn answer_all(
    requests: &[Value],
    catalogue: &TransportCatalogue,
    renderer: &MapRenderer,
    router: &TransportRouter,
) -> Vec<Value> {
    requests
        .iter()
        .filter_map(|raw| {
            let request: StatRequest = match serde_json::from_value(raw.clone()) {
                Ok(request) => request,
                Err(err) => {
                    error!("dropping a malformed stat request: {}", err);
                    return None;
                }
            };
            Some(answer(request, catalogue, renderer, router))
        })
        .collect()
}

fn answer(
    request: StatRequest,
    catalogue: &TransportCatalogue,
    renderer: &MapRenderer,
    router: &TransportRouter,
) -> Value {
    match request {
        StatRequest::Stop { id, name } => match catalogue.routes_through(&name) {
            Some(routes) => json!({
                "buses": routes,
                "request_id": id,
            }),
            None => not_found(id),
        },
        StatRequest::Bus { id, name } => match catalogue.route_stats(&name) {
            Some(stats) => json!({
                "curvature": stats.curvature,
                "request_id": id,
                "route_length": stats.road_length,
                "stop_count": stats.stop_count,
                "unique_stop_count": stats.unique_stop_count,
            }),
            None => not_found(id),
        },
        StatRequest::Map { id } => json!({
            "map": renderer.render(catalogue),
            "request_id": id,
        }),
        StatRequest::Route { id, from, to } => match router.journey(catalogue, &from, &to) {
            Ok(itinerary) => json!({
                "items": items(&itinerary),
                "request_id": id,
                "total_time": itinerary.total_time,
            }),
            // unknown stops and unreachable stops answer alike
            Err(_) => not_found(id),
        },
    }
}

fn items(itinerary: &Itinerary) -> Vec<Value> {
    itinerary
        .items
        .iter()
        .map(|item| match item {
            ItineraryItem::Wait { stop_name, time } => json!({
                "stop_name": stop_name,
                "time": time,
                "type": "Wait",
            }),
            ItineraryItem::Bus {
                bus,
                span_count,
                time,
            } => json!({
                "bus": bus,
                "span_count": span_count,
                "time": time,
                "type": "Bus",
            }),
        })
        .collect()
}

fn not_found(id: i64) -> Value {
    json!({
        "request_id": id,
        "error_message": "not found",
    })
}
