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

mod utils;

use prost::Message;

use mimir::config::Color;
use mimir::snapshot::{self, schema, SnapshotError};
use mimir::{RenderSettings, RoutingSettings, TransportCatalogue, TransportRouter};
use utils::CatalogueBuilder;

fn seed_catalogue() -> TransportCatalogue {
    CatalogueBuilder::new()
        .stop("A", 55.574371, 37.6517)
        .stop("B", 55.587655, 37.645687)
        .stop("C", 55.592028, 37.653656)
        .distance("A", "B", 100)
        .distance("B", "A", 150)
        .distance("B", "C", 200)
        .linear("14", &["A", "B", "C"])
        .circle("297", &["A", "B", "C", "A"])
        .build()
}

fn seed_render_settings() -> RenderSettings {
    RenderSettings {
        width: 1200.0,
        height: 1200.0,
        padding: 50.0,
        line_width: 14.0,
        stop_radius: 5.0,
        bus_label_font_size: 20,
        bus_label_offset: (7.0, 15.0),
        stop_label_font_size: 20,
        stop_label_offset: (7.0, -3.0),
        underlayer_color: Color::Rgba(255, 255, 255, 0.85),
        underlayer_width: 3.0,
        color_palette: vec![
            Color::Text("green".to_string()),
            Color::Rgb(255, 160, 0),
            Color::Text("red".to_string()),
        ],
    }
}

fn seed_routing_settings() -> RoutingSettings {
    RoutingSettings {
        bus_wait_time: 6,
        bus_velocity: 36.0,
    }
}

fn save_seed() -> Vec<u8> {
    let catalogue = seed_catalogue();
    let router = TransportRouter::new(&catalogue, seed_routing_settings());
    let mut buffer = Vec::new();
    snapshot::save(&mut buffer, &catalogue, &seed_render_settings(), &router).unwrap();
    buffer
}

#[test]
fn the_catalogue_round_trips() {
    let buffer = save_seed();
    let (loaded, _, _) = snapshot::load(&mut buffer.as_slice()).unwrap();

    let original = seed_catalogue();
    assert_eq!(loaded.stops(), original.stops());
    assert_eq!(loaded.routes(), original.routes());

    for (pair, meters) in original.distances() {
        assert_eq!(loaded.distance(pair.0, pair.1), meters);
    }
    // the fallback keeps working on the loaded side
    let b = loaded.stop_by_name("B").unwrap().id;
    let c = loaded.stop_by_name("C").unwrap().id;
    assert_eq!(loaded.distance(c, b), 200);

    for route_name in &["14", "297"] {
        assert_eq!(loaded.route_stats(route_name), original.route_stats(route_name));
    }
    assert_eq!(
        loaded.routes_through("B").unwrap(),
        original.routes_through("B").unwrap()
    );
}

#[test]
fn the_settings_round_trip() {
    let buffer = save_seed();
    let (_, render_settings, router) = snapshot::load(&mut buffer.as_slice()).unwrap();

    assert_eq!(render_settings, seed_render_settings());
    assert_eq!(*router.settings(), seed_routing_settings());
}

#[test]
fn the_graph_is_restored_verbatim() {
    let catalogue = seed_catalogue();
    let router = TransportRouter::new(&catalogue, seed_routing_settings());
    let mut buffer = Vec::new();
    snapshot::save(&mut buffer, &catalogue, &seed_render_settings(), &router).unwrap();

    let (_, _, loaded_router) = snapshot::load(&mut buffer.as_slice()).unwrap();
    assert_eq!(loaded_router.graph(), router.graph());
}

#[test]
fn journeys_are_identical_after_a_round_trip() {
    let catalogue = seed_catalogue();
    let router = TransportRouter::new(&catalogue, seed_routing_settings());
    let mut buffer = Vec::new();
    snapshot::save(&mut buffer, &catalogue, &seed_render_settings(), &router).unwrap();
    let (loaded_catalogue, _, loaded_router) = snapshot::load(&mut buffer.as_slice()).unwrap();

    let stop_names = ["A", "B", "C"];
    for from in &stop_names {
        for to in &stop_names {
            let before = router.journey(&catalogue, from, to);
            let after = loaded_router.journey(&loaded_catalogue, from, to);
            match (before, after) {
                (Ok(before), Ok(after)) => {
                    assert!((before.total_time - after.total_time).abs() < 1e-6);
                    assert_eq!(before.items, after.items);
                }
                (before, after) => assert_eq!(before, after),
            }
        }
    }
}

#[test]
fn a_truncated_snapshot_is_rejected() {
    let buffer = save_seed();
    let truncated = &buffer[..buffer.len() / 2];
    match snapshot::load(&mut &truncated[..]) {
        Err(SnapshotError::Decode(_)) => {}
        other => panic!("expected a decode error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn a_missing_block_is_rejected() {
    let buffer = save_seed();
    let mut base = schema::Base::decode_length_delimited(buffer.as_slice()).unwrap();
    base.graph = None;
    let mut without_graph = Vec::new();
    base.encode_length_delimited(&mut without_graph).unwrap();

    match snapshot::load(&mut without_graph.as_slice()) {
        Err(SnapshotError::MissingBlock("graph")) => {}
        other => panic!("expected a missing block error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn a_newer_format_version_is_rejected() {
    let buffer = save_seed();
    let mut base = schema::Base::decode_length_delimited(buffer.as_slice()).unwrap();
    base.version = snapshot::FORMAT_VERSION + 1;
    let mut newer = Vec::new();
    base.encode_length_delimited(&mut newer).unwrap();

    match snapshot::load(&mut newer.as_slice()) {
        Err(SnapshotError::UnsupportedVersion(version)) => {
            assert_eq!(version, snapshot::FORMAT_VERSION + 1)
        }
        other => panic!("expected a version error, got {:?}", other.map(|_| ())),
    }
}
