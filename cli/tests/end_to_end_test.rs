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

use std::path::PathBuf;

use serde_json::{json, Value};

use mimir_cli::logger::init_test_logger;
use mimir_cli::{run_make_base, run_process_requests};

fn snapshot_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("mimir_{}_{}.base", tag, std::process::id()))
}

fn make_base(path: &PathBuf) {
    let input = json!({
        "serialization_settings": { "file": path },
        "routing_settings": { "bus_wait_time": 6, "bus_velocity": 36 },
        "render_settings": {
            "width": 600.0,
            "height": 400.0,
            "padding": 50.0,
            "line_width": 14.0,
            "stop_radius": 5.0,
            "bus_label_font_size": 20,
            "bus_label_offset": [7.0, 15.0],
            "stop_label_font_size": 18,
            "stop_label_offset": [7.0, -3.0],
            "underlayer_color": [255, 255, 255, 0.85],
            "underlayer_width": 3.0,
            "color_palette": ["green", [255, 160, 0], "red"]
        },
        "base_requests": [
            {
                "type": "Stop",
                "name": "Harbour",
                "latitude": 43.587795,
                "longitude": 39.716901,
                "road_distances": { "Bridge": 600 }
            },
            {
                "type": "Stop",
                "name": "Bridge",
                "latitude": 43.581969,
                "longitude": 39.719848,
                "road_distances": { "Harbour": 600 }
            },
            {
                "type": "Bus",
                "name": "114",
                "stops": ["Harbour", "Bridge"],
                "is_roundtrip": false
            }
        ]
    });
    run_make_base(serde_json::to_vec(&input).unwrap().as_slice()).unwrap();
}

fn process(path: &PathBuf, stat_requests: Value) -> Vec<Value> {
    let input = json!({
        "serialization_settings": { "file": path },
        "stat_requests": stat_requests,
    });
    let mut output = Vec::new();
    run_process_requests(serde_json::to_vec(&input).unwrap().as_slice(), &mut output).unwrap();
    let answers: Value = serde_json::from_slice(&output).unwrap();
    answers.as_array().unwrap().clone()
}

#[test]
fn the_two_phases_answer_every_request_kind_in_order() {
    let _log = init_test_logger();
    let path = snapshot_path("all_kinds");
    make_base(&path);

    let answers = process(
        &path,
        json!([
            { "id": 1, "type": "Bus", "name": "114" },
            { "id": 2, "type": "Stop", "name": "Harbour" },
            { "id": 3, "type": "Route", "from": "Harbour", "to": "Bridge" },
            { "id": 4, "type": "Stop", "name": "Nowhere" },
            { "id": 5, "type": "Map" },
        ]),
    );
    std::fs::remove_file(&path).unwrap();

    assert_eq!(answers.len(), 5);

    assert_eq!(answers[0]["request_id"], json!(1));
    assert_eq!(answers[0]["route_length"], json!(1200));
    assert_eq!(answers[0]["stop_count"], json!(3));
    assert_eq!(answers[0]["unique_stop_count"], json!(2));
    assert!(answers[0]["curvature"].as_f64().unwrap() > 0.0);

    assert_eq!(answers[1]["request_id"], json!(2));
    assert_eq!(answers[1]["buses"], json!(["114"]));

    assert_eq!(answers[2]["request_id"], json!(3));
    assert!((answers[2]["total_time"].as_f64().unwrap() - 7.0).abs() < 1e-9);
    assert_eq!(
        answers[2]["items"],
        json!([
            { "stop_name": "Harbour", "time": 6, "type": "Wait" },
            { "bus": "114", "span_count": 1, "time": 1.0, "type": "Bus" },
        ])
    );

    assert_eq!(answers[3]["request_id"], json!(4));
    assert_eq!(answers[3]["error_message"], json!("not found"));

    assert_eq!(answers[4]["request_id"], json!(5));
    let map = answers[4]["map"].as_str().unwrap();
    assert!(map.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>"));
    assert!(map.contains(">114</text>"));
}

#[test]
fn an_unreachable_journey_answers_not_found() {
    let _log = init_test_logger();
    let path = snapshot_path("unreachable");
    let input = json!({
        "serialization_settings": { "file": path },
        "routing_settings": { "bus_wait_time": 6, "bus_velocity": 36 },
        "base_requests": [
            { "type": "Stop", "name": "A", "latitude": 43.5, "longitude": 39.7,
              "road_distances": { "B": 600 } },
            { "type": "Stop", "name": "B", "latitude": 43.6, "longitude": 39.8 },
            { "type": "Stop", "name": "C", "latitude": 43.7, "longitude": 39.9,
              "road_distances": { "D": 600 } },
            { "type": "Stop", "name": "D", "latitude": 43.8, "longitude": 40.0 },
            { "type": "Bus", "name": "1", "stops": ["A", "B"], "is_roundtrip": false },
            { "type": "Bus", "name": "2", "stops": ["C", "D"], "is_roundtrip": false }
        ]
    });
    run_make_base(serde_json::to_vec(&input).unwrap().as_slice()).unwrap();

    let answers = process(
        &path,
        json!([{ "id": 7, "type": "Route", "from": "A", "to": "D" }]),
    );
    std::fs::remove_file(&path).unwrap();

    assert_eq!(
        answers[0],
        json!({ "request_id": 7, "error_message": "not found" })
    );
}

#[test]
fn staying_put_is_an_empty_itinerary() {
    let _log = init_test_logger();
    let path = snapshot_path("stay_put");
    make_base(&path);

    let answers = process(
        &path,
        json!([{ "id": 11, "type": "Route", "from": "Harbour", "to": "Harbour" }]),
    );
    std::fs::remove_file(&path).unwrap();

    assert_eq!(
        answers[0],
        json!({ "items": [], "request_id": 11, "total_time": 0.0 })
    );
}

#[test]
fn malformed_descriptors_and_requests_are_dropped_not_fatal() {
    let _log = init_test_logger();
    let path = snapshot_path("malformed");
    let input = json!({
        "serialization_settings": { "file": path },
        "routing_settings": { "bus_wait_time": 6, "bus_velocity": 36 },
        "base_requests": [
            { "type": "Stop", "name": "A", "latitude": 43.5, "longitude": 39.7 },
            { "type": "Stop" },
            { "type": "Bus", "name": "dangling", "stops": ["A", "Ghost"],
              "is_roundtrip": false },
            { "type": "Bus", "name": "ok", "stops": ["A"], "is_roundtrip": false }
        ]
    });
    run_make_base(serde_json::to_vec(&input).unwrap().as_slice()).unwrap();

    let answers = process(
        &path,
        json!([
            { "id": 1, "type": "Bus" },
            { "id": 2, "type": "Bus", "name": "ok" },
            { "id": 3, "type": "Bus", "name": "dangling" },
        ]),
    );
    std::fs::remove_file(&path).unwrap();

    // the malformed request is dropped, the dangling route was rejected
    // at ingest, the valid one answers
    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0]["request_id"], json!(2));
    assert_eq!(answers[0]["stop_count"], json!(1));
    assert_eq!(answers[1], json!({ "request_id": 3, "error_message": "not found" }));
}

#[test]
fn a_missing_snapshot_skips_the_batch_quietly() {
    let _log = init_test_logger();
    let path = snapshot_path("never_written");

    let input = json!({
        "serialization_settings": { "file": path },
        "stat_requests": [{ "id": 1, "type": "Map" }],
    });
    let mut output = Vec::new();
    run_process_requests(serde_json::to_vec(&input).unwrap().as_slice(), &mut output).unwrap();
    assert!(output.is_empty());
}
