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

//! Wire messages of the base snapshot. Field tags are part of the format
//! and must stay stable across versions; new fields get new tags.

/// Top-level message of the snapshot file: the four blocks, in order.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Base {
    #[prost(uint32, tag = "1")]
    pub version: u32,
    #[prost(message, optional, tag = "2")]
    pub catalogue: ::core::option::Option<Catalogue>,
    #[prost(message, optional, tag = "3")]
    pub render_settings: ::core::option::Option<RenderSettings>,
    #[prost(message, optional, tag = "4")]
    pub routing_settings: ::core::option::Option<RoutingSettings>,
    #[prost(message, optional, tag = "5")]
    pub graph: ::core::option::Option<Graph>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Catalogue {
    #[prost(message, repeated, tag = "1")]
    pub stops: ::prost::alloc::vec::Vec<Stop>,
    #[prost(message, repeated, tag = "2")]
    pub routes: ::prost::alloc::vec::Vec<Route>,
    #[prost(message, repeated, tag = "3")]
    pub distances: ::prost::alloc::vec::Vec<Distance>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Stop {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(double, tag = "2")]
    pub lat: f64,
    #[prost(double, tag = "3")]
    pub lng: f64,
    #[prost(uint64, tag = "4")]
    pub id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Route {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(bool, tag = "2")]
    pub is_circular: bool,
    #[prost(uint64, repeated, tag = "3")]
    pub stop_ids: ::prost::alloc::vec::Vec<u64>,
    #[prost(uint64, tag = "4")]
    pub id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Distance {
    #[prost(uint64, tag = "1")]
    pub from_id: u64,
    #[prost(uint64, tag = "2")]
    pub to_id: u64,
    #[prost(uint64, tag = "3")]
    pub meters: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RenderSettings {
    #[prost(double, tag = "1")]
    pub width: f64,
    #[prost(double, tag = "2")]
    pub height: f64,
    #[prost(double, tag = "3")]
    pub padding: f64,
    #[prost(double, tag = "4")]
    pub line_width: f64,
    #[prost(double, tag = "5")]
    pub stop_radius: f64,
    #[prost(uint32, tag = "6")]
    pub bus_label_font_size: u32,
    #[prost(double, repeated, tag = "7")]
    pub bus_label_offset: ::prost::alloc::vec::Vec<f64>,
    #[prost(uint32, tag = "8")]
    pub stop_label_font_size: u32,
    #[prost(double, repeated, tag = "9")]
    pub stop_label_offset: ::prost::alloc::vec::Vec<f64>,
    #[prost(message, optional, tag = "10")]
    pub underlayer_color: ::core::option::Option<Color>,
    #[prost(double, tag = "11")]
    pub underlayer_width: f64,
    #[prost(message, repeated, tag = "12")]
    pub color_palette: ::prost::alloc::vec::Vec<Color>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Color {
    #[prost(oneof = "color::Kind", tags = "1, 2, 3")]
    pub kind: ::core::option::Option<color::Kind>,
}

/// Nested message and enum types in `Color`.
pub mod color {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Kind {
        #[prost(string, tag = "1")]
        Text(::prost::alloc::string::String),
        #[prost(message, tag = "2")]
        Rgb(super::Rgb),
        #[prost(message, tag = "3")]
        Rgba(super::Rgba),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Rgb {
    #[prost(uint32, tag = "1")]
    pub red: u32,
    #[prost(uint32, tag = "2")]
    pub green: u32,
    #[prost(uint32, tag = "3")]
    pub blue: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Rgba {
    #[prost(uint32, tag = "1")]
    pub red: u32,
    #[prost(uint32, tag = "2")]
    pub green: u32,
    #[prost(uint32, tag = "3")]
    pub blue: u32,
    #[prost(double, tag = "4")]
    pub opacity: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RoutingSettings {
    #[prost(uint32, tag = "1")]
    pub bus_wait_time: u32,
    #[prost(double, tag = "2")]
    pub bus_velocity: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Graph {
    #[prost(message, repeated, tag = "1")]
    pub edges: ::prost::alloc::vec::Vec<Edge>,
    #[prost(message, repeated, tag = "2")]
    pub incidence_lists: ::prost::alloc::vec::Vec<IncidenceList>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Edge {
    #[prost(uint64, tag = "1")]
    pub from: u64,
    #[prost(uint64, tag = "2")]
    pub to: u64,
    #[prost(double, tag = "3")]
    pub weight: f64,
    #[prost(uint32, tag = "4")]
    pub span_count: u32,
    #[prost(uint64, tag = "5")]
    pub route_id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IncidenceList {
    #[prost(uint64, repeated, tag = "1")]
    pub edge_ids: ::prost::alloc::vec::Vec<u64>,
}
