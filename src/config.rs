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
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Journey-time parameters of the router.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// time spent waiting at a stop before each boarding, in minutes
    pub bus_wait_time: u32,
    /// cruise speed of every bus, in km/h
    pub bus_velocity: f64,
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 0,
            bus_velocity: 0.0,
        }
    }
}

/// A color the way the input dialect spells them: a textual color name,
/// an rgb triple, or an rgb triple with opacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Text(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl Default for Color {
    fn default() -> Self {
        Color::Text("none".to_string())
    }
}

// the svg attribute form
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Text(name) => write!(f, "{}", name),
            Color::Rgb(red, green, blue) => write!(f, "rgb({},{},{})", red, green, blue),
            Color::Rgba(red, green, blue, opacity) => {
                write!(f, "rgba({},{},{},{})", red, green, blue, opacity)
            }
        }
    }
}

/// Figure of the rendered map. Opaque to the catalogue and the router,
/// but round-trips losslessly through the snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: (f64, f64),
    pub stop_label_font_size: u32,
    pub stop_label_offset: (f64, f64),
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    pub color_palette: Vec<Color>,
}

/// Where the base snapshot lives on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializationSettings {
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_reads_every_input_spelling() {
        let named: Color = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(named, Color::Text("green".to_string()));

        let rgb: Color = serde_json::from_str("[255, 160, 0]").unwrap();
        assert_eq!(rgb, Color::Rgb(255, 160, 0));

        let rgba: Color = serde_json::from_str("[255, 255, 255, 0.85]").unwrap();
        assert_eq!(rgba, Color::Rgba(255, 255, 255, 0.85));
    }

    #[test]
    fn color_displays_as_svg_attribute() {
        assert_eq!(Color::Text("green".to_string()).to_string(), "green");
        assert_eq!(Color::Rgb(255, 16, 12).to_string(), "rgb(255,16,12)");
        assert_eq!(
            Color::Rgba(255, 200, 23, 0.85).to_string(),
            "rgba(255,200,23,0.85)"
        );
    }
}
