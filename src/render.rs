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

use std::collections::BTreeSet;
use std::fmt;

use crate::catalogue::{Route, RouteKind, TransportCatalogue};
use crate::config::{Color, RenderSettings};
use crate::geo::Coordinates;

// spans of latitude or longitude below this are treated as degenerate
const COORD_EPSILON: f64 = 1e-6;

/// Projects geographic coordinates onto the map canvas: the bounding box
/// of the given points is scaled to fit `width x height` minus `padding`
/// on every side, keeping the aspect ratio (the smaller of the two zoom
/// coefficients wins).
pub struct MapProjector {
    padding: f64,
    min_lng: f64,
    max_lat: f64,
    zoom: f64,
}

impl MapProjector {
    pub fn new(points: &[Coordinates], width: f64, height: f64, padding: f64) -> Self {
        let mut projector = Self {
            padding,
            min_lng: 0.0,
            max_lat: 0.0,
            zoom: 0.0,
        };
        let first = match points.first() {
            Some(point) => *point,
            None => return projector,
        };
        let mut min_lng = first.lng;
        let mut max_lng = first.lng;
        let mut min_lat = first.lat;
        let mut max_lat = first.lat;
        for point in points {
            min_lng = min_lng.min(point.lng);
            max_lng = max_lng.max(point.lng);
            min_lat = min_lat.min(point.lat);
            max_lat = max_lat.max(point.lat);
        }

        let width_zoom = if (max_lng - min_lng).abs() < COORD_EPSILON {
            None
        } else {
            Some((width - 2.0 * padding) / (max_lng - min_lng))
        };
        let height_zoom = if (max_lat - min_lat).abs() < COORD_EPSILON {
            None
        } else {
            Some((height - 2.0 * padding) / (max_lat - min_lat))
        };

        projector.min_lng = min_lng;
        projector.max_lat = max_lat;
        projector.zoom = match (width_zoom, height_zoom) {
            (Some(width_zoom), Some(height_zoom)) => width_zoom.min(height_zoom),
            (Some(width_zoom), None) => width_zoom,
            (None, Some(height_zoom)) => height_zoom,
            (None, None) => 0.0,
        };
        projector
    }

    pub fn project(&self, coordinates: Coordinates) -> (f64, f64) {
        (
            (coordinates.lng - self.min_lng) * self.zoom + self.padding,
            (self.max_lat - coordinates.lat) * self.zoom + self.padding,
        )
    }
}

/// Draws the network as an SVG document: route lines, route name labels,
/// stop circles and stop name labels, in that order. Routes and stops
/// are drawn in lexicographic name order; each drawn route takes the
/// next color of the palette.
pub struct MapRenderer {
    settings: RenderSettings,
}

impl MapRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn render(&self, catalogue: &TransportCatalogue) -> String {
        // routes without a single stop are neither drawn nor take a color
        let mut drawn_routes: Vec<&Route> = catalogue
            .routes()
            .iter()
            .filter(|route| !route.stops.is_empty())
            .collect();
        drawn_routes.sort_by(|left, right| left.name.cmp(&right.name));

        let mut stop_names = BTreeSet::new();
        for route in &drawn_routes {
            for stop_id in &route.stops {
                stop_names.insert(catalogue.stop(*stop_id).name.as_str());
            }
        }
        let points: Vec<Coordinates> = stop_names
            .iter()
            .filter_map(|name| catalogue.stop_by_name(name))
            .map(|stop| stop.coordinates)
            .collect();
        let projector = MapProjector::new(
            &points,
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );

        let mut document = SvgDocument::default();

        for (color_index, route) in drawn_routes.iter().enumerate() {
            document.shapes.push(Shape::Polyline(Polyline {
                points: self.traversal_points(catalogue, route, &projector),
                stroke: self.palette_color(color_index),
                stroke_width: self.settings.line_width,
            }));
        }

        for (color_index, route) in drawn_routes.iter().enumerate() {
            let color = self.palette_color(color_index);
            let first = route.stops[0];
            let last = route.stops[route.stops.len() - 1];
            let first_point = projector.project(catalogue.stop(first).coordinates);
            self.push_route_label(&mut document, &route.name, first_point, color.clone());
            if route.kind == RouteKind::Linear && first != last {
                let last_point = projector.project(catalogue.stop(last).coordinates);
                self.push_route_label(&mut document, &route.name, last_point, color);
            }
        }

        for name in &stop_names {
            if let Some(stop) = catalogue.stop_by_name(name) {
                let (cx, cy) = projector.project(stop.coordinates);
                document.shapes.push(Shape::Circle(Circle {
                    center: (cx, cy),
                    radius: self.settings.stop_radius,
                }));
            }
        }

        for name in &stop_names {
            if let Some(stop) = catalogue.stop_by_name(name) {
                let position = projector.project(stop.coordinates);
                self.push_stop_label(&mut document, &stop.name, position);
            }
        }

        document.to_string()
    }

    fn traversal_points(
        &self,
        catalogue: &TransportCatalogue,
        route: &Route,
        projector: &MapProjector,
    ) -> Vec<(f64, f64)> {
        let mut points: Vec<(f64, f64)> = route
            .stops
            .iter()
            .map(|stop_id| projector.project(catalogue.stop(*stop_id).coordinates))
            .collect();
        if route.kind == RouteKind::Linear {
            // the way back, re-using the projected forward leg
            let forward_leg = points.clone();
            points.extend(forward_leg.iter().rev().skip(1));
        }
        points
    }

    fn push_route_label(
        &self,
        document: &mut SvgDocument,
        name: &str,
        position: (f64, f64),
        color: Color,
    ) {
        document.shapes.push(Shape::Text(Text {
            fill: self.settings.underlayer_color.clone(),
            stroke: Some((
                self.settings.underlayer_color.clone(),
                self.settings.underlayer_width,
            )),
            position,
            offset: self.settings.bus_label_offset,
            font_size: self.settings.bus_label_font_size,
            bold: true,
            data: name.to_string(),
        }));
        document.shapes.push(Shape::Text(Text {
            fill: color,
            stroke: None,
            position,
            offset: self.settings.bus_label_offset,
            font_size: self.settings.bus_label_font_size,
            bold: true,
            data: name.to_string(),
        }));
    }

    fn push_stop_label(&self, document: &mut SvgDocument, name: &str, position: (f64, f64)) {
        document.shapes.push(Shape::Text(Text {
            fill: self.settings.underlayer_color.clone(),
            stroke: Some((
                self.settings.underlayer_color.clone(),
                self.settings.underlayer_width,
            )),
            position,
            offset: self.settings.stop_label_offset,
            font_size: self.settings.stop_label_font_size,
            bold: false,
            data: name.to_string(),
        }));
        document.shapes.push(Shape::Text(Text {
            fill: Color::Text("black".to_string()),
            stroke: None,
            position,
            offset: self.settings.stop_label_offset,
            font_size: self.settings.stop_label_font_size,
            bold: false,
            data: name.to_string(),
        }));
    }

    fn palette_color(&self, index: usize) -> Color {
        if self.settings.color_palette.is_empty() {
            return Color::default();
        }
        self.settings.color_palette[index % self.settings.color_palette.len()].clone()
    }
}

// ---------------------------------------------------------------- svg ----

#[derive(Default)]
struct SvgDocument {
    shapes: Vec<Shape>,
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>")?;
        writeln!(
            f,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">"
        )?;
        for shape in &self.shapes {
            writeln!(f, "  {}", shape)?;
        }
        write!(f, "</svg>")
    }
}

enum Shape {
    Polyline(Polyline),
    Text(Text),
    Circle(Circle),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Polyline(polyline) => polyline.fmt(f),
            Shape::Text(text) => text.fmt(f),
            Shape::Circle(circle) => circle.fmt(f),
        }
    }
}

struct Polyline {
    points: Vec<(f64, f64)>,
    stroke: Color,
    stroke_width: f64,
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<polyline points=\"")?;
        for (index, (x, y)) in self.points.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{},{}", x, y)?;
        }
        write!(
            f,
            "\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" \
             stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
            self.stroke, self.stroke_width
        )
    }
}

struct Text {
    fill: Color,
    // underlayer stroke and its width
    stroke: Option<(Color, f64)>,
    position: (f64, f64),
    offset: (f64, f64),
    font_size: u32,
    bold: bool,
    data: String,
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<text fill=\"{}\"", self.fill)?;
        if let Some((stroke, stroke_width)) = &self.stroke {
            write!(
                f,
                " stroke=\"{}\" stroke-width=\"{}\" \
                 stroke-linecap=\"round\" stroke-linejoin=\"round\"",
                stroke, stroke_width
            )?;
        }
        write!(
            f,
            " x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\" font-family=\"Verdana\"",
            self.position.0, self.position.1, self.offset.0, self.offset.1, self.font_size
        )?;
        if self.bold {
            write!(f, " font-weight=\"bold\"")?;
        }
        write!(f, ">{}</text>", EscapedText(&self.data))
    }
}

struct Circle {
    center: (f64, f64),
    radius: f64,
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"white\"/>",
            self.center.0, self.center.1, self.radius
        )
    }
}

// label data with the xml special characters escaped
struct EscapedText<'a>(&'a str);

impl<'a> fmt::Display for EscapedText<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for character in self.0.chars() {
            match character {
                '&' => write!(f, "&amp;")?,
                '<' => write!(f, "&lt;")?,
                '>' => write!(f, "&gt;")?,
                '"' => write!(f, "&quot;")?,
                '\'' => write!(f, "&apos;")?,
                other => write!(f, "{}", other)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projector_fits_the_bounding_box_into_the_canvas() {
        let points = vec![Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 1.0)];
        let projector = MapProjector::new(&points, 200.0, 200.0, 50.0);

        // zoom = (200 - 2 * 50) / 1 = 100
        assert_eq!(projector.project(Coordinates::new(1.0, 0.0)), (50.0, 50.0));
        assert_eq!(projector.project(Coordinates::new(0.0, 0.0)), (50.0, 150.0));
        assert_eq!(projector.project(Coordinates::new(0.0, 1.0)), (150.0, 150.0));
    }

    #[test]
    fn projector_handles_a_single_point() {
        let points = vec![Coordinates::new(43.587795, 39.716901)];
        let projector = MapProjector::new(&points, 400.0, 400.0, 30.0);
        assert_eq!(
            projector.project(Coordinates::new(43.587795, 39.716901)),
            (30.0, 30.0)
        );
    }

    #[test]
    fn text_escapes_markup() {
        let text = Text {
            fill: Color::Text("black".to_string()),
            stroke: None,
            position: (0.0, 0.0),
            offset: (0.0, 0.0),
            font_size: 10,
            bold: false,
            data: "Tom & \"Jerry\" <stop>".to_string(),
        };
        assert!(text
            .to_string()
            .contains("Tom &amp; &quot;Jerry&quot; &lt;stop&gt;"));
    }
}
