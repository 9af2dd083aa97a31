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

use std::f64::consts::PI;

/// Mean Earth radius, in meters.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// A point on the Earth surface, latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Great-circle distance between two points, in meters, by the spherical
/// law of cosines.
pub fn distance_between(from: Coordinates, to: Coordinates) -> f64 {
    if from == to {
        return 0.0;
    }
    let dr = PI / 180.0;
    let inner = f64::sin(from.lat * dr) * f64::sin(to.lat * dr)
        + f64::cos(from.lat * dr) * f64::cos(to.lat * dr) * f64::cos((from.lng - to.lng).abs() * dr);
    // rounding may push the inner product slightly outside [-1, 1] for
    // near-identical points, and acos would then return NaN
    inner.min(1.0).max(-1.0).acos() * EARTH_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_have_zero_distance() {
        let point = Coordinates::new(55.611087, 37.20829);
        assert_eq!(distance_between(point, point), 0.0);
    }

    #[test]
    fn near_identical_points_do_not_produce_nan() {
        let from = Coordinates::new(55.611087, 37.20829);
        let to = Coordinates::new(55.611087, 37.208290000000001);
        let distance = distance_between(from, to);
        assert!(distance.is_finite());
        assert!(distance >= 0.0);
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let from = Coordinates::new(0.0, 0.0);
        let to = Coordinates::new(0.0, 1.0);
        let expected = EARTH_RADIUS * PI / 180.0;
        assert!((distance_between(from, to) - expected).abs() < 1e-6);
    }

    #[test]
    fn distance_is_symmetric() {
        let from = Coordinates::new(55.574371, 37.6517);
        let to = Coordinates::new(55.587655, 37.645687);
        assert!((distance_between(from, to) - distance_between(to, from)).abs() < 1e-9);
    }
}
