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

/// One leg of an itinerary. Every bus leg is preceded by a wait at its
/// boarding stop, even when the configured wait time is zero.
#[derive(Debug, Clone, PartialEq)]
pub enum ItineraryItem {
    Wait {
        stop_name: String,
        /// minutes
        time: u32,
    },
    Bus {
        bus: String,
        /// number of stop-to-stop hops ridden on this boarding
        span_count: u32,
        /// minutes
        time: f64,
    },
}

impl ItineraryItem {
    pub fn time(&self) -> f64 {
        match self {
            ItineraryItem::Wait { time, .. } => f64::from(*time),
            ItineraryItem::Bus { time, .. } => *time,
        }
    }
}

/// Answer to a journey query: alternating Wait and Bus items. Staying at
/// the departure stop is the empty itinerary.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Itinerary {
    /// minutes
    pub total_time: f64,
    pub items: Vec<ItineraryItem>,
}
