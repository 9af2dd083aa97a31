// Copyright (C) 2020 Hove and/or its affiliates.
//
// This program is free software: you can redistribute it and/or modify it
// under the terms of the GNU Affero General Public License as published by the
// Free Software Foundation, version 3.

// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more
// details.

// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>

//! Provides an easy way to create a `TransportCatalogue`
//!
//! ```
//! let catalogue = CatalogueBuilder::new()
//!     .stop("A", 55.574371, 37.6517)
//!     .stop("B", 55.587655, 37.645687)
//!     .distance("A", "B", 600)
//!     .linear("14", &["A", "B"])
//!     .build();
//! ```

#![allow(dead_code)]

use mimir::geo::Coordinates;
use mimir::{RouteKind, TransportCatalogue};

pub struct CatalogueBuilder {
    catalogue: TransportCatalogue,
}

impl Default for CatalogueBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogueBuilder {
    pub fn new() -> Self {
        Self {
            catalogue: TransportCatalogue::new(),
        }
    }

    pub fn stop(mut self, name: &str, lat: f64, lng: f64) -> Self {
        self.catalogue
            .add_stop(name, Coordinates::new(lat, lng))
            .unwrap_or_else(|err| panic!("could not add stop '{}': {}", name, err));
        self
    }

    pub fn distance(mut self, from: &str, to: &str, meters: u64) -> Self {
        self.catalogue
            .set_distance(from, to, meters)
            .unwrap_or_else(|err| panic!("could not set distance '{}'->'{}': {}", from, to, err));
        self
    }

    pub fn linear(mut self, name: &str, stops: &[&str]) -> Self {
        self.catalogue
            .add_route(name, RouteKind::Linear, stops.iter().copied())
            .unwrap_or_else(|err| panic!("could not add route '{}': {}", name, err));
        self
    }

    pub fn circle(mut self, name: &str, stops: &[&str]) -> Self {
        self.catalogue
            .add_route(name, RouteKind::Circle, stops.iter().copied())
            .unwrap_or_else(|err| panic!("could not add route '{}': {}", name, err));
        self
    }

    pub fn build(self) -> TransportCatalogue {
        self.catalogue
    }
}
