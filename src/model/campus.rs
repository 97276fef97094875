// SPDX-FileCopyrightText: 2026 Porter Maintainers
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named point of interest on the campus.
///
/// Locations are created once at map initialization and are immutable
/// afterwards; everything else in the crate refers to them by name only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    code: String,
    coordinate: (f64, f64),
    description: String,
    is_delivery_point: bool,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        coordinate: (f64, f64),
        description: impl Into<String>,
        is_delivery_point: bool,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            coordinate,
            description: description.into(),
            is_delivery_point,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn coordinate(&self) -> (f64, f64) {
        self.coordinate
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_delivery_point(&self) -> bool {
        self.is_delivery_point
    }
}

/// Undirected weighted graph of campus locations.
///
/// Adjacency is stored per endpoint in `BTreeMap`s so every iteration order
/// is deterministic; an edge between `a` and `b` is registered under both.
/// The map is an explicit object handed by reference to planners and the
/// ledger, never a process-wide singleton. It is read-only after startup in
/// normal operation; callers that mutate it at runtime must serialize those
/// mutations alongside ledger writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampusMap {
    locations: BTreeMap<String, Location>,
    adjacency: BTreeMap<String, BTreeMap<String, f64>>,
}

impl CampusMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a location. The name is the primary key; re-adding an
    /// existing name is refused rather than overwritten.
    pub fn add_location(&mut self, location: Location) -> Result<(), MapError> {
        if self.locations.contains_key(location.name()) {
            return Err(MapError::DuplicateLocation {
                name: location.name().to_owned(),
            });
        }
        self.adjacency.entry(location.name().to_owned()).or_default();
        self.locations.insert(location.name().to_owned(), location);
        Ok(())
    }

    /// Registers a symmetric connection between two known locations.
    ///
    /// Re-adding an existing pair overwrites the stored weight (last write
    /// wins). Self-loops and non-positive or non-finite distances are
    /// refused.
    pub fn add_connection(
        &mut self,
        a: &str,
        b: &str,
        meters: f64,
    ) -> Result<(), MapError> {
        for name in [a, b] {
            if !self.locations.contains_key(name) {
                return Err(MapError::UnknownLocation {
                    name: name.to_owned(),
                });
            }
        }
        if a == b {
            return Err(MapError::SelfLoop {
                name: a.to_owned(),
            });
        }
        if !(meters.is_finite() && meters > 0.0) {
            return Err(MapError::InvalidDistance {
                from: a.to_owned(),
                to: b.to_owned(),
                meters,
            });
        }

        self.adjacency
            .entry(a.to_owned())
            .or_default()
            .insert(b.to_owned(), meters);
        self.adjacency
            .entry(b.to_owned())
            .or_default()
            .insert(a.to_owned(), meters);
        Ok(())
    }

    pub fn location(&self, name: &str) -> Result<&Location, MapError> {
        self.locations.get(name).ok_or_else(|| MapError::UnknownLocation {
            name: name.to_owned(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    /// Adjacent locations with their edge weights; empty for an isolated
    /// location, an error for an unknown one.
    pub fn neighbors(&self, name: &str) -> Result<&BTreeMap<String, f64>, MapError> {
        self.adjacency.get(name).ok_or_else(|| MapError::UnknownLocation {
            name: name.to_owned(),
        })
    }

    /// Direct edge weight between two locations, if they are connected.
    pub fn distance(&self, a: &str, b: &str) -> Option<f64> {
        self.adjacency.get(a).and_then(|edges| edges.get(b)).copied()
    }

    pub fn locations(&self) -> &BTreeMap<String, Location> {
        &self.locations
    }

    pub fn location_names(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }

    pub fn delivery_points(&self) -> impl Iterator<Item = &Location> {
        self.locations.values().filter(|loc| loc.is_delivery_point())
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn connection_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }
}

impl fmt::Display for CampusMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CampusMap with {} locations and {} paths",
            self.location_count(),
            self.connection_count()
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    DuplicateLocation { name: String },
    UnknownLocation { name: String },
    SelfLoop { name: String },
    InvalidDistance { from: String, to: String, meters: f64 },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLocation { name } => {
                write!(f, "location '{name}' already exists")
            }
            Self::UnknownLocation { name } => write!(f, "unknown location '{name}'"),
            Self::SelfLoop { name } => {
                write!(f, "connection from '{name}' to itself is not allowed")
            }
            Self::InvalidDistance { from, to, meters } => {
                write!(
                    f,
                    "invalid distance {meters} m between '{from}' and '{to}' (must be finite and > 0)"
                )
            }
        }
    }
}

impl std::error::Error for MapError {}
