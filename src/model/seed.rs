// SPDX-FileCopyrightText: 2026 Porter Maintainers
// SPDX-License-Identifier: MIT

//! Built-in UB North Campus map.
//!
//! Seed data is constructed fresh per call and handed around by reference;
//! there is deliberately no module-level singleton.

use super::campus::{CampusMap, Location};

/// Builds the University at Buffalo North Campus map: 21 locations and the
/// walkable paths between them, distances in meters.
pub fn ub_north_campus() -> CampusMap {
    let locations: &[(&str, &str, (f64, f64), &str)] = &[
        ("Capen Hall", "CPN", (0.0, 0.0), "Main library and student center"),
        ("Norton Hall", "NRN", (2.0, 0.0), "Engineering and sciences"),
        ("Alumni Arena", "AA", (4.0, 2.0), "Athletics and events"),
        ("Student Union", "SU", (1.0, 1.0), "Student activities center"),
        ("Davis Hall", "DAV", (3.0, -1.0), "Engineering building"),
        ("Baldy Hall", "BLD", (-1.0, 2.0), "Humanities building"),
        ("Clemens Hall", "CLE", (-2.0, 0.0), "Social sciences"),
        ("O'Brian Hall", "OBR", (0.0, 3.0), "Law school"),
        ("Jacobs Management Center", "JMC", (2.0, 3.0), "Business school"),
        ("Furnas Hall", "FUR", (4.0, 0.0), "Engineering labs"),
        ("Knox Hall", "KNX", (-1.0, -1.0), "Natural sciences"),
        ("Park Hall", "PRK", (-2.0, 2.0), "Arts and humanities"),
        ("Ellicott Complex", "ELL", (5.0, -2.0), "Residence hall complex"),
        ("Greiner Hall", "GRN", (1.0, -3.0), "Residence hall"),
        ("Governors Complex", "GOV", (-3.0, -2.0), "Residence hall complex"),
        ("C3 Dining Center", "C3", (5.0, -1.0), "Main dining facility"),
        ("One World Café", "OWC", (1.0, 0.0), "Café and dining"),
        ("The Cellar", "CEL", (0.0, 1.0), "Basement dining area"),
        ("UB Commons", "UBC", (2.0, 1.0), "Shopping and services"),
        ("Baird Point", "BPD", (-1.0, 3.0), "Outdoor gathering space"),
        ("Center for the Arts", "CFA", (-2.0, 1.0), "Arts and performances"),
    ];

    let connections: &[(&str, &str, f64)] = &[
        // Main academic area
        ("Capen Hall", "Norton Hall", 200.0),
        ("Capen Hall", "Student Union", 150.0),
        ("Capen Hall", "One World Café", 100.0),
        ("Capen Hall", "Baldy Hall", 180.0),
        ("Capen Hall", "Clemens Hall", 220.0),
        ("Capen Hall", "Knox Hall", 250.0),
        // Engineering area
        ("Norton Hall", "Davis Hall", 150.0),
        ("Norton Hall", "Furnas Hall", 200.0),
        ("Davis Hall", "Furnas Hall", 100.0),
        // Student life area
        ("Student Union", "One World Café", 50.0),
        ("Student Union", "The Cellar", 30.0),
        ("Student Union", "UB Commons", 80.0),
        ("Alumni Arena", "Student Union", 250.0),
        ("Alumni Arena", "Furnas Hall", 180.0),
        // Humanities area
        ("Baldy Hall", "Park Hall", 150.0),
        ("Baldy Hall", "O'Brian Hall", 200.0),
        ("Baldy Hall", "Baird Point", 100.0),
        ("Clemens Hall", "Park Hall", 180.0),
        ("Park Hall", "Center for the Arts", 120.0),
        // Professional schools
        ("O'Brian Hall", "Jacobs Management Center", 150.0),
        ("O'Brian Hall", "Baird Point", 80.0),
        // Residence halls
        ("Ellicott Complex", "C3 Dining Center", 50.0),
        ("Ellicott Complex", "Furnas Hall", 300.0),
        ("Greiner Hall", "Knox Hall", 200.0),
        ("Greiner Hall", "Clemens Hall", 250.0),
        ("Governors Complex", "Park Hall", 300.0),
        ("Governors Complex", "Center for the Arts", 250.0),
        // Dining
        ("C3 Dining Center", "Alumni Arena", 350.0),
        ("One World Café", "UB Commons", 100.0),
        ("The Cellar", "UB Commons", 80.0),
        // Cross-campus
        ("UB Commons", "Alumni Arena", 200.0),
        ("Baird Point", "Center for the Arts", 150.0),
        ("Jacobs Management Center", "Alumni Arena", 300.0),
    ];

    let mut map = CampusMap::new();
    for (name, code, coordinate, description) in locations {
        map.add_location(Location::new(*name, *code, *coordinate, *description, true))
            .expect("seed locations are unique");
    }
    for (a, b, meters) in connections {
        map.add_connection(a, b, *meters)
            .expect("seed connections reference seeded locations");
    }
    map
}
