// SPDX-FileCopyrightText: 2026 Porter Maintainers
// SPDX-License-Identifier: MIT

use super::campus::{CampusMap, Location, MapError};
use super::ids::{IdError, OrderId};
use super::order::{Order, OrderStatus};
use super::seed;

fn loc(name: &str) -> Location {
    Location::new(name, "X", (0.0, 0.0), "", true)
}

#[test]
fn add_location_rejects_duplicate_name() {
    let mut map = CampusMap::new();
    map.add_location(loc("Capen Hall")).expect("first insert");

    let err = map.add_location(loc("Capen Hall")).unwrap_err();
    assert_eq!(
        err,
        MapError::DuplicateLocation {
            name: "Capen Hall".to_owned()
        }
    );
}

#[test]
fn add_connection_registers_both_directions() {
    let mut map = CampusMap::new();
    map.add_location(loc("A")).unwrap();
    map.add_location(loc("B")).unwrap();
    map.add_connection("A", "B", 120.0).expect("connect");

    assert_eq!(map.distance("A", "B"), Some(120.0));
    assert_eq!(map.distance("B", "A"), Some(120.0));
    assert_eq!(map.connection_count(), 1);
}

#[test]
fn add_connection_rejects_unknown_endpoint() {
    let mut map = CampusMap::new();
    map.add_location(loc("A")).unwrap();

    let err = map.add_connection("A", "Nowhere", 10.0).unwrap_err();
    assert_eq!(
        err,
        MapError::UnknownLocation {
            name: "Nowhere".to_owned()
        }
    );
}

#[test]
fn add_connection_rejects_self_loop_and_bad_distances() {
    let mut map = CampusMap::new();
    map.add_location(loc("A")).unwrap();
    map.add_location(loc("B")).unwrap();

    assert!(matches!(
        map.add_connection("A", "A", 5.0),
        Err(MapError::SelfLoop { .. })
    ));
    assert!(matches!(
        map.add_connection("A", "B", 0.0),
        Err(MapError::InvalidDistance { .. })
    ));
    assert!(matches!(
        map.add_connection("A", "B", -3.0),
        Err(MapError::InvalidDistance { .. })
    ));
    assert!(matches!(
        map.add_connection("A", "B", f64::NAN),
        Err(MapError::InvalidDistance { .. })
    ));
}

#[test]
fn add_connection_last_write_wins_on_repeat() {
    let mut map = CampusMap::new();
    map.add_location(loc("A")).unwrap();
    map.add_location(loc("B")).unwrap();
    map.add_connection("A", "B", 120.0).unwrap();
    map.add_connection("A", "B", 90.0).unwrap();

    assert_eq!(map.distance("A", "B"), Some(90.0));
    assert_eq!(map.distance("B", "A"), Some(90.0));
    assert_eq!(map.connection_count(), 1);
}

#[test]
fn neighbors_is_empty_for_isolated_location_and_errs_for_unknown() {
    let mut map = CampusMap::new();
    map.add_location(loc("Lone")).unwrap();

    assert!(map.neighbors("Lone").expect("known location").is_empty());
    assert!(matches!(
        map.neighbors("Ghost"),
        Err(MapError::UnknownLocation { .. })
    ));
}

#[test]
fn order_id_validation() {
    assert!(OrderId::new("ORD-0001").is_ok());
    assert_eq!(OrderId::new("").unwrap_err(), IdError::Empty);
    assert_eq!(
        OrderId::new("ORD 1").unwrap_err(),
        IdError::ContainsWhitespace
    );
}

#[test]
fn order_lifecycle_is_monotonic() {
    let id = OrderId::new("ORD-0001").unwrap();
    let mut order = Order::new(
        id,
        "Alice",
        "Capen Hall",
        "Norton Hall",
        vec!["Pizza".to_owned()],
        0,
    );
    assert_eq!(order.status(), OrderStatus::Pending);
    assert!(order.completed_at().is_none());

    order.transition(OrderStatus::InProgress).expect("start");
    order.transition(OrderStatus::Completed).expect("finish");
    assert!(order.completed_at().is_some());

    let err = order.transition(OrderStatus::Cancelled).unwrap_err();
    assert_eq!(err.from, OrderStatus::Completed);
    assert_eq!(err.to, OrderStatus::Cancelled);
}

#[test]
fn order_cannot_skip_in_progress() {
    let id = OrderId::new("ORD-0002").unwrap();
    let mut order = Order::new(id, "Bob", "A", "B", vec!["Tea".to_owned()], 1);

    assert!(order.transition(OrderStatus::Completed).is_err());
    order.transition(OrderStatus::Cancelled).expect("cancel from pending");
    assert!(order.transition(OrderStatus::InProgress).is_err());
}

#[test]
fn seed_campus_matches_expected_shape() {
    let map = seed::ub_north_campus();
    assert_eq!(map.location_count(), 21);
    assert_eq!(map.connection_count(), 33);
    assert_eq!(map.distance("Capen Hall", "Norton Hall"), Some(200.0));
    assert_eq!(map.distance("Student Union", "The Cellar"), Some(30.0));
    assert_eq!(map.location("Capen Hall").unwrap().code(), "CPN");
    assert!(map.delivery_points().count() > 0);
}
