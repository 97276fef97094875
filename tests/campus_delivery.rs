// SPDX-FileCopyrightText: 2026 Porter Maintainers
// SPDX-License-Identifier: MIT

//! End-to-end scenarios over the built-in UB North Campus map.

use std::sync::Arc;

use porter::ledger::{
    DeliveryLedger, ExecutionError, PlannedRoute, RouteExecutor, StopAction,
};
use porter::model::{seed, OrderRequest, OrderStatus};
use porter::plan::{build_instructions, shortest_path, shortest_path_multiple, InstructionAction};

struct CountingExecutor {
    runs: usize,
}

impl RouteExecutor for CountingExecutor {
    fn execute(&mut self, _route: &PlannedRoute) -> Result<(), ExecutionError> {
        self.runs += 1;
        Ok(())
    }
}

fn order(customer: &str, pickup: &str, delivery: &str, items: &[&str]) -> OrderRequest {
    OrderRequest {
        customer_name: customer.to_owned(),
        pickup: pickup.to_owned(),
        delivery: delivery.to_owned(),
        items: items.iter().map(|item| (*item).to_owned()).collect(),
        priority: 0,
    }
}

#[test]
fn seeded_campus_shortest_paths_are_consistent() {
    let map = seed::ub_north_campus();

    // Direct edge.
    let route = shortest_path(&map, "Capen Hall", "Norton Hall").unwrap();
    assert_eq!(route.path, ["Capen Hall", "Norton Hall"]);
    assert_eq!(route.distance, 200.0);

    // Multi-hop: Student Union to Davis Hall goes through the academic core.
    let route = shortest_path(&map, "Student Union", "Davis Hall").unwrap();
    assert_eq!(route.path.first().map(String::as_str), Some("Student Union"));
    assert_eq!(route.path.last().map(String::as_str), Some("Davis Hall"));
    let summed: f64 = route
        .path
        .windows(2)
        .map(|pair| map.distance(&pair[0], &pair[1]).expect("adjacent"))
        .sum();
    assert_eq!(summed, route.distance);

    // Undirected cost symmetry across a far pair.
    let there = shortest_path(&map, "Governors Complex", "Ellicott Complex").unwrap();
    let back = shortest_path(&map, "Ellicott Complex", "Governors Complex").unwrap();
    assert_eq!(there.distance, back.distance);
}

#[test]
fn seeded_campus_multi_stop_route_is_walkable() {
    let map = seed::ub_north_campus();
    let destinations = vec![
        "C3 Dining Center".to_owned(),
        "Baird Point".to_owned(),
        "Knox Hall".to_owned(),
    ];
    let route = shortest_path_multiple(&map, "Student Union", &destinations, true).unwrap();

    assert_eq!(route.path.first().map(String::as_str), Some("Student Union"));
    assert_eq!(route.path.last().map(String::as_str), Some("Student Union"));
    for dest in &destinations {
        assert!(route.path.contains(dest), "missing stop {dest}");
    }

    // Every consecutive pair must be a direct edge, which also means the
    // instruction generator accepts the path.
    let instructions = build_instructions(&map, &route.path).unwrap();
    assert_eq!(instructions[0].action, InstructionAction::Depart);
    assert_eq!(
        instructions.last().map(|step| step.action),
        Some(InstructionAction::Arrive)
    );
    assert_eq!(
        instructions.last().map(|step| step.total_meters),
        Some(route.distance)
    );
}

#[test]
fn full_delivery_day_runs_to_completion() {
    let map = Arc::new(seed::ub_north_campus());
    let mut ledger = DeliveryLedger::new(map);

    let lunch = ledger
        .create_order(order(
            "Alice",
            "One World Café",
            "Ellicott Complex",
            &["Burrito bowl"],
        ))
        .unwrap();
    let dinner = ledger
        .create_order(order("Bob", "C3 Dining Center", "Capen Hall", &["Ramen"]))
        .unwrap();
    let abandoned = ledger
        .create_order(order("Cara", "The Cellar", "Park Hall", &["Coffee"]))
        .unwrap();
    ledger.cancel_order(&abandoned).unwrap();

    let mut executor = CountingExecutor { runs: 0 };
    let route = ledger
        .execute_all_pending(&mut executor, "Student Union")
        .unwrap();

    assert_eq!(executor.runs, 1);
    assert_eq!(route.order_ids, [lunch.clone(), dinner.clone()]);

    // Both orders picked up before they are delivered, in stop order.
    for id in [&lunch, &dinner] {
        let pickup = route
            .stops
            .iter()
            .position(|stop| stop.action == StopAction::Pickup(id.clone()))
            .expect("pickup stop");
        let delivery = route
            .stops
            .iter()
            .position(|stop| stop.action == StopAction::Deliver(id.clone()))
            .expect("delivery stop");
        assert!(pickup < delivery);
    }

    assert_eq!(ledger.order(&lunch).unwrap().status(), OrderStatus::Completed);
    assert_eq!(ledger.order(&dinner).unwrap().status(), OrderStatus::Completed);
    assert_eq!(
        ledger.order(&abandoned).unwrap().status(),
        OrderStatus::Cancelled
    );

    let stats = ledger.stats();
    assert_eq!((stats.total, stats.completed, stats.cancelled), (3, 2, 1));
}
