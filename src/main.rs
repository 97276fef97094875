// SPDX-FileCopyrightText: 2026 Porter Maintainers
// SPDX-License-Identifier: MIT

//! Porter CLI entrypoint.
//!
//! Runs the routing core against the built-in UB North Campus map:
//! list locations, plan a point-to-point route, or walk a scripted
//! delivery demo. `--json` switches every command to machine-readable
//! output for downstream tooling.

use std::error::Error;
use std::sync::Arc;

use porter::ledger::{
    DeliveryLedger, ExecutionError, PlannedRoute, RouteExecutor, SharedLedger,
};
use porter::model::{seed, OrderRequest};
use porter::plan::{build_instructions, shortest_path};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} locations [--json]\n  {program} route <from> <to> [--json]\n  {program} demo [--json]\n\nCommands:\n  locations   List every location of the built-in campus map.\n  route       Plan the shortest path between two named locations and\n              print turn-level instructions.\n  demo        Create two sample orders, plan a combined delivery route\n              and execute it against a logging stub executor.\n\n--json prints the result as JSON instead of text."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Locations,
    Route { from: String, to: String },
    Demo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    command: Command,
    json: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let command = args.next().ok_or(())?;
    let mut positional: Vec<String> = Vec::new();
    let mut json = false;

    for arg in args {
        match arg.as_str() {
            "--json" => {
                if json {
                    return Err(());
                }
                json = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => positional.push(arg),
        }
    }

    let command = match (command.as_str(), positional.len()) {
        ("locations", 0) => Command::Locations,
        ("route", 2) => {
            let mut names = positional.into_iter();
            Command::Route {
                from: names.next().ok_or(())?,
                to: names.next().ok_or(())?,
            }
        }
        ("demo", 0) => Command::Demo,
        _ => return Err(()),
    };

    Ok(CliOptions { command, json })
}

/// Stand-in for the hardware execution layer: prints each instruction.
struct PrintingExecutor;

impl RouteExecutor for PrintingExecutor {
    fn execute(&mut self, route: &PlannedRoute) -> Result<(), ExecutionError> {
        for step in &route.instructions {
            println!("    {}", step.summary);
        }
        Ok(())
    }
}

fn run_locations(json: bool) -> Result<(), Box<dyn Error>> {
    let map = seed::ub_north_campus();
    if json {
        println!("{}", serde_json::to_string_pretty(map.locations())?);
        return Ok(());
    }
    println!("{map}");
    for location in map.locations().values() {
        println!(
            "  {:<5} {:<28} {}",
            location.code(),
            location.name(),
            location.description()
        );
    }
    Ok(())
}

fn run_route(from: &str, to: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let map = seed::ub_north_campus();
    let route = shortest_path(&map, from, to)?;
    let instructions = build_instructions(&map, &route.path)?;

    if json {
        let payload = serde_json::json!({
            "path": route.path,
            "distance_meters": route.distance,
            "instructions": instructions,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{} -> {}: {:.0} m", from, to, route.distance);
    for step in &instructions {
        println!("  {}", step.summary);
    }
    Ok(())
}

fn run_demo(json: bool) -> Result<(), Box<dyn Error>> {
    let map = Arc::new(seed::ub_north_campus());
    let shared = SharedLedger::from_ledger(DeliveryLedger::new(map));

    let mut ledger = shared.lock();
    let first = ledger.create_order(OrderRequest {
        customer_name: "Alice".to_owned(),
        pickup: "One World Café".to_owned(),
        delivery: "Ellicott Complex".to_owned(),
        items: vec!["Burrito bowl".to_owned(), "Iced tea".to_owned()],
        priority: 0,
    })?;
    let second = ledger.create_order(OrderRequest {
        customer_name: "Bob".to_owned(),
        pickup: "C3 Dining Center".to_owned(),
        delivery: "Capen Hall".to_owned(),
        items: vec!["Ramen".to_owned()],
        priority: 1,
    })?;

    if !json {
        println!("Created orders {first} and {second}; planning from Student Union.");
    }

    let route = if json {
        struct SilentExecutor;
        impl RouteExecutor for SilentExecutor {
            fn execute(&mut self, _route: &PlannedRoute) -> Result<(), ExecutionError> {
                Ok(())
            }
        }
        ledger.execute_all_pending(&mut SilentExecutor, "Student Union")?
    } else {
        ledger.execute_all_pending(&mut PrintingExecutor, "Student Union")?
    };

    if json {
        let payload = serde_json::json!({
            "route": route,
            "estimated_minutes": route.estimated_minutes(),
            "stats": ledger.stats(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!(
        "Route covers {} stops over {:.0} m (about {:.1} min).",
        route.stops.len(),
        route.total_distance,
        route.estimated_minutes()
    );
    let stats = ledger.stats();
    println!(
        "Orders: {} total, {} completed, {} pending.",
        stats.total, stats.completed, stats.pending
    );
    Ok(())
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "porter".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    let result = match &options.command {
        Command::Locations => run_locations(options.json),
        Command::Route { from, to } => run_route(from, to, options.json),
        Command::Demo => run_demo(options.json),
    };

    if let Err(err) = result {
        eprintln!("{program}: {err}");
        std::process::exit(1);
    }
}
