// SPDX-FileCopyrightText: 2026 Porter Maintainers
// SPDX-License-Identifier: MIT

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use crate::model::CampusMap;

use super::{PlanError, RoutePath};

/// Frontier entry for Dijkstra. Ordering is by tentative distance, then by
/// discovery sequence number so equal-distance entries pop in the order they
/// were first seen (stable and deterministic across runs).
#[derive(Debug, Clone, PartialEq)]
struct FrontierEntry {
    distance: f64,
    seq: u64,
    name: String,
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap and we want the smallest
        // distance (earliest discovery on ties) on top.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest path between two named locations (Dijkstra).
///
/// Exits as soon as `goal` is settled; `start == goal` short-circuits to a
/// single-node path without consulting adjacency at all.
pub fn shortest_path(map: &CampusMap, start: &str, goal: &str) -> Result<RoutePath, PlanError> {
    for name in [start, goal] {
        if !map.contains(name) {
            return Err(PlanError::UnknownLocation {
                name: name.to_owned(),
            });
        }
    }

    if start == goal {
        return Ok(RoutePath {
            path: vec![start.to_owned()],
            distance: 0.0,
        });
    }

    let mut best: BTreeMap<String, f64> = BTreeMap::new();
    let mut previous: BTreeMap<String, String> = BTreeMap::new();
    let mut settled: BTreeSet<String> = BTreeSet::new();
    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut seq: u64 = 0;

    best.insert(start.to_owned(), 0.0);
    frontier.push(FrontierEntry {
        distance: 0.0,
        seq,
        name: start.to_owned(),
    });

    while let Some(entry) = frontier.pop() {
        if settled.contains(&entry.name) {
            continue;
        }
        settled.insert(entry.name.clone());

        if entry.name == goal {
            return Ok(RoutePath {
                path: reconstruct(&previous, start, goal),
                distance: entry.distance,
            });
        }

        let neighbors = map
            .neighbors(&entry.name)
            .expect("settled names come from the map");
        for (neighbor, edge) in neighbors {
            if settled.contains(neighbor) {
                continue;
            }
            let tentative = entry.distance + edge;
            let improved = match best.get(neighbor) {
                Some(known) => tentative < *known,
                None => true,
            };
            if improved {
                best.insert(neighbor.clone(), tentative);
                previous.insert(neighbor.clone(), entry.name.clone());
                seq += 1;
                frontier.push(FrontierEntry {
                    distance: tentative,
                    seq,
                    name: neighbor.clone(),
                });
            }
        }
    }

    Err(PlanError::NoPath {
        from: start.to_owned(),
        to: goal.to_owned(),
    })
}

fn reconstruct(previous: &BTreeMap<String, String>, start: &str, goal: &str) -> Vec<String> {
    let mut path = vec![goal.to_owned()];
    let mut node = goal;
    while node != start {
        node = previous
            .get(node)
            .expect("every settled node except start has a predecessor");
        path.push(node.to_owned());
    }
    path.reverse();
    path
}

/// Multi-stop route covering all `destinations` from `start`, optionally
/// returning to `start` at the end.
///
/// This is the greedy nearest-unvisited-next heuristic, not an optimal
/// travelling-salesperson solution; it is intentionally cheap for the
/// handful of stops a single courier route carries. Duplicate destinations
/// collapse to their first occurrence and `start` itself is skipped; ties in
/// distance keep the earliest remaining destination.
pub fn shortest_path_multiple(
    map: &CampusMap,
    start: &str,
    destinations: &[String],
    return_to_start: bool,
) -> Result<RoutePath, PlanError> {
    if !map.contains(start) {
        return Err(PlanError::UnknownLocation {
            name: start.to_owned(),
        });
    }

    let mut remaining: Vec<&str> = Vec::new();
    for dest in destinations {
        let dest = dest.as_str();
        if !map.contains(dest) {
            return Err(PlanError::UnknownLocation {
                name: dest.to_owned(),
            });
        }
        if dest != start && !remaining.contains(&dest) {
            remaining.push(dest);
        }
    }

    let mut path = vec![start.to_owned()];
    let mut total = 0.0;
    let mut current = start.to_owned();

    while !remaining.is_empty() {
        let mut nearest: Option<(usize, RoutePath)> = None;
        for (idx, dest) in remaining.iter().enumerate() {
            let leg = shortest_path(map, &current, dest)?;
            let better = match &nearest {
                Some((_, best_leg)) => leg.distance < best_leg.distance,
                None => true,
            };
            if better {
                nearest = Some((idx, leg));
            }
        }

        let (idx, leg) = nearest.expect("remaining is non-empty");
        path.extend(leg.path.into_iter().skip(1));
        total += leg.distance;
        current = remaining.remove(idx).to_owned();
    }

    if return_to_start && current != start {
        let leg = shortest_path(map, &current, start)?;
        path.extend(leg.path.into_iter().skip(1));
        total += leg.distance;
    }

    Ok(RoutePath {
        path,
        distance: total,
    })
}
