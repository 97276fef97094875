// SPDX-FileCopyrightText: 2026 Porter Maintainers
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::model::CampusMap;

use super::PlanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstructionAction {
    Depart,
    Travel,
    Arrive,
}

/// One step of a turn-level route: where it starts, where it ends, how far
/// the step is and how far the route has come, plus a human-readable summary
/// for logs and manual driving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub action: InstructionAction,
    pub from: String,
    pub to: String,
    pub meters: f64,
    pub total_meters: f64,
    pub summary: String,
}

/// Expands a location path into ordered navigation instructions.
///
/// A single-node path yields one zero-distance `Arrive`. Longer paths get a
/// zero-length `Depart` marker at the start, one `Travel` per edge, and a
/// closing zero-length `Arrive` at the goal carrying the cumulative total.
/// Every consecutive pair must be a direct connection of the map; anything
/// else means the path is stale or corrupt and is rejected.
pub fn build_instructions(map: &CampusMap, path: &[String]) -> Result<Vec<Instruction>, PlanError> {
    for name in path {
        if !map.contains(name) {
            return Err(PlanError::UnknownLocation { name: name.clone() });
        }
    }

    let (first, last) = match (path.first(), path.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Ok(Vec::new()),
    };

    if path.len() == 1 {
        return Ok(vec![Instruction {
            action: InstructionAction::Arrive,
            from: first.clone(),
            to: first.clone(),
            meters: 0.0,
            total_meters: 0.0,
            summary: format!("Arrive at {first} (0 m)"),
        }]);
    }

    let mut steps = Vec::with_capacity(path.len() + 1);
    steps.push(Instruction {
        action: InstructionAction::Depart,
        from: first.clone(),
        to: first.clone(),
        meters: 0.0,
        total_meters: 0.0,
        summary: format!("Depart from {first}"),
    });

    let mut total = 0.0;
    for pair in path.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let meters = map.distance(from, to).ok_or_else(|| PlanError::InvalidPath {
            from: from.clone(),
            to: to.clone(),
        })?;
        total += meters;
        steps.push(Instruction {
            action: InstructionAction::Travel,
            from: from.clone(),
            to: to.clone(),
            meters,
            total_meters: total,
            summary: format!("Travel from {from} to {to} ({meters:.0} m)"),
        });
    }

    steps.push(Instruction {
        action: InstructionAction::Arrive,
        from: last.clone(),
        to: last.clone(),
        meters: 0.0,
        total_meters: total,
        summary: format!("Arrive at {last} ({total:.0} m total)"),
    });

    Ok(steps)
}
