// SPDX-FileCopyrightText: 2026 Porter Maintainers
// SPDX-License-Identifier: MIT

//! Route planning over the campus graph.
//!
//! Planning is pure: every function reads the map it is handed and returns a
//! fresh result, holding no state between calls.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod instructions;
pub mod shortest;

pub use instructions::{build_instructions, Instruction, InstructionAction};
pub use shortest::{shortest_path, shortest_path_multiple};

/// A resolved point-to-point or multi-stop route: the visited location names
/// in order, and the summed edge distance in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    pub path: Vec<String>,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    UnknownLocation { name: String },
    NoPath { from: String, to: String },
    InvalidPath { from: String, to: String },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLocation { name } => write!(f, "unknown location '{name}'"),
            Self::NoPath { from, to } => {
                write!(f, "no path from '{from}' to '{to}'")
            }
            Self::InvalidPath { from, to } => {
                write!(
                    f,
                    "path step from '{from}' to '{to}' is not a direct connection"
                )
            }
        }
    }
}

impl std::error::Error for PlanError {}
