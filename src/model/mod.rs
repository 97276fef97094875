// SPDX-FileCopyrightText: 2026 Porter Maintainers
// SPDX-License-Identifier: MIT

//! Core data model: the campus graph and delivery orders.
//!
//! The map is an explicit immutable object after startup; orders live in the
//! ledger and reference map locations by name only.

pub mod campus;
pub mod ids;
pub mod order;
pub mod seed;

pub use campus::{CampusMap, Location, MapError};
pub use ids::{IdError, OrderId};
pub use order::{Order, OrderRequest, OrderStatus, TransitionError};

#[cfg(test)]
mod tests;
