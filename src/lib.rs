// SPDX-FileCopyrightText: 2026 Porter Maintainers
// SPDX-License-Identifier: MIT

//! Porter — campus courier routing core.
//!
//! The crate models a small fixed campus as an undirected weighted graph,
//! finds shortest paths over it, sequences multi-stop pickup/delivery
//! routes, and keeps an in-memory ledger of delivery orders. Hardware
//! motion control, order intake transport and persistence are external
//! collaborators; this core only produces the routes and instructions they
//! consume.

pub mod ledger;
pub mod model;
pub mod plan;
