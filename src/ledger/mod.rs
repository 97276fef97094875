// SPDX-FileCopyrightText: 2026 Porter Maintainers
// SPDX-License-Identifier: MIT

//! The delivery order ledger: order lifecycle plus constraint-aware route
//! planning.
//!
//! Orders are owned by the ledger for their whole lifetime and referenced by
//! id. Planning never mutates ledger state; execution mutates statuses only
//! after a plan exists, so a failed operation leaves every order exactly as
//! it found it.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::{CampusMap, Order, OrderId, OrderRequest, OrderStatus, TransitionError};
use crate::plan::{build_instructions, shortest_path, Instruction, PlanError};

pub mod shared;
pub mod store;

pub use shared::SharedLedger;
pub use store::{MemoryStore, OrderStore};

/// Assumed average courier speed, used only for the advisory time estimate.
const AVERAGE_SPEED_MPS: f64 = 1.0;

/// What the courier does when the route reaches a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action", content = "order_id")]
pub enum StopAction {
    Pickup(OrderId),
    Deliver(OrderId),
}

/// One serviced stop of a planned route, in visit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStop {
    pub location: String,
    /// Index into the route path at which this stop is serviced.
    pub path_index: usize,
    pub action: StopAction,
}

/// A freshly planned route satisfying every covered order's
/// pickup-before-delivery constraint. Produced per planning call, never
/// stored or mutated; the execution collaborator consumes it immediately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRoute {
    pub path: Vec<String>,
    pub total_distance: f64,
    pub instructions: Vec<Instruction>,
    /// Pickup/deliver actions in the order the courier services them.
    pub stops: Vec<RouteStop>,
    pub order_ids: Vec<OrderId>,
}

impl PlannedRoute {
    /// Advisory travel-time estimate at the assumed courier speed.
    pub fn estimated_minutes(&self) -> f64 {
        self.total_distance / AVERAGE_SPEED_MPS / 60.0
    }
}

/// Per-status totals for presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub completion_rate: f64,
}

/// Downstream motion-execution collaborator.
///
/// The ledger hands it a [`PlannedRoute`]; command vocabulary and transport
/// are entirely its concern. A failure surfaces to the ledger caller and
/// leaves the covered orders in progress for a later retry.
pub trait RouteExecutor {
    fn execute(&mut self, route: &PlannedRoute) -> Result<(), ExecutionError>;
}

/// Opaque failure reported by a [`RouteExecutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionError {
    pub message: String,
}

impl ExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route execution failed: {}", self.message)
    }
}

impl std::error::Error for ExecutionError {}

#[derive(Debug, Clone, PartialEq)]
pub enum LedgerError {
    UnknownLocation { name: String },
    EmptyItems,
    OrderNotFound { order_id: OrderId },
    UnknownOrder { order_id: OrderId },
    InvalidTransition(TransitionError),
    Plan(PlanError),
    Execution(ExecutionError),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLocation { name } => write!(f, "unknown location '{name}'"),
            Self::EmptyItems => f.write_str("order must contain at least one item"),
            Self::OrderNotFound { order_id } => write!(f, "order {order_id} not found"),
            Self::UnknownOrder { order_id } => {
                write!(f, "order {order_id} is not known to the ledger")
            }
            Self::InvalidTransition(err) => err.fmt(f),
            Self::Plan(err) => err.fmt(f),
            Self::Execution(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for LedgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidTransition(err) => Some(err),
            Self::Plan(err) => Some(err),
            Self::Execution(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TransitionError> for LedgerError {
    fn from(err: TransitionError) -> Self {
        Self::InvalidTransition(err)
    }
}

impl From<PlanError> for LedgerError {
    fn from(err: PlanError) -> Self {
        Self::Plan(err)
    }
}

/// In-memory order ledger bound to one campus map.
///
/// Generic over its [`OrderStore`] so a durable backend can slot in; the
/// default keeps everything in a `BTreeMap` for the lifetime of the process.
#[derive(Debug)]
pub struct DeliveryLedger<S: OrderStore = MemoryStore> {
    map: Arc<CampusMap>,
    store: S,
    next_order_number: u64,
}

impl DeliveryLedger<MemoryStore> {
    pub fn new(map: Arc<CampusMap>) -> Self {
        Self::with_store(map, MemoryStore::new())
    }
}

impl<S: OrderStore> DeliveryLedger<S> {
    pub fn with_store(map: Arc<CampusMap>, store: S) -> Self {
        Self {
            map,
            store,
            next_order_number: 0,
        }
    }

    pub fn map(&self) -> &CampusMap {
        &self.map
    }

    /// Validates and records a new order; the id comes back for later calls.
    pub fn create_order(&mut self, request: OrderRequest) -> Result<OrderId, LedgerError> {
        for name in [&request.pickup, &request.delivery] {
            if !self.map.contains(name) {
                return Err(LedgerError::UnknownLocation { name: name.clone() });
            }
        }
        if request.items.is_empty() {
            return Err(LedgerError::EmptyItems);
        }

        self.next_order_number += 1;
        let id = OrderId::new(format!("ORD-{:04}", self.next_order_number))
            .expect("generated ids are well-formed");
        let order = Order::new(
            id.clone(),
            request.customer_name,
            request.pickup,
            request.delivery,
            request.items,
            request.priority,
        );
        self.store.insert(order);
        Ok(id)
    }

    pub fn order(&self, id: &OrderId) -> Result<&Order, LedgerError> {
        self.store.get(id).ok_or_else(|| LedgerError::OrderNotFound {
            order_id: id.clone(),
        })
    }

    /// All orders in creation order, optionally narrowed to one status.
    pub fn orders(&self, filter: Option<OrderStatus>) -> Vec<&Order> {
        self.store
            .iter()
            .filter(|order| filter.map_or(true, |status| order.status() == status))
            .collect()
    }

    /// Pending orders, highest priority first; creation order is preserved
    /// within a priority (stable sort — priority is otherwise only a hook).
    pub fn pending_by_priority(&self) -> Vec<&Order> {
        let mut pending = self.orders(Some(OrderStatus::Pending));
        pending.sort_by_key(|order| std::cmp::Reverse(order.priority()));
        pending
    }

    pub fn cancel_order(&mut self, id: &OrderId) -> Result<(), LedgerError> {
        let order = self
            .store
            .get_mut(id)
            .ok_or_else(|| LedgerError::OrderNotFound {
                order_id: id.clone(),
            })?;
        order.transition(OrderStatus::Cancelled)?;
        Ok(())
    }

    /// Plans a route from `start` covering the given orders.
    ///
    /// Sequencing is eligibility-gated greedy: at every step the candidate
    /// stops are the pickups of orders not yet picked up plus the deliveries
    /// of orders already picked up; the nearest candidate by shortest-path
    /// distance wins, ties keeping the earliest order in the request list
    /// (creation order when planning all pending). A delivery is never
    /// a candidate before its own pickup, so every order's pickup appears in
    /// the path before its delivery by construction.
    ///
    /// Ids must exist in the ledger; non-pending orders are skipped. An
    /// empty eligible set yields the trivial single-node route at `start`.
    pub fn plan_delivery_route(
        &self,
        start: &str,
        order_ids: &[OrderId],
    ) -> Result<PlannedRoute, LedgerError> {
        if !self.map.contains(start) {
            return Err(LedgerError::UnknownLocation {
                name: start.to_owned(),
            });
        }

        let mut covered: Vec<&Order> = Vec::new();
        for id in order_ids {
            let order = self.store.get(id).ok_or_else(|| LedgerError::UnknownOrder {
                order_id: id.clone(),
            })?;
            if order.status() == OrderStatus::Pending && !covered.iter().any(|o| o.id() == id) {
                covered.push(order);
            }
        }

        self.plan_over(start, &covered)
    }

    fn plan_over(&self, start: &str, covered: &[&Order]) -> Result<PlannedRoute, LedgerError> {
        let mut picked: BTreeSet<&OrderId> = BTreeSet::new();
        let mut delivered: BTreeSet<&OrderId> = BTreeSet::new();
        let mut path = vec![start.to_owned()];
        let mut total = 0.0;
        let mut current = start.to_owned();
        let mut stops: Vec<RouteStop> = Vec::new();

        while delivered.len() < covered.len() {
            let mut best: Option<(&Order, bool, crate::plan::RoutePath)> = None;
            for &order in covered {
                let (target, is_pickup) = if !picked.contains(order.id()) {
                    (order.pickup(), true)
                } else if !delivered.contains(order.id()) {
                    (order.delivery(), false)
                } else {
                    continue;
                };
                let leg = shortest_path(&self.map, &current, target)?;
                let better = match &best {
                    Some((_, _, best_leg)) => leg.distance < best_leg.distance,
                    None => true,
                };
                if better {
                    best = Some((order, is_pickup, leg));
                }
            }

            let (order, is_pickup, leg) = best.expect("undelivered orders leave candidates");
            current = leg.path.last().expect("legs are non-empty").clone();
            path.extend(leg.path.into_iter().skip(1));
            total += leg.distance;

            let action = if is_pickup {
                picked.insert(order.id());
                StopAction::Pickup(order.id().clone())
            } else {
                delivered.insert(order.id());
                StopAction::Deliver(order.id().clone())
            };
            stops.push(RouteStop {
                location: current.clone(),
                path_index: path.len() - 1,
                action,
            });
        }

        let instructions = build_instructions(&self.map, &path)?;
        Ok(PlannedRoute {
            path,
            total_distance: total,
            instructions,
            stops,
            order_ids: covered.iter().map(|order| order.id().clone()).collect(),
        })
    }

    /// Plans and executes a single order.
    ///
    /// The order moves to in-progress only once a plan exists, then the
    /// route goes to the executor. Success completes the order; failure
    /// leaves it in progress (no rollback to pending — callers may retry).
    pub fn execute_order(
        &mut self,
        executor: &mut dyn RouteExecutor,
        start: &str,
        id: &OrderId,
    ) -> Result<PlannedRoute, LedgerError> {
        let order = self.order(id)?;
        if order.status() != OrderStatus::Pending {
            return Err(LedgerError::InvalidTransition(TransitionError {
                order_id: id.clone(),
                from: order.status(),
                to: OrderStatus::InProgress,
            }));
        }
        let route = self.plan_delivery_route(start, std::slice::from_ref(id))?;
        self.run_route(executor, route)
    }

    /// Plans one combined route over every pending order and executes it.
    pub fn execute_all_pending(
        &mut self,
        executor: &mut dyn RouteExecutor,
        start: &str,
    ) -> Result<PlannedRoute, LedgerError> {
        let pending: Vec<OrderId> = self
            .orders(Some(OrderStatus::Pending))
            .into_iter()
            .map(|order| order.id().clone())
            .collect();
        let route = self.plan_delivery_route(start, &pending)?;
        self.run_route(executor, route)
    }

    fn run_route(
        &mut self,
        executor: &mut dyn RouteExecutor,
        route: PlannedRoute,
    ) -> Result<PlannedRoute, LedgerError> {
        for id in &route.order_ids {
            self.store
                .get_mut(id)
                .expect("planned orders exist")
                .transition(OrderStatus::InProgress)?;
        }

        if let Err(err) = executor.execute(&route) {
            return Err(LedgerError::Execution(err));
        }

        for id in &route.order_ids {
            self.store
                .get_mut(id)
                .expect("planned orders exist")
                .transition(OrderStatus::Completed)?;
        }
        Ok(route)
    }

    pub fn stats(&self) -> LedgerStats {
        let mut stats = LedgerStats {
            total: self.store.len(),
            pending: 0,
            in_progress: 0,
            completed: 0,
            cancelled: 0,
            completion_rate: 0.0,
        };
        for order in self.store.iter() {
            match order.status() {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::InProgress => stats.in_progress += 1,
                OrderStatus::Completed => stats.completed += 1,
                OrderStatus::Cancelled => stats.cancelled += 1,
            }
        }
        if stats.total > 0 {
            stats.completion_rate = stats.completed as f64 / stats.total as f64;
        }
        stats
    }
}
