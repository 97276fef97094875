// SPDX-FileCopyrightText: 2026 Porter Maintainers
// SPDX-License-Identifier: MIT

use std::fmt;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::ids::OrderId;

/// Where an order sits in its lifecycle.
///
/// Transitions are monotonic: `Pending → InProgress → Completed`, with
/// `Cancelled` reachable from `Pending` or `InProgress`. Nothing leaves
/// `Completed` or `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::InProgress)
                | (Self::InProgress, Self::Completed)
                | (Self::Pending, Self::Cancelled)
                | (Self::InProgress, Self::Cancelled)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// The intake payload the web layer posts; structurally validated there,
/// domain-validated by the ledger on `create_order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer_name: String,
    pub pickup: String,
    pub delivery: String,
    pub items: Vec<String>,
    #[serde(default)]
    pub priority: u8,
}

/// A customer request to move items between two campus locations.
///
/// Pickup and delivery are location names; both are guaranteed (by the
/// ledger at creation time) to exist in the campus map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_name: String,
    pickup: String,
    delivery: String,
    items: Vec<String>,
    status: OrderStatus,
    created_at: SystemTime,
    completed_at: Option<SystemTime>,
    priority: u8,
}

impl Order {
    pub fn new(
        id: OrderId,
        customer_name: impl Into<String>,
        pickup: impl Into<String>,
        delivery: impl Into<String>,
        items: Vec<String>,
        priority: u8,
    ) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            pickup: pickup.into(),
            delivery: delivery.into(),
            items,
            status: OrderStatus::Pending,
            created_at: SystemTime::now(),
            completed_at: None,
            priority,
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn pickup(&self) -> &str {
        &self.pickup
    }

    pub fn delivery(&self) -> &str {
        &self.delivery
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub fn completed_at(&self) -> Option<SystemTime> {
        self.completed_at
    }

    /// 0 = normal, 1 = high, 2 = urgent. Stored and surfaced, but planning
    /// does not currently consult it (future scheduling hook).
    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// Moves the order along its lifecycle, refusing any non-monotonic step.
    pub fn transition(&mut self, next: OrderStatus) -> Result<(), TransitionError> {
        if !self.status.can_transition_to(next) {
            return Err(TransitionError {
                order_id: self.id.clone(),
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        if next == OrderStatus::Completed {
            self.completed_at = Some(SystemTime::now());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionError {
    pub order_id: OrderId,
    pub from: OrderStatus,
    pub to: OrderStatus,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "order {} cannot move from {} to {}",
            self.order_id, self.from, self.to
        )
    }
}

impl std::error::Error for TransitionError {}
