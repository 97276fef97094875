// SPDX-FileCopyrightText: 2026 Porter Maintainers
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use crate::model::{Order, OrderId};

/// Storage seam for orders.
///
/// The ledger only ever touches orders through this trait, keyed by id, so a
/// durable backend can replace [`MemoryStore`] without the planning logic
/// noticing. Iteration must be in ascending id order (creation order for
/// ledger-generated ids).
pub trait OrderStore {
    fn get(&self, id: &OrderId) -> Option<&Order>;
    fn get_mut(&mut self, id: &OrderId) -> Option<&mut Order>;
    fn insert(&mut self, order: Order);
    fn iter(&self) -> Box<dyn Iterator<Item = &Order> + '_>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The default in-process store: a `BTreeMap` keyed by order id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    orders: BTreeMap<OrderId, Order>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for MemoryStore {
    fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    fn get_mut(&mut self, id: &OrderId) -> Option<&mut Order> {
        self.orders.get_mut(id)
    }

    fn insert(&mut self, order: Order) {
        self.orders.insert(order.id().clone(), order);
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Order> + '_> {
        Box::new(self.orders.values())
    }

    fn len(&self) -> usize {
        self.orders.len()
    }
}
