// SPDX-FileCopyrightText: 2026 Porter Maintainers
// SPDX-License-Identifier: MIT

use std::sync::{Arc, Mutex, MutexGuard};

use crate::model::CampusMap;

use super::DeliveryLedger;

/// Thread-shared handle to a [`DeliveryLedger`].
///
/// Every ledger mutation from concurrent callers (two web requests, a web
/// request racing the executor loop) goes through the one lock; the campus
/// map stays immutable after startup and is read lock-free through its
/// `Arc`. Request volumes of a single-vehicle system never contend enough
/// to warrant anything finer-grained.
#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<DeliveryLedger>>,
}

impl SharedLedger {
    pub fn new(map: Arc<CampusMap>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(DeliveryLedger::new(map))),
        }
    }

    pub fn from_ledger(ledger: DeliveryLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Locks the ledger for one operation. Panics if another caller
    /// panicked mid-mutation and poisoned the lock.
    pub fn lock(&self) -> MutexGuard<'_, DeliveryLedger> {
        self.inner.lock().expect("ledger lock poisoned")
    }
}
