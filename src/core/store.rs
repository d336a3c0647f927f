//! Thread-safe accumulation store
//!
//! # Design
//!
//! Each mapping is its own `DashMap`, so record updates and rate updates never
//! contend with each other. A record update holds the entry's shard lock for
//! the whole read-modify-write, which makes it atomic with respect to other
//! writers and to snapshots.
//!
//! Snapshots copy one entry at a time under its shard lock. Every copied value
//! is a fully applied update; there is no cross-currency transaction.

use crate::core::traits::TotalsStore;
use crate::types::{Currency, Snapshot, StoreError};
use dashmap::DashMap;
use rust_decimal::Decimal;

/// Store shared by the batch loader, the interactive reader and the reporter
#[derive(Debug, Default)]
pub struct ConcurrentStore {
    /// Cumulative amount per currency
    totals: DashMap<Currency, Decimal>,
    /// Latest rate per currency
    rates: DashMap<Currency, Decimal>,
}

impl ConcurrentStore {
    /// Create a store with no totals and no rates
    pub fn new() -> Self {
        Self::default()
    }
}

impl TotalsStore for ConcurrentStore {
    fn add_record(&self, currency: Currency, amount: Decimal) -> Result<Decimal, StoreError> {
        let mut total = self.totals.entry(currency).or_insert(Decimal::ZERO);
        let current = *total;
        let updated = current
            .checked_add(amount)
            .ok_or_else(|| StoreError::overflow(currency, current, amount))?;
        // Decimal rounds away digits it cannot hold, which shows up as a lost scale
        if updated.scale() < current.scale().max(amount.scale()) {
            return Err(StoreError::inexact(currency, current, amount));
        }
        *total = updated;
        Ok(updated)
    }

    fn set_rate(&self, currency: Currency, rate: Decimal) {
        self.rates.insert(currency, rate);
    }

    fn total(&self, currency: Currency) -> Option<Decimal> {
        self.totals.get(&currency).map(|total| *total.value())
    }

    fn rate(&self, currency: Currency) -> Option<Decimal> {
        self.rates.get(&currency).map(|rate| *rate.value())
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            totals: self
                .totals
                .iter()
                .map(|entry| (*entry.key(), *entry.value()))
                .collect(),
            rates: self
                .rates
                .iter()
                .map(|entry| (*entry.key(), *entry.value()))
                .collect(),
        }
    }
}
