//! Periodic reporter
//!
//! Runs on its own task. On every tick it snapshots the store and writes a
//! blank separator line followed by the rendered report, as a single console
//! block. The first report is written immediately, then one per interval.

use crate::config::ReportConfig;
use crate::core::TotalsStore;
use crate::io::console::Console;
use crate::report::render::render_report;
use std::sync::Arc;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Writes a report of the shared store on a fixed cadence
#[derive(Debug)]
pub struct Reporter<S> {
    store: Arc<S>,
    console: Console,
    config: ReportConfig,
}

impl<S: TotalsStore> Reporter<S> {
    pub fn new(store: Arc<S>, console: Console, config: ReportConfig) -> Self {
        Self {
            store,
            console,
            config,
        }
    }

    /// Write one report cycle
    pub fn report_once(&self) {
        let snapshot = self.store.snapshot();
        let lines = render_report(&snapshot);
        debug!(
            currencies = lines.len(),
            rates = snapshot.rates.len(),
            "Writing report"
        );
        self.console.block(std::iter::once(String::new()).chain(lines));
    }

    /// Report until `shutdown` is cancelled, returning the number of cycles written
    ///
    /// No report is written on shutdown.
    pub async fn run(self, shutdown: CancellationToken) -> u64 {
        let mut ticker = interval(self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut cycles = 0;

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    self.report_once();
                    cycles += 1;
                }
            }
        }

        info!(cycles, "Reporter stopped");
        cycles
    }
}
