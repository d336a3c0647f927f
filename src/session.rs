//! Session orchestration
//!
//! A session runs in two phases:
//!
//! ```text
//! load(plan)          batch files, sequentially, to completion
//!     │
//! run(input, token)   ├── Reporter task        (spawned, ticks every interval)
//!                     └── InteractiveReader    (current task, until quit/EOF)
//! ```
//!
//! Both phases share one `Arc`'d store. Shutdown goes through a
//! `CancellationToken`: the reader returning `Quit` cancels it, and so does an
//! external interrupt. Exiting the process is left to the caller.

use crate::config::ReportConfig;
use crate::core::TotalsStore;
use crate::io::batch_loader::{load_plan, LoadOutcome, LoadTask};
use crate::io::console::Console;
use crate::io::interactive::{InteractiveReader, ReaderExit};
use crate::report::Reporter;
use std::sync::Arc;
use tokio::io::AsyncBufRead;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The quit command was read
    Quit,
    /// The shutdown token was cancelled from outside
    Interrupted,
}

/// The shared store plus everything that reads from or writes to it
#[derive(Debug)]
pub struct Session<S> {
    store: Arc<S>,
    console: Console,
    config: ReportConfig,
}

impl<S: TotalsStore + 'static> Session<S> {
    pub fn new(store: Arc<S>, console: Console, config: ReportConfig) -> Self {
        Self {
            store,
            console,
            config,
        }
    }

    /// The shared store
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Batch phase: load every file in `plan` before anything else starts
    pub async fn load(&self, plan: &[LoadTask]) -> Vec<LoadOutcome> {
        load_plan(plan, self.store.as_ref(), &self.console).await
    }

    /// Interactive phase: read `input` and report periodically until shutdown
    ///
    /// Returns after `quit` is read or `shutdown` is cancelled. When the input
    /// ends without `quit`, reporting carries on until `shutdown` is cancelled.
    /// The reporter task has stopped by the time this returns.
    pub async fn run<R>(&self, input: R, shutdown: CancellationToken) -> SessionEnd
    where
        R: AsyncBufRead + Unpin,
    {
        let reporter = Reporter::new(
            Arc::clone(&self.store),
            self.console.clone(),
            self.config.clone(),
        );
        let reporter_handle = tokio::spawn(reporter.run(shutdown.clone()));

        let reader = InteractiveReader::new(Arc::clone(&self.store), self.console.clone());
        let end = match reader.run(input, &shutdown).await {
            ReaderExit::Quit => SessionEnd::Quit,
            ReaderExit::EndOfInput => {
                info!("Reporting continues until interrupted");
                shutdown.cancelled().await;
                SessionEnd::Interrupted
            }
            ReaderExit::Cancelled => SessionEnd::Interrupted,
        };

        shutdown.cancel();
        if let Err(e) = reporter_handle.await {
            error!(error = %e, "Reporter task failed");
        }

        info!(?end, "Session ended");
        end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConcurrentStore;
    use crate::io::console::CaptureBuffer;
    use crate::types::{Currency, InputKind};
    use rust_decimal::Decimal;
    use std::time::Duration;

    fn new_session(buffer: &CaptureBuffer) -> Session<ConcurrentStore> {
        Session::new(
            Arc::new(ConcurrentStore::new()),
            buffer.console(),
            ReportConfig::new(Duration::from_secs(60)),
        )
    }

    #[tokio::test]
    async fn test_quit_ends_session() {
        let buffer = CaptureBuffer::new();
        let session = new_session(&buffer);
        let shutdown = CancellationToken::new();

        let end = session
            .run(&b"USD 1\nquit\nUSD 2\n"[..], shutdown.clone())
            .await;

        assert_eq!(end, SessionEnd::Quit);
        assert!(shutdown.is_cancelled());
        assert_eq!(session.store().total(Currency::Usd), Some(Decimal::ONE));
    }

    #[tokio::test]
    async fn test_end_of_input_waits_for_interrupt() {
        let buffer = CaptureBuffer::new();
        let session = new_session(&buffer);
        let shutdown = CancellationToken::new();

        let interrupt = shutdown.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            interrupt.cancel();
        });

        let end = session.run(&b"HKD 3\n"[..], shutdown).await;

        assert_eq!(end, SessionEnd::Interrupted);
        assert_eq!(session.store().total(Currency::Hkd), Some(Decimal::from(3)));
    }

    #[tokio::test]
    async fn test_missing_files_leave_store_empty() {
        let buffer = CaptureBuffer::new();
        let session = new_session(&buffer);
        let dir = tempfile::tempdir().unwrap();
        let plan = vec![
            LoadTask::new(dir.path().join("record.txt"), InputKind::RecordFile),
            LoadTask::new(dir.path().join("rate.txt"), InputKind::RateFile),
        ];

        let outcomes = session.load(&plan).await;

        assert_eq!(outcomes, vec![LoadOutcome::Missing, LoadOutcome::Missing]);
        assert_eq!(session.store().snapshot(), Default::default());
        assert_eq!(buffer.contents(), "");
    }
}
