//! Payment Tracker CLI
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- record.txt
//! cargo run -- rate.txt
//! cargo run -- payments.txt rates.txt
//! ```
//!
//! Files are loaded first. Then lines typed on stdin are added to the totals
//! while a report is printed every minute. Typing `quit` ends the program.
//! Diagnostics go to stderr and are filtered with `RUST_LOG` (default `warn`).
//!
//! # Exit Codes
//!
//! - 0: `quit` was typed or the process was interrupted
//! - 1: the async runtime could not be started
//! - 2: invalid command-line arguments

use payment_tracker::cli;
use payment_tracker::{ConcurrentStore, Console, ReportConfig, Session, TrackerError};
use std::process;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::parse_args();
    let plan = args.load_plan();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            let error = TrackerError::Runtime {
                message: e.to_string(),
            };
            error!(%error, "Cannot start");
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    };

    let end = runtime.block_on(async {
        let session = Session::new(
            Arc::new(ConcurrentStore::new()),
            Console::stdout(),
            ReportConfig::default(),
        );
        session.load(&plan).await;

        let shutdown = CancellationToken::new();
        let interrupt = shutdown.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Interrupt received");
                    interrupt.cancel();
                }
                Err(e) => error!(error = %e, "Failed to listen for Ctrl+C"),
            }
        });

        session
            .run(BufReader::new(tokio::io::stdin()), shutdown)
            .await
    });

    info!(?end, "Exiting");
    // A stdin read may still be parked on the blocking pool; exit without
    // waiting for the runtime to drain it.
    process::exit(0);
}
