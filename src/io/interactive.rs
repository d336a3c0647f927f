//! Interactive line reader
//!
//! Reads record lines from a stream (stdin in the binary) for as long as the
//! session runs. Interactive lines are always record-kind; there is no way to
//! set a rate interactively.

use crate::config::QUIT_COMMAND;
use crate::core::TotalsStore;
use crate::io::console::Console;
use crate::io::ingest::ingest_line;
use crate::io::lines::LossyLines;
use crate::types::InputKind;
use std::sync::Arc;
use tokio::io::AsyncBufRead;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Why the reader stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderExit {
    /// The quit command was read
    Quit,
    /// The stream ended or could no longer be read
    EndOfInput,
    /// The session was shut down from elsewhere
    Cancelled,
}

/// Feeds interactive lines into the shared store
#[derive(Debug)]
pub struct InteractiveReader<S> {
    store: Arc<S>,
    console: Console,
}

impl<S: TotalsStore> InteractiveReader<S> {
    pub fn new(store: Arc<S>, console: Console) -> Self {
        Self { store, console }
    }

    /// Read lines until `quit`, end of input, or cancellation
    ///
    /// Empty lines are skipped. The quit command must match exactly. A line
    /// that is not valid UTF-8 is malformed input, not the end of the stream.
    pub async fn run<R>(&self, input: R, shutdown: &CancellationToken) -> ReaderExit
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = LossyLines::new(input);

        loop {
            let next = tokio::select! {
                biased;
                _ = shutdown.cancelled() => return ReaderExit::Cancelled,
                next = lines.next_line() => next,
            };

            match next {
                Ok(Some(line)) if line == QUIT_COMMAND => {
                    info!("Quit command received");
                    return ReaderExit::Quit;
                }
                Ok(Some(line)) if line.is_empty() => continue,
                Ok(Some(line)) => {
                    ingest_line(&line, InputKind::Input, self.store.as_ref(), &self.console);
                }
                Ok(None) => {
                    info!("Interactive input closed");
                    return ReaderExit::EndOfInput;
                }
                Err(e) => {
                    error!(error = %e, "Failed to read interactive input");
                    return ReaderExit::EndOfInput;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConcurrentStore;
    use crate::io::console::CaptureBuffer;
    use crate::types::Currency;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn new_reader(
        buffer: &CaptureBuffer,
    ) -> (Arc<ConcurrentStore>, InteractiveReader<ConcurrentStore>) {
        let store = Arc::new(ConcurrentStore::new());
        let reader = InteractiveReader::new(Arc::clone(&store), buffer.console());
        (store, reader)
    }

    #[tokio::test]
    async fn test_lines_accumulate_until_end_of_input() {
        let buffer = CaptureBuffer::new();
        let (store, reader) = new_reader(&buffer);

        let exit = reader
            .run(&b"USD 100\nUSD 50\nHKD 30\n"[..], &CancellationToken::new())
            .await;

        assert_eq!(exit, ReaderExit::EndOfInput);
        assert_eq!(store.total(Currency::Usd), Some(Decimal::from(150)));
        assert_eq!(store.total(Currency::Hkd), Some(Decimal::from(30)));
        assert_eq!(buffer.contents(), "");
    }

    #[rstest]
    #[case::first_line("quit\nUSD 5\n", None)]
    #[case::mid_session("USD 5\nquit\nUSD 7\n", Some(5))]
    #[case::after_empty_line("USD 5\n\nquit\nUSD 7\n", Some(5))]
    #[case::without_newline("USD 5\nquit", Some(5))]
    #[tokio::test]
    async fn test_quit_stops_reading(#[case] input: &'static str, #[case] expected: Option<i64>) {
        let buffer = CaptureBuffer::new();
        let (store, reader) = new_reader(&buffer);

        let exit = reader
            .run(input.as_bytes(), &CancellationToken::new())
            .await;

        assert_eq!(exit, ReaderExit::Quit);
        assert_eq!(store.total(Currency::Usd), expected.map(Decimal::from));
    }

    #[rstest]
    #[case::uppercase("QUIT\n")]
    #[case::padded(" quit\n")]
    #[case::trailing_space("quit \n")]
    #[tokio::test]
    async fn test_quit_must_match_exactly(#[case] input: &'static str) {
        let buffer = CaptureBuffer::new();
        let (_store, reader) = new_reader(&buffer);

        let exit = reader
            .run(input.as_bytes(), &CancellationToken::new())
            .await;

        assert_eq!(exit, ReaderExit::EndOfInput);
        assert_eq!(buffer.contents(), "There is an error in the input\n");
    }

    #[tokio::test]
    async fn test_empty_lines_are_skipped() {
        let buffer = CaptureBuffer::new();
        let (store, reader) = new_reader(&buffer);

        let exit = reader
            .run(&b"\n\nUSD 1\n\r\n\nUSD 2\n"[..], &CancellationToken::new())
            .await;

        assert_eq!(exit, ReaderExit::EndOfInput);
        assert_eq!(store.total(Currency::Usd), Some(Decimal::from(3)));
        assert_eq!(buffer.contents(), "");
    }

    #[tokio::test]
    async fn test_rate_looking_lines_are_records() {
        let buffer = CaptureBuffer::new();
        let (store, reader) = new_reader(&buffer);

        reader
            .run(&b"USD 0.128\n"[..], &CancellationToken::new())
            .await;

        assert_eq!(store.rate(Currency::Usd), None);
        assert_eq!(store.total(Currency::Usd), Some(Decimal::new(128, 3)));
    }

    #[tokio::test]
    async fn test_malformed_lines_are_reported_and_skipped() {
        let buffer = CaptureBuffer::new();
        let (store, reader) = new_reader(&buffer);

        reader
            .run(&b"XYZ 5\nUSD abc\nUSD 1\n"[..], &CancellationToken::new())
            .await;

        assert_eq!(store.total(Currency::Usd), Some(Decimal::ONE));
        assert_eq!(
            buffer.contents(),
            "There is an error in the input\nThere is an error in the input\n"
        );
    }

    #[tokio::test]
    async fn test_undecodable_line_does_not_end_input() {
        let buffer = CaptureBuffer::new();
        let (store, reader) = new_reader(&buffer);

        let exit = reader
            .run(&b"USD 1\n\xff\nUSD 2\nquit\n"[..], &CancellationToken::new())
            .await;

        assert_eq!(exit, ReaderExit::Quit);
        assert_eq!(store.total(Currency::Usd), Some(Decimal::from(3)));
        assert_eq!(buffer.contents(), "There is an error in the input\n");
    }

    #[tokio::test]
    async fn test_cancellation_stops_a_waiting_reader() {
        let buffer = CaptureBuffer::new();
        let (_store, reader) = new_reader(&buffer);
        let shutdown = CancellationToken::new();
        // The writer half stays open so the reader blocks waiting for input
        let (_writer, pipe) = tokio::io::duplex(64);

        let cancel = shutdown.clone();
        tokio::spawn(async move { cancel.cancel() });

        let exit = reader
            .run(tokio::io::BufReader::new(pipe), &shutdown)
            .await;

        assert_eq!(exit, ReaderExit::Cancelled);
    }
}
