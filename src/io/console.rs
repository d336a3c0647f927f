//! Shared console output
//!
//! Report blocks, record echoes and line errors all go to one writer. The
//! writer sits behind a mutex so a report block is written in one piece even
//! while the interactive reader prints errors.

use std::fmt::Display;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::warn;

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Cloneable handle on the user-facing output stream
#[derive(Clone)]
pub struct Console {
    out: SharedWriter,
}

impl Console {
    /// Console writing to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Console writing to any writer
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            out: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Write a single line
    pub fn line(&self, line: impl Display) {
        self.block(std::iter::once(line));
    }

    /// Write several lines without interleaving output from other tasks
    pub fn block<I>(&self, lines: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut out = self.lock();
        let result = lines
            .into_iter()
            .try_for_each(|line| writeln!(out, "{}", line))
            .and_then(|()| out.flush());
        if let Err(e) = result {
            warn!(error = %e, "Failed to write to console");
        }
    }

    fn lock(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        // A panic while printing leaves the writer usable
        self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

/// In-memory writer whose contents stay readable after being handed to a [`Console`]
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

#[cfg(test)]
impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(|p| p.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// A console that writes into this buffer
    pub fn console(&self) -> Console {
        Console::new(self.clone())
    }
}

#[cfg(test)]
impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
