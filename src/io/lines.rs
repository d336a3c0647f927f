//! Line reading that tolerates bad encoding
//!
//! Bytes that are not valid UTF-8 are replaced with U+FFFD instead of failing
//! the read, so an undecodable line reaches the parser and is rejected there
//! like any other malformed line. Only real I/O errors surface as `Err`.

use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Streams `\n`-terminated lines, stripping `\n` or `\r\n`
#[derive(Debug)]
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LossyLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Next line, or `None` at end of input
    ///
    /// Cancel safe: bytes read before a cancellation stay buffered and are
    /// returned by the next call.
    pub async fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 && self.buf.is_empty() {
            return Ok(None);
        }

        let mut bytes = std::mem::take(&mut self.buf);
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}
