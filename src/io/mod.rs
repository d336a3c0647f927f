//! I/O module
//!
//! Handles line parsing, file and stdin ingestion, and console output.
//!
//! # Components
//!
//! - `line_format` - `<CODE> <AMOUNT>` parsing (pure)
//! - `ingest` - parse-and-apply for one raw line
//! - `batch_loader` - one-shot file loading at startup
//! - `interactive` - continuous reader for the interactive stream
//! - `lines` - line splitting that survives invalid UTF-8
//! - `console` - shared, mutex-guarded output

pub mod batch_loader;
pub mod console;
pub mod ingest;
pub mod interactive;
pub mod line_format;
pub mod lines;

pub use batch_loader::{load_file, load_plan, LoadOutcome, LoadTask};
pub use console::Console;
pub use ingest::ingest_line;
pub use interactive::{InteractiveReader, ReaderExit};
pub use line_format::parse_line;
