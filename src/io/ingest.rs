//! Feeding one raw line into the store
//!
//! Shared by the batch loader and the interactive reader so both report
//! rejected lines the same way.

use crate::core::TotalsStore;
use crate::io::console::Console;
use crate::io::line_format::parse_line;
use crate::types::error::console_message;
use crate::types::InputKind;
use tracing::{debug, warn};

/// Parse `line` and apply it to `store`
///
/// Rejected lines print `There is an error in the <kind>` on the console and
/// leave the store untouched. Returns whether the line was applied.
pub fn ingest_line<S: TotalsStore + ?Sized>(
    line: &str,
    kind: InputKind,
    store: &S,
    console: &Console,
) -> bool {
    let entry = match parse_line(line, kind) {
        Ok(entry) => entry,
        Err(e) => {
            debug!(error = %e, line, "Rejected line");
            console.line(e.console_message());
            return false;
        }
    };

    match store.apply(kind, entry) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, line, "Rejected entry");
            console.line(console_message(kind));
            false
        }
    }
}
