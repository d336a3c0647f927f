//! Report module
//!
//! - `render` - pure snapshot-to-lines rendering and currency conversion
//! - `reporter` - the periodic task writing reports to the console

pub mod render;
pub mod reporter;

pub use render::{convert, render_report};
pub use reporter::Reporter;
