//! Core business logic module
//!
//! - `traits` - the [`TotalsStore`] abstraction shared by producers and the reporter
//! - `store` - the DashMap-backed [`ConcurrentStore`]

pub mod store;
pub mod traits;

pub use store::ConcurrentStore;
pub use traits::TotalsStore;
