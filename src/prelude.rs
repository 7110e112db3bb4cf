//! Prelude module for the datediff crate.
//!
//! Re-exports the derive_more derives used by the value types.

pub use derive_more::{Deref, Display, From, Into};
