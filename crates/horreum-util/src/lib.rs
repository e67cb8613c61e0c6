//! horreum-util - JSON helpers for the horreum dashboard client.
//!
//! Entities cached by the dashboard are opaque JSON objects. This crate holds
//! the small set of value-level operations the store and the comparison
//! engine need: field-wise merging, canonical serialization and the string
//! ordering used to sort comparison rows.

pub mod locale_cmp;
pub mod merge;
pub mod stable;

// Re-exports for convenience
pub use locale_cmp::locale_cmp;
pub use merge::{merge_fields, merged};
pub use stable::stringify;
