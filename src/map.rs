//! The map type backing `Options::filter` and `Options::page`.
//!
//! Defaults to a `BTreeMap`, so iteration (and therefore the encoded
//! querystring) is sorted by key. Enabling the `indexmap` feature switches
//! to an `IndexMap`, which iterates in first-insertion order instead.

#[cfg(not(feature = "indexmap"))]
pub use std::collections::BTreeMap as Map;

#[cfg(feature = "indexmap")]
pub use indexmap::IndexMap as Map;
