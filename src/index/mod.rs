//! Bucket index fetching.
//!
//! The canonical list of package names for a bucket is published as a JSON
//! array of strings. [`IndexClient`] fetches and parses it, preserving the
//! index's own order.

pub mod remote;

pub use remote::{IndexClient, DEFAULT_INDEX_URL};
