//! Scoop installation directory scanning.
//!
//! Scoop lays installed apps out under `<root>/apps/<name>/current/`, where
//! `install.json` records the source bucket and `manifest.json` records the
//! installed version. This module reads that layout:
//!
//! - [`ScoopStore`] - locates the Scoop root and enumerates installed
//!   packages filtered by bucket
//! - [`InstalledPackage`] - one installed package record

pub mod record;
pub mod store;

pub use record::InstalledPackage;
pub use store::ScoopStore;
