//! Bucketeer - Scoop bucket reconciliation.
//!
//! Bucketeer lists packages installed from a Scoop bucket and
//! cross-references them against the bucket's canonical remote index,
//! annotating which index entries are installed locally.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`index`] - Bucket index fetching
//! - [`reconcile`] - Index-vs-installed reconciliation
//! - [`scoop`] - Scoop installation directory scanning
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use bucketeer::reconcile::{installed_lookup, reconcile};
//! use bucketeer::scoop::InstalledPackage;
//! use chrono::Local;
//!
//! let installed = vec![InstalledPackage {
//!     name: "ga-foo".to_string(),
//!     version: "1.0".to_string(),
//!     updated: Local::now(),
//! }];
//! let (lookup, skipped) = installed_lookup(&installed, "ga-");
//! assert!(skipped.is_empty());
//!
//! let index = vec!["foo".to_string(), "bar".to_string()];
//! let statuses = reconcile(&index, &lookup);
//! assert_eq!(statuses[0].render(), "foo (installed)");
//! assert_eq!(statuses[1].render(), "bar");
//! ```

pub mod cli;
pub mod error;
pub mod index;
pub mod reconcile;
pub mod scoop;
pub mod ui;

pub use error::{BucketeerError, Result};
