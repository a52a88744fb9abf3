//! Index-vs-installed reconciliation.
//!
//! Bucket packages carry a fixed naming prefix on disk (e.g. `ga-foo` for
//! index entry `foo`). Reconciliation strips that prefix from each installed
//! record, then annotates every index entry with its installed status, in
//! index order. Installed packages absent from the index are deliberately
//! not reported: the question is "what from the index do I have", not "what
//! do I have that's unexpected".

use std::collections::HashSet;

use crate::error::BucketeerError;
use crate::scoop::InstalledPackage;

/// One index entry with its installed status.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexStatus {
    pub name: String,
    pub installed: bool,
}

impl IndexStatus {
    /// Render as an output line: `name (installed)` or `name`.
    pub fn render(&self) -> String {
        if self.installed {
            format!("{} (installed)", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Build the lookup set of prefix-stripped installed names.
///
/// Records whose raw name does not carry `prefix` are skipped rather than
/// truncated; the returned errors describe each skipped record so the
/// caller can surface them as warnings.
pub fn installed_lookup(
    records: &[InstalledPackage],
    prefix: &str,
) -> (HashSet<String>, Vec<BucketeerError>) {
    let mut lookup = HashSet::new();
    let mut skipped = Vec::new();

    for record in records {
        match record.name.strip_prefix(prefix) {
            Some(stripped) if !stripped.is_empty() => {
                lookup.insert(stripped.to_string());
            }
            _ => {
                skipped.push(BucketeerError::MalformedRecord {
                    name: record.name.clone(),
                    message: format!("missing bucket prefix '{}'", prefix),
                });
            }
        }
    }

    (lookup, skipped)
}

/// Annotate every index entry, preserving index order.
///
/// The output has exactly one entry per index name.
pub fn reconcile(index: &[String], installed: &HashSet<String>) -> Vec<IndexStatus> {
    index
        .iter()
        .map(|name| IndexStatus {
            name: name.clone(),
            installed: installed.contains(name),
        })
        .collect()
}
