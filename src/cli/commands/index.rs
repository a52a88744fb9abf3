//! Index command implementation.
//!
//! The `bucketeer scoop index` command fetches the bucket's canonical index
//! and prints one line per index entry, in index order, appending
//! " (installed)" when a matching package is installed locally. The match is
//! by prefix-stripped name; installed packages absent from the index are not
//! reported.

use crate::cli::args::IndexArgs;
use crate::error::Result;
use crate::index::IndexClient;
use crate::reconcile::{installed_lookup, reconcile};
use crate::scoop::ScoopStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The index command implementation.
pub struct ScoopIndexCommand {
    args: IndexArgs,
}

impl ScoopIndexCommand {
    /// Create a new index command.
    pub fn new(args: IndexArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &IndexArgs {
        &self.args
    }
}

impl Command for ScoopIndexCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // Fail-fast ordering: the store is read before the index is fetched,
        // so a store failure never touches the network.
        let store = ScoopStore::locate(self.args.root.clone())?;
        let installed = store.query_installed(&self.args.bucket)?;

        let (lookup, skipped) = installed_lookup(&installed, &self.args.prefix);
        for err in &skipped {
            tracing::debug!("{}", err);
            ui.warning(&format!("skipping record: {}", err));
        }

        let client = IndexClient::new();
        let names = client.fetch(&self.args.url)?;

        for status in reconcile(&names, &lookup) {
            ui.message(&status.render());
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BucketeerError;
    use crate::ui::MockUI;
    use httpmock::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_app(root: &Path, name: &str, bucket: &str) {
        let current = root.join("apps").join(name).join("current");
        fs::create_dir_all(&current).unwrap();
        fs::write(
            current.join("install.json"),
            format!(r#"{{"bucket": "{}"}}"#, bucket),
        )
        .unwrap();
        fs::write(current.join("manifest.json"), r#"{"version": "1.0"}"#).unwrap();
    }

    fn args_for(root: &Path, url: &str) -> IndexArgs {
        IndexArgs {
            root: Some(root.to_path_buf()),
            bucket: "gauto".to_string(),
            prefix: "ga-".to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn index_annotates_installed_entries_in_index_order() {
        let temp = TempDir::new().unwrap();
        write_app(temp.path(), "ga-foo", "gauto");

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/index.json");
            then.status(200).body(r#"["foo", "bar"]"#);
        });

        let cmd = ScoopIndexCommand::new(args_for(temp.path(), &server.url("/index.json")));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.messages(), &["foo (installed)", "bar"]);
    }

    #[test]
    fn index_with_nothing_installed_leaves_all_unmarked() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("apps")).unwrap();

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/index.json");
            then.status(200).body(r#"["foo"]"#);
        });

        let cmd = ScoopIndexCommand::new(args_for(temp.path(), &server.url("/index.json")));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.messages(), &["foo"]);
    }

    #[test]
    fn index_empty_index_prints_nothing() {
        let temp = TempDir::new().unwrap();
        write_app(temp.path(), "ga-foo", "gauto");

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/index.json");
            then.status(200).body("[]");
        });

        let cmd = ScoopIndexCommand::new(args_for(temp.path(), &server.url("/index.json")));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn index_store_failure_skips_fetch() {
        let temp = TempDir::new().unwrap();

        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/index.json");
            then.status(200).body(r#"["foo"]"#);
        });

        let cmd = ScoopIndexCommand::new(args_for(temp.path(), &server.url("/index.json")));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui);

        assert!(matches!(
            result,
            Err(BucketeerError::StoreUnavailable { .. })
        ));
        assert_eq!(mock.hits(), 0);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn index_fetch_failure_propagates() {
        let temp = TempDir::new().unwrap();
        write_app(temp.path(), "ga-foo", "gauto");

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/index.json");
            then.status(500);
        });

        let cmd = ScoopIndexCommand::new(args_for(temp.path(), &server.url("/index.json")));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui);

        assert!(matches!(
            result,
            Err(BucketeerError::IndexUnavailable { .. })
        ));
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn index_warns_on_records_without_prefix() {
        let temp = TempDir::new().unwrap();
        write_app(temp.path(), "ga-foo", "gauto");
        write_app(temp.path(), "oddball", "gauto");

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/index.json");
            then.status(200).body(r#"["foo", "oddball"]"#);
        });

        let cmd = ScoopIndexCommand::new(args_for(temp.path(), &server.url("/index.json")));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        // The malformed record is skipped: it never matches, even though
        // its raw name appears in the index.
        assert_eq!(ui.messages(), &["foo (installed)", "oddball"]);
        assert!(ui.has_warning("oddball"));
    }
}
