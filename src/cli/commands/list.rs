//! List command implementation.
//!
//! The `bucketeer scoop list` command prints every package installed from
//! the target bucket, one tab-separated line per package: raw name,
//! version, update timestamp. Fields are shown exactly as recorded; no
//! prefix stripping happens here.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::scoop::ScoopStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ScoopListCommand {
    args: ListArgs,
}

impl ScoopListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ScoopListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = ScoopStore::locate(self.args.root.clone())?;
        let packages = store.query_installed(&self.args.bucket)?;

        for pkg in &packages {
            ui.message(&format!(
                "{}\t{}\t{}",
                pkg.name,
                pkg.version,
                pkg.updated_display()
            ));
        }

        Ok(CommandResult::success())
    }
}
