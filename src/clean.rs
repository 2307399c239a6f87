//! Orchestrates one cleaning run: ingestion, the optional reconciliation
//! phases, and the final write.
//!
//! A load or write failure is fatal to its own phase only. The failing
//! phase reports through the sink, leaves its collection empty, and the
//! run carries on with the remaining phases.

use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::ingest;
use crate::io::excel_read;
use crate::io::excel_write;
use crate::model::User;
use crate::reconcile;
use crate::reference::{CompareList, ReplaceList};
use crate::report::DiagnosticSink;

/// Inputs and policy flags for one cleaning run.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub compare_to: Option<PathBuf>,
    pub replace_to: Option<PathBuf>,
    pub auto_correct: bool,
    pub email_as_account: bool,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanOutcome {
    pub roster_size: usize,
    pub output_written: bool,
}

/// Runs the full cleaning pipeline over the configured inputs.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %options.input.display(), output = %options.output.display())
)]
pub fn run(options: &CleanOptions, sink: &mut dyn DiagnosticSink) -> CleanOutcome {
    let mut users = load_roster(options, sink);
    sink.info(format!("{} users loaded.", users.len()));

    if let Some(path) = &options.compare_to {
        let compare = load_compare_list(path, sink);
        sink.info(format!("{} compare-to users loaded.", compare.len()));
        if options.auto_correct {
            reconcile::correct_account_names(&mut users, &compare, sink);
        }
        reconcile::report_discrepancies(&users, &compare, sink);
    }

    if let Some(path) = &options.replace_to {
        let replace = load_replace_list(path, sink);
        debug!(pair_count = replace.len(), "replace-to values loaded");
        if options.auto_correct {
            reconcile::remap_categories(&mut users, &replace, sink);
        }
    }

    if options.email_as_account {
        reconcile::apply_email_as_account(&mut users, sink);
    }

    let output_written = write_roster(options, &users, sink);
    CleanOutcome {
        roster_size: users.len(),
        output_written,
    }
}

fn load_roster(options: &CleanOptions, sink: &mut dyn DiagnosticSink) -> Vec<User> {
    match excel_read::read_user_sheets(&options.input) {
        Ok(sheets) => ingest::load_users(&sheets, options.auto_correct, sink),
        Err(error) => {
            sink.error(format!(
                "Cannot load users from input file {}: {error}",
                options.input.display()
            ));
            Vec::new()
        }
    }
}

fn load_compare_list(path: &PathBuf, sink: &mut dyn DiagnosticSink) -> CompareList {
    match excel_read::read_reference_sheet(path) {
        Ok(sheet) => CompareList::from_sheet(&sheet),
        Err(error) => {
            sink.error(format!(
                "Cannot load users from compare-to input file {}: {error}",
                path.display()
            ));
            CompareList::default()
        }
    }
}

fn load_replace_list(path: &PathBuf, sink: &mut dyn DiagnosticSink) -> ReplaceList {
    match excel_read::read_reference_sheet(path) {
        Ok(sheet) => ReplaceList::from_sheet(&sheet),
        Err(error) => {
            sink.error(format!(
                "Cannot load values from replace-to input file {}: {error}",
                path.display()
            ));
            ReplaceList::default()
        }
    }
}

fn write_roster(options: &CleanOptions, users: &[User], sink: &mut dyn DiagnosticSink) -> bool {
    if users.is_empty() {
        return false;
    }
    match excel_write::write_roster(&options.output, users) {
        Ok(()) => {
            sink.info(format!("New file generated: {}", options.output.display()));
            true
        }
        Err(error) => {
            sink.error(format!(
                "Cannot write users to output file {}: {error}",
                options.output.display()
            ));
            false
        }
    }
}
