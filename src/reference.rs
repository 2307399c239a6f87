//! Loaders for the two auxiliary reference lists.
//!
//! Both lists keep load order and answer case-insensitive lookups through
//! an index built by inserting in load order without overwriting, so the
//! first occurrence of a key always wins.

use std::collections::HashMap;

use crate::io::excel_read::SheetGrid;
use crate::model::{CompareEntry, ReplacePair};

/// The compare-to list: (key, canonical account name, email) triples.
#[derive(Debug, Default)]
pub struct CompareList {
    entries: Vec<CompareEntry>,
    by_email: HashMap<String, usize>,
}

impl CompareList {
    /// Builds the list from sheet 0 of the compare-to workbook. A row
    /// contributes an entry only when all three cells are non-empty after
    /// trimming; email format is not checked here.
    pub fn from_sheet(sheet: &SheetGrid) -> Self {
        let mut list = Self::default();
        for row in &sheet.rows {
            let key = trimmed(row.cells.first());
            let account_name = trimmed(row.cells.get(1));
            let email = trimmed(row.cells.get(2));
            let (Some(key), Some(account_name), Some(email)) = (key, account_name, email) else {
                continue;
            };
            list.push(CompareEntry {
                key,
                account_name,
                email,
            });
        }
        list
    }

    fn push(&mut self, entry: CompareEntry) {
        let lookup_key = entry.email.to_lowercase();
        self.entries.push(entry);
        self.by_email.entry(lookup_key).or_insert(self.entries.len() - 1);
    }

    /// First entry whose email equals `email` case-insensitively.
    pub fn find_by_email(&self, email: &str) -> Option<&CompareEntry> {
        self.by_email
            .get(&email.to_lowercase())
            .map(|&idx| &self.entries[idx])
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.by_email.contains_key(&email.to_lowercase())
    }

    /// Entries in load order.
    pub fn entries(&self) -> &[CompareEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The replace-to list: ordered (original value, replacement value) pairs.
#[derive(Debug, Default)]
pub struct ReplaceList {
    pairs: Vec<ReplacePair>,
    by_original: HashMap<String, usize>,
}

impl ReplaceList {
    /// Builds the list from sheet 0 of the replace-to workbook. A row
    /// contributes a pair only when both cells are non-empty after trimming.
    pub fn from_sheet(sheet: &SheetGrid) -> Self {
        let mut list = Self::default();
        for row in &sheet.rows {
            let original = trimmed(row.cells.first());
            let replacement = trimmed(row.cells.get(1));
            let (Some(original), Some(replacement)) = (original, replacement) else {
                continue;
            };
            list.push(ReplacePair {
                original,
                replacement,
            });
        }
        list
    }

    fn push(&mut self, pair: ReplacePair) {
        let lookup_key = pair.original.to_lowercase();
        self.pairs.push(pair);
        self.by_original.entry(lookup_key).or_insert(self.pairs.len() - 1);
    }

    /// Replacement of the first pair whose original value equals `value`
    /// case-insensitively.
    pub fn find_replacement(&self, value: &str) -> Option<&str> {
        self.by_original
            .get(&value.to_lowercase())
            .map(|&idx| self.pairs[idx].replacement.as_str())
    }

    /// Pairs in load order.
    pub fn pairs(&self) -> &[ReplacePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn trimmed(cell: Option<&String>) -> Option<String> {
    let trimmed = cell?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
