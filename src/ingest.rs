//! Converts raw roster rows into validated, defaulted [`User`] records and
//! deduplicates them by email address.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::io::excel_read::{RowCells, SheetGrid};
use crate::model::{
    DEFAULT_BUSINESS_TITLE, DEFAULT_PHONE_NUMBER, DEFAULT_PHONE_TYPE, User, UserField,
};
use crate::report::DiagnosticSink;

/// Accepted email shape: local part of letters, digits, `_ . ' -`, a domain
/// of letters, digits, `_ . -`, and a trailing label of 2–5 letters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.'-]+@[A-Za-z0-9_.-]+\.[A-Za-z]{2,5}$")
        .expect("email pattern is a valid regex")
});

/// Returns true when the value matches the accepted email shape.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Loads the roster from the tokenized primary sheets.
///
/// Rows with an invalid email are skipped with a warning; rows without any
/// email are dropped without notice; rows whose email was already seen are
/// dropped with an informational note. The surviving records keep
/// first-seen order across all sheets.
pub fn load_users(
    sheets: &[SheetGrid],
    auto_correct: bool,
    sink: &mut dyn DiagnosticSink,
) -> Vec<User> {
    let mut roster = Vec::new();
    let mut seen_emails: HashSet<String> = HashSet::new();

    for sheet in sheets {
        for row in &sheet.rows {
            let Some(user) = user_from_row(sheet, row, auto_correct, sink) else {
                continue;
            };
            // Only records bearing an email survive ingestion.
            let Some(email) = user.email_address.clone() else {
                continue;
            };
            if seen_emails.contains(&email) {
                sink.info(format!(
                    "{email} already loaded. Current Sheet/Row [{}]/[{}]",
                    sheet.name, row.index
                ));
                continue;
            }
            seen_emails.insert(email);
            roster.push(user);
        }
    }

    roster
}

/// Builds one record from a raw row, or `None` when the row is rejected.
fn user_from_row(
    sheet: &SheetGrid,
    row: &RowCells,
    auto_correct: bool,
    sink: &mut dyn DiagnosticSink,
) -> Option<User> {
    let mut user = User::default();

    for (col_idx, field) in UserField::ORDER.iter().enumerate() {
        let value = row
            .cells
            .get(col_idx)
            .map(String::as_str)
            .and_then(normalize_cell);

        let value = match field {
            UserField::BusinessTitle => {
                value.or_else(|| Some(DEFAULT_BUSINESS_TITLE.to_string()))
            }
            UserField::PhoneType => value.or_else(|| Some(DEFAULT_PHONE_TYPE.to_string())),
            UserField::PhoneNumber => value.or_else(|| Some(DEFAULT_PHONE_NUMBER.to_string())),
            UserField::EmailAddress => match value {
                Some(raw) => {
                    // Validation runs against the original value; the comma
                    // substitution below never changes the outcome.
                    if !is_valid_email(&raw) {
                        sink.warn(format!(
                            "{raw} has invalid format, skipped this row. Current Sheet/Row [{}]/[{}]",
                            sheet.name, row.index
                        ));
                        return None;
                    }
                    Some(correct_commas(raw, auto_correct, sheet, row, sink))
                }
                None => None,
            },
            _ => value,
        };
        user.set_field(*field, value);
    }

    // Email address doubles as the default account name.
    if user.account_name.is_none() {
        user.account_name = user.email_address.clone();
    }

    Some(user)
}

fn correct_commas(
    value: String,
    auto_correct: bool,
    sheet: &SheetGrid,
    row: &RowCells,
    sink: &mut dyn DiagnosticSink,
) -> String {
    if auto_correct && value.contains(',') {
        sink.info(format!(
            "{value} auto corrected. Current Sheet/Row [{}]/[{}]",
            sheet.name, row.index
        ));
        value.replace(',', ".")
    } else {
        value
    }
}

/// Trims the cell and maps the literal "NULL" (any case) to absent.
fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("NULL") {
        None
    } else {
        Some(trimmed.to_string())
    }
}
