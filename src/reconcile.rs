//! Reconciliation passes applied to the loaded roster.
//!
//! Each pass walks the full roster once. The passes run in a fixed order
//! (account-name correction, discrepancy report, categorical remap,
//! email-as-account override) and a later pass may overwrite what an
//! earlier one set.

use std::collections::HashSet;

use crate::model::{CompareEntry, User, UserField};
use crate::reference::{CompareList, ReplaceList};
use crate::report::DiagnosticSink;

/// Fields remapped through the replace-to list. The list carries no field
/// qualifier, so all three lookups share one key space: a pair aimed at one
/// field matches equal text in any of them.
const REMAP_FIELDS: [UserField; 3] = [
    UserField::OrganizationUnit,
    UserField::PhoneType,
    UserField::UserRoles,
];

/// Read-only outcome of [`report_discrepancies`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discrepancies {
    /// Roster emails with no matching compare-to entry.
    pub users_missing_from_reference: Vec<String>,
    /// Compare-to entries with no matching roster record.
    pub entries_missing_from_roster: Vec<CompareEntry>,
}

/// Overwrites each record's account name with the canonical one from the
/// compare-to list when the emails match case-insensitively and the names
/// differ.
pub fn correct_account_names(
    users: &mut [User],
    compare: &CompareList,
    sink: &mut dyn DiagnosticSink,
) {
    for user in users.iter_mut() {
        let Some(email) = user.email_address.clone() else {
            continue;
        };
        let Some(entry) = compare.find_by_email(&email) else {
            continue;
        };
        if user.account_name.as_deref() != Some(entry.account_name.as_str()) {
            sink.info(format!(
                "Account name replaced with {} from {} for {}",
                entry.account_name,
                user.account_name.as_deref().unwrap_or(""),
                email
            ));
            user.account_name = Some(entry.account_name.clone());
        }
    }
}

/// Reports records absent from the compare-to list and compare-to entries
/// absent from the roster. Does not mutate the roster.
pub fn report_discrepancies(
    users: &[User],
    compare: &CompareList,
    sink: &mut dyn DiagnosticSink,
) -> Discrepancies {
    let users_missing_from_reference: Vec<String> = users
        .iter()
        .filter_map(|user| user.email_address.as_deref())
        .filter(|email| !compare.contains_email(email))
        .map(str::to_string)
        .collect();

    let roster_emails: HashSet<String> = users
        .iter()
        .filter_map(|user| user.email_address.as_deref())
        .map(str::to_lowercase)
        .collect();
    let entries_missing_from_roster: Vec<CompareEntry> = compare
        .entries()
        .iter()
        .filter(|entry| !roster_emails.contains(&entry.email.to_lowercase()))
        .cloned()
        .collect();

    sink.info(format!(
        "Users cannot be found in our database: {}",
        users_missing_from_reference.join(",")
    ));
    sink.info(format!(
        "Users cannot be found from input file (keys): {}",
        entries_missing_from_roster
            .iter()
            .map(|entry| entry.key.as_str())
            .collect::<Vec<_>>()
            .join(",")
    ));
    sink.info(format!(
        "Users cannot be found from input file: {}",
        entries_missing_from_roster
            .iter()
            .map(|entry| entry.email.as_str())
            .collect::<Vec<_>>()
            .join(",")
    ));

    Discrepancies {
        users_missing_from_reference,
        entries_missing_from_roster,
    }
}

/// Remaps OrganizationUnit, PhoneType, and UserRoles through the replace-to
/// list, each field independently against the same pair collection.
pub fn remap_categories(users: &mut [User], replace: &ReplaceList, sink: &mut dyn DiagnosticSink) {
    for user in users.iter_mut() {
        let email = user.email_address.clone().unwrap_or_default();
        for field in REMAP_FIELDS {
            let Some((current, replacement)) = user.field(field).and_then(|current| {
                replace
                    .find_replacement(current)
                    .map(|replacement| (current.to_string(), replacement.to_string()))
            }) else {
                continue;
            };
            sink.info(format!(
                "{} replaced with {replacement} from {current} for {email}",
                field.name()
            ));
            user.set_field(field, Some(replacement));
        }
    }
}

/// Unconditionally overwrites every account name with the record's email
/// address. Runs last when enabled, superseding earlier corrections.
pub fn apply_email_as_account(users: &mut [User], sink: &mut dyn DiagnosticSink) {
    for user in users.iter_mut() {
        let Some(email) = user.email_address.clone() else {
            continue;
        };
        sink.info(format!(
            "Account name replaced with email address for {email}"
        ));
        user.account_name = Some(email);
    }
}
