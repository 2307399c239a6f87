use roster_tools::ingest::{self, is_valid_email};
use roster_tools::io::excel_read::{RowCells, SheetGrid};
use roster_tools::reconcile;
use roster_tools::reference::{CompareList, ReplaceList};
use roster_tools::report::{MemorySink, Severity};

fn sheet(rows: Vec<Vec<&str>>) -> SheetGrid {
    SheetGrid {
        name: "Sheet1".to_string(),
        rows: rows
            .into_iter()
            .enumerate()
            .map(|(idx, cells)| RowCells {
                index: idx as u32 + 1,
                cells: cells.into_iter().map(str::to_string).collect(),
            })
            .collect(),
    }
}

#[test]
fn email_pattern_accepts_and_rejects() {
    assert!(is_valid_email("jane.doe@example.com"));
    assert!(is_valid_email("o'neil-2@sub.example.co"));
    assert!(!is_valid_email("a,b@example.com"));
    assert!(!is_valid_email("no-at-sign.example.com"));
    assert!(!is_valid_email("jane@example"));
    assert!(!is_valid_email("jane@example.toolong"));
}

#[test]
fn empty_and_null_cells_get_defaults() {
    let grid = sheet(vec![vec![
        "NULL",
        "Lee",
        "",
        "",
        "",
        "",
        "",
        "",
        "lee@example.com",
    ]]);
    let mut sink = MemorySink::new();
    let users = ingest::load_users(&[grid], false, &mut sink);

    assert_eq!(users.len(), 1);
    let user = &users[0];
    assert_eq!(user.first_name, None);
    assert_eq!(user.last_name.as_deref(), Some("Lee"));
    assert_eq!(user.business_title.as_deref(), Some("Other"));
    assert_eq!(user.organization_unit, None);
    assert_eq!(user.phone_type.as_deref(), Some("Other"));
    assert_eq!(user.phone_number.as_deref(), Some("000-000-0000"));
    assert_eq!(user.account_name.as_deref(), Some("lee@example.com"));
    assert_eq!(user.email_address.as_deref(), Some("lee@example.com"));
}

#[test]
fn invalid_email_skips_row_with_warning() {
    let grid = sheet(vec![
        vec!["A", "B", "", "", "", "", "", "", "not-an-email"],
        vec!["C", "D", "", "", "", "", "", "", "c.d@example.com"],
    ]);
    let mut sink = MemorySink::new();
    let users = ingest::load_users(&[grid], false, &mut sink);

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email_address.as_deref(), Some("c.d@example.com"));
    assert!(sink.contains(Severity::Warn, "not-an-email has invalid format"));
}

#[test]
fn comma_email_rejected_even_with_auto_correct() {
    // Validation runs against the original value, so the comma substitution
    // never rescues a row.
    let grid = sheet(vec![vec![
        "NULL",
        "Lee",
        "",
        "",
        "",
        "",
        "",
        "",
        "a,b@EX.com",
    ]]);
    let mut sink = MemorySink::new();
    let users = ingest::load_users(&[grid], true, &mut sink);

    assert!(users.is_empty());
    assert!(sink.contains(Severity::Warn, "a,b@EX.com has invalid format"));
}

#[test]
fn duplicate_email_keeps_first_record() {
    let grid = sheet(vec![
        vec!["First", "One", "", "", "", "", "", "", "a@b.com"],
        vec!["Second", "Two", "", "", "", "", "", "", "a@b.com"],
    ]);
    let mut sink = MemorySink::new();
    let users = ingest::load_users(&[grid], false, &mut sink);

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].first_name.as_deref(), Some("First"));
    assert!(sink.contains(Severity::Info, "a@b.com already loaded"));
}

#[test]
fn rows_without_email_are_dropped_silently() {
    let grid = sheet(vec![vec!["A", "B", "Title", "Unit", "", "", "", "acct", ""]]);
    let mut sink = MemorySink::new();
    let users = ingest::load_users(&[grid], false, &mut sink);

    assert!(users.is_empty());
    assert!(sink.notices.is_empty());
}

#[test]
fn explicit_account_name_is_preserved() {
    let grid = sheet(vec![vec![
        "A",
        "B",
        "",
        "",
        "",
        "",
        "",
        "ab01",
        "a@b.com",
    ]]);
    let mut sink = MemorySink::new();
    let users = ingest::load_users(&[grid], false, &mut sink);

    assert_eq!(users[0].account_name.as_deref(), Some("ab01"));
}

#[test]
fn roster_order_is_first_seen_across_sheets() {
    let first = sheet(vec![vec!["A", "", "", "", "", "", "", "", "a@b.com"]]);
    let mut second = sheet(vec![
        vec!["B", "", "", "", "", "", "", "", "b@b.com"],
        vec!["A2", "", "", "", "", "", "", "", "a@b.com"],
    ]);
    second.name = "Sheet2".to_string();
    let mut sink = MemorySink::new();
    let users = ingest::load_users(&[first, second], false, &mut sink);

    let emails: Vec<&str> = users
        .iter()
        .filter_map(|user| user.email_address.as_deref())
        .collect();
    assert_eq!(emails, vec!["a@b.com", "b@b.com"]);
}

#[test]
fn account_name_corrected_from_compare_list_case_insensitively() {
    let grid = sheet(vec![vec![
        "A",
        "B",
        "",
        "",
        "",
        "",
        "",
        "jd01",
        "A@B.COM",
    ]]);
    let mut sink = MemorySink::new();
    let mut users = ingest::load_users(&[grid], true, &mut sink);

    let compare = CompareList::from_sheet(&sheet(vec![vec!["K1", "jdoe", "a@b.com"]]));
    reconcile::correct_account_names(&mut users, &compare, &mut sink);

    assert_eq!(users[0].account_name.as_deref(), Some("jdoe"));
    assert!(sink.contains(Severity::Info, "Account name replaced with jdoe from jd01"));
}

#[test]
fn compare_list_first_occurrence_wins() {
    let compare = CompareList::from_sheet(&sheet(vec![
        vec!["K1", "first", "a@b.com"],
        vec!["K2", "second", "A@B.COM"],
    ]));

    let entry = compare.find_by_email("a@B.com").expect("entry found");
    assert_eq!(entry.account_name, "first");
    assert_eq!(compare.len(), 2);
}

#[test]
fn incomplete_compare_rows_are_ignored() {
    let compare = CompareList::from_sheet(&sheet(vec![
        vec!["K1", "", "a@b.com"],
        vec!["", "jdoe", "b@b.com"],
        vec!["K3", "jroe", "  c@b.com  "],
    ]));

    assert_eq!(compare.len(), 1);
    assert_eq!(compare.entries()[0].email, "c@b.com");
}

#[test]
fn discrepancies_reported_both_ways() {
    let grid = sheet(vec![
        vec!["A", "", "", "", "", "", "", "", "a@b.com"],
        vec!["B", "", "", "", "", "", "", "", "b@b.com"],
    ]);
    let mut sink = MemorySink::new();
    let users = ingest::load_users(&[grid], false, &mut sink);

    let compare = CompareList::from_sheet(&sheet(vec![
        vec!["K1", "auser", "A@B.COM"],
        vec!["K2", "cuser", "c@b.com"],
    ]));
    let discrepancies = reconcile::report_discrepancies(&users, &compare, &mut sink);

    assert_eq!(discrepancies.users_missing_from_reference, vec!["b@b.com"]);
    assert_eq!(discrepancies.entries_missing_from_roster.len(), 1);
    assert_eq!(discrepancies.entries_missing_from_roster[0].key, "K2");
    assert!(sink.contains(Severity::Info, "Users cannot be found in our database: b@b.com"));
    assert!(sink.contains(Severity::Info, "Users cannot be found from input file (keys): K2"));
}

#[test]
fn replace_list_remaps_all_three_fields_independently() {
    // One flat pair list is shared by OrganizationUnit, PhoneType, and
    // UserRoles, so equal text in two fields is remapped in both.
    let grid = sheet(vec![vec![
        "A",
        "B",
        "",
        "Sales",
        "Mobile",
        "555-0100",
        "Sales",
        "",
        "a@b.com",
    ]]);
    let mut sink = MemorySink::new();
    let mut users = ingest::load_users(&[grid], true, &mut sink);

    let replace = ReplaceList::from_sheet(&sheet(vec![vec!["sales", "Revenue"]]));
    reconcile::remap_categories(&mut users, &replace, &mut sink);

    assert_eq!(users[0].organization_unit.as_deref(), Some("Revenue"));
    assert_eq!(users[0].user_roles.as_deref(), Some("Revenue"));
    assert_eq!(users[0].phone_type.as_deref(), Some("Mobile"));
    assert!(sink.contains(Severity::Info, "OrganizationUnit replaced with Revenue from Sales"));
    assert!(sink.contains(Severity::Info, "UserRoles replaced with Revenue from Sales"));
}

#[test]
fn remap_is_idempotent_for_unchained_lists() {
    let grid = sheet(vec![vec![
        "A",
        "B",
        "",
        "Sales",
        "",
        "",
        "",
        "",
        "a@b.com",
    ]]);
    let mut sink = MemorySink::new();
    let mut users = ingest::load_users(&[grid], true, &mut sink);
    let replace = ReplaceList::from_sheet(&sheet(vec![vec!["Sales", "Revenue"]]));

    reconcile::remap_categories(&mut users, &replace, &mut sink);
    let after_once = users.clone();
    reconcile::remap_categories(&mut users, &replace, &mut sink);

    assert_eq!(users, after_once);
}

#[test]
fn replace_list_first_occurrence_wins() {
    let replace = ReplaceList::from_sheet(&sheet(vec![
        vec!["Sales", "Revenue"],
        vec!["SALES", "Operations"],
    ]));

    assert_eq!(replace.find_replacement("sales"), Some("Revenue"));
    assert_eq!(replace.len(), 2);
}

#[test]
fn email_as_account_overrides_compare_correction() {
    let grid = sheet(vec![vec![
        "A",
        "B",
        "",
        "",
        "",
        "",
        "",
        "jd01",
        "a@b.com",
    ]]);
    let mut sink = MemorySink::new();
    let mut users = ingest::load_users(&[grid], true, &mut sink);

    let compare = CompareList::from_sheet(&sheet(vec![vec!["K1", "jdoe", "a@b.com"]]));
    reconcile::correct_account_names(&mut users, &compare, &mut sink);
    assert_eq!(users[0].account_name.as_deref(), Some("jdoe"));

    reconcile::apply_email_as_account(&mut users, &mut sink);
    assert_eq!(users[0].account_name.as_deref(), Some("a@b.com"));
    assert!(sink.contains(
        Severity::Info,
        "Account name replaced with email address for a@b.com"
    ));
}
