use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::model::{User, UserField};

/// Name of the single sheet in the output workbook.
pub const OUTPUT_SHEET: &str = "Staff";

/// Writes the cleaned roster to the given path, one row per record in
/// roster order. Absent fields become empty cells.
pub fn write_roster(path: &Path, users: &[User]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(OUTPUT_SHEET)?;

    for (col_idx, field) in UserField::ORDER.iter().enumerate() {
        worksheet.write_string(0, col_idx as u16, field.title())?;
    }

    for (row_idx, user) in users.iter().enumerate() {
        for (col_idx, field) in UserField::ORDER.iter().enumerate() {
            let value = user.field(*field).unwrap_or("");
            worksheet.write_string((row_idx + 1) as u32, col_idx as u16, value)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
