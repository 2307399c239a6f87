use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::error::{Result, ToolError};

/// One data row of a worksheet: the zero-based worksheet row index (kept for
/// diagnostics) and the raw cell strings in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCells {
    pub index: u32,
    pub cells: Vec<String>,
}

/// All data rows of one worksheet, header row excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetGrid {
    pub name: String,
    pub rows: Vec<RowCells>,
}

/// Reads every sheet of the primary roster workbook, in workbook order.
pub fn read_user_sheets(path: &Path) -> Result<Vec<SheetGrid>> {
    let mut workbook = open_roster_workbook(path)?;
    let names = workbook.sheet_names().to_owned();

    let mut sheets = Vec::with_capacity(names.len());
    for name in &names {
        sheets.push(read_sheet(&mut workbook, name)?);
    }
    Ok(sheets)
}

/// Reads sheet 0 of a reference workbook (compare-to or replace-to input).
pub fn read_reference_sheet(path: &Path) -> Result<SheetGrid> {
    let mut workbook = open_roster_workbook(path)?;
    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ToolError::InvalidWorkbook("workbook has no sheets".into()))?;
    read_sheet(&mut workbook, &name)
}

fn open_roster_workbook(path: &Path) -> Result<Xlsx<std::io::BufReader<std::fs::File>>> {
    if !path.exists() {
        return Err(ToolError::MissingInput(path.to_path_buf()));
    }
    let workbook: Xlsx<_> = open_workbook(path)?;
    Ok(workbook)
}

fn read_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<SheetGrid> {
    let range_result = workbook
        .worksheet_range(name)
        .ok_or_else(|| ToolError::InvalidWorkbook(format!("missing sheet '{name}'")))?;
    let range = range_result.map_err(ToolError::from)?;

    let start_row = range.start().map(|(row, _)| row).unwrap_or(0);
    let mut rows = Vec::new();
    for (offset, row) in range.rows().enumerate().skip(1) {
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();
        if cells.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(RowCells {
            index: start_row + offset as u32,
            cells,
        });
    }

    Ok(SheetGrid {
        name: name.to_string(),
        rows,
    })
}

fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::String(value) => value.clone(),
        DataType::Float(value) => value.to_string(),
        DataType::Int(value) => value.to_string(),
        DataType::Bool(value) => value.to_string(),
        DataType::Empty => String::new(),
        other => other.to_string(),
    }
}
