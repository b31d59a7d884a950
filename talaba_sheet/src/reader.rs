use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;
use talaba_core::{Directory, LoadError, REQUIRED_COLUMNS, StudentRecord};
use tracing::debug;

/// Position of each required column in the header row, in `REQUIRED_COLUMNS` order.
type ColumnMap = [usize; REQUIRED_COLUMNS.len()];

/// Read a whole directory from the first worksheet of a workbook.
pub fn read_directory(path: &Path) -> Result<Directory, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileMissing(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| LoadError::Parse(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::Parse("workbook has no worksheets".to_string()))?
        .map_err(|e| LoadError::Parse(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows.next().unwrap_or_default();
    let columns = locate_columns(header)?;

    let mut records = Vec::new();
    // Header is spreadsheet row 1.
    for (row_number, row) in (2usize..).zip(rows) {
        let mut fields: [String; REQUIRED_COLUMNS.len()] = Default::default();
        for (slot, (&column, name)) in fields.iter_mut().zip(columns.iter().zip(REQUIRED_COLUMNS)) {
            *slot = cell_text(row.get(column), row_number, name)?;
        }

        if fields.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let [identifier, full_name, faculty, group_name, group_link] = fields;
        records.push(StudentRecord::new(
            identifier, full_name, faculty, group_name, group_link,
        ));
    }

    debug!("Read {} rows from {}", records.len(), path.display());
    Ok(Directory::new(records))
}

fn locate_columns(header: &[Data]) -> Result<ColumnMap, LoadError> {
    let names: Vec<String> = header.iter().map(|c| c.to_string().trim().to_string()).collect();

    let mut columns = ColumnMap::default();
    for (slot, required) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = names
            .iter()
            .position(|n| n == required)
            .ok_or_else(|| LoadError::SchemaInvalid(required.to_string()))?;
    }
    Ok(columns)
}

/// Text of one cell. Whole floats lose their `.0`, so numeric identifiers read back cleanly.
fn cell_text(cell: Option<&Data>, row: usize, column: &str) -> Result<String, LoadError> {
    match cell {
        None | Some(Data::Empty) => Ok(String::new()),
        Some(Data::String(s)) => Ok(s.clone()),
        Some(Data::Error(e)) => Err(LoadError::Parse(format!(
            "row {row}, column '{column}': cell error {e}"
        ))),
        Some(other) => Ok(other.to_string()),
    }
}
