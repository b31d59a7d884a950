use rust_xlsxwriter::{Workbook, XlsxError};
use std::ffi::OsStr;
use std::path::Path;
use talaba_core::{LoadError, REQUIRED_COLUMNS, StudentRecord};

/// The five-student dataset written when the data file is missing.
#[must_use]
pub fn sample_students() -> Vec<StudentRecord> {
    [
        ("AB1234567", "Ali Valiyev", "Dasturiy injiniring fakulteti", "DI-21-01", "https://t.me/di2101_group"),
        ("CD9876543", "Gulnora Xasanova", "Axborot texnologiyalari fakulteti", "AT-20-02", "https://t.me/at2002_group"),
        ("EF5555555", "Shoxrux Qodirov", "Telekommunikatsiya fakulteti", "TK-22-01", "https://t.me/tk2201_group"),
        ("GH1111111", "Dilnoza Karimova", "Iqtisodiyot fakulteti", "IQ-19-03", "https://t.me/iq1903_group"),
        ("IJ2222222", "Javohir Tursunov", "Tibbiyot fakulteti", "TB-21-02", "https://t.me/tb2102_group"),
    ]
    .into_iter()
    .map(|(id, name, faculty, group, link)| StudentRecord::new(id, name, faculty, group, link))
    .collect()
}

/// Write the sample dataset to `path`, creating parent directories.
///
/// Only `.xlsx` paths are accepted, since that is the only format written.
/// The workbook is staged in a temporary file beside `path` and renamed into
/// place, so concurrent readers see either no file or a complete one.
pub fn write_sample(path: &Path) -> Result<(), LoadError> {
    let is_xlsx = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
    if !is_xlsx {
        return Err(LoadError::SampleWrite(
            "sample data can only be generated as .xlsx".to_string(),
        ));
    }

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).map_err(sample_write_error)?;

    let mut staging = tempfile::Builder::new()
        .prefix(".talaba-sample-")
        .suffix(".xlsx")
        .tempfile_in(dir)
        .map_err(sample_write_error)?;
    build_workbook(&sample_students())
        .and_then(|mut workbook| workbook.save_to_writer(staging.as_file_mut()))
        .map_err(sample_write_error)?;
    staging.persist(path).map_err(sample_write_error)?;
    Ok(())
}

fn sample_write_error(e: impl std::fmt::Display) -> LoadError {
    LoadError::SampleWrite(e.to_string())
}

/// Write records as an `.xlsx` workbook with the required header row.
pub fn write_workbook(path: &Path, records: &[StudentRecord]) -> Result<(), XlsxError> {
    build_workbook(records)?.save(path)
}

fn build_workbook(records: &[StudentRecord]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in (0u16..).zip(REQUIRED_COLUMNS) {
        sheet.write_string(0, col, name)?;
    }

    for (row, record) in (1u32..).zip(records) {
        let cells = [
            &record.identifier,
            &record.full_name,
            &record.faculty,
            &record.group_name,
            &record.group_link,
        ];
        for (col, value) in (0u16..).zip(cells) {
            sheet.write_string(row, col, value.as_str())?;
        }
    }

    Ok(workbook)
}
