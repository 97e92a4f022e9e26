//! CSV export: one `<table>.csv` per generated table.

use crate::{
    dataset::{Dataset, TableRecord},
    error::GenResult,
};
use std::path::{Path, PathBuf};

/// Write every present table into `dir` (created if absent) and return
/// the files written, in table order. Absent tables are skipped.
pub fn write_csv_tables(dataset: &Dataset, dir: &Path) -> GenResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    write_optional(dir, dataset.customers.as_deref(), &mut written)?;
    write_optional(dir, dataset.products.as_deref(), &mut written)?;
    write_optional(dir, dataset.orders.as_deref(), &mut written)?;
    write_optional(dir, dataset.order_items.as_deref(), &mut written)?;
    write_optional(dir, dataset.web_sessions.as_deref(), &mut written)?;
    write_optional(dir, dataset.marketing_spend.as_deref(), &mut written)?;
    Ok(written)
}

fn write_optional<T: TableRecord>(
    dir: &Path,
    rows: Option<&[T]>,
    written: &mut Vec<PathBuf>,
) -> GenResult<()> {
    if let Some(rows) = rows {
        let path = dir.join(format!("{}.csv", T::TABLE));
        write_table(&path, rows)?;
        log::info!("export: wrote {} rows to {}", rows.len(), path.display());
        written.push(path);
    }
    Ok(())
}

/// Header from `T::COLUMNS`, then one serialized row per record.
/// `None` fields come out as empty cells.
pub fn write_table<T: TableRecord>(path: &Path, rows: &[T]) -> GenResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(T::COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
