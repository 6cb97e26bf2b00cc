use crate::Ledger::reaction_ledger::ReactionTable;
use log::info;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// CSV bytes of the table; header row uses the table column captions.
/// An empty table gives just the header.
pub fn table_to_csv(table: &ReactionTable) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

pub fn write_csv(path: &Path, table: &ReactionTable) -> Result<(), ExportError> {
    let bytes = table_to_csv(table)?;
    fs::write(path, bytes)?;
    info!("{} reactions exported to {}", table.len(), path.display());
    Ok(())
}
