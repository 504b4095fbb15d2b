use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::analysis::AnalysisRecord;
use crate::error::ProjectileError;

pub fn write_table<W: Write>(records: &[AnalysisRecord], mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "{}", AnalysisRecord::COLUMNS.join(","))?;

    for record in records {
        let row: Vec<String> = record.values().iter().map(|v| v.to_string()).collect();
        writeln!(writer, "{}", row.join(","))?;
    }

    writer.flush()
}

pub fn export_table(records: &[AnalysisRecord], path: &Path) -> Result<PathBuf, ProjectileError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    write_table(records, BufWriter::new(file))?;
    log::info!("Wrote {} rows to {}", records.len(), path.display());

    Ok(path.to_path_buf())
}
