// src/file.rs

use std::{
    error::Error,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::ExportOptions;
use crate::csv::write_table;
use crate::plan::TrainingPlan;

/// Write the plan to the path implied by `export` (see `ExportOptions::out_path`).
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, plan: &TrainingPlan) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path(&plan.file_stem());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let headers = TrainingPlan::headers();
    let headers = export.include_headers.then_some(headers.as_slice());

    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_table(&mut out, headers, &plan.rows(), export.format.delim())?;
    out.flush()?;

    logf!("Export: {} rows → {}", plan.days.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// A trailing separator means "this is a directory", existing or not.
pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
