// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Sent as `User-Agent` on every request.
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(DEFAULT_USER_AGENT),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// Final export path. `default_stem` names the file when the user only gave a directory
    /// (or nothing); the extension then follows `format`. A user-given file name is kept as is.
    pub fn out_path(&self, default_stem: &str) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        match &self.out_path.file_name {
            Some(name) => path.push(name),
            None => path.push(join!(default_stem, ".", self.format.ext())),
        }
        path
    }

    /// Parse user text into dir + optional file name.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);

        if s.is_empty() {
            self.out_path = OutputPath::default();
        } else if crate::file::looks_like_dir_hint(p) || p.is_dir() {
            self.out_path = OutputPath { dir: p.to_path_buf(), file_name: None };
        } else {
            let dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
            self.out_path = OutputPath { dir, file_name: p.file_name().map(OsString::from) };
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_name: Option<OsString>, // None → derived from the plan
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_name: None,
        }
    }
}
