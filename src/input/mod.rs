pub mod regions;

use std::path::{Path, PathBuf};
use std::{fmt, io};

use thiserror::Error;

use crate::model::region::TableError;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("missing required file: {0}")]
    MissingFile(String),
    #[error("empty region table: {0}")]
    EmptyFile(String),
    #[error("region table missing identity column: {0}")]
    MissingIdColumn(String),
    #[error("empty region id at line {0}")]
    EmptyRegionId(u64),
    #[error("invalid value at line {line}, column {column}: {value:?}")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },
    #[error("invalid region table: {0}")]
    Table(#[from] TableError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported gzip input without feature enabled: {0}")]
    GzipNotEnabled(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub fn open_reader(path: &Path) -> Result<Box<dyn io::BufRead>, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingFile(path_display(path).to_string()));
    }
    let file = std::fs::File::open(path)?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        #[cfg(feature = "gz")]
        {
            let decoder = flate2::read::GzDecoder::new(file);
            return Ok(Box::new(io::BufReader::new(decoder)));
        }
        #[cfg(not(feature = "gz"))]
        {
            return Err(InputError::GzipNotEnabled(path.to_path_buf()));
        }
    }
    Ok(Box::new(io::BufReader::new(file)))
}

pub fn delimiter_for(path: &Path) -> u8 {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    if name.ends_with(".tsv") || name.ends_with(".tab") {
        b'\t'
    } else {
        b','
    }
}

pub fn path_display(path: &Path) -> impl fmt::Display + '_ {
    path.to_string_lossy()
}
