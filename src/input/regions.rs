use std::collections::BTreeMap;
use std::path::Path;

use crate::input::{InputError, delimiter_for, open_reader, path_display};
use crate::model::indicators::Indicator;
use crate::model::region::RegionTable;

pub const DEFAULT_ID_COLUMN: &str = "region_id";
pub const DEFAULT_NAME_COLUMN: &str = "region_name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdColumns {
    pub id: String,
    pub name: String,
}

impl Default for IdColumns {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID_COLUMN.to_string(),
            name: DEFAULT_NAME_COLUMN.to_string(),
        }
    }
}

/// Indicator columns are optional; a missing one is reported by its scorer.
pub fn read_region_table(path: &Path, id_columns: &IdColumns) -> Result<RegionTable, InputError> {
    let reader = open_reader(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_for(path))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        return Err(InputError::EmptyFile(path_display(path).to_string()));
    }
    let id_idx = headers
        .iter()
        .position(|h| h == id_columns.id)
        .ok_or_else(|| InputError::MissingIdColumn(id_columns.id.clone()))?;
    let name_idx = headers.iter().position(|h| h == id_columns.name);

    let mut indicator_cols: Vec<(usize, Indicator)> = Vec::new();
    let mut extra_cols: Vec<(usize, String)> = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        if idx == id_idx || Some(idx) == name_idx {
            continue;
        }
        match Indicator::from_column(header) {
            Some(indicator) => indicator_cols.push((idx, indicator)),
            None => extra_cols.push((idx, header.to_string())),
        }
    }

    let mut ids = Vec::new();
    let mut names = Vec::new();
    let mut indicator_values: BTreeMap<Indicator, Vec<f64>> = BTreeMap::new();
    let mut extra_values: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let id = record.get(id_idx).unwrap_or_default();
        if id.is_empty() {
            return Err(InputError::EmptyRegionId(line));
        }
        ids.push(id.to_string());
        let name = name_idx.and_then(|i| record.get(i)).unwrap_or(id);
        names.push(name.to_string());

        for (idx, indicator) in &indicator_cols {
            let raw = record.get(*idx).unwrap_or_default();
            let value = parse_value(raw).ok_or_else(|| InputError::InvalidNumber {
                line,
                column: indicator.as_str().to_string(),
                value: raw.to_string(),
            })?;
            indicator_values.entry(*indicator).or_default().push(value);
        }
        for (idx, column) in &extra_cols {
            let raw = record.get(*idx).unwrap_or_default();
            extra_values
                .entry(column.clone())
                .or_default()
                .push(raw.to_string());
        }
    }

    let mut table = RegionTable::new(ids, names)?;
    for (_, indicator) in indicator_cols {
        let values = indicator_values.remove(&indicator).unwrap_or_default();
        table.set_indicator(indicator, values)?;
    }
    for (_, column) in extra_cols {
        let values = extra_values.remove(&column).unwrap_or_default();
        table.set_extra(&column, values)?;
    }
    Ok(table)
}

fn parse_value(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/regions.rs"]
mod tests;
