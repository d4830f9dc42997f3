use std::path::Path;

use crate::index::engine::ScoredTable;
use crate::index::sensitivity::SensitivityTable;
use crate::index::summary::SummaryTable;
use crate::model::indicators::{Component, Indicator, REAI_COLUMN, REAI_RANK_COLUMN};
use crate::report::{ReportError, fmt6};

fn tsv_writer(path: &Path) -> Result<csv::Writer<std::fs::File>, ReportError> {
    Ok(csv::WriterBuilder::new().delimiter(b'\t').from_path(path)?)
}

pub fn write_scored_tsv(path: &Path, scored: &ScoredTable) -> Result<(), ReportError> {
    let regions = &scored.regions;
    let indicators: Vec<Indicator> = Indicator::ordered()
        .iter()
        .copied()
        .filter(|i| regions.has_indicator(*i))
        .collect();

    let mut header = vec!["region_id".to_string(), "region_name".to_string()];
    header.extend(regions.extra.keys().cloned());
    header.extend(indicators.iter().map(|i| i.as_str().to_string()));
    header.extend(Component::ordered().iter().map(|c| c.score_column().to_string()));
    header.push(REAI_COLUMN.to_string());
    header.push(REAI_RANK_COLUMN.to_string());

    let mut writer = tsv_writer(path)?;
    writer.write_record(&header)?;
    for row in 0..scored.len() {
        let mut record = vec![
            regions.region_ids[row].clone(),
            regions.region_names[row].clone(),
        ];
        record.extend(regions.extra.values().map(|col| col[row].clone()));
        for indicator in &indicators {
            let value = regions.indicator(*indicator).map(|col| col[row]);
            record.push(value.map(fmt6).unwrap_or_default());
        }
        for component in Component::ordered() {
            record.push(fmt6(scored.component(*component)[row]));
        }
        record.push(fmt6(scored.reai[row]));
        record.push(scored.reai_rank[row].to_string());
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_sensitivity_tsv(path: &Path, table: &SensitivityTable) -> Result<(), ReportError> {
    let mut writer = tsv_writer(path)?;
    writer.write_record(table.header())?;
    for row in 0..table.len() {
        let mut record = vec![
            table.region_ids[row].clone(),
            table.region_names[row].clone(),
            fmt6(table.base_reai[row]),
            table.base_rank[row].to_string(),
        ];
        for scenario in &table.scenarios {
            record.push(fmt6(scenario.reai[row]));
            record.push(scenario.rank[row].to_string());
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_summary_tsv(path: &Path, summary: &SummaryTable) -> Result<(), ReportError> {
    let mut writer = tsv_writer(path)?;
    writer.write_record([
        "column", "weight", "count", "mean", "std", "min", "25%", "50%", "75%", "max",
    ])?;
    for row in &summary.rows {
        let s = &row.stats;
        writer.write_record([
            row.column.clone(),
            fmt6(row.weight),
            s.count.to_string(),
            fmt6(s.mean),
            fmt6(s.std),
            fmt6(s.min),
            fmt6(s.p25),
            fmt6(s.p50),
            fmt6(s.p75),
            fmt6(s.max),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tables.rs"]
mod tests;
