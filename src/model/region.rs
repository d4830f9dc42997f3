use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use crate::model::indicators::Indicator;

#[derive(Debug, Clone, PartialEq)]
pub struct RegionRecord {
    pub region_id: String,
    pub region_name: String,
    pub pct_no_vehicle: f64,
    pub avg_commute_time: f64,
    pub pct_broadband: f64,
    pub unemployment_rate: f64,
    pub employment_growth: f64,
    pub poverty_rate: f64,
    pub licensing_burden_index: f64,
    pub ban_the_box_score: f64,
    pub fair_chance_score: f64,
    pub extra: BTreeMap<String, String>,
}

impl RegionRecord {
    pub fn indicator(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::PctNoVehicle => self.pct_no_vehicle,
            Indicator::AvgCommuteTime => self.avg_commute_time,
            Indicator::PctBroadband => self.pct_broadband,
            Indicator::UnemploymentRate => self.unemployment_rate,
            Indicator::EmploymentGrowth => self.employment_growth,
            Indicator::PovertyRate => self.poverty_rate,
            Indicator::LicensingBurdenIndex => self.licensing_burden_index,
            Indicator::BanTheBoxScore => self.ban_the_box_score,
            Indicator::FairChanceScore => self.fair_chance_score,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionTable {
    pub region_ids: Vec<String>,
    pub region_names: Vec<String>,
    indicators: BTreeMap<Indicator, Vec<f64>>,
    pub extra: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("column {column} has {found} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("duplicate region_id: {0}")]
    DuplicateRegion(String),
}

impl RegionTable {
    pub fn new(region_ids: Vec<String>, region_names: Vec<String>) -> Result<Self, TableError> {
        if region_names.len() != region_ids.len() {
            return Err(TableError::LengthMismatch {
                column: "region_name".to_string(),
                expected: region_ids.len(),
                found: region_names.len(),
            });
        }
        let mut seen = HashSet::new();
        for id in &region_ids {
            if !seen.insert(id.as_str()) {
                return Err(TableError::DuplicateRegion(id.clone()));
            }
        }
        Ok(Self {
            region_ids,
            region_names,
            indicators: BTreeMap::new(),
            extra: BTreeMap::new(),
        })
    }

    pub fn from_records(records: &[RegionRecord]) -> Result<Self, TableError> {
        let ids = records.iter().map(|r| r.region_id.clone()).collect();
        let names = records.iter().map(|r| r.region_name.clone()).collect();
        let mut table = Self::new(ids, names)?;
        for &indicator in Indicator::ordered() {
            let values = records.iter().map(|r| r.indicator(indicator)).collect();
            table.set_indicator(indicator, values)?;
        }
        let mut extra_keys: Vec<&String> = records.iter().flat_map(|r| r.extra.keys()).collect();
        extra_keys.sort();
        extra_keys.dedup();
        for key in extra_keys {
            let values = records
                .iter()
                .map(|r| r.extra.get(key).cloned().unwrap_or_default())
                .collect();
            table.set_extra(key, values)?;
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.region_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.region_ids.is_empty()
    }

    pub fn set_indicator(&mut self, indicator: Indicator, values: Vec<f64>) -> Result<(), TableError> {
        if values.len() != self.len() {
            return Err(TableError::LengthMismatch {
                column: indicator.as_str().to_string(),
                expected: self.len(),
                found: values.len(),
            });
        }
        self.indicators.insert(indicator, values);
        Ok(())
    }

    pub fn remove_indicator(&mut self, indicator: Indicator) -> Option<Vec<f64>> {
        self.indicators.remove(&indicator)
    }

    pub fn indicator(&self, indicator: Indicator) -> Option<&[f64]> {
        self.indicators.get(&indicator).map(|v| v.as_slice())
    }

    pub fn has_indicator(&self, indicator: Indicator) -> bool {
        self.indicators.contains_key(&indicator)
    }

    pub fn set_extra(&mut self, name: &str, values: Vec<String>) -> Result<(), TableError> {
        if values.len() != self.len() {
            return Err(TableError::LengthMismatch {
                column: name.to_string(),
                expected: self.len(),
                found: values.len(),
            });
        }
        self.extra.insert(name.to_string(), values);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/region.rs"]
mod tests;
