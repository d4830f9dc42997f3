use crate::index::IndexError;
use crate::index::normalize::normalize;
use crate::model::indicators::{Component, Indicator};
use crate::model::region::RegionTable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaborMarketSubWeights {
    pub unemployment: f64,
    pub growth: f64,
    pub poverty: f64,
}

pub const LABOR_MARKET_SUB_WEIGHTS: LaborMarketSubWeights = LaborMarketSubWeights {
    unemployment: 0.40,
    growth: 0.30,
    poverty: 0.30,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ComponentScores {
    pub transportation: Vec<f64>,
    pub labor_market: Vec<f64>,
    pub licensing: Vec<f64>,
    pub policy: Vec<f64>,
}

impl ComponentScores {
    pub fn compute(table: &RegionTable) -> Result<Self, IndexError> {
        Ok(Self {
            transportation: transportation_score(table)?,
            labor_market: labor_market_score(table)?,
            licensing: licensing_score(table)?,
            policy: policy_score(table)?,
        })
    }

    pub fn get(&self, component: Component) -> &[f64] {
        match component {
            Component::Transportation => &self.transportation,
            Component::LaborMarket => &self.labor_market,
            Component::Licensing => &self.licensing,
            Component::Policy => &self.policy,
        }
    }

    pub fn len(&self) -> usize {
        self.transportation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transportation.is_empty()
    }
}

fn column<'a>(
    table: &'a RegionTable,
    component: Component,
    indicator: Indicator,
) -> Result<&'a [f64], IndexError> {
    table
        .indicator(indicator)
        .ok_or(IndexError::MissingColumn {
            component,
            column: indicator,
        })
}

pub fn transportation_score(table: &RegionTable) -> Result<Vec<f64>, IndexError> {
    let c = Component::Transportation;
    let no_vehicle = column(table, c, Indicator::PctNoVehicle)?;
    let commute = column(table, c, Indicator::AvgCommuteTime)?;
    let broadband = column(table, c, Indicator::PctBroadband)?;

    let with_vehicle: Vec<f64> = no_vehicle.iter().map(|v| 100.0 - v).collect();
    let vehicle_score = normalize(&with_vehicle, false);
    let commute_score = normalize(commute, true);
    let broadband_score = normalize(broadband, false);

    Ok(vehicle_score
        .iter()
        .zip(&commute_score)
        .zip(&broadband_score)
        .map(|((v, c), b)| (v + c + b) / 3.0)
        .collect())
}

pub fn labor_market_score(table: &RegionTable) -> Result<Vec<f64>, IndexError> {
    let c = Component::LaborMarket;
    let unemployment = column(table, c, Indicator::UnemploymentRate)?;
    let growth = column(table, c, Indicator::EmploymentGrowth)?;
    let poverty = column(table, c, Indicator::PovertyRate)?;

    let unemployment_score = normalize(unemployment, true);
    let growth_score = normalize(growth, false);
    let poverty_score = normalize(poverty, true);

    let w = LABOR_MARKET_SUB_WEIGHTS;
    Ok(unemployment_score
        .iter()
        .zip(&growth_score)
        .zip(&poverty_score)
        .map(|((u, g), p)| u * w.unemployment + g * w.growth + p * w.poverty)
        .collect())
}

pub fn licensing_score(table: &RegionTable) -> Result<Vec<f64>, IndexError> {
    let burden = column(table, Component::Licensing, Indicator::LicensingBurdenIndex)?;
    Ok(normalize(burden, true))
}

pub fn policy_score(table: &RegionTable) -> Result<Vec<f64>, IndexError> {
    let c = Component::Policy;
    let ban_the_box = column(table, c, Indicator::BanTheBoxScore)?;
    let fair_chance = column(table, c, Indicator::FairChanceScore)?;

    let btb_score = normalize(ban_the_box, false);
    let fair_chance_score = normalize(fair_chance, false);

    Ok(btb_score
        .iter()
        .zip(&fair_chance_score)
        .map(|(b, f)| (b + f) / 2.0)
        .collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/index/components.rs"]
mod tests;
