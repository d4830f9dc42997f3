use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Indicator {
    PctNoVehicle,
    AvgCommuteTime,
    PctBroadband,
    UnemploymentRate,
    EmploymentGrowth,
    PovertyRate,
    LicensingBurdenIndex,
    BanTheBoxScore,
    FairChanceScore,
}

impl Indicator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::PctNoVehicle => "pct_no_vehicle",
            Indicator::AvgCommuteTime => "avg_commute_time",
            Indicator::PctBroadband => "pct_broadband",
            Indicator::UnemploymentRate => "unemployment_rate",
            Indicator::EmploymentGrowth => "employment_growth",
            Indicator::PovertyRate => "poverty_rate",
            Indicator::LicensingBurdenIndex => "licensing_burden_index",
            Indicator::BanTheBoxScore => "ban_the_box_score",
            Indicator::FairChanceScore => "fair_chance_score",
        }
    }

    pub fn ordered() -> &'static [Indicator] {
        &[
            Indicator::PctNoVehicle,
            Indicator::AvgCommuteTime,
            Indicator::PctBroadband,
            Indicator::UnemploymentRate,
            Indicator::EmploymentGrowth,
            Indicator::PovertyRate,
            Indicator::LicensingBurdenIndex,
            Indicator::BanTheBoxScore,
            Indicator::FairChanceScore,
        ]
    }

    pub fn from_column(name: &str) -> Option<Indicator> {
        Indicator::ordered()
            .iter()
            .copied()
            .find(|i| i.as_str() == name)
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Component {
    Transportation,
    LaborMarket,
    Licensing,
    Policy,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Transportation => "transportation",
            Component::LaborMarket => "labor_market",
            Component::Licensing => "licensing",
            Component::Policy => "policy",
        }
    }

    pub fn score_column(&self) -> &'static str {
        match self {
            Component::Transportation => "transportation_score",
            Component::LaborMarket => "labor_market_score",
            Component::Licensing => "licensing_score",
            Component::Policy => "policy_score",
        }
    }

    pub fn ordered() -> &'static [Component] {
        &[
            Component::Transportation,
            Component::LaborMarket,
            Component::Licensing,
            Component::Policy,
        ]
    }

    pub fn inputs(&self) -> &'static [Indicator] {
        match self {
            Component::Transportation => &[
                Indicator::PctNoVehicle,
                Indicator::AvgCommuteTime,
                Indicator::PctBroadband,
            ],
            Component::LaborMarket => &[
                Indicator::UnemploymentRate,
                Indicator::EmploymentGrowth,
                Indicator::PovertyRate,
            ],
            Component::Licensing => &[Indicator::LicensingBurdenIndex],
            Component::Policy => &[Indicator::BanTheBoxScore, Indicator::FairChanceScore],
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const REAI_COLUMN: &str = "REAI";
pub const REAI_RANK_COLUMN: &str = "REAI_rank";

#[cfg(test)]
#[path = "../../tests/src_inline/model/indicators.rs"]
mod tests;
