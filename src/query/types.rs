use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};

/// Price bands offered by the search form, in million VND per month
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceBand {
    #[default]
    All,
    /// price < 3
    Low,
    /// 3 <= price <= 5
    Mid,
    /// 5 < price <= 8
    High,
    /// 8 < price <= 12
    Vip,
    /// price > 12
    Max,
}

impl PriceBand {
    /// The concrete bands, cheapest first
    pub const BANDS: [PriceBand; 5] = [
        PriceBand::Low,
        PriceBand::Mid,
        PriceBand::High,
        PriceBand::Vip,
        PriceBand::Max,
    ];

    /// Upper bounds are inclusive, so 3, 5, 8 and 12 land in the lower band.
    pub fn contains(self, price: f64) -> bool {
        match self {
            PriceBand::All => true,
            PriceBand::Low => price < 3.0,
            PriceBand::Mid => (3.0..=5.0).contains(&price),
            PriceBand::High => price > 5.0 && price <= 8.0,
            PriceBand::Vip => price > 8.0 && price <= 12.0,
            PriceBand::Max => price > 12.0,
        }
    }

    /// The single concrete band a price falls in
    pub fn classify(price: f64) -> Option<PriceBand> {
        Self::BANDS.into_iter().find(|band| band.contains(price))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriceBand::All => "all",
            PriceBand::Low => "low",
            PriceBand::Mid => "mid",
            PriceBand::High => "high",
            PriceBand::Vip => "vip",
            PriceBand::Max => "max",
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceBand {
    type Err = QueryError;

    fn from_str(s: &str) -> QueryResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(PriceBand::All),
            "low" => Ok(PriceBand::Low),
            "mid" => Ok(PriceBand::Mid),
            "high" => Ok(PriceBand::High),
            "vip" => Ok(PriceBand::Vip),
            "max" => Ok(PriceBand::Max),
            _ => Err(QueryError::UnknownPriceBand(s.to_string())),
        }
    }
}

/// A string filter that is either open or pinned to one exact value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Selector {
    #[default]
    Any,
    Exactly(String),
}

impl Selector {
    /// Parse a form value: "all" means any, blank is rejected
    pub fn parse(field: &'static str, value: &str) -> QueryResult<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(QueryError::BlankCriteria { field });
        }
        if value.eq_ignore_ascii_case("all") {
            return Ok(Selector::Any);
        }
        Ok(Selector::Exactly(value.to_string()))
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Selector::Any => true,
            Selector::Exactly(wanted) => wanted == candidate,
        }
    }
}

/// User-selected search filters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchCriteria {
    pub district: Selector,
    pub room_type: Selector,
    pub price_band: PriceBand,
}

impl SearchCriteria {
    /// Validate raw form values at the boundary
    pub fn from_form(district: &str, room_type: &str, price_band: &str) -> QueryResult<Self> {
        Ok(Self {
            district: Selector::parse("district", district)?,
            room_type: Selector::parse("type", room_type)?,
            price_band: price_band.parse()?,
        })
    }
}
