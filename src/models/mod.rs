use serde::{Deserialize, Serialize};

/// A point on the map in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite and inside the geographic range
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Contact information for whoever lets the room
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Host {
    pub phone: String,
}

/// How a cost line reads once interpreted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CostKind {
    Free,
    /// Thousands of VND, e.g. "3.8k"
    Amount { thousands: f64 },
    Notice(String),
}

/// A single monthly cost line, kept as the landlord wrote it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CostItem {
    pub raw: String,
}

impl CostItem {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn kind(&self) -> CostKind {
        let text = self.raw.trim();
        let lower = text.to_lowercase();

        if lower == "free" || lower == "miễn phí" {
            return CostKind::Free;
        }

        if let Some(number) = lower.strip_suffix('k') {
            if let Ok(thousands) = number.trim().replace(',', ".").parse::<f64>() {
                if thousands.is_finite() && thousands >= 0.0 {
                    return CostKind::Amount { thousands };
                }
            }
        }

        CostKind::Notice(text.to_string())
    }
}

/// Fixed monthly cost breakdown shown in the detail view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Costs {
    pub elec: CostItem,
    pub water: CostItem,
    pub bike: CostItem,
    pub service: CostItem,
}

impl Costs {
    pub fn new(elec: &str, water: &str, bike: &str, service: &str) -> Self {
        Self {
            elec: CostItem::new(elec),
            water: CostItem::new(water),
            bike: CostItem::new(bike),
            service: CostItem::new(service),
        }
    }

    /// Labelled cost lines in display order
    pub fn lines(&self) -> [(&'static str, &CostItem); 4] {
        [
            ("elec", &self.elec),
            ("water", &self.water),
            ("bike", &self.bike),
            ("service", &self.service),
        ]
    }
}

/// Core room listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: u32,
    pub title: String,
    pub address: String,
    pub district: String,
    #[serde(rename = "type")]
    pub room_type: String,
    /// Million VND per month
    pub price: f64,
    /// Square meters
    pub area: f64,
    pub location: Coordinate,
    pub image_url: String,
    pub host: Host,
    pub costs: Costs,
    pub amenities: Vec<String>,
}

impl Room {
    pub fn has_amenity(&self, name: &str) -> bool {
        self.amenities.iter().any(|a| a == name)
    }
}

/// News feed entry, display only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsItem {
    pub title: String,
    /// Display string, never parsed
    pub date: String,
    pub image_url: String,
}
