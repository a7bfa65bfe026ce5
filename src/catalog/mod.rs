pub mod seed;

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::CatalogError;
use crate::models::{NewsItem, Room};

/// Read-only store of room listings, the amenity vocabulary and the news feed
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    rooms: Vec<Room>,
    vocabulary: Vec<String>,
    news: Vec<NewsItem>,
}

impl Catalog {
    /// Build a catalog, checking every room against the vocabulary
    pub fn new(
        rooms: Vec<Room>,
        vocabulary: Vec<String>,
        news: Vec<NewsItem>,
    ) -> Result<Self, CatalogError> {
        let mut known = HashSet::new();
        for name in &vocabulary {
            if !known.insert(name.as_str()) {
                return Err(CatalogError::DuplicateVocabulary(name.clone()));
            }
        }
        let mut seen = HashSet::new();

        for room in &rooms {
            if room.id == 0 {
                return Err(CatalogError::ZeroId);
            }
            if !seen.insert(room.id) {
                return Err(CatalogError::DuplicateId(room.id));
            }
            if !room.price.is_finite() || room.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: room.id,
                    price: room.price,
                });
            }
            if !room.area.is_finite() || room.area <= 0.0 {
                return Err(CatalogError::InvalidArea {
                    id: room.id,
                    area: room.area,
                });
            }
            if !room.location.is_valid() {
                return Err(CatalogError::InvalidCoordinate {
                    id: room.id,
                    lat: room.location.lat,
                    lng: room.location.lng,
                });
            }
            if let Some(amenity) = room
                .amenities
                .iter()
                .find(|a| !known.contains(a.as_str()))
            {
                return Err(CatalogError::UnknownAmenity {
                    id: room.id,
                    amenity: amenity.clone(),
                });
            }
            let mut listed = HashSet::new();
            if let Some(amenity) = room.amenities.iter().find(|a| !listed.insert(a.as_str())) {
                return Err(CatalogError::DuplicateAmenity {
                    id: room.id,
                    amenity: amenity.clone(),
                });
            }
            debug!("Accepted room {} ({})", room.id, room.title);
        }

        info!(
            "Catalog loaded: {} rooms, {} amenities, {} news items",
            rooms.len(),
            vocabulary.len(),
            news.len()
        );

        Ok(Self {
            rooms,
            vocabulary,
            news,
        })
    }

    /// The dataset compiled into the binary
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::new(
            seed::rooms(),
            seed::AMENITIES.iter().map(|a| a.to_string()).collect(),
            seed::news(),
        )
    }

    /// All rooms in insertion order
    pub fn all(&self) -> &[Room] {
        &self.rooms
    }

    /// Look up a room; `None` is an ordinary miss
    pub fn by_id(&self, id: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn amenity_vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    /// Distinct districts in first-appearance order
    pub fn districts(&self) -> Vec<&str> {
        distinct(self.rooms.iter().map(|r| r.district.as_str()))
    }

    /// Distinct room types in first-appearance order
    pub fn room_types(&self) -> Vec<&str> {
        distinct(self.rooms.iter().map(|r| r.room_type.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
