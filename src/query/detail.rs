use serde::Serialize;
use url::Url;

use crate::error::QueryResult;
use crate::models::{Costs, Room};

const MAP_EMBED_BASE: &str = "https://maps.google.com/maps";
const CITY_SUFFIX: &str = ", Hà Nội";

/// One line of the amenity checklist
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AmenityCheck {
    pub name: String,
    pub present: bool,
}

/// Presence of every vocabulary entry for a room, in vocabulary order
pub fn amenity_checklist(room: &Room, vocabulary: &[String]) -> Vec<AmenityCheck> {
    vocabulary
        .iter()
        .map(|name| AmenityCheck {
            name: name.clone(),
            present: room.has_amenity(name),
        })
        .collect()
}

/// Monthly rent as a full VND amount, grouped the Vietnamese way ("5.500.000 VNĐ")
pub fn price_label(price_millions: f64) -> String {
    let dong = (price_millions * 1_000_000.0).round() as u64;
    let digits = dong.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{} VNĐ", grouped)
}

/// Short price shown on listing cards ("5.5 TRIỆU")
pub fn card_price(price_millions: f64) -> String {
    format!("{} TRIỆU", price_millions)
}

pub fn dial_link(room: &Room) -> String {
    format!("tel:{}", room.host.phone)
}

/// Embedded map pointing at the room's street address
pub fn map_embed_url(room: &Room) -> QueryResult<Url> {
    let query = format!("{}{}", room.address, CITY_SUFFIX);
    let url = Url::parse_with_params(
        MAP_EMBED_BASE,
        &[
            ("q", query.as_str()),
            ("t", ""),
            ("z", "15"),
            ("ie", "UTF8"),
            ("iwloc", ""),
            ("output", "embed"),
        ],
    )?;
    Ok(url)
}

/// Everything the detail modal shows for one room
#[derive(Debug, Clone, Serialize)]
pub struct RoomDetail<'a> {
    pub room: &'a Room,
    pub price_label: String,
    pub card_price: String,
    #[serde(skip)]
    pub costs: &'a Costs,
    pub checklist: Vec<AmenityCheck>,
    pub dial_link: String,
    pub map_embed_url: String,
}

impl<'a> RoomDetail<'a> {
    pub fn project(room: &'a Room, vocabulary: &[String]) -> QueryResult<Self> {
        Ok(Self {
            room,
            price_label: price_label(room.price),
            card_price: card_price(room.price),
            costs: &room.costs,
            checklist: amenity_checklist(room, vocabulary),
            dial_link: dial_link(room),
            map_embed_url: map_embed_url(room)?.to_string(),
        })
    }
}
