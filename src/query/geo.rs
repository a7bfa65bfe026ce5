use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{QueryError, QueryResult};
use crate::models::{Coordinate, Room};

/// Mean Earth radius used by the web map's distance function
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in meters (haversine)
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = lat2 - lat1;
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Slider value for the scan radius, in kilometers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RadiusKm(pub f64);

impl RadiusKm {
    pub fn meters(self) -> f64 {
        self.0 * 1000.0
    }
}

impl fmt::Display for RadiusKm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} KM", self.0)
    }
}

/// A scan hit with its distance from the center
#[derive(Debug, Clone, Serialize)]
pub struct ScanHit<'a> {
    pub room: &'a Room,
    pub distance_meters: f64,
}

fn validate(center: Coordinate, radius_meters: f64) -> QueryResult<()> {
    if !center.is_valid() {
        return Err(QueryError::InvalidCenter {
            lat: center.lat,
            lng: center.lng,
        });
    }
    if !radius_meters.is_finite() || radius_meters < 0.0 {
        return Err(QueryError::InvalidRadius(radius_meters));
    }
    Ok(())
}

/// Rooms within `radius_meters` of `center`, with distances, in catalog order
pub fn scan_radius_with_distance<'a, I>(
    rooms: I,
    center: Coordinate,
    radius_meters: f64,
) -> QueryResult<Vec<ScanHit<'a>>>
where
    I: IntoIterator<Item = &'a Room>,
{
    validate(center, radius_meters)?;

    let hits: Vec<ScanHit<'a>> = rooms
        .into_iter()
        .filter_map(|room| {
            // A zero radius only accepts an exact coordinate match
            let distance = if room.location == center {
                0.0
            } else if radius_meters == 0.0 {
                return None;
            } else {
                distance_meters(center, room.location)
            };
            (distance <= radius_meters).then_some(ScanHit {
                room,
                distance_meters: distance,
            })
        })
        .collect();

    debug!(
        "Scan around ({}, {}) r={}m found {} rooms",
        center.lat,
        center.lng,
        radius_meters,
        hits.len()
    );

    Ok(hits)
}

/// Rooms within `radius_meters` of `center`, in catalog order
///
/// A radius of zero only matches rooms sitting exactly on the center.
pub fn scan_radius<'a, I>(
    rooms: I,
    center: Coordinate,
    radius_meters: f64,
) -> QueryResult<Vec<&'a Room>>
where
    I: IntoIterator<Item = &'a Room>,
{
    Ok(scan_radius_with_distance(rooms, center, radius_meters)?
        .into_iter()
        .map(|hit| hit.room)
        .collect())
}
