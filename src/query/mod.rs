pub mod detail;
pub mod filter;
pub mod geo;
pub mod types;

pub use detail::{amenity_checklist, AmenityCheck, RoomDetail};
pub use filter::filter_by_criteria;
pub use geo::{distance_meters, scan_radius, scan_radius_with_distance, RadiusKm, ScanHit};
pub use types::{PriceBand, SearchCriteria, Selector};
