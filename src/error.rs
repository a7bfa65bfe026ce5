use thiserror::Error;

/// Problems found while assembling a catalog
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate room id {0}")]
    DuplicateId(u32),

    #[error("room id must be positive")]
    ZeroId,

    #[error("room {id} has invalid price {price}")]
    InvalidPrice { id: u32, price: f64 },

    #[error("room {id} has invalid area {area}")]
    InvalidArea { id: u32, area: f64 },

    #[error("room {id} has out-of-range coordinate ({lat}, {lng})")]
    InvalidCoordinate { id: u32, lat: f64, lng: f64 },

    #[error("room {id} lists amenity '{amenity}' missing from the vocabulary")]
    UnknownAmenity { id: u32, amenity: String },

    #[error("room {id} lists amenity '{amenity}' more than once")]
    DuplicateAmenity { id: u32, amenity: String },

    #[error("amenity '{0}' appears twice in the vocabulary")]
    DuplicateVocabulary(String),
}

/// Rejected query input
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("unknown price band '{0}' (expected all, low, mid, high, vip or max)")]
    UnknownPriceBand(String),

    #[error("{field} filter must not be blank")]
    BlankCriteria { field: &'static str },

    #[error("radius must be a non-negative finite number of meters, got {0}")]
    InvalidRadius(f64),

    #[error("center ({lat}, {lng}) is not a valid coordinate")]
    InvalidCenter { lat: f64, lng: f64 },

    #[error("could not build link: {0}")]
    Link(#[from] url::ParseError),
}

pub type QueryResult<T> = std::result::Result<T, QueryError>;
