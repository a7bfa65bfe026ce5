//! Catalog and query engine behind the HanoiStay room-rental site.
//!
//! The catalog is a fixed, compiled-in list of rooms. Queries are pure
//! functions over it: criteria filtering, radius scans around a map center
//! and the detail projection shown when a listing is opened.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod models;
pub mod query;

pub use catalog::Catalog;
pub use error::{CatalogError, QueryError};
pub use models::{Coordinate, NewsItem, Room};
