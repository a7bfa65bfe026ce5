use tracing::debug;

use crate::models::Room;
use crate::query::types::SearchCriteria;

/// Keep the rooms matching every criterion, in their original order
pub fn filter_by_criteria<'a, I>(rooms: I, criteria: &SearchCriteria) -> Vec<&'a Room>
where
    I: IntoIterator<Item = &'a Room>,
{
    let results: Vec<&Room> = rooms
        .into_iter()
        .filter(|room| criteria.district.matches(&room.district))
        .filter(|room| criteria.room_type.matches(&room.room_type))
        .filter(|room| criteria.price_band.contains(room.price))
        .collect();

    debug!(
        "Filter {:?}/{:?}/{} matched {} rooms",
        criteria.district,
        criteria.room_type,
        criteria.price_band,
        results.len()
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::query::types::{PriceBand, Selector};

    fn ids(rooms: &[&Room]) -> Vec<u32> {
        rooms.iter().map(|r| r.id).collect()
    }

    #[test]
    fn open_criteria_is_identity() {
        let catalog = Catalog::bundled().unwrap();
        let results = filter_by_criteria(catalog.all(), &SearchCriteria::default());
        assert_eq!(ids(&results), vec![1, 2, 3]);
    }

    #[test]
    fn mid_band_excludes_five_and_a_half() {
        let catalog = Catalog::bundled().unwrap();
        let criteria = SearchCriteria {
            price_band: PriceBand::Mid,
            ..Default::default()
        };
        assert_eq!(ids(&filter_by_criteria(catalog.all(), &criteria)), vec![2]);
    }

    #[test]
    fn by_district() {
        let catalog = Catalog::bundled().unwrap();
        let criteria = SearchCriteria {
            district: Selector::Exactly("Thanh Xuân".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_by_criteria(catalog.all(), &criteria)), vec![3]);
    }

    #[test]
    fn combined_predicates() {
        let catalog = Catalog::bundled().unwrap();
        let criteria = SearchCriteria {
            district: Selector::Exactly("Cầu Giấy".to_string()),
            room_type: Selector::Exactly("Studio".to_string()),
            price_band: PriceBand::High,
        };
        assert_eq!(ids(&filter_by_criteria(catalog.all(), &criteria)), vec![1]);

        let criteria = SearchCriteria {
            price_band: PriceBand::Low,
            ..criteria
        };
        assert!(filter_by_criteria(catalog.all(), &criteria).is_empty());
    }

    #[test]
    fn unknown_district_is_empty_not_error() {
        let catalog = Catalog::bundled().unwrap();
        let criteria = SearchCriteria {
            district: Selector::Exactly("Hoàn Kiếm".to_string()),
            ..Default::default()
        };
        assert!(filter_by_criteria(catalog.all(), &criteria).is_empty());
    }

    #[test]
    fn refiltering_is_stable() {
        let catalog = Catalog::bundled().unwrap();
        let criteria = SearchCriteria {
            price_band: PriceBand::Mid,
            ..Default::default()
        };
        let once = filter_by_criteria(catalog.all(), &criteria);
        let twice = filter_by_criteria(once.iter().copied(), &criteria);
        assert_eq!(ids(&once), ids(&twice));
    }
}
