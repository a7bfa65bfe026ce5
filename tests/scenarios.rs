use hanoistay::query::{
    amenity_checklist, filter_by_criteria, scan_radius, PriceBand, SearchCriteria, Selector,
};
use hanoistay::{Catalog, Coordinate, Room};

fn ids(rooms: &[&Room]) -> Vec<u32> {
    rooms.iter().map(|r| r.id).collect()
}

#[test]
fn mid_price_band_only_keeps_room_two() {
    let catalog = Catalog::bundled().unwrap();
    let criteria = SearchCriteria::from_form("all", "all", "mid").unwrap();
    assert_eq!(ids(&filter_by_criteria(catalog.all(), &criteria)), vec![2]);
}

#[test]
fn thanh_xuan_district() {
    let catalog = Catalog::bundled().unwrap();
    let criteria = SearchCriteria::from_form("Thanh Xuân", "all", "all").unwrap();
    assert_eq!(ids(&filter_by_criteria(catalog.all(), &criteria)), vec![3]);
}

#[test]
fn five_km_scan_from_hoan_kiem() {
    let catalog = Catalog::bundled().unwrap();
    let found = scan_radius(catalog.all(), Coordinate::new(21.0285, 105.8542), 5000.0).unwrap();
    assert_eq!(ids(&found), vec![2]);
}

#[test]
fn checklist_for_thanh_xuan_room() {
    let catalog = Catalog::bundled().unwrap();
    let room = catalog.by_id(3).unwrap();
    let checklist = amenity_checklist(room, catalog.amenity_vocabulary());

    assert_eq!(checklist.len(), catalog.amenity_vocabulary().len());
    let names: Vec<&str> = checklist.iter().map(|c| c.name.as_str()).collect();
    let vocabulary: Vec<&str> = catalog
        .amenity_vocabulary()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(names, vocabulary);

    let lookup = |name: &str| checklist.iter().find(|c| c.name == name).map(|c| c.present);
    assert_eq!(lookup("Wifi"), Some(true));
    assert_eq!(lookup("Máy lạnh"), Some(false));
    assert_eq!(lookup("Thang máy"), Some(false));
}

#[test]
fn search_then_scan_compose() {
    let catalog = Catalog::bundled().unwrap();
    let criteria = SearchCriteria {
        room_type: Selector::Exactly("Studio".to_string()),
        price_band: PriceBand::High,
        ..Default::default()
    };
    let filtered = filter_by_criteria(catalog.all(), &criteria);
    let nearby = scan_radius(
        filtered.iter().copied(),
        Coordinate::new(21.0285, 105.8542),
        7000.0,
    )
    .unwrap();
    assert_eq!(ids(&nearby), vec![1]);
}

#[test]
fn unknown_band_rejected_at_boundary() {
    assert!(SearchCriteria::from_form("all", "all", "cheap").is_err());
}
