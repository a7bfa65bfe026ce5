use crate::models::{Coordinate, Costs, Host, NewsItem, Room};

/// Every amenity the detail checklist knows about, in display order
pub const AMENITIES: [&str; 9] = [
    "Máy lạnh",
    "Tủ lạnh",
    "Gác",
    "Nóng lạnh",
    "Thang máy",
    "An ninh",
    "Wifi",
    "Máy giặt",
    "Chỗ để xe",
];

fn amenities(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// The HanoiStay listings shipped with the binary
pub fn rooms() -> Vec<Room> {
    vec![
        Room {
            id: 1,
            title: "Studio Cầu Giấy View Hồ".to_string(),
            address: "Quan Hoa, Cầu Giấy".to_string(),
            district: "Cầu Giấy".to_string(),
            room_type: "Studio".to_string(),
            price: 5.5,
            area: 35.0,
            location: Coordinate::new(21.0350, 105.7950),
            image_url: "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800"
                .to_string(),
            host: Host {
                phone: "0912345678".to_string(),
            },
            costs: Costs::new("3.8k", "100k", "Free", "150k"),
            amenities: amenities(&["Máy lạnh", "Tủ lạnh", "Gác", "Wifi"]),
        },
        Room {
            id: 2,
            title: "Chung cư Mini Đống Đa".to_string(),
            address: "Ngõ 10 Láng Hạ".to_string(),
            district: "Đống Đa".to_string(),
            room_type: "Mini".to_string(),
            price: 4.0,
            area: 30.0,
            location: Coordinate::new(21.0150, 105.8200),
            image_url: "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=800"
                .to_string(),
            host: Host {
                phone: "0988777666".to_string(),
            },
            costs: Costs::new("4k", "25k", "100k", "200k"),
            amenities: amenities(&["Nóng lạnh", "Thang máy", "An ninh", "Máy giặt"]),
        },
        Room {
            id: 3,
            title: "Phòng trọ Thanh Xuân".to_string(),
            address: "Nguyễn Trãi".to_string(),
            district: "Thanh Xuân".to_string(),
            room_type: "Tro".to_string(),
            price: 2.8,
            area: 20.0,
            location: Coordinate::new(20.9950, 105.8050),
            image_url: "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=800"
                .to_string(),
            host: Host {
                phone: "0911222333".to_string(),
            },
            costs: Costs::new("3.5k", "80k", "50k", "Vệ sinh"),
            amenities: amenities(&["Chỗ để xe", "Wifi"]),
        },
    ]
}

pub fn news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            title: "Dự báo giá thuê nhà 2025".to_string(),
            date: "20/10".to_string(),
            image_url: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=600"
                .to_string(),
        },
        NewsItem {
            title: "Top 5 khu vực đáng sống nhất".to_string(),
            date: "18/10".to_string(),
            image_url: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?w=600"
                .to_string(),
        },
    ]
}
