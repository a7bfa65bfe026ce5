mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::{CliArgs, Command};
use hanoistay::chat::{CannedResponder, ChatSession, Sender};
use hanoistay::config::{resolve_config_path, AppConfig};
use hanoistay::models::{Coordinate, Room};
use hanoistay::query::detail::card_price;
use hanoistay::query::{
    filter_by_criteria, scan_radius_with_distance, RadiusKm, RoomDetail, SearchCriteria,
};
use hanoistay::Catalog;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    let config = AppConfig::load_or_default(&resolve_config_path(args.config.as_deref()));

    // --log-level beats RUST_LOG beats the config file
    let filter = match &args.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🏠 HanoiStay - Room Catalog");

    let catalog = Catalog::bundled().context("Bundled catalog is inconsistent")?;

    match args.command {
        Command::Search {
            district,
            room_type,
            price,
            json,
        } => {
            let criteria = SearchCriteria::from_form(&district, &room_type, &price)?;
            let results = filter_by_criteria(catalog.all(), &criteria);
            print_rooms(&results);
            if let Some(path) = json {
                save_json(&path, &results).await?;
            }
        }
        Command::Scan {
            lat,
            lng,
            radius_km,
            json,
        } => {
            let default_center = config.map.center();
            let center = Coordinate::new(
                lat.unwrap_or(default_center.lat),
                lng.unwrap_or(default_center.lng),
            );
            let radius = radius_km.map(RadiusKm).unwrap_or(config.map.default_radius());

            info!("Scanning {} around ({}, {})", radius, center.lat, center.lng);
            let hits = scan_radius_with_distance(catalog.all(), center, radius.meters())?;

            if hits.is_empty() {
                println!("No rooms within {}", radius);
            }
            for hit in &hits {
                println!(
                    "{} - {} ({:.0} m away)",
                    hit.room.title,
                    card_price(hit.room.price),
                    hit.distance_meters
                );
            }
            if let Some(path) = json {
                save_json(&path, &hits).await?;
            }
        }
        Command::Show { id } => {
            let room = catalog
                .by_id(id)
                .with_context(|| format!("No room with id {}", id))?;
            let detail = RoomDetail::project(room, catalog.amenity_vocabulary())?;
            print_detail(&detail);
        }
        Command::News => {
            for news in catalog.news() {
                println!("[{}] {}", news.date, news.title);
            }
        }
        Command::Chat { message } => {
            let mut session = ChatSession::new(CannedResponder::from_config(&config.chat));
            if session.send(&message.join(" ")).await?.is_none() {
                warn!("Empty chat message ignored");
            }
            for msg in session.messages() {
                let who = match msg.sender {
                    Sender::User => "you",
                    Sender::Bot => "bot",
                };
                println!("{}: {}", who, msg.text);
            }
        }
    }

    Ok(())
}

fn print_rooms(rooms: &[&Room]) {
    if rooms.is_empty() {
        println!("No rooms match these filters.");
        return;
    }

    info!("✅ Found {} rooms", rooms.len());
    for (i, room) in rooms.iter().enumerate() {
        println!("{}. {} (#{})", i + 1, room.title, room.id);
        println!("   {} · {} · {} m²", room.district, room.room_type, room.area);
        println!("   {}", card_price(room.price));
        println!();
    }
}

fn print_detail(detail: &RoomDetail<'_>) {
    let room = detail.room;
    println!("{}", room.title);
    println!("   {}", detail.price_label);
    println!("   {}", room.address);
    for (label, cost) in detail.costs.lines() {
        println!("   {}: {}", label, cost.raw);
    }
    println!("   Amenities:");
    for check in &detail.checklist {
        println!("     [{}] {}", if check.present { "x" } else { " " }, check.name);
    }
    println!("   Call: {}", detail.dial_link);
    println!("   Map: {}", detail.map_embed_url);
}

async fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("💾 Saved results to {}", path.display());
    Ok(())
}
