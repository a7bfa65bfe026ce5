use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// HanoiStay: browse the room catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "hanoistay", version, about)]
pub struct CliArgs {
    /// Path to the configuration file
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter rooms by district, type and price band
    Search {
        #[arg(short, long, default_value = "all")]
        district: String,

        #[arg(short = 't', long = "type", default_value = "all")]
        room_type: String,

        /// all, low, mid, high, vip or max
        #[arg(short, long, default_value = "all")]
        price: String,

        /// Also write the results as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Find rooms within a radius of a map center
    Scan {
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        lng: Option<f64>,

        #[arg(short, long = "radius-km", allow_negative_numbers = true)]
        radius_km: Option<f64>,

        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Show the full detail of one room
    Show { id: u32 },

    /// List news articles
    News,

    /// Send a message to the support chat
    Chat {
        #[arg(required = true)]
        message: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search() {
        let args = CliArgs::parse_from(["hanoistay", "search", "--price", "mid"]);
        match args.command {
            Command::Search {
                district, price, ..
            } => {
                assert_eq!(district, "all");
                assert_eq!(price, "mid");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parses_scan_with_global_config() {
        let args = CliArgs::parse_from([
            "hanoistay",
            "scan",
            "--radius-km",
            "2.5",
            "--config",
            "x.toml",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(
            args.command,
            Command::Scan { radius_km: Some(r), .. } if r == 2.5
        ));
    }
}
