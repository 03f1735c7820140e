use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use geofencer::config::FileConfig;
use geofencer::fence::{FencePointStore, FenceSession, parse_coord};
use geofencer::geometry::centroid;
use geofencer::storage::JsonFileStorage;

/// Draw, edit and persist polygonal geofences from the command line
///
/// Examples:
///   # Add boundary points one at a time
///   geofencer add 12.8237,80.0461
///   geofencer add 12.8240,80.0461
///   geofencer add 12.8240,80.0465
///
///   # Inspect and adjust
///   geofencer list
///   geofencer move 2 12.8242,80.0462
///
///   # Close the fence and export it
///   geofencer close --geojson
#[derive(Parser, Debug)]
#[command(name = "geofencer")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches geofencer.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fence file to read and write (defaults to fence.json)
    #[arg(short = 'f', long)]
    store: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a boundary point at LAT,LON
    Add {
        #[arg(value_parser = parse_coord)]
        point: (f64, f64),
    },
    /// Move a numbered point (as shown by list) to LAT,LON
    Move {
        /// 1-based point number
        number: u32,
        #[arg(value_parser = parse_coord)]
        point: (f64, f64),
    },
    /// List the numbered boundary points
    List,
    /// Show point count, closeability and centroid
    Status,
    /// Close the fence and print its clockwise ring
    Close {
        /// Emit the ring as a GeoJSON Polygon
        #[arg(long)]
        geojson: bool,
    },
    /// Delete all boundary points
    Reset,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let store_path = args
        .store
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.store.clone()))
        .unwrap_or_else(|| PathBuf::from("fence.json"));
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    let mut store = FencePointStore::new(Box::new(JsonFileStorage::new(&store_path)));
    if verbose {
        store.set_observer(|points| {
            eprintln!("fence points updated: {} point(s)", points.len());
        });
    }

    let mut session = FenceSession::new(store);
    session.restore();

    match args.command {
        Command::Add { point } => {
            session.add_point(point);
            let number = session.len();
            println!("Added Point {} at {:.6}, {:.6}", number, point.0, point.1);
            if number == 3 {
                println!("Fence has 3 points and can now be closed.");
            }
        }
        Command::Move { number, point } => {
            let index = number.checked_sub(1).map(|n| n as usize);
            match index {
                Some(i) if i < session.len() => {
                    session.move_point(i, point);
                    println!("Moved Point {} to {:.6}, {:.6}", number, point.0, point.1);
                }
                _ => {
                    // Tolerated no-op, matching the store's update policy
                    if verbose {
                        eprintln!("Point {} does not exist; nothing moved", number);
                    }
                }
            }
        }
        Command::List => {
            if session.is_empty() {
                println!("No fence points.");
            }
            for point in session.points() {
                let (lat, lon) = point.coordinate;
                println!("Point {}: {:.6}, {:.6}", point.point_number, lat, lon);
            }
        }
        Command::Status => {
            println!("Fence file: {}", store_path.display());
            println!("Points: {}", session.len());
            println!(
                "Closeable: {}",
                if session.is_closeable() { "yes" } else { "no" }
            );
            if let Some((lat, lon)) = centroid(&session.coordinates()) {
                println!("Centroid: {:.6}, {:.6}", lat, lon);
            }
        }
        Command::Close { geojson } => {
            let Some(ring) = session.finalize() else {
                bail!("Need at least 3 points to create a fence.");
            };
            let ring = ring.to_vec();
            if geojson {
                println!("{}", geojson_polygon(&ring)?);
            } else {
                println!("Closed fence with {} vertices:", ring.len());
                for (lat, lon) in &ring {
                    println!("  {:.6}, {:.6}", lat, lon);
                }
            }
        }
        Command::Reset => {
            session.reset();
            println!("Fence cleared.");
        }
    }

    Ok(())
}

/// Render a wound ring as a GeoJSON Polygon ([lon, lat] pairs, first ring
/// coordinate repeated at the end)
fn geojson_polygon(ring: &[(f64, f64)]) -> Result<String> {
    let mut coordinates: Vec<[f64; 2]> = ring.iter().map(|&(lat, lon)| [lon, lat]).collect();
    if let Some(&first) = coordinates.first() {
        coordinates.push(first);
    }
    let polygon = serde_json::json!({
        "type": "Polygon",
        "coordinates": [coordinates],
    });
    Ok(serde_json::to_string_pretty(&polygon)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geojson_polygon_closes_ring() {
        let ring = vec![(12.0, 80.0), (12.001, 80.0), (12.001, 80.001)];
        let json = geojson_polygon(&ring).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["type"], "Polygon");
        let coords = value["coordinates"][0].as_array().unwrap();
        assert_eq!(coords.len(), 4);
        assert_eq!(coords.first(), coords.last());
        // GeoJSON axis order is [lon, lat]
        assert_eq!(coords[0][0], 80.0);
        assert_eq!(coords[0][1], 12.0);
    }
}
