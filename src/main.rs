use clap::Parser;
use multistop::{
    sdk::config::{ServiceConfig, DEFAULT_ANCHOR},
    sdk::planner::{Coord, LinkTemplate},
    sdk::routing::{GeoCache, HereGeocoder, Place, RouteSummary, TomTomOptimizer},
    sdk::stops::read_stops_file,
    sdk::trip::{plan_trip, TripRequest},
    sdk::util::{log::init_logging, rate_limit},
};
use serde::Serialize;
use std::{fs::File, io::Write, path::PathBuf};

/// Plan a multi-stop driving trip and share it as map links
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// A destination to visit; repeat the flag for each stop
    #[arg(short, long = "dest")]
    dest: Vec<String>,

    /// CSV file of destinations, one per row (first column)
    #[arg(long)]
    stops_file: Option<PathBuf>,

    /// Trip start as "lat,lon" (defaults to downtown Calgary)
    #[arg(long)]
    start: Option<Coord>,

    /// Trip end as "lat,lon" (defaults to the start, a round trip)
    #[arg(long)]
    end: Option<Coord>,

    /// Waypoints per navigation link (Google Maps allows at most 10)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(2..=10))]
    per_batch: u64,

    /// Keep the stops in the order given instead of optimizing
    #[arg(long)]
    keep_order: bool,

    /// Where to write the JSON trip report
    #[arg(long, default_value = "trip_report.json")]
    output: PathBuf,

    /// Geocode cache file
    #[arg(long, default_value = "geo_cache.json")]
    cache: PathBuf,
}

#[derive(Serialize)]
struct TripReport<'a> {
    generated_at: String,
    start: Coord,
    end: Coord,
    stops: &'a [Place],
    summary: &'a Option<RouteSummary>,
    links: &'a [String],
}

fn main() -> anyhow::Result<()> {
    init_logging();
    dotenvy::dotenv().ok();

    // --- 1. Argument parsing ---
    let cli = Cli::parse();

    let mut stops = cli.dest.clone();
    if let Some(path) = &cli.stops_file {
        let from_file = read_stops_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to read stops file {}: {}", path.display(), e))?;
        log::info!("Loaded {} stops from {}", from_file.len(), path.display());
        stops.extend(from_file);
    }
    if stops.is_empty() {
        log::warn!("No destinations given; the trip is just start to end");
    }

    let start = cli.start.unwrap_or(DEFAULT_ANCHOR);
    let end = cli.end.unwrap_or(start);
    log::info!(
        "Planning a trip with {} stops from {},{} to {},{}",
        stops.len(),
        start.lat,
        start.lon,
        end.lat,
        end.lon
    );

    // --- 2. Dependency initialization ---
    let config = ServiceConfig::from_env()?;
    let geocoder = HereGeocoder::new(
        config.here_api_key,
        config.here_geocode_url,
        rate_limit::geocode_limiter(),
    );
    let optimizer = TomTomOptimizer::new(
        config.tomtom_api_key,
        config.tomtom_routing_url,
        rate_limit::routing_limiter(),
    );
    let mut cache = GeoCache::load_from_file(&cli.cache)?;

    let request = TripRequest {
        stops,
        start,
        end,
        waypoints_per_batch: cli.per_batch as usize,
        optimize: !cli.keep_order,
    };

    // --- 3. Plan the trip ---
    let plan = plan_trip(
        &request,
        &geocoder,
        &optimizer,
        &mut cache,
        &LinkTemplate::google_maps(),
    )?;

    // --- 4. Output results ---
    if let Some(summary) = &plan.summary {
        log::info!(
            "Best route: {:.1} km, {:.2} h driving",
            summary.distance_km,
            summary.duration_hours
        );
    }
    for link in &plan.links {
        println!("{link}");
    }

    let report = TripReport {
        generated_at: chrono::Local::now().to_rfc3339(),
        start,
        end,
        stops: &plan.places,
        summary: &plan.summary,
        links: &plan.links,
    };
    let json_output = serde_json::to_string_pretty(&report)?;
    let mut file = File::create(&cli.output)?;
    file.write_all(json_output.as_bytes())?;
    log::info!("✅ Trip report written to {}", cli.output.display());

    cache.save_to_file(&cli.cache)?;
    log::info!("💾 Cache saved to {}", cli.cache.display());

    Ok(())
}
