use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use foodmatch::config::{verify_arguments, Cli, Settings};
use foodmatch::core::{group_pickups, Matcher};
use foodmatch::io::{load_pickups, load_recipients, write_matches};

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&settings);

    if let Err(e) = run(&cli, &settings) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn run(cli: &Cli, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    verify_arguments(cli)?;

    let pickups = load_pickups(&cli.pickups)?;
    let recipients = load_recipients(&cli.recipients)?;

    let mut daily_pickups = group_pickups(pickups);
    info!("Grouped pickups across {} date(s)", daily_pickups.len());

    let matcher = Matcher::new(settings.matching.max_distance_miles);
    matcher.assign_matches(&mut daily_pickups, &recipients);

    let matched: usize = daily_pickups
        .values()
        .flatten()
        .filter(|pickup| !pickup.matches.is_empty())
        .count();
    info!("Matched {} pickup(s) to at least one recipient", matched);

    write_matches(&cli.matches, &daily_pickups)?;

    Ok(())
}
