use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use tunicamp::api::AppState;
use tunicamp::rental::{BookingRequest, BookingService, DeliveryChoice};
use tunicamp::{ClimateWeatherProvider, TripPlanner, TripRequest, TuniCampConfig, logging, web};

#[derive(Parser)]
#[command(name = "tunicamp", version, about = "Camping trip planning and gear rental for Tunisia")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API
    Serve {
        /// Override the configured port
        #[arg(long, env = "PORT")]
        port: Option<u16>,
    },
    /// Quote the cost of renting an item
    Quote {
        /// Gear item id, e.g. gear-3
        #[arg(long)]
        gear: String,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
        /// Deliver to this address instead of picking up
        #[arg(long, conflicts_with = "pickup")]
        deliver_to: Option<String>,
        /// Pickup location; defaults to the provider's first one
        #[arg(long)]
        pickup: Option<String>,
    },
    /// Print the packing list for a camping spot
    Pack {
        /// Camping spot id, e.g. sahara-douz
        #[arg(long)]
        spot: String,
        /// Trip length in days
        #[arg(long)]
        days: Option<u32>,
        #[arg(long, default_value_t = 1)]
        group_size: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = TuniCampConfig::load_from_path(cli.config.clone())?;
    logging::init_logging(&config.logging, cli.verbose)?;

    match cli.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            let state = AppState::new(
                Box::new(ClimateWeatherProvider::new()),
                config.weather.forecast_days,
            );
            web::run(state, &config).await
        }
        Command::Quote {
            gear,
            start,
            end,
            deliver_to,
            pickup,
        } => quote(&config, gear, start, end, deliver_to, pickup),
        Command::Pack {
            spot,
            days,
            group_size,
        } => {
            let planner = TripPlanner::new(ClimateWeatherProvider::new());
            let request = TripRequest {
                spot_id: spot,
                days: days.unwrap_or(config.weather.forecast_days),
                group_size,
                locale: Default::default(),
            };
            let plan = planner
                .plan(&request)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;

            println!("Packing list for {} ({} people)", plan.spot_name, plan.group_size);
            for day in &plan.forecast.days {
                println!("  {}  {}  {}", day.date, day.format_temperature(), day.description);
            }
            for (category, items) in &plan.packing {
                println!("\n{category:?}");
                for item in items {
                    let marker = if item.essential { "*" } else { " " };
                    println!("  {marker} {}", item.name);
                }
            }
            Ok(())
        }
    }
}

fn quote(
    config: &TuniCampConfig,
    gear: String,
    start: NaiveDate,
    end: NaiveDate,
    deliver_to: Option<String>,
    pickup: Option<String>,
) -> Result<()> {
    let item = tunicamp::rental::catalog::gear_by_id(&gear)
        .with_context(|| format!("Unknown gear item '{gear}'"))?;
    let delivery = match deliver_to {
        Some(address) => DeliveryChoice::Delivery { address },
        None => DeliveryChoice::Pickup {
            location: pickup
                .or_else(|| item.pickup_locations.first().cloned())
                .unwrap_or_default(),
        },
    };
    let request = BookingRequest {
        gear_id: gear,
        start_date: Some(start),
        end_date: Some(end),
        delivery,
        notes: String::new(),
        agree_to_terms: false,
    };
    let costs = BookingService::new()
        .quote(&request)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let currency = &config.rental.currency;
    println!("{} for {} day(s)", item.name, costs.days);
    println!("  Rental:   {} {currency}", costs.subtotal);
    println!("  Delivery: {} {currency}", costs.delivery_fee);
    println!("  Deposit:  {} {currency}", costs.deposit);
    println!("  Total:    {} {currency}", costs.total);
    Ok(())
}
