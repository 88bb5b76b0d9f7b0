use clap::{Parser, Subcommand};
use kundli_chart::dasha::{snapshot, timeline_for_chart};
use kundli_chart::{BirthMoment, ChartError, compute_chart};
use kundli_time::parse_datetime;

mod logging;

#[derive(Parser)]
#[command(name = "kundli", about = "Sidereal birth chart and dasha calculator")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a full birth chart
    Chart {
        /// Birth UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// IANA timezone label, echoed into the output
        #[arg(long, default_value = "UTC")]
        timezone: String,
        /// Ayanamsa scheme id (1=Lahiri, 2=Raman, 3=KP)
        #[arg(long, default_value = "1")]
        ayanamsa: u8,
    },
    /// Compute the Vimshottari dasha timeline for a birth
    Dasha {
        /// Birth UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// IANA timezone label, echoed into the output
        #[arg(long, default_value = "UTC")]
        timezone: String,
        /// Ayanamsa scheme id (1=Lahiri, 2=Raman, 3=KP)
        #[arg(long, default_value = "1")]
        ayanamsa: u8,
        /// Query UTC datetime: print the active chain at this instant
        /// instead of the full hierarchy
        #[arg(long)]
        at: Option<String>,
        /// Maximum dasha depth (0=mahadasha .. 3=sukshmadasha)
        #[arg(long, default_value = "3")]
        depth: u8,
    },
}

fn run(cli: Cli) -> Result<(), ChartError> {
    match cli.command {
        Commands::Chart {
            date,
            lat,
            lon,
            timezone,
            ayanamsa,
        } => {
            let moment = BirthMoment::from_parts(&date, lat, lon, &timezone, ayanamsa)?;
            let chart = compute_chart(&moment)?;
            tracing::info!(birth_jd = chart.birth_jd, lagna = chart.lagna.longitude, "chart computed");
            println!("{}", render(&chart));
        }

        Commands::Dasha {
            date,
            lat,
            lon,
            timezone,
            ayanamsa,
            at,
            depth,
        } => {
            let moment = BirthMoment::from_parts(&date, lat, lon, &timezone, ayanamsa)?;
            let chart = compute_chart(&moment)?;
            match at {
                Some(at) => {
                    let query_jd = kundli_time::julian_day(parse_datetime(&at)?);
                    let snap = snapshot(chart.birth_jd, chart.nakshatra.lord, query_jd, depth);
                    println!("{}", render(&snap));
                }
                None => {
                    let tree = timeline_for_chart(&chart, depth);
                    println!("{}", render(&tree));
                }
            }
        }
    }
    Ok(())
}

fn render<T: serde::Serialize>(value: &T) -> String {
    // Output types hold only maps, sequences, and plain scalars.
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
