use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use rashifal_content::seeded::TWO_POW_32;
use rashifal_content::{SeededSequence, sign_seed};
use rashifal_rs::{
    EphemerisProvider, FailurePayload, FixedEphemeris, HoroscopeResult, Location, RashifalConfig,
    Rashi, compute_horoscope, first_forwarded_ip, horoscope_for_ip_with_defaults,
};
use rashifal_vedic::{
    derive_calendar, elongation_deg, nakshatra_from_longitude, rashi_from_longitude,
    tithi_in_paksha,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "rashifal", about = "Daily Bengali horoscope from real Sun/Moon positions")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Compute for this instant instead of now (RFC 3339, e.g. 2024-01-01T00:00:00Z)
    #[arg(long, global = true)]
    now: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Geolocate a client IP and print today's horoscope as JSON
    Today {
        /// Client IP to look up
        #[arg(long, conflicts_with = "forwarded_for")]
        ip: Option<String>,
        /// Raw X-Forwarded-For header value; the first entry is used
        #[arg(long)]
        forwarded_for: Option<String>,
        /// Skip geolocation and use the configured default location
        #[arg(long)]
        offline: bool,
    },
    /// Horoscope for an explicit location (no network)
    At {
        /// IANA time zone, e.g. Asia/Kolkata
        #[arg(long)]
        tz: String,
        /// City name (also part of the content seed)
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        country: Option<String>,
        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
    },
    /// Tithi and nakshatra from two longitudes
    Calendar {
        /// Sun ecliptic longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        sun: f64,
        /// Moon ecliptic longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        moon: f64,
    },
    /// Print the seeded draw sequence for a seed string or one sign's seed
    Draw {
        /// Raw seed string
        #[arg(long, required_unless_present = "sign", conflicts_with = "sign")]
        seed: Option<String>,
        /// Sign name (Sanskrit, English or Bengali); seeds as `{date}|{sign}|{city}`
        #[arg(long, requires = "date")]
        sign: Option<String>,
        /// Local date key (YYYY-MM-DD), used with --sign
        #[arg(long)]
        date: Option<String>,
        /// City for the sign seed; defaults to the default location's city
        #[arg(long)]
        city: Option<String>,
        /// Number of draws
        #[arg(long, default_value = "5")]
        count: usize,
    },
}

fn init_logging() {
    // stdout carries only JSON; logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<RashifalConfig> {
    match path {
        Some(p) => RashifalConfig::from_file(p)
            .with_context(|| format!("loading config {}", p.display())),
        None => Ok(RashifalConfig::default()),
    }
}

fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => Ok(DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("invalid --now value: {s}"))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

fn print_result(result: &HoroscopeResult) -> Result<()> {
    println!("{}", result.to_json()?);
    Ok(())
}

async fn run_today(
    config: &RashifalConfig,
    provider: &dyn EphemerisProvider,
    now: DateTime<Utc>,
    ip: Option<String>,
    forwarded_for: Option<String>,
    offline: bool,
) -> Result<()> {
    let result = if offline {
        compute_horoscope(config.defaults.clone(), provider, now)?
    } else {
        let ip = ip
            .or_else(|| first_forwarded_ip(forwarded_for.as_deref()))
            .unwrap_or_else(|| config.geo.fallback_ip.clone());
        let resolver = config.geo.build_resolver()?;
        info!(%ip, endpoint = resolver.endpoint(), "resolving client location");
        horoscope_for_ip_with_defaults(&resolver, provider, &ip, &config.defaults, now).await?
    };
    print_result(&result)
}

fn explicit_location(
    defaults: &Location,
    tz: String,
    city: Option<String>,
    region: Option<String>,
    country: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
) -> Result<Location> {
    let location = Location {
        city: city.unwrap_or_else(|| defaults.city.clone()),
        region: region.unwrap_or_else(|| defaults.region.clone()),
        country: country.unwrap_or_else(|| defaults.country.clone()),
        lat: lat.unwrap_or(defaults.lat),
        lon: lon.unwrap_or(defaults.lon),
        time_zone: tz,
    };
    if let Err(msg) = location.validate() {
        bail!("invalid location: {msg}");
    }
    Ok(location)
}

fn run_calendar(sun: f64, moon: f64) -> Result<()> {
    let sample = rashifal_ephem::sample(&FixedEphemeris::new(sun, moon), Utc::now())?;
    let info = derive_calendar(&sample);
    let nak = nakshatra_from_longitude(sample.moon_longitude);
    let moon_sign = rashi_from_longitude(sample.moon_longitude);
    println!(
        "Tithi {} ({} {}) - elongation {:.4} deg",
        info.tithi,
        info.paksha.name(),
        tithi_in_paksha(info.tithi),
        elongation_deg(sample.sun_longitude, sample.moon_longitude)
    );
    println!(
        "Nakshatra {} / {} (index {}) - {:.4} deg in nakshatra",
        nak.nakshatra.name(),
        nak.nakshatra.bengali_name(),
        nak.nakshatra_index,
        nak.degrees_in_nakshatra
    );
    println!(
        "Moon in {} ({}, {})",
        moon_sign.name(),
        moon_sign.western_name(),
        moon_sign.bengali_name()
    );
    match info.nakshatra.flavor() {
        Some(flavor) => println!("Flavor: {flavor}"),
        None => println!("Flavor: (none)"),
    }
    Ok(())
}

fn draw_seed(
    seed: Option<String>,
    sign: Option<&str>,
    date: Option<&str>,
    city: Option<String>,
) -> Result<String> {
    match (seed, sign) {
        (Some(seed), _) => Ok(seed),
        (None, Some(name)) => {
            let Some(rashi) = Rashi::from_name(name) else {
                bail!("unknown sign: {name}");
            };
            let date = date.context("--date is required with --sign")?;
            let city = city.unwrap_or_else(|| Location::default().city);
            Ok(sign_seed(date, rashi, &city))
        }
        (None, None) => bail!("either --seed or --sign is required"),
    }
}

fn run_draw(seed: &str, count: usize) {
    let mut seq = SeededSequence::new(seed);
    println!("seed {seed}");
    println!("state {}", seq.state());
    for i in 0..count {
        let raw = seq.next_u32();
        println!("{i}: {raw} {}", f64::from(raw) / TWO_POW_32);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Calendar { sun, moon } => run_calendar(sun, moon),
        Commands::Draw {
            seed,
            sign,
            date,
            city,
            count,
        } => {
            let seed = draw_seed(seed, sign.as_deref(), date.as_deref(), city)?;
            run_draw(&seed, count);
            Ok(())
        }
        Commands::Today {
            ip,
            forwarded_for,
            offline,
        } => {
            let config = load_config(cli.config.as_ref())?;
            let now = parse_now(cli.now.as_deref())?;
            let provider = config.ephemeris.build_provider()?;
            run_today(&config, provider.as_ref(), now, ip, forwarded_for, offline).await
        }
        Commands::At {
            tz,
            city,
            region,
            country,
            lat,
            lon,
        } => {
            let config = load_config(cli.config.as_ref())?;
            let now = parse_now(cli.now.as_deref())?;
            let provider = config.ephemeris.build_provider()?;
            let location =
                explicit_location(&config.defaults, tz, city, region, country, lat, lon)?;
            print_result(&compute_horoscope(location, provider.as_ref(), now)?)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "horoscope generation failed");
            println!("{}", FailurePayload::new(format!("{e:#}")).to_json());
            ExitCode::FAILURE
        }
    }
}
