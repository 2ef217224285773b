use std::io::BufRead;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use hilal_calendar::{
    Locale, SearchConfig, UmmAlQuraOracle, format_gregorian, format_hijri, gregorian_to_hijri,
    hijri_to_gregorian, to_arabic_indic_digits, to_ascii_digits,
};
use hilal_config::HilalConfig;
use hilal_content::{parse_verses, search};
use hilal_qibla::{
    FixedLocation, GeoCoordinate, OrientationReading, QiblaSession, QiblaStatus, SensorFeed,
    bearing_readout, qibla_bearing, update_alignment_with_tolerance,
};
use log::debug;

#[derive(Parser)]
#[command(name = "hilal", about = "Hijri calendar and Qibla direction tools")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Output language: ar or en (overrides config)
    #[arg(long, global = true)]
    locale: Option<Locale>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Gregorian date to Umm al-Qura Hijri
    ToHijri {
        /// Gregorian year (ASCII or Arabic-Indic digits)
        year: String,
        /// Month 1-12
        month: String,
        /// Day 1-31
        day: String,
    },
    /// Umm al-Qura Hijri date to Gregorian
    ToGregorian {
        /// Hijri year
        year: String,
        /// Month 1-12
        month: String,
        /// Day 1-30
        day: String,
        /// Maximum days scanned (default from config)
        #[arg(long)]
        search_days: Option<u32>,
    },
    /// Qibla bearing from a location
    Qibla {
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Alignment of a heading against a bearing
    Align {
        /// Qibla bearing in degrees
        #[arg(long, allow_hyphen_values = true)]
        bearing: f64,
        /// Device heading in degrees
        #[arg(long, allow_hyphen_values = true)]
        heading: f64,
        /// Tolerance in degrees (default from config)
        #[arg(long)]
        tolerance: Option<f64>,
    },
    /// Live compass: read headings from stdin, one per line
    Compass {
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Treat input as orientation alpha rather than compass heading
        #[arg(long)]
        alpha: bool,
    },
    /// Convert digits between ASCII and Arabic-Indic
    Digits {
        /// Text to convert
        text: String,
        /// Target digit set
        #[arg(long, value_enum, default_value = "arabic")]
        to: DigitSet,
    },
    /// Search a `surah|ayah|text` verse file
    Search {
        /// Verse file
        file: PathBuf,
        /// Query text
        query: String,
        /// Maximum number of results
        #[arg(long, default_value = "20")]
        limit: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DigitSet {
    Ascii,
    Arabic,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> HilalConfig {
    let config = match path {
        Some(p) => HilalConfig::from_file(p).unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        }),
        None => HilalConfig::default(),
    }
    .with_env_overrides();
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }
    config
}

fn search_config(config: &HilalConfig) -> SearchConfig {
    config.search_config().unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    })
}

fn check_coordinate(lat: f64, lon: f64) -> GeoCoordinate {
    let c = GeoCoordinate::new(lat, lon);
    if !c.is_valid() {
        eprintln!("Invalid coordinate: lat {lat} (-90..90), lon {lon} (-180..180)");
        std::process::exit(1);
    }
    c
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_ref());
    let locale = cli.locale.unwrap_or_else(|| config.locale());
    debug!("locale {}", locale.tag());

    match cli.command {
        Commands::ToHijri { year, month, day } => {
            let oracle = UmmAlQuraOracle::new();
            match gregorian_to_hijri(&oracle, &year, &month, &day, &search_config(&config)) {
                Ok(h) => println!("{}", format_hijri(&h, locale)),
                Err(e) => {
                    debug!("{e}");
                    eprintln!("{}", e.message(locale));
                    std::process::exit(1);
                }
            }
        }

        Commands::ToGregorian {
            year,
            month,
            day,
            search_days,
        } => {
            let oracle = UmmAlQuraOracle::new();
            let mut cfg = search_config(&config);
            if let Some(n) = search_days {
                cfg = cfg.with_max_days(n);
            }
            match hijri_to_gregorian(&oracle, &year, &month, &day, &cfg) {
                Ok(g) => println!("{}", format_gregorian(&g, locale)),
                Err(e) => {
                    debug!("{e}");
                    eprintln!("{}", e.message(locale));
                    std::process::exit(1);
                }
            }
        }

        Commands::Qibla { lat, lon } => {
            let bearing = qibla_bearing(check_coordinate(lat, lon));
            println!("{bearing:.4}");
            println!("{}", bearing_readout(bearing, locale));
        }

        Commands::Align {
            bearing,
            heading,
            tolerance,
        } => {
            let tolerance = tolerance.unwrap_or(config.qibla.alignment_tolerance_deg);
            let s = update_alignment_with_tolerance(bearing, heading, tolerance);
            println!(
                "{} (difference {:.2} deg, needle {:.2} deg, dial {:.2} deg)",
                if s.is_aligned { "aligned" } else { "not aligned" },
                s.difference_deg,
                s.needle_rotation_deg,
                s.dial_rotation_deg
            );
        }

        Commands::Compass { lat, lon, alpha } => {
            let location = FixedLocation(check_coordinate(lat, lon));
            let mut feed = SensorFeed::new();
            let platform = feed.clone();
            println!("{}", QiblaStatus::default().message(locale));
            let mut session = QiblaSession::start(&location, &mut feed, &config.qibla_config());
            if let Some(e) = session.location_error().or(session.compass_error()) {
                eprintln!("{}", e.message(locale));
                std::process::exit(1);
            }
            println!("{}", session.status().message(locale));

            for line in std::io::stdin().lock().lines() {
                let line = match line {
                    Ok(l) => l,
                    Err(e) => {
                        eprintln!("Failed to read stdin: {e}");
                        std::process::exit(1);
                    }
                };
                let Ok(value) = line.trim().parse::<f64>() else {
                    eprintln!("Skipping non-numeric heading: {line}");
                    continue;
                };
                platform.push(if alpha {
                    OrientationReading::from_alpha(value, true)
                } else {
                    OrientationReading::from_compass(value)
                });
                if let (Some(s), Some(h)) = (session.drain(), session.heading_deg()) {
                    println!(
                        "heading {h:.1} -> {} (difference {:.2} deg)",
                        if s.is_aligned { "aligned" } else { "turn" },
                        s.difference_deg
                    );
                }
            }
            session.close();
        }

        Commands::Digits { text, to } => {
            let out = match to {
                DigitSet::Ascii => to_ascii_digits(&text),
                DigitSet::Arabic => to_arabic_indic_digits(&text),
            };
            println!("{out}");
        }

        Commands::Search { file, query, limit } => {
            let source = std::fs::read_to_string(&file).unwrap_or_else(|e| {
                eprintln!("Failed to read {}: {e}", file.display());
                std::process::exit(1);
            });
            let verses = parse_verses(&source).unwrap_or_else(|e| {
                eprintln!("{}: {e}", file.display());
                std::process::exit(1);
            });
            let hits = search(&verses, &query, limit);
            for hit in &hits {
                println!("{}:{}\t{}", hit.surah, hit.ayah, verses[hit.index].text);
            }
            if hits.is_empty() {
                eprintln!("No matches");
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_accepts_negative_angles() {
        let cli = Cli::try_parse_from(["hilal", "align", "--bearing", "-2", "--heading", "-5"])
            .unwrap();
        match cli.command {
            Commands::Align {
                bearing, heading, ..
            } => assert_eq!((bearing, heading), (-2.0, -5.0)),
            _ => panic!("expected align"),
        }
    }

    #[test]
    fn qibla_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from(["hilal", "qibla", "--lat", "-6.2", "--lon", "-74"]).unwrap();
        assert!(matches!(cli.command, Commands::Qibla { .. }));
    }

    #[test]
    fn locale_flag_parses() {
        let cli = Cli::try_parse_from(["hilal", "--locale", "en", "digits", "2024"]).unwrap();
        assert_eq!(cli.locale, Some(Locale::English));
    }
}
