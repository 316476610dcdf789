use clap::{Parser, Subcommand};
use mystic_astro::{
    GeoLocation, ascendant_longitude_deg, moon_illumination, moon_longitude_deg,
    obliquity_of_ecliptic_deg, sun_longitude_deg,
};
use mystic_chart::{ChartSnapshot, house_from_longitude, sign_from_longitude};
use mystic_match::match_for_moment;
use mystic_time::{CivilMoment, days_since_j2000, gmst_deg, local_sidereal_time_deg, to_julian_day};

#[derive(Parser)]
#[command(name = "mystic", about = "Approximate astronomical positions and companion matching")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Julian Day for a civil moment
    Jd {
        /// Civil datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Approximate Sun ecliptic longitude and sign
    Sun {
        /// Civil datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Approximate Moon ecliptic longitude and sign
    Moon {
        /// Civil datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Moon illumination percent and phase direction
    Illumination {
        /// Civil datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Greenwich mean sidereal time in degrees
    Gmst {
        /// Civil datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// East longitude in degrees; also prints local sidereal time
        #[arg(long)]
        lon: Option<f64>,
    },
    /// Mean obliquity of the ecliptic in degrees
    Obliquity {
        /// Civil datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Approximate ascendant longitude and sign
    Ascendant {
        /// Civil datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Geographic latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// East longitude in degrees
        #[arg(long)]
        lon: f64,
    },
    /// Zodiac sign from a tropical ecliptic longitude
    Sign {
        /// Tropical ecliptic longitude in degrees
        lon: f64,
    },
    /// Equal house number from planet and ascendant longitudes
    House {
        /// Planet ecliptic longitude in degrees
        lon: f64,
        /// Ascendant ecliptic longitude in degrees
        #[arg(long)]
        asc: f64,
    },
    /// Full chart snapshot: Sun, Moon, ascendant, signs, houses, illumination
    Chart {
        /// Civil datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Geographic latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// East longitude in degrees
        #[arg(long)]
        lon: f64,
    },
    /// Companion match: primary familiar, guardian, whisperer
    Match {
        /// Subject name (drives the phonetic vibration)
        #[arg(long)]
        name: String,
        /// Civil datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Geographic latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// East longitude in degrees
        #[arg(long)]
        lon: f64,
    },
}

fn parse_civil(s: &str) -> Result<CivilMoment, String> {
    // Parse "YYYY-MM-DDThh:mm:ssZ" or "YYYY-MM-DDThh:mm:ss"
    let s = s.trim_end_matches('Z');
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh:mm:ssZ, got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || time_parts.len() != 3 {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = time_parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok(CivilMoment::new(year, month, day, hour, minute, second))
}

fn require_moment(s: &str) -> CivilMoment {
    let moment = parse_civil(s).unwrap_or_else(|e| {
        eprintln!("Invalid datetime: {e}");
        std::process::exit(1);
    });
    moment.validate().unwrap_or_else(|e| {
        eprintln!("Invalid datetime: {e}");
        std::process::exit(1);
    });
    moment
}

fn require_location(lat: f64, lon: f64) -> GeoLocation {
    let location = GeoLocation::new(lat, lon);
    location.validate().unwrap_or_else(|e| {
        eprintln!("Invalid location: {e}");
        std::process::exit(1);
    });
    location
}

fn require_sign(lon: f64) -> mystic_chart::SignInfo {
    sign_from_longitude(lon).unwrap_or_else(|e| {
        eprintln!("Invalid longitude: {e}");
        std::process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Jd { date } => {
            let moment = require_moment(&date);
            let jd = to_julian_day(&moment);
            println!("JD {jd:.6} ({:.6} days since J2000)", days_since_j2000(jd));
        }

        Commands::Sun { date } => {
            let moment = require_moment(&date);
            let lon = sun_longitude_deg(to_julian_day(&moment));
            let info = require_sign(lon);
            println!(
                "Sun {:.4} deg - {} ({:.4} deg in sign)",
                lon,
                info.sign.name(),
                info.degrees_in_sign
            );
        }

        Commands::Moon { date } => {
            let moment = require_moment(&date);
            let lon = moon_longitude_deg(to_julian_day(&moment));
            let info = require_sign(lon);
            println!(
                "Moon {:.4} deg - {} ({:.4} deg in sign)",
                lon,
                info.sign.name(),
                info.degrees_in_sign
            );
        }

        Commands::Illumination { date } => {
            let moment = require_moment(&date);
            let jd = to_julian_day(&moment);
            let illum = moon_illumination(sun_longitude_deg(jd), moon_longitude_deg(jd))
                .unwrap_or_else(|e| {
                    eprintln!("Illumination failed: {e}");
                    std::process::exit(1);
                });
            println!("{:.1}% ({})", illum.percent, illum.direction.name());
        }

        Commands::Gmst { date, lon } => {
            let moment = require_moment(&date);
            let gmst = gmst_deg(to_julian_day(&moment));
            println!("GMST {gmst:.6} deg");
            if let Some(lon) = lon {
                let lst = local_sidereal_time_deg(gmst, lon);
                println!("LST  {lst:.6} deg (east longitude {lon} deg)");
            }
        }

        Commands::Obliquity { date } => {
            let moment = require_moment(&date);
            let eps = obliquity_of_ecliptic_deg(to_julian_day(&moment));
            println!("Obliquity {eps:.6} deg");
        }

        Commands::Ascendant { date, lat, lon } => {
            let moment = require_moment(&date);
            let location = require_location(lat, lon);
            let asc = ascendant_longitude_deg(to_julian_day(&moment), &location)
                .unwrap_or_else(|e| {
                    eprintln!("Ascendant failed: {e}");
                    std::process::exit(1);
                });
            let info = require_sign(asc);
            println!(
                "Ascendant {:.4} deg - {} ({:.4} deg in sign)",
                asc,
                info.sign.name(),
                info.degrees_in_sign
            );
        }

        Commands::Sign { lon } => {
            let info = require_sign(lon);
            println!(
                "{} (index {}) - {:.4} deg in sign",
                info.sign.name(),
                info.sign_index,
                info.degrees_in_sign
            );
        }

        Commands::House { lon, asc } => {
            let house = house_from_longitude(lon, asc).unwrap_or_else(|e| {
                eprintln!("House failed: {e}");
                std::process::exit(1);
            });
            println!("House {house}");
        }

        Commands::Chart { date, lat, lon } => {
            let moment = require_moment(&date);
            let location = require_location(lat, lon);
            let s = ChartSnapshot::compute(&moment, &location).unwrap_or_else(|e| {
                eprintln!("Chart failed: {e}");
                std::process::exit(1);
            });
            println!("JD        {:.6}", s.jd);
            println!(
                "Sun       {:.4} deg - {} (house {})",
                s.sun_longitude_deg,
                s.sun_sign.name(),
                s.sun_house
            );
            println!(
                "Moon      {:.4} deg - {} (house {})",
                s.moon_longitude_deg,
                s.moon_sign.name(),
                s.moon_house
            );
            println!(
                "Ascendant {:.4} deg - {}",
                s.ascendant_longitude_deg,
                s.ascendant_sign.name()
            );
            println!(
                "Moon illumination {:.1}% ({})",
                s.illumination.percent,
                s.illumination.direction.name()
            );
        }

        Commands::Match {
            name,
            date,
            lat,
            lon,
        } => {
            let moment = require_moment(&date);
            let location = require_location(lat, lon);
            let report = match_for_moment(&name, &moment, &location).unwrap_or_else(|e| {
                eprintln!("Match failed: {e}");
                std::process::exit(1);
            });
            let s = &report.snapshot;
            println!(
                "Sun in {}, Moon in {}, Ascendant in {}",
                s.sun_sign.name(),
                s.moon_sign.name(),
                s.ascendant_sign.name()
            );
            println!(
                "Tone: {} | Vibration: {} | Bioregion: {}",
                report.tone, report.vibration, report.bioregion
            );
            println!(
                "Moon illumination {:.1}% ({})",
                s.illumination.percent,
                s.illumination.direction.name()
            );
            for pick in &report.picks {
                println!("{}: {} - {}", pick.role.name(), pick.spirit, pick.reason);
            }
        }
    }
}
