//! Sunrise, sunset and twilight times for cities around the world, in each city's local time.
//!
//! Set `RUST_LOG=solar_events=debug` to see the per-day calculation log.

use chrono::NaiveDate;
use chrono_tz::Tz;
use solar_events::{CivilDate, GeoPosition, SunriseResult, Zenith, almanac};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    zone: Tz,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cities = [
        City {
            name: "Longyearbyen, Svalbard (Arctic)",
            latitude: 78.2166667,
            longitude: 15.6311393,
            zone: chrono_tz::Europe::Oslo,
        },
        City {
            name: "Enschede, Netherlands",
            latitude: 52.2406295,
            longitude: 6.8854202,
            zone: chrono_tz::Europe::Amsterdam,
        },
        City {
            name: "Honolulu, Hawaii",
            latitude: 21.3166667,
            longitude: -157.852194,
            zone: chrono_tz::Pacific::Honolulu,
        },
        City {
            name: "New Delhi, India",
            latitude: 28.6139,
            longitude: 77.2090,
            zone: chrono_tz::Asia::Kolkata,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.85,
            longitude: 174.7644727,
            zone: chrono_tz::Pacific::Auckland,
        },
    ];

    let dates = [
        NaiveDate::from_ymd_opt(2016, 3, 27).ok_or("invalid date")?,
        NaiveDate::from_ymd_opt(2016, 6, 21).ok_or("invalid date")?,
        NaiveDate::from_ymd_opt(2016, 12, 21).ok_or("invalid date")?,
    ];

    for city in &cities {
        println!("=== {} ({}) ===", city.name, city.zone);
        println!(
            "Coordinates: {:.2}°N, {:.2}°E",
            city.latitude, city.longitude
        );
        let position = GeoPosition::new(city.latitude, city.longitude)?;

        for date in dates {
            println!("{date}:");
            print_day(&CivilDate::new(date, city.zone), &position)?;
        }
        println!();
    }

    Ok(())
}

fn print_day(date: &CivilDate<Tz>, position: &GeoPosition) -> solar_events::Result<()> {
    let zeniths = [
        ("Sunrise/Sunset", Zenith::Official),
        ("Civil Twilight", Zenith::Civil),
        ("Nautical Twilight", Zenith::Nautical),
        ("Astronomical Twilight", Zenith::Astronomical),
    ];

    for (label, zenith) in zeniths {
        match almanac::sunrise_sunset(date, position, zenith)? {
            SunriseResult::RegularDay { sunrise, sunset } => println!(
                "  {label:<22} {} - {}",
                sunrise.format("%H:%M:%S"),
                sunset.format("%H:%M:%S (%b %d)")
            ),
            SunriseResult::AllDay => println!("  {label:<22} sun above threshold all day"),
            SunriseResult::AllNight => println!("  {label:<22} sun below threshold all day"),
        }
    }

    Ok(())
}
