//! Example demonstrating sunrise/sunset calculation without the chrono library.
//!
//! The numeric API returns UTC times of day in hours; the caller supplies the
//! UTC offset (standard time plus any daylight saving) to read them as a wall clock.

use solar_events::{SunriseResult, Zenith, almanac};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Enschede, 9 March 2016, Central European Time (UTC+1)
    let result =
        almanac::sunrise_sunset_utc(2016, 3, 9, 52.2406295, 6.8854202, Zenith::Official)?;

    match result {
        SunriseResult::RegularDay { sunrise, sunset } => {
            println!("Enschede, March 9, 2016 (UTC hours):");
            println!("  Sunrise:  {} hours", sunrise.hours());
            println!("  Sunset:   {} hours", sunset.hours());
            println!();

            let utc = sunrise.to_local_clock(0.0);
            println!(
                "Sunrise in UTC: {:02}:{:02}:{:02}",
                utc.hour(),
                utc.minute(),
                utc.second()
            );
            println!();

            let sunrise = sunrise.to_local_clock(1.0);
            let sunset = sunset.to_local_clock(1.0);
            println!("Local time (CET):");
            println!(
                "  Sunrise:  {:02}:{:02}:{:02}",
                sunrise.hour(),
                sunrise.minute(),
                sunrise.second()
            );
            println!(
                "  Sunset:   {:02}:{:02}:{:02}",
                sunset.hour(),
                sunset.minute(),
                sunset.second()
            );
        }
        SunriseResult::AllDay => println!("Polar day - sun never sets"),
        SunriseResult::AllNight => println!("Polar night - sun never rises"),
    }

    // Example with a custom zenith angle
    println!("\nWith custom zenith angle (93°):");
    let custom_result =
        almanac::sunrise_sunset_utc(2016, 3, 9, 52.2406295, 6.8854202, Zenith::custom(93.0)?)?;

    if let SunriseResult::RegularDay { sunrise, sunset } = custom_result {
        println!("  Begin:  {} hours", sunrise.hours());
        println!("  End:    {} hours", sunset.hours());
    }

    // Svalbard in midwinter
    let polar = almanac::sunrise_sunset_utc(2016, 2, 1, 78.2166667, 15.6311393, Zenith::Official)?;
    println!("\nLongyearbyen, February 1, 2016: {polar:?}");

    Ok(())
}
