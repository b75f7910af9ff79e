//! Tests for the numeric sunrise/sunset API (no chrono types involved)

use approx::assert_abs_diff_eq;
use solar_events::{Error, HoursUtc, SunriseResult, Zenith, almanac, time};

#[test]
fn test_sunrise_sunset_utc_basic() {
    // Enschede, 9 March 2016
    let result = almanac::sunrise_sunset_utc(2016, 3, 9, 52.2406295, 6.8854202, Zenith::Official)
        .unwrap();

    if let SunriseResult::RegularDay { sunrise, sunset } = result {
        // 05:59 and 17:27 UTC on the same day
        assert_abs_diff_eq!(sunrise.hours(), 5.989375, epsilon = 1e-5);
        assert_abs_diff_eq!(sunset.hours(), 17.457209, epsilon = 1e-5);

        assert_eq!(sunrise.day_and_hours().0, 0);
        assert_eq!(sunset.day_and_hours().0, 0);
    } else {
        panic!("Expected RegularDay result");
    }
}

#[test]
fn test_local_clock_times() {
    // (lat, lon, standard + daylight offset, sunrise, sunset) on 13 March 2016
    let cases = [
        (-36.85, 174.7644727, 13.0, (7, 17, 49), (19, 42, 27)),
        (21.3166667, -157.852194, -10.0, (6, 40, 59), (18, 40, 36)),
    ];

    for (latitude, longitude, offset, expected_sunrise, expected_sunset) in cases {
        let result = almanac::sunrise_sunset_utc(2016, 3, 13, latitude, longitude, Zenith::Official)
            .unwrap();
        let SunriseResult::RegularDay { sunrise, sunset } = result else {
            panic!("Expected RegularDay result at {latitude}, {longitude}");
        };

        let sunrise = sunrise.to_local_clock(offset);
        let sunset = sunset.to_local_clock(offset);
        assert_eq!(
            (sunrise.hour(), sunrise.minute(), sunrise.second()),
            expected_sunrise,
            "sunrise at {latitude}, {longitude}"
        );
        assert_eq!(
            (sunset.hour(), sunset.minute(), sunset.second()),
            expected_sunset,
            "sunset at {latitude}, {longitude}"
        );
    }
}

#[test]
fn test_sunrise_sunset_utc_for_zenith() {
    let zeniths = [
        Zenith::Official,
        Zenith::Civil,
        Zenith::Nautical,
        Zenith::Astronomical,
        Zenith::custom(93.0).unwrap(),
    ];

    for zenith in zeniths {
        let result = almanac::sunrise_sunset_utc(2023, 6, 21, 37.7749, -122.4194, zenith).unwrap();

        // All should return RegularDay for San Francisco in June
        assert!(
            matches!(result, SunriseResult::RegularDay { .. }),
            "{zenith:?}"
        );
    }
}

#[test]
fn test_darker_thresholds_widen_the_day() {
    let official = almanac::sunrise_sunset_utc(2023, 6, 21, 37.7749, -122.4194, Zenith::Official)
        .unwrap()
        .map(|time| time.to_local_clock(-8.0).seconds_from_midnight());
    let civil = almanac::sunrise_sunset_utc(2023, 6, 21, 37.7749, -122.4194, Zenith::Civil)
        .unwrap()
        .map(|time| time.to_local_clock(-8.0).seconds_from_midnight());

    assert!(civil.sunrise().unwrap() < official.sunrise().unwrap());
    assert!(civil.sunset().unwrap() > official.sunset().unwrap());
    // Civil twilight lasts roughly half an hour at this latitude in summer
    let dawn = official.sunrise().unwrap() - civil.sunrise().unwrap();
    assert!((1_500..2_400).contains(&dawn), "dawn lasted {dawn} s");
}

#[test]
fn test_hours_utc_day_and_hours() {
    // Test current day
    let h1 = HoursUtc::from_hours(12.5);
    let (day, hours) = h1.day_and_hours();
    assert_eq!(day, 0);
    assert_abs_diff_eq!(hours, 12.5, epsilon = 1e-10);

    // Test next day
    let (day, hours) = HoursUtc::from_hours(25.5).day_and_hours();
    assert_eq!(day, 1);
    assert_abs_diff_eq!(hours, 1.5, epsilon = 1e-10);

    // Test previous day
    let (day, hours) = HoursUtc::from_hours(-0.5).day_and_hours();
    assert_eq!(day, -1);
    assert_abs_diff_eq!(hours, 23.5, epsilon = 1e-10);
}

#[test]
fn test_event_times_stay_within_the_utc_day() {
    // Places far east and west where UTC and local dates differ
    let places = [(-36.85, 174.7644727), (21.3166667, -157.852194), (52.2406295, 6.8854202)];

    for (latitude, longitude) in places {
        for month in 1..=12 {
            let result =
                almanac::sunrise_sunset_utc(2016, month, 15, latitude, longitude, Zenith::Official)
                    .unwrap();
            let SunriseResult::RegularDay { sunrise, sunset } = result else {
                panic!("Expected RegularDay result at {latitude}, {longitude}");
            };
            for time in [sunrise, sunset] {
                assert!(
                    (0.0..24.0).contains(&time.hours()),
                    "{latitude}, {longitude} in month {month}: {}",
                    time.hours()
                );
            }
        }
    }
}

#[test]
fn test_local_clock_wraps_onto_the_date() {
    // Raw UT hours outside [0, 24) stay on the same calendar day once localised
    let early = HoursUtc::from_hours(-1.25).to_local_clock(0.0);
    assert_eq!((early.hour(), early.minute(), early.second()), (22, 45, 0));

    let late = HoursUtc::from_hours(23.5).to_local_clock(2.0);
    assert_eq!((late.hour(), late.minute(), late.second()), (1, 30, 0));
}

#[test]
fn test_day_of_year() {
    assert_eq!(time::day_of_year(2016, 1, 1).unwrap(), 1);
    assert_eq!(time::day_of_year(2016, 3, 9).unwrap(), 69);
    assert_eq!(time::day_of_year(2016, 12, 31).unwrap(), 366);
    assert_eq!(time::day_of_year(2015, 12, 31).unwrap(), 365);
}

#[test]
fn test_invalid_inputs() {
    // Invalid latitude
    let result = almanac::sunrise_sunset_utc(2023, 6, 21, 91.0, 0.0, Zenith::Official);
    assert!(matches!(result, Err(Error::InvalidLatitude { .. })));

    // Invalid longitude
    let result = almanac::sunrise_sunset_utc(2023, 6, 21, 0.0, 181.0, Zenith::Official);
    assert!(matches!(result, Err(Error::InvalidLongitude { .. })));

    // Non-finite coordinates
    let result = almanac::sunrise_sunset_utc(2023, 6, 21, f64::NAN, 0.0, Zenith::Official);
    assert!(result.is_err());

    // Invalid month
    let result = almanac::sunrise_sunset_utc(2023, 13, 21, 0.0, 0.0, Zenith::Official);
    assert!(matches!(result, Err(Error::InvalidDateTime { .. })));

    // Invalid day
    let result = almanac::sunrise_sunset_utc(2023, 6, 31, 0.0, 0.0, Zenith::Official);
    assert!(matches!(result, Err(Error::InvalidDateTime { .. })));

    // Invalid custom zenith
    assert!(matches!(
        Zenith::custom(f64::INFINITY),
        Err(Error::InvalidZenithAngle { .. })
    ));
}

#[cfg(feature = "chrono")]
#[test]
fn test_chrono_vs_non_chrono_consistency() {
    use chrono::{NaiveDate, Timelike, Utc};
    use solar_events::{CivilDate, GeoPosition};

    let result_utc =
        almanac::sunrise_sunset_utc(2023, 6, 21, 37.7749, -122.4194, Zenith::Official).unwrap();

    let date = CivilDate::new(NaiveDate::from_ymd_opt(2023, 6, 21).unwrap(), Utc);
    let position = GeoPosition::new(37.7749, -122.4194).unwrap();
    let result_chrono = almanac::sunrise_sunset(&date, &position, Zenith::Official).unwrap();

    match (result_utc, result_chrono) {
        (
            SunriseResult::RegularDay {
                sunrise: sunrise_utc,
                sunset: sunset_utc,
            },
            SunriseResult::RegularDay {
                sunrise: sunrise_chrono,
                sunset: sunset_chrono,
            },
        ) => {
            // Both are truncated to whole seconds on the same wrapped clock
            let sunrise_clock = sunrise_utc.to_local_clock(0.0);
            let sunset_clock = sunset_utc.to_local_clock(0.0);
            assert_eq!(
                sunrise_chrono.num_seconds_from_midnight(),
                sunrise_clock.seconds_from_midnight()
            );
            assert_eq!(
                sunset_chrono.num_seconds_from_midnight(),
                sunset_clock.seconds_from_midnight()
            );
            assert_eq!(sunrise_chrono.date(), date.date());
            assert_eq!(sunset_chrono.date(), date.date());
        }
        _ => panic!("Expected RegularDay from both APIs"),
    }
}
