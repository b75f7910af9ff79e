//! Polar day, polar night and the edges where they begin.

use solar_events::{EventTime, GeoPosition, SolarEvent, SunriseResult, Zenith, almanac};

const LONGYEARBYEN: (f64, f64) = (78.2166667, 15.6311393);

fn position(latitude: f64, longitude: f64) -> GeoPosition {
    GeoPosition::new(latitude, longitude).unwrap()
}

#[test]
fn polar_night_in_svalbard() {
    let (latitude, longitude) = LONGYEARBYEN;
    let result =
        almanac::sunrise_sunset_utc(2016, 2, 1, latitude, longitude, Zenith::Official).unwrap();

    assert_eq!(result, SunriseResult::AllNight);
    assert!(result.is_down_all_day());
    assert!(!result.is_up_all_day());
    assert!(!result.is_regular_day());
    assert_eq!(result.sunrise(), None);
    assert_eq!(result.sunset(), None);
}

#[test]
fn polar_day_in_svalbard() {
    let (latitude, longitude) = LONGYEARBYEN;
    let result =
        almanac::sunrise_sunset_utc(2016, 7, 1, latitude, longitude, Zenith::Official).unwrap();

    assert_eq!(result, SunriseResult::AllDay);
    assert!(result.is_up_all_day());
    assert!(!result.is_down_all_day());
    assert!(!result.is_regular_day());
}

#[test]
fn twilight_persists_into_polar_day() {
    // Midsummer at 60°N: the sun sets, but never deep enough for astronomical night.
    let (latitude, longitude) = (60.0, 10.0);

    let official =
        almanac::sunrise_sunset_utc(2016, 6, 21, latitude, longitude, Zenith::Official).unwrap();
    assert!(official.is_regular_day());

    let astronomical =
        almanac::sunrise_sunset_utc(2016, 6, 21, latitude, longitude, Zenith::Astronomical)
            .unwrap();
    assert_eq!(astronomical, SunriseResult::AllDay);
}

#[test]
fn sunrise_anchor_alone_can_make_the_day_polar() {
    // 3 January at 68°N: the morning computation finds the sun below the
    // horizon all day while the evening one still finds a crossing.
    let place = position(68.0, 10.0);
    assert_eq!(
        almanac::event_time_utc(3, &place, Zenith::Official, SolarEvent::Sunrise),
        EventTime::AllNight
    );
    assert!(matches!(
        almanac::event_time_utc(3, &place, Zenith::Official, SolarEvent::Sunset),
        EventTime::At(_)
    ));
    assert_eq!(
        almanac::sunrise_sunset_for_day_of_year(3, &place, Zenith::Official),
        SunriseResult::AllNight
    );
}

#[test]
fn sunset_anchor_alone_can_make_the_day_polar() {
    // 5 June (day 157) at 66.5°N: only the evening computation reaches polar day.
    let place = position(66.5, 10.0);
    assert!(matches!(
        almanac::event_time_utc(157, &place, Zenith::Official, SolarEvent::Sunrise),
        EventTime::At(_)
    ));
    assert_eq!(
        almanac::event_time_utc(157, &place, Zenith::Official, SolarEvent::Sunset),
        EventTime::AllDay
    );
    assert_eq!(
        almanac::sunrise_sunset_for_day_of_year(157, &place, Zenith::Official),
        SunriseResult::AllDay
    );

    // 9 December (day 343) at 68°N: same, towards polar night.
    let place = position(68.0, 10.0);
    assert_eq!(
        almanac::sunrise_sunset_for_day_of_year(343, &place, Zenith::Official),
        SunriseResult::AllNight
    );
}

#[test]
fn polar_flags_are_symmetric_between_hemispheres() {
    // Polar night in the north in December pairs with polar day in the south.
    let north = almanac::sunrise_sunset_utc(2016, 12, 21, 80.0, 0.0, Zenith::Official).unwrap();
    let south = almanac::sunrise_sunset_utc(2016, 12, 21, -80.0, 0.0, Zenith::Official).unwrap();

    assert_eq!(north, SunriseResult::AllNight);
    assert_eq!(south, SunriseResult::AllDay);
}

#[test]
fn sunrise_precedes_sunset_outside_polar_latitudes() {
    // Every day of a leap year, on a grid up to ±60°, with each place on its
    // nominal zone offset.
    let mut checked = 0;

    for latitude in (-60..=60).step_by(5) {
        for longitude in (-180..=180).step_by(15) {
            let place = position(f64::from(latitude), f64::from(longitude));
            let zone_offset = f64::from(longitude / 15);

            for day in 1..=366 {
                let result = almanac::sunrise_sunset_for_day_of_year(day, &place, Zenith::Official);
                let SunriseResult::RegularDay { sunrise, sunset } = result else {
                    panic!("lat {latitude} lon {longitude} day {day}: expected regular day");
                };

                let sunrise = sunrise.to_local_clock(zone_offset);
                let sunset = sunset.to_local_clock(zone_offset);
                assert!(
                    sunrise < sunset,
                    "lat {latitude} lon {longitude} day {day}: {sunrise:?} !< {sunset:?}"
                );
                checked += 1;
            }
        }
    }

    assert_eq!(checked, 25 * 25 * 366);
}
