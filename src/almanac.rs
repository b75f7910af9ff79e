//! Sunrise and sunset from the "Almanac for Computers" algorithm.
//!
//! Follows the sunrise/sunset procedure published by the Nautical Almanac Office
//! of the U.S. Naval Observatory in *Almanac for Computers* (1990). It uses a
//! low-order model of the sun's apparent motion and is accurate to about a
//! minute between the polar circles.
//!
//! Each event is computed on its own: a first guess of the event time (06:00 for
//! sunrise, 18:00 for sunset, local solar time) fixes the sun's position, from
//! which the hour angle at the horizon crossing follows.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::Result;
use crate::math::{acos_deg, asin_deg, atan_deg, cos_deg, floor, sin_deg, tan_deg};
use crate::time::day_of_year;
use crate::types::{EventTime, GeoPosition, HoursUtc, SolarEvent, SunriseResult, Zenith};
#[cfg(feature = "chrono")]
use crate::zone::{CivilDate, ZoneRules};
#[cfg(feature = "chrono")]
use chrono::NaiveDateTime;
use tracing::debug;

/// Mean daily motion of the sun's mean anomaly (degrees per day).
const MEAN_ANOMALY_RATE: f64 = 0.9856;
/// Mean anomaly offset (degrees).
const MEAN_ANOMALY_OFFSET: f64 = 3.289;
/// Longitude of perihelion plus 180° (degrees).
const PERIHELION_LONGITUDE: f64 = 282.634;
/// cos of the obliquity of the ecliptic.
const COS_OBLIQUITY: f64 = 0.91764;
/// sin of the obliquity of the ecliptic.
const SIN_OBLIQUITY: f64 = 0.39782;
/// Sidereal correction to local mean time (hours per day).
const SIDEREAL_RATE: f64 = 0.06571;
/// Local mean time offset (hours).
const LOCAL_MEAN_TIME_OFFSET: f64 = 6.622;

/// Sun coordinates at the approximate event time.
#[derive(Debug, Clone, Copy)]
struct SunCoordinates {
    /// Right ascension in hours, same quadrant as the true longitude
    right_ascension: f64,
    sin_declination: f64,
    cos_declination: f64,
}

impl SunCoordinates {
    fn at(approximate_time: f64) -> Self {
        let mean_anomaly = MEAN_ANOMALY_RATE * approximate_time - MEAN_ANOMALY_OFFSET;
        let true_longitude = sun_true_longitude(mean_anomaly);
        let sin_declination = SIN_OBLIQUITY * sin_deg(true_longitude);

        Self {
            right_ascension: right_ascension_hours(true_longitude),
            sin_declination,
            cos_declination: cos_deg(asin_deg(sin_declination)),
        }
    }

    /// Cosine of the local hour angle at which the sun reaches `zenith`.
    fn cos_hour_angle(&self, latitude: f64, zenith: f64) -> f64 {
        (cos_deg(zenith) - self.sin_declination * sin_deg(latitude))
            / (self.cos_declination * cos_deg(latitude))
    }
}

fn sun_true_longitude(mean_anomaly: f64) -> f64 {
    (mean_anomaly
        + 1.916 * sin_deg(mean_anomaly)
        + 0.020 * sin_deg(2.0 * mean_anomaly)
        + PERIHELION_LONGITUDE)
        % 360.0
}

fn right_ascension_hours(true_longitude: f64) -> f64 {
    let ra = atan_deg(COS_OBLIQUITY * tan_deg(true_longitude));
    // atan only covers two quadrants; move RA next to the true longitude
    let ra = ra + (floor(true_longitude / 90.0) * 90.0 - floor(ra / 90.0) * 90.0);
    ra / 15.0
}

/// Calculate the time of a single sunrise or sunset in UTC.
///
/// # Arguments
/// * `day_of_year` - Ordinal day of the date (1-366)
/// * `position` - Observer position
/// * `zenith` - Horizon crossing threshold
/// * `event` - Sunrise or sunset
///
/// # Returns
/// `EventTime::At` with the UTC time of day in [0, 24), or the polar condition
/// that prevents the event.
///
/// # Example
/// ```
/// use solar_events::{almanac, EventTime, GeoPosition, SolarEvent, Zenith};
///
/// let honolulu = GeoPosition::new(21.3166667, -157.852194).unwrap();
/// let sunset = almanac::event_time_utc(73, &honolulu, Zenith::Official, SolarEvent::Sunset);
/// assert!(matches!(sunset, EventTime::At(_)));
/// ```
#[must_use]
pub fn event_time_utc(
    day_of_year: u32,
    position: &GeoPosition,
    zenith: Zenith,
    event: SolarEvent,
) -> EventTime {
    let longitude_hours = position.longitude_hours();
    let approximate_time =
        f64::from(day_of_year) + (event.anchor_hour() - longitude_hours) / 24.0;

    let sun = SunCoordinates::at(approximate_time);
    let cos_h = sun.cos_hour_angle(position.latitude(), zenith.degrees());

    if cos_h > 1.0 {
        return EventTime::AllNight;
    }
    if cos_h < -1.0 {
        return EventTime::AllDay;
    }

    let hour_angle = event.hour_angle_hours(acos_deg(cos_h));
    let local_mean_time = hour_angle + sun.right_ascension
        - SIDEREAL_RATE * approximate_time
        - LOCAL_MEAN_TIME_OFFSET;

    // UT is only meaningful modulo 24 here; keep the time of day.
    let universal_time = HoursUtc::from_hours(local_mean_time - longitude_hours);
    let (_, time_of_day) = universal_time.day_and_hours();
    EventTime::At(HoursUtc::from_hours(time_of_day))
}

/// Calculate sunrise and sunset in UTC for an ordinal day of the year.
///
/// Sunrise and sunset are computed independently. If either one finds the sun
/// above (or below) the threshold all day, the day is reported as polar; when
/// both do, the sunrise computation decides which.
///
/// Coordinates are not validated here; use [`GeoPosition::new`] to reject
/// out-of-range input.
#[must_use]
pub fn sunrise_sunset_for_day_of_year(
    day_of_year: u32,
    position: &GeoPosition,
    zenith: Zenith,
) -> SunriseResult<HoursUtc> {
    let sunrise = event_time_utc(day_of_year, position, zenith, SolarEvent::Sunrise);
    let sunset = event_time_utc(day_of_year, position, zenith, SolarEvent::Sunset);

    let result = match (sunrise, sunset) {
        (EventTime::At(sunrise), EventTime::At(sunset)) => {
            SunriseResult::RegularDay { sunrise, sunset }
        }
        (EventTime::AllDay, _) | (EventTime::At(_), EventTime::AllDay) => SunriseResult::AllDay,
        (EventTime::AllNight, _) | (EventTime::At(_), EventTime::AllNight) => {
            SunriseResult::AllNight
        }
    };

    debug!(
        day_of_year,
        latitude = position.latitude(),
        longitude = position.longitude(),
        zenith = zenith.degrees(),
        regular = result.is_regular_day(),
        up_all_day = result.is_up_all_day(),
        down_all_day = result.is_down_all_day(),
        "computed sunrise/sunset"
    );

    result
}

/// Calculate sunrise and sunset in UTC for a calendar date.
///
/// Works without chrono and in `no_std` builds.
///
/// # Returns
/// `SunriseResult<HoursUtc>` with UTC times of day in [0, 24)
///
/// # Errors
/// Returns error for invalid coordinates or an invalid calendar date.
///
/// # Example
/// ```
/// use solar_events::{almanac, SunriseResult, Zenith};
///
/// // Enschede, 9 March 2016
/// let result =
///     almanac::sunrise_sunset_utc(2016, 3, 9, 52.2406295, 6.8854202, Zenith::Official).unwrap();
///
/// if let SunriseResult::RegularDay { sunrise, sunset } = result {
///     let sunrise = sunrise.to_local_clock(1.0); // CET
///     assert_eq!((sunrise.hour(), sunrise.minute(), sunrise.second()), (6, 59, 21));
///     let sunset = sunset.to_local_clock(1.0);
///     assert_eq!((sunset.hour(), sunset.minute(), sunset.second()), (18, 27, 25));
/// }
/// ```
pub fn sunrise_sunset_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
) -> Result<SunriseResult<HoursUtc>> {
    let position = GeoPosition::new(latitude, longitude)?;
    let day_of_year = day_of_year(year, month, day)?;
    Ok(sunrise_sunset_for_day_of_year(day_of_year, &position, zenith))
}

/// Calculate sunrise and sunset as local wall-clock times for a civil date.
///
/// Times are placed on the calendar day of `date`, using the zone's standard
/// offset, and then moved by whatever daylight-saving adjustment the zone
/// reports at that local time. The adjustment can move a late sunset past
/// midnight into the following day.
///
/// # Errors
/// Returns `InvalidDateTime` if a resulting timestamp is outside chrono's range.
///
/// # Example
/// ```
/// # #[cfg(feature = "chrono-tz")] {
/// use chrono::{NaiveDate, NaiveTime};
/// use solar_events::{almanac, CivilDate, GeoPosition, Zenith};
///
/// let date = CivilDate::new(
///     NaiveDate::from_ymd_opt(2016, 3, 27).unwrap(),
///     chrono_tz::Europe::Amsterdam,
/// );
/// let enschede = GeoPosition::new(52.2406295, 6.8854202).unwrap();
///
/// let result = almanac::sunrise_sunset(&date, &enschede, Zenith::Official).unwrap();
/// let sunrise = result.sunrise().unwrap();
/// assert_eq!(sunrise.time(), NaiveTime::from_hms_opt(7, 17, 27).unwrap());
/// # }
/// ```
#[cfg(feature = "chrono")]
pub fn sunrise_sunset<Z: ZoneRules>(
    date: &CivilDate<Z>,
    position: &GeoPosition,
    zenith: Zenith,
) -> Result<SunriseResult<NaiveDateTime>> {
    sunrise_sunset_for_day_of_year(date.day_of_year(), position, zenith)
        .try_map(|time| date.local_datetime(time))
}
