//! Core data types for sunrise/sunset calculations.

use crate::Result;
use crate::error::{check_coordinates, check_zenith_angle};
use crate::math::floor;

/// Zenith angle for standard sunrise/sunset: 90° plus 50 arc minutes for refraction
/// and the sun's radius.
pub const OFFICIAL_ZENITH: f64 = 90.0 + 5.0 / 6.0;
/// Zenith angle for civil twilight (sun 6° below the horizon).
pub const CIVIL_ZENITH: f64 = 96.0;
/// Zenith angle for nautical twilight (sun 12° below the horizon).
pub const NAUTICAL_ZENITH: f64 = 102.0;
/// Zenith angle for astronomical twilight (sun 18° below the horizon).
pub const ASTRONOMICAL_ZENITH: f64 = 108.0;

/// Zenith angle at which the sun is considered to cross the horizon.
///
/// Larger angles put the threshold further below the horizon and so describe the
/// successive twilight definitions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Zenith {
    /// Standard sunrise/sunset (upper limb on the horizon, refraction included)
    #[default]
    Official,
    /// Civil twilight (96°)
    Civil,
    /// Nautical twilight (102°)
    Nautical,
    /// Astronomical twilight (108°)
    Astronomical,
    /// Custom zenith angle in degrees
    Custom(f64),
}

impl Zenith {
    /// Gets the zenith angle in degrees for this horizon definition.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        match self {
            Self::Official => OFFICIAL_ZENITH,
            Self::Civil => CIVIL_ZENITH,
            Self::Nautical => NAUTICAL_ZENITH,
            Self::Astronomical => ASTRONOMICAL_ZENITH,
            Self::Custom(angle) => *angle,
        }
    }

    /// Creates a custom zenith with the specified angle.
    ///
    /// # Errors
    /// Returns `InvalidZenithAngle` if the angle is outside 0 to 180 degrees.
    ///
    /// # Example
    /// ```
    /// # use solar_events::Zenith;
    /// let golden_hour = Zenith::custom(84.0).unwrap();
    /// assert_eq!(golden_hour.degrees(), 84.0);
    /// assert!(Zenith::custom(190.0).is_err());
    /// ```
    pub fn custom(degrees: f64) -> Result<Self> {
        check_zenith_angle(degrees).map(Self::Custom)
    }
}

impl Eq for Zenith {}

impl core::hash::Hash for Zenith {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::Official => 0.hash(state),
            Self::Civil => 1.hash(state),
            Self::Nautical => 2.hash(state),
            Self::Astronomical => 3.hash(state),
            Self::Custom(angle) => {
                4.hash(state);
                // Normalize -0.0 and +0.0 so hashing remains consistent with PartialEq
                let normalized = if *angle == 0.0 { 0.0 } else { *angle };
                normalized.to_bits().hash(state);
            }
        }
    }
}

/// Observer position on the Earth's surface.
///
/// Longitude is positive east of Greenwich.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    latitude: f64,
    longitude: f64,
}

impl GeoPosition {
    /// Creates a validated position.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    ///
    /// # Example
    /// ```
    /// # use solar_events::GeoPosition;
    /// let enschede = GeoPosition::new(52.2406, 6.8854).unwrap();
    /// assert_eq!(enschede.latitude(), 52.2406);
    /// assert!(GeoPosition::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Creates a position without range checks.
    ///
    /// Coordinates outside the valid ranges make the results meaningless
    /// (typically NaN times); callers take responsibility for that.
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Gets the latitude in degrees (-90 to +90, positive north).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (-180 to +180, positive east).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Longitude expressed in hours (15° per hour).
    #[must_use]
    pub fn longitude_hours(&self) -> f64 {
        self.longitude / 15.0
    }
}

/// Horizon crossing to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    /// Sun crossing the zenith threshold upwards
    Sunrise,
    /// Sun crossing the zenith threshold downwards
    Sunset,
}

impl SolarEvent {
    /// Local solar hour used as the first approximation of the event time.
    #[must_use]
    pub const fn anchor_hour(&self) -> f64 {
        match self {
            Self::Sunrise => 6.0,
            Self::Sunset => 18.0,
        }
    }

    /// Converts the arccosine of the hour angle cosine (degrees) into the
    /// event's local hour angle in hours.
    ///
    /// Sunrise takes the supplement since the sun approaches the horizon from
    /// the other side of the meridian.
    #[must_use]
    pub fn hour_angle_hours(&self, acos_degrees: f64) -> f64 {
        match self {
            Self::Sunrise => (360.0 - acos_degrees) / 15.0,
            Self::Sunset => acos_degrees / 15.0,
        }
    }
}

/// UTC time of day in fractional hours.
///
/// Event times produced by [`almanac`](crate::almanac) are always in [0, 24):
/// the algorithm determines the time of day of an event, not the day it falls
/// on, so the result belongs to the calculation date. Values built by hand may
/// lie outside that range; [`day_and_hours`](Self::day_and_hours) and
/// [`to_local_clock`](Self::to_local_clock) wrap them back into a single day.
///
/// # Example
/// ```
/// # use solar_events::HoursUtc;
/// let morning = HoursUtc::from_hours(6.5); // 06:30 UTC
/// assert_eq!(morning.day_and_hours(), (0, 6.5));
/// let wrapped = HoursUtc::from_hours(24.5);
/// assert_eq!(wrapped.day_and_hours(), (1, 0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from hours after midnight UTC.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Splits into whole days and the remaining hours (0.0 to < 24.0).
    ///
    /// # Example
    /// ```
    /// # use solar_events::HoursUtc;
    /// let time = HoursUtc::from_hours(25.5);
    /// let (day_offset, hours) = time.day_and_hours();
    /// assert_eq!(day_offset, 1);
    /// assert!((hours - 1.5).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let mut day_offset_raw = floor(hours / 24.0);
        let mut normalized_hours = hours - day_offset_raw * 24.0;

        if normalized_hours < 0.0 {
            normalized_hours += 24.0;
            day_offset_raw -= 1.0;
        } else if normalized_hours >= 24.0 {
            normalized_hours -= 24.0;
            day_offset_raw += 1.0;
        }

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, normalized_hours)
    }

    /// Wall-clock time after shifting by a standard UTC offset, wrapped into a single day.
    ///
    /// The day offset is dropped: the result is always placed on the calculation
    /// date, which is how civil sunrise/sunset times are reported.
    ///
    /// # Example
    /// ```
    /// # use solar_events::HoursUtc;
    /// let sunset = HoursUtc::from_hours(-6.5); // 17:30 UTC on the previous day
    /// let clock = sunset.to_local_clock(1.0);
    /// assert_eq!((clock.hour(), clock.minute(), clock.second()), (18, 30, 0));
    /// ```
    #[must_use]
    pub fn to_local_clock(&self, utc_offset_hours: f64) -> ClockTime {
        let (_, local) = Self(self.0 + utc_offset_hours).day_and_hours();
        ClockTime::from_hours(local)
    }
}

/// Whole-second wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    second: u32,
}

impl ClockTime {
    /// Splits fractional hours in [0, 24) into hour, minute and second.
    ///
    /// Sub-second precision is truncated. Non-finite input yields midnight.
    #[must_use]
    pub fn from_hours(hours: f64) -> Self {
        if !hours.is_finite() {
            return Self {
                hour: 0,
                minute: 0,
                second: 0,
            };
        }

        let whole_hours = floor(hours);
        let minutes = (hours - whole_hours) * 60.0;
        let whole_minutes = floor(minutes);
        let seconds = (minutes - whole_minutes) * 60.0;

        // Rounding can land exactly on the upper bound of each unit.
        Self {
            hour: (whole_hours as u32).min(23),
            minute: (whole_minutes as u32).min(59),
            second: (floor(seconds) as u32).min(59),
        }
    }

    /// Hour of day (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute of hour (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Second of minute (0-59).
    #[must_use]
    pub const fn second(&self) -> u32 {
        self.second
    }

    /// Seconds elapsed since midnight.
    #[must_use]
    pub const fn seconds_from_midnight(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }
}

/// Outcome of a single sunrise or sunset computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventTime {
    /// The event happens at the given time
    At(HoursUtc),
    /// The sun stays above the zenith threshold all day, so the event does not occur
    AllDay,
    /// The sun stays below the zenith threshold all day, so the event does not occur
    AllNight,
}

/// Result of sunrise/sunset calculations for a given day.
///
/// Replaces a pair of "up all day" / "down all day" flags with a tag that cannot
/// hold an inconsistent combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SunriseResult<T> {
    /// Regular day with distinct sunrise and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - sun remains above the horizon threshold all day
    AllDay,
    /// Polar night - sun remains below the horizon threshold all day
    AllNight,
}

impl<T> SunriseResult<T> {
    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if the sun never sets (polar day).
    pub const fn is_up_all_day(&self) -> bool {
        matches!(self, Self::AllDay)
    }

    /// Checks if the sun never rises (polar night).
    pub const fn is_down_all_day(&self) -> bool {
        matches!(self, Self::AllNight)
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }

    /// Converts both event times, keeping the polar variants as they are.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> SunriseResult<U> {
        match self {
            Self::RegularDay { sunrise, sunset } => SunriseResult::RegularDay {
                sunrise: f(sunrise),
                sunset: f(sunset),
            },
            Self::AllDay => SunriseResult::AllDay,
            Self::AllNight => SunriseResult::AllNight,
        }
    }

    /// Fallible version of [`map`](Self::map).
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E, F: FnMut(T) -> core::result::Result<U, E>>(
        self,
        mut f: F,
    ) -> core::result::Result<SunriseResult<U>, E> {
        Ok(match self {
            Self::RegularDay { sunrise, sunset } => SunriseResult::RegularDay {
                sunrise: f(sunrise)?,
                sunset: f(sunset)?,
            },
            Self::AllDay => SunriseResult::AllDay,
            Self::AllNight => SunriseResult::AllNight,
        })
    }
}
