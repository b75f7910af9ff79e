//! Civil calendar dates and the UTC offset/daylight-saving rules they carry.
//!
//! The calculator does not ship a timezone database. Callers describe their
//! civil calendar through [`ZoneRules`], which is implemented here for
//! `chrono::Utc`, `chrono::FixedOffset` and (with the `chrono-tz` feature)
//! `chrono_tz::Tz`.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
    Utc,
};
use tracing::trace;

use crate::types::HoursUtc;
use crate::{Error, Result};

/// Seconds per hour, for converting offsets to fractional hours.
const SECONDS_PER_HOUR: f64 = 3_600.0;

/// UTC offset rules of a civil calendar.
///
/// Both methods take a local wall-clock instant. Implementations decide how to
/// treat local times that are skipped or repeated around a transition; the
/// provided implementations read them as standard time.
pub trait ZoneRules {
    /// Standard UTC offset (excluding any daylight-saving adjustment) in effect at `local`.
    fn standard_offset(&self, local: NaiveDateTime) -> TimeDelta;

    /// Daylight-saving adjustment in effect at `local` (zero when none applies).
    fn dst_offset(&self, local: NaiveDateTime) -> TimeDelta;
}

impl<Z: ZoneRules + ?Sized> ZoneRules for &Z {
    fn standard_offset(&self, local: NaiveDateTime) -> TimeDelta {
        (**self).standard_offset(local)
    }

    fn dst_offset(&self, local: NaiveDateTime) -> TimeDelta {
        (**self).dst_offset(local)
    }
}

impl ZoneRules for Utc {
    fn standard_offset(&self, _local: NaiveDateTime) -> TimeDelta {
        TimeDelta::zero()
    }

    fn dst_offset(&self, _local: NaiveDateTime) -> TimeDelta {
        TimeDelta::zero()
    }
}

impl ZoneRules for FixedOffset {
    fn standard_offset(&self, _local: NaiveDateTime) -> TimeDelta {
        TimeDelta::seconds(i64::from(self.local_minus_utc()))
    }

    fn dst_offset(&self, _local: NaiveDateTime) -> TimeDelta {
        TimeDelta::zero()
    }
}

#[cfg(feature = "chrono-tz")]
impl ZoneRules for chrono_tz::Tz {
    fn standard_offset(&self, local: NaiveDateTime) -> TimeDelta {
        use chrono_tz::OffsetComponents;

        // A skipped local time has no offset of its own; read it as UTC to get
        // the rules around it.
        self.offset_from_local_datetime(&local)
            .earliest()
            .unwrap_or_else(|| self.offset_from_utc_datetime(&local))
            .base_utc_offset()
    }

    fn dst_offset(&self, local: NaiveDateTime) -> TimeDelta {
        use chrono_tz::OffsetComponents;

        let utc = local - self.standard_offset(local);
        self.offset_from_utc_datetime(&utc).dst_offset()
    }
}

/// A calendar day in a civil timezone.
///
/// # Example
/// ```
/// # use solar_events::CivilDate;
/// use chrono::{FixedOffset, NaiveDate};
///
/// let cet = FixedOffset::east_opt(3600).unwrap();
/// let date = CivilDate::new(NaiveDate::from_ymd_opt(2016, 3, 9).unwrap(), cet);
/// assert_eq!(date.day_of_year(), 69);
/// assert_eq!(date.standard_offset_hours(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDate<Z> {
    date: NaiveDate,
    zone: Z,
}

impl<Z: ZoneRules> CivilDate<Z> {
    /// Creates a civil date from a calendar day and its zone rules.
    pub const fn new(date: NaiveDate, zone: Z) -> Self {
        Self { date, zone }
    }

    /// Gets the calendar day.
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Gets the zone rules.
    pub const fn zone(&self) -> &Z {
        &self.zone
    }

    /// Ordinal day number (1-366).
    pub fn day_of_year(&self) -> u32 {
        self.date.ordinal()
    }

    /// Standard UTC offset at local midnight of this date, in hours.
    #[allow(clippy::cast_precision_loss)]
    pub fn standard_offset_hours(&self) -> f64 {
        let midnight = self.date.and_time(NaiveTime::MIN);
        self.zone.standard_offset(midnight).num_seconds() as f64 / SECONDS_PER_HOUR
    }

    /// Converts an event time in UTC hours to local wall-clock time on this date.
    ///
    /// The UTC time is shifted by the standard offset and wrapped onto this
    /// calendar day. The daylight-saving adjustment is then looked up at that
    /// naive local instant and added, which may move the result to the next day.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the adjusted timestamp is not representable.
    pub fn local_datetime(&self, time: HoursUtc) -> Result<NaiveDateTime> {
        let clock = time.to_local_clock(self.standard_offset_hours());
        let naive = self
            .date
            .and_hms_opt(clock.hour(), clock.minute(), clock.second())
            .ok_or_else(|| Error::invalid_datetime("clock time out of range"))?;

        let dst = self.zone.dst_offset(naive);
        if dst.is_zero() {
            return Ok(naive);
        }

        trace!(%naive, dst_seconds = dst.num_seconds(), "applying daylight-saving adjustment");
        naive
            .checked_add_signed(dst)
            .ok_or_else(|| Error::invalid_datetime("daylight-saving adjusted time out of range"))
    }
}

impl<Tz: TimeZone + ZoneRules> CivilDate<Tz> {
    /// Takes the calendar day of a zoned timestamp, in that timestamp's own zone.
    ///
    /// The time of day is ignored.
    pub fn from_datetime(datetime: &DateTime<Tz>) -> Self {
        Self {
            date: datetime.date_naive(),
            zone: datetime.timezone(),
        }
    }
}
