//! # Solar Events
//!
//! Sunrise, sunset and twilight times for a date and place, in local civil time.
//!
//! The calculation follows the sunrise/sunset procedure of the *Almanac for Computers*
//! (U.S. Naval Observatory, 1990): a compact closed-form model that is accurate to
//! about one minute between the polar circles. Days on which the sun never crosses
//! the chosen threshold are reported as polar day or polar night instead of a time.
//!
//! ## Features
//!
//! - Three-way result: regular day with sunrise and sunset, polar day, or polar night
//! - Official sunrise/sunset plus civil, nautical and astronomical twilight
//! - Civil time with daylight-saving resolution at the computed instant
//! - `no_std` numeric API that needs neither chrono nor an allocator
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable the [`CivilDate`] based API returning `NaiveDateTime`
//! - `chrono-tz` (default): Implement [`ZoneRules`] for IANA zones from `chrono-tz`
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono + chrono-tz
//! solar-events = "0.1"
//!
//! # Fixed offsets only, no timezone database
//! solar-events = { version = "0.1", default-features = false, features = ["std", "chrono"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-events = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Local sunrise and sunset (with chrono-tz)
//! ```rust
//! # #[cfg(feature = "chrono-tz")] {
//! use chrono::NaiveDate;
//! use solar_events::{almanac, CivilDate, GeoPosition, SunriseResult, Zenith};
//!
//! let date = CivilDate::new(
//!     NaiveDate::from_ymd_opt(2016, 3, 13).unwrap(),
//!     chrono_tz::Pacific::Auckland,
//! );
//! let auckland = GeoPosition::new(-36.85, 174.7644727).unwrap();
//!
//! match almanac::sunrise_sunset(&date, &auckland, Zenith::Official).unwrap() {
//!     SunriseResult::RegularDay { sunrise, sunset } => {
//!         println!("Sunrise: {sunrise}");
//!         println!("Sunset: {sunset}");
//!     }
//!     SunriseResult::AllDay => println!("The sun never sets"),
//!     SunriseResult::AllNight => println!("The sun never rises"),
//! }
//! # }
//! ```
//!
//! ### Numeric API (no chrono)
//! ```rust
//! use solar_events::{almanac, SunriseResult, Zenith};
//!
//! // Longyearbyen, Svalbard on 1 February 2016
//! let result = almanac::sunrise_sunset_utc(2016, 2, 1, 78.2166667, 15.6311393, Zenith::Official).unwrap();
//! assert_eq!(result, SunriseResult::AllNight);
//! ```
//!
//! ## Conventions
//!
//! - **Latitude**: degrees, positive north (-90° to +90°)
//! - **Longitude**: degrees, positive east (-180° to +180°)
//! - **Zenith angle**: 0° = directly overhead, 90° = geometric horizon

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{
    ASTRONOMICAL_ZENITH, CIVIL_ZENITH, ClockTime, EventTime, GeoPosition, HoursUtc,
    NAUTICAL_ZENITH, OFFICIAL_ZENITH, SolarEvent, SunriseResult, Zenith,
};
#[cfg(feature = "chrono")]
pub use crate::zone::{CivilDate, ZoneRules};

// Algorithm module
pub mod almanac;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
#[cfg(feature = "chrono")]
pub mod zone;
