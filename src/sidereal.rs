//! # Local sidereal time collaborator
//!
//! Transit-time computation needs the observer's local sidereal time. The
//! lookup is behind the [`SiderealTime`] trait so the core stays testable with
//! a stub clock; [`Gmst`] is the default implementation, a polynomial Greenwich
//! Mean Sidereal Time model good to well under a minute over the tool's useful
//! range, which is far tighter than a planning session needs.
//!
//! ## See also
//! ------------
//! * [`crate::visibility::transit`] – Consumer of the sidereal clock.

use hifitime::Epoch;

use crate::constants::{Degree, Hour, DAYS_PER_JULIAN_CENTURY, DEG_PER_HOUR, HOURS_PER_DAY, JD_J2000};

/// Local sidereal time as a function of (instant, east longitude).
///
/// Implementations must return hours normalized into `[0, 24)`.
pub trait SiderealTime {
    fn local_sidereal_hours(&self, instant: Epoch, longitude_deg: Degree) -> Hour;
}

/// Polynomial GMST model (IAU 1982 form), the default [`SiderealTime`] clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gmst;

impl SiderealTime for Gmst {
    fn local_sidereal_hours(&self, instant: Epoch, longitude_deg: Degree) -> Hour {
        /// GMST polynomial coefficients, degrees
        const G0: f64 = 280.46061837;
        const G1: f64 = 360.98564736629;
        const G2: f64 = 0.000387933;
        const G3: f64 = 1.0 / 38710000.0;

        let d = instant.to_jde_utc_days() - JD_J2000;
        let t = d / DAYS_PER_JULIAN_CENTURY;

        let gmst_deg = G0 + G1 * d + G2 * t * t - G3 * t * t * t;
        normalize_hours((gmst_deg + longitude_deg) / DEG_PER_HOUR)
    }
}

/// Wrap an hour value into `[0, 24)`.
pub(crate) fn normalize_hours(hours: Hour) -> Hour {
    hours.rem_euclid(HOURS_PER_DAY)
}
