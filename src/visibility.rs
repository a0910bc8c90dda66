//! # Transit altitude and transit time
//!
//! The visibility model is deliberately flat: an object's best altitude for
//! the night is its culmination on the meridian, `90° − |latitude −
//! declination|`, with no refraction or proper-motion reduction. The transit
//! instant follows from the hour angle between the object's right ascension
//! and the observer's local sidereal time.
//!
//! ## See also
//! ------------
//! * [`crate::sidereal::SiderealTime`] – Injectable sidereal clock.
//! * [`crate::targets::compute_visible_targets`] – Pipeline built on these values.

use hifitime::{Epoch, Unit};

use crate::constants::{Degree, Hour, DEG_PER_HOUR, HOURS_PER_DAY};
use crate::sidereal::SiderealTime;

/// Observer coordinates, immutable per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverLocation {
    pub latitude_deg: Degree,
    pub longitude_deg: Degree,
}

/// Culmination of a single object as seen from one location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transit {
    /// Maximum altitude above the horizon during the daily arc
    pub altitude_deg: Degree,
    /// Instant of culmination, on the same clock as the supplied instant
    pub instant: Epoch,
}

/// Compute the transit of an object from its equatorial coordinates.
///
/// Arguments
/// ---------
/// * `ra_deg`: right ascension in degrees
/// * `dec_deg`: declination in degrees
/// * `location`: observer coordinates
/// * `instant`: the instant the session is planned from
/// * `sidereal`: local sidereal time collaborator
///
/// Return
/// ------
/// * The [`Transit`] with the altitude of culmination and the next transit
///   instant at or after `instant` (an object transiting right now comes back
///   with a zero hour-angle delta).
pub fn transit(
    ra_deg: Degree,
    dec_deg: Degree,
    location: &ObserverLocation,
    instant: Epoch,
    sidereal: &dyn SiderealTime,
) -> Transit {
    let altitude_deg = 90.0 - (location.latitude_deg - dec_deg).abs();

    let lst = sidereal.local_sidereal_hours(instant, location.longitude_deg);
    let delta_hours = hours_to_transit(ra_deg, lst);

    Transit {
        altitude_deg,
        instant: instant + delta_hours * Unit::Hour,
    }
}

/// Hours until an object at `ra_deg` crosses the meridian, in `[0, 24)`.
pub(crate) fn hours_to_transit(ra_deg: Degree, local_sidereal_hours: Hour) -> Hour {
    (ra_deg / DEG_PER_HOUR - local_sidereal_hours).rem_euclid(HOURS_PER_DAY)
}

/// Format an instant as a `HH:MM` clock string (UTC components).
pub fn clock_hhmm(instant: Epoch) -> String {
    let (_, _, _, hour, minute, _, _) = instant.to_gregorian_utc();
    format!("{hour:02}:{minute:02}")
}
