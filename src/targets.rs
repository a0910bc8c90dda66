//! # Tonight's targets: the filter/sort pipeline
//!
//! This module turns a raw record list into the ranked session list:
//!
//! 1. **Enrich** each record with its transit altitude and transit time,
//!    dropping rows whose astrometric or photometric fields are missing or
//!    unparsable (a malformed row cannot contribute to a ranked list; it is
//!    never an error).
//! 2. **Filter**: transit altitude within `[30°, 90°]`, magnitude at most the
//!    user's limit, major axis fitting the derived field of view.
//! 3. **Sort**: brightest first (magnitude ascending); among equally bright
//!    targets the larger one ranks higher (major axis descending).
//!
//! The pipeline is a pure transformation of its inputs: same inputs, same
//! ordered output. An empty result is a valid answer ("no targets match
//! tonight"), not an error.

use hifitime::Epoch;
use itertools::Itertools;

use crate::catalog::CatalogRecord;
use crate::constants::{
    ArcMin, Degree, MAX_TRANSIT_ALTITUDE_DEG, MIN_TRANSIT_ALTITUDE_DEG, WIKIPEDIA_BASE_URL,
};
use crate::conversion::{dms_to_deg, hms_to_deg};
use crate::optics::OpticalSystem;
use crate::sidereal::SiderealTime;
use crate::skywatch_errors::SkywatchError;
use crate::visibility::{clock_hhmm, transit, ObserverLocation};

/// A ranked observing target, created fresh per computation.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleTarget {
    pub name: String,
    pub object_type: String,
    pub major_axis_arcmin: ArcMin,
    /// Minor axis, when the dataset row carries one
    pub minor_axis_arcmin: Option<ArcMin>,
    pub magnitude: f64,
    pub transit_altitude_deg: Degree,
    /// Clock time of culmination, `HH:MM`, on the clock of the planning instant
    pub transit_time: String,
    pub wikipedia_url: String,
}

/// Compute the ranked list of targets observable tonight.
///
/// Arguments
/// ---------
/// * `location`: observer coordinates
/// * `optics`: sensor and focal-length parameters, sets the size threshold
/// * `max_magnitude`: faintest acceptable magnitude (lower = brighter)
/// * `records`: the catalog rows to rank, already filtered to one catalog
/// * `instant`: the instant the session is planned from
/// * `sidereal`: local sidereal time collaborator
///
/// Return
/// ------
/// * `Result<Vec<VisibleTarget>, SkywatchError>`: the ranked targets, possibly
///   empty; [`SkywatchError::InvalidOptics`] aborts the whole computation since
///   no size threshold can be derived.
pub fn compute_visible_targets(
    location: &ObserverLocation,
    optics: &OpticalSystem,
    max_magnitude: f64,
    records: &[CatalogRecord],
    instant: Epoch,
    sidereal: &dyn SiderealTime,
) -> Result<Vec<VisibleTarget>, SkywatchError> {
    let fov = optics.field_of_view()?;

    let targets = records
        .iter()
        .filter_map(|record| enrich(record, location, instant, sidereal))
        .filter(|target| {
            (MIN_TRANSIT_ALTITUDE_DEG..=MAX_TRANSIT_ALTITUDE_DEG)
                .contains(&target.transit_altitude_deg)
        })
        .filter(|target| target.magnitude <= max_magnitude)
        .filter(|target| target.major_axis_arcmin <= fov.max_object_size_arcmin)
        .sorted_by(|a, b| {
            a.magnitude
                .total_cmp(&b.magnitude)
                .then(b.major_axis_arcmin.total_cmp(&a.major_axis_arcmin))
        })
        .collect();

    Ok(targets)
}

/// Derive a [`VisibleTarget`] from one record, or `None` if any required field
/// is missing or unparsable.
fn enrich(
    record: &CatalogRecord,
    location: &ObserverLocation,
    instant: Epoch,
    sidereal: &dyn SiderealTime,
) -> Option<VisibleTarget> {
    let name = record.display_name()?;
    let ra_deg = hms_to_deg(record.ra.as_deref()?).ok()?;
    let dec_deg = dms_to_deg(record.dec.as_deref()?).ok()?;
    let magnitude = record.magnitude.filter(|m| m.is_finite())?;
    let major_axis_arcmin = record.major_axis_arcmin.filter(|a| a.is_finite())?;

    let culmination = transit(ra_deg, dec_deg, location, instant, sidereal);

    Some(VisibleTarget {
        name: name.to_string(),
        object_type: record.object_type.clone().unwrap_or_default(),
        major_axis_arcmin,
        minor_axis_arcmin: record.minor_axis_arcmin.filter(|a| a.is_finite()),
        magnitude,
        transit_altitude_deg: culmination.altitude_deg,
        transit_time: clock_hhmm(culmination.instant),
        wikipedia_url: format!("{WIKIPEDIA_BASE_URL}{}", urlencoding::encode(name)),
    })
}
