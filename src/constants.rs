//! # Constants and type definitions for skywatch
//!
//! This module centralizes the **unit type aliases**, **conversion factors**, and
//! **collaborator endpoints** used throughout the `skywatch` library.
//!
//! ## Overview
//!
//! - Angle and length type aliases used across the crate
//! - Unit conversions (hours ↔ degrees, degrees ↔ arcminutes)
//! - Visibility thresholds for the target-ranking pipeline
//! - Endpoints and dataset identifiers for the geocoding and catalog collaborators
//!
//! These definitions are used by all main modules, including coordinate conversion,
//! visibility computation, and the remote collaborators.

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;

/// Angle in arcminutes
pub type ArcMin = f64;

/// Time of day or sidereal time in hours
pub type Hour = f64;

/// Length in millimeters
pub type Millimeter = f64;

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Right ascension hours → degrees
pub const DEG_PER_HOUR: f64 = 15.0;

/// Degrees → arcminutes
pub const ARCMIN_PER_DEG: f64 = 60.0;

/// Hours in a clock day, used to normalize hour angles
pub const HOURS_PER_DAY: f64 = 24.0;

/// Julian date of the J2000.0 epoch (2000-01-01 12:00:00 TT)
pub const JD_J2000: f64 = 2451545.0;

/// Days per Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

// -------------------------------------------------------------------------------------------------
// Visibility thresholds
// -------------------------------------------------------------------------------------------------

/// Minimum transit altitude for a target to be worth imaging
pub const MIN_TRANSIT_ALTITUDE_DEG: Degree = 30.0;

/// Upper bound of a physically meaningful transit altitude; anything above
/// indicates anomalous catalog or location data
pub const MAX_TRANSIT_ALTITUDE_DEG: Degree = 90.0;

// -------------------------------------------------------------------------------------------------
// Collaborator endpoints
// -------------------------------------------------------------------------------------------------

/// Zippopotam.us US ZIP-code geocoding endpoint (append `/{zip}`)
pub const ZIPPOPOTAM_US_URL: &str = "https://api.zippopotam.us/us";

/// OpenDataSoft records search API
pub const OPENDATASOFT_SEARCH_URL: &str = "https://public.opendatasoft.com/api/records/1.0/search";

/// OpenDataSoft dataset identifier for the combined NGC/IC/Messier catalog
pub const CATALOG_DATASET: &str = "ngc-ic-messier-catalog@datastro";

/// Maximum rows requested per catalog search, large enough for the full dataset
pub const CATALOG_ROW_LIMIT: u32 = 10000;

/// Base URL for the per-target Wikipedia link (append the URL-encoded name)
pub const WIKIPEDIA_BASE_URL: &str = "https://en.wikipedia.org/wiki/";
