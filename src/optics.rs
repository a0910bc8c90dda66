//! # Optical system and field-of-view derivation
//!
//! This module turns a sensor/focal-length combination into the angular field
//! of view it captures, and from that the largest angular object size that
//! still fits in frame.
//!
//! The usable size threshold is the **diagonal** field of view in arcminutes,
//! inflated by the user's tolerance margin so slightly oversized targets are
//! kept (mosaic or crop tolerance).
//!
//! ## See also
//! ------------
//! * [`OpticalSystem::field_of_view`] – Validation and derivation entry point.
//! * [`crate::targets::compute_visible_targets`] – Consumer of the size threshold.

use crate::constants::{ArcMin, Degree, Millimeter, ARCMIN_PER_DEG};
use crate::skywatch_errors::SkywatchError;

/// User-supplied optical parameters, immutable per request.
#[derive(Debug, Clone, PartialEq)]
pub struct OpticalSystem {
    pub sensor_width_mm: Millimeter,
    pub sensor_height_mm: Millimeter,
    pub focal_length_mm: Millimeter,
    /// Oversize tolerance as a fraction, e.g. `0.10` for ±10%
    pub fov_tolerance: f64,
}

/// Angular field captured by an [`OpticalSystem`], derived once per request.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOfView {
    pub horizontal_deg: Degree,
    pub vertical_deg: Degree,
    pub diagonal_deg: Degree,
    /// Largest major-axis size considered to fit in frame
    pub max_object_size_arcmin: ArcMin,
}

impl OpticalSystem {
    /// Create a new optical system description.
    pub fn new(
        sensor_width_mm: Millimeter,
        sensor_height_mm: Millimeter,
        focal_length_mm: Millimeter,
        fov_tolerance: f64,
    ) -> Self {
        OpticalSystem {
            sensor_width_mm,
            sensor_height_mm,
            focal_length_mm,
            fov_tolerance,
        }
    }

    /// Derive the angular field of view of this optical system.
    ///
    /// Each axis is `2 × atan(sensor / (2 × focal))`; the diagonal combines the
    /// two axes in quadrature and the size threshold converts it to arcminutes
    /// with the tolerance margin applied.
    ///
    /// Return
    /// ------
    /// * `Result<FieldOfView, SkywatchError>`: the derived field of view, or
    ///   [`SkywatchError::InvalidOptics`] if any dimension is non-positive or
    ///   non-finite, or the tolerance is negative or non-finite.
    pub fn field_of_view(&self) -> Result<FieldOfView, SkywatchError> {
        self.validate()?;

        let horizontal_deg = axis_fov_deg(self.sensor_width_mm, self.focal_length_mm);
        let vertical_deg = axis_fov_deg(self.sensor_height_mm, self.focal_length_mm);
        let diagonal_deg = (horizontal_deg.powi(2) + vertical_deg.powi(2)).sqrt();

        Ok(FieldOfView {
            horizontal_deg,
            vertical_deg,
            diagonal_deg,
            max_object_size_arcmin: diagonal_deg * ARCMIN_PER_DEG * (1.0 + self.fov_tolerance),
        })
    }

    fn validate(&self) -> Result<(), SkywatchError> {
        let dimensions = [
            ("sensor width", self.sensor_width_mm),
            ("sensor height", self.sensor_height_mm),
            ("focal length", self.focal_length_mm),
        ];

        for (label, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(SkywatchError::InvalidOptics(format!(
                    "{label} must be positive and finite, got {value}"
                )));
            }
        }

        if !self.fov_tolerance.is_finite() || self.fov_tolerance < 0.0 {
            return Err(SkywatchError::InvalidOptics(format!(
                "FOV tolerance must be non-negative and finite, got {}",
                self.fov_tolerance
            )));
        }

        Ok(())
    }
}

/// Angular extent of a single sensor axis in degrees.
fn axis_fov_deg(sensor_mm: Millimeter, focal_mm: Millimeter) -> Degree {
    (2.0 * (sensor_mm / (2.0 * focal_mm)).atan()).to_degrees()
}
