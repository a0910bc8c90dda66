//! # Skywatch: session-planning façade
//!
//! This module defines the [`Skywatch`] struct, the central façade that wires
//! together:
//!
//! 1. **Environment state** ([`SkywatchEnv`](crate::env_state::SkywatchEnv)) — the shared HTTP client.
//! 2. **Geocoding collaborator** — US ZIP code → observer coordinates
//!    ([`resolve_us_zip`](crate::geocode::resolve_us_zip)).
//! 3. **Catalog collaborator** — full NGC/IC/Messier record set
//!    ([`fetch_catalog`](crate::catalog::search::fetch_catalog)) with local catalog selection
//!    ([`Catalog::filter`](crate::catalog::Catalog::filter)).
//! 4. **Core pipeline** — [`compute_visible_targets`](crate::targets::compute_visible_targets)
//!    with the default [`Gmst`](crate::sidereal::Gmst) sidereal clock.
//!
//! The core never performs I/O; the façade owns the only network calls and
//! hands the core already-resolved data.
//!
//! ## Typical usage
//!
//! ```rust,no_run
//! use skywatch::catalog::Catalog;
//! use skywatch::optics::OpticalSystem;
//! use skywatch::skywatch::Skywatch;
//!
//! let planner = Skywatch::new();
//! let optics = OpticalSystem::new(23.5, 15.6, 135.0, 0.1);
//!
//! let targets = planner.plan_now("08540", Catalog::Messier, &optics, 9.0)?;
//! for target in &targets {
//!     println!(
//!         "{} mag {} transits at {} ({:.1}°)",
//!         target.name, target.magnitude, target.transit_time, target.transit_altitude_deg
//!     );
//! }
//! # Ok::<(), skywatch::skywatch_errors::SkywatchError>(())
//! ```

use hifitime::Epoch;

use crate::catalog::{search::fetch_catalog, Catalog};
use crate::env_state::SkywatchEnv;
use crate::geocode::resolve_us_zip;
use crate::optics::OpticalSystem;
use crate::sidereal::Gmst;
use crate::skywatch_errors::SkywatchError;
use crate::targets::{compute_visible_targets, VisibleTarget};

/// Session-planning façade owning the collaborator environment.
#[derive(Debug, Clone, Default)]
pub struct Skywatch {
    env: SkywatchEnv,
}

impl Skywatch {
    /// Construct a new [`Skywatch`] context with a fresh environment.
    pub fn new() -> Self {
        Skywatch {
            env: SkywatchEnv::new(),
        }
    }

    /// Shared environment, for callers driving the collaborators directly.
    pub fn env(&self) -> &SkywatchEnv {
        &self.env
    }

    /// Plan an observing session: geocode the ZIP, fetch and select the
    /// catalog, and rank tonight's targets from the given instant.
    ///
    /// Arguments
    /// ---------
    /// * `zip`: US ZIP code of the observing site
    /// * `catalog`: catalog selector applied to the fetched record set
    /// * `optics`: sensor and focal-length parameters
    /// * `max_magnitude`: faintest acceptable magnitude
    /// * `instant`: the instant the session is planned from (UTC)
    ///
    /// Return
    /// ------
    /// * `Result<Vec<VisibleTarget>, SkywatchError>`: the ranked targets,
    ///   possibly empty, or the first collaborator/input error encountered.
    pub fn plan(
        &self,
        zip: &str,
        catalog: Catalog,
        optics: &OpticalSystem,
        max_magnitude: f64,
        instant: Epoch,
    ) -> Result<Vec<VisibleTarget>, SkywatchError> {
        let location = resolve_us_zip(&self.env, zip)?;
        let records = catalog.filter(fetch_catalog(&self.env)?);

        compute_visible_targets(&location, optics, max_magnitude, &records, instant, &Gmst)
    }

    /// [`plan`](Skywatch::plan) from the current system time.
    pub fn plan_now(
        &self,
        zip: &str,
        catalog: Catalog,
        optics: &OpticalSystem,
        max_magnitude: f64,
    ) -> Result<Vec<VisibleTarget>, SkywatchError> {
        self.plan(zip, catalog, optics, max_magnitude, Epoch::now()?)
    }
}
