use hifitime::Epoch;

use skywatch::catalog::{Catalog, CatalogRecord};
use skywatch::constants::{Degree, Hour};
use skywatch::optics::OpticalSystem;
use skywatch::sidereal::SiderealTime;
use skywatch::targets::compute_visible_targets;
use skywatch::visibility::ObserverLocation;

/// Sidereal clock pinned to a fixed value, so transit times are deterministic.
struct FixedLst(Hour);

impl SiderealTime for FixedLst {
    fn local_sidereal_hours(&self, _instant: Epoch, _longitude_deg: Degree) -> Hour {
        self.0
    }
}

fn orion_nebula() -> CatalogRecord {
    CatalogRecord {
        name: Some("Orion Nebula".to_string()),
        messier: Some("M 42".to_string()),
        ngc: Some("NGC 1976".to_string()),
        object_type: Some("Neb".to_string()),
        major_axis_arcmin: Some(8.0),
        minor_axis_arcmin: Some(6.0),
        magnitude: Some(4.0),
        ra: Some("05:35:17".to_string()),
        dec: Some("-05:23:28".to_string()),
        catalog_id: Some("Messier".to_string()),
        ..Default::default()
    }
}

fn new_jersey() -> ObserverLocation {
    ObserverLocation {
        latitude_deg: 40.0,
        longitude_deg: -74.0,
    }
}

fn aps_c_at_135mm() -> OpticalSystem {
    OpticalSystem::new(23.5, 15.6, 135.0, 0.1)
}

#[test]
fn test_end_to_end_orion_from_new_jersey() {
    let instant = Epoch::from_gregorian_utc(2026, 1, 1, 0, 0, 0, 0);

    let targets = compute_visible_targets(
        &new_jersey(),
        &aps_c_at_135mm(),
        6.0,
        &[orion_nebula()],
        instant,
        &FixedLst(0.0),
    )
    .unwrap();

    assert_eq!(targets.len(), 1);
    let orion = &targets[0];

    assert_eq!(orion.name, "Orion Nebula");
    assert!((orion.transit_altitude_deg - 44.6).abs() < 0.05);
    // RA 05:35:17 with LST 0h: transit 5h35m after midnight
    assert_eq!(orion.transit_time, "05:35");
    assert_eq!(
        orion.wikipedia_url,
        "https://en.wikipedia.org/wiki/Orion%20Nebula"
    );
}

#[test]
fn test_end_to_end_magnitude_cutoff_yields_empty_list() {
    let instant = Epoch::from_gregorian_utc(2026, 1, 1, 0, 0, 0, 0);

    let targets = compute_visible_targets(
        &new_jersey(),
        &aps_c_at_135mm(),
        3.0,
        &[orion_nebula()],
        instant,
        &FixedLst(0.0),
    )
    .unwrap();

    assert!(targets.is_empty());
}

#[test]
fn test_catalog_selection_then_ranking() {
    let mut iris = CatalogRecord {
        name: Some("Iris Nebula".to_string()),
        ngc: Some("NGC 7023".to_string()),
        object_type: Some("Neb".to_string()),
        major_axis_arcmin: Some(18.0),
        minor_axis_arcmin: Some(18.0),
        magnitude: Some(6.8),
        ra: Some("21:01:36".to_string()),
        dec: Some("+68:10:10".to_string()),
        catalog_id: Some("NGC".to_string()),
        ..Default::default()
    };

    // The Caldwell selection keeps C4 (NGC 7023) and drops M 42
    let records = Catalog::Caldwell.filter(vec![orion_nebula(), iris.clone()]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name.as_deref(), Some("Iris Nebula"));

    let instant = Epoch::from_gregorian_utc(2026, 9, 1, 2, 0, 0, 0);
    let targets = compute_visible_targets(
        &new_jersey(),
        &aps_c_at_135mm(),
        9.0,
        &records,
        instant,
        &FixedLst(20.0),
    )
    .unwrap();

    assert_eq!(targets.len(), 1);
    let target = &targets[0];
    // lat 40, dec +68.17: culminates at 90 - 28.17
    assert!((target.transit_altitude_deg - 61.83).abs() < 0.01);
    // RA 21h01m36s with LST 20h: transit about 1h02m later
    assert_eq!(target.transit_time, "03:01");

    // An unparsable declination drops the record without failing the request
    iris.dec = Some("+68:10".to_string());
    let targets = compute_visible_targets(
        &new_jersey(),
        &aps_c_at_135mm(),
        9.0,
        &[iris],
        instant,
        &FixedLst(20.0),
    )
    .unwrap();
    assert!(targets.is_empty());
}
