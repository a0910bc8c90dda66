use serde::Deserialize;

use crate::constants::ArcMin;

/// One row of the NGC/IC/Messier dataset, as served by the records API.
///
/// Field spellings vary between dataset revisions (`RA` vs `ra`); aliases keep
/// both decodable. Every field is optional: the dataset leaves identifiers,
/// sizes, and magnitudes blank for many rows, and the pipeline drops rows that
/// lack what it needs rather than failing the whole request.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CatalogRecord {
    /// Proper name (e.g. "Orion Nebula"), when the object has one
    #[serde(rename = "Name", alias = "name", default)]
    pub name: Option<String>,

    /// Messier designation (e.g. "M 42")
    #[serde(rename = "M", alias = "m", default)]
    pub messier: Option<String>,

    /// NGC designation (e.g. "NGC 1976")
    #[serde(rename = "NGC", alias = "ngc", default)]
    pub ngc: Option<String>,

    /// IC designation
    #[serde(rename = "IC", alias = "ic", default)]
    pub ic: Option<String>,

    /// Object type code (e.g. "Neb", "OCl", "G")
    #[serde(rename = "Type", alias = "type", default)]
    pub object_type: Option<String>,

    /// Major axis of the object in arcminutes
    #[serde(rename = "MajAx", alias = "majax", default)]
    pub major_axis_arcmin: Option<ArcMin>,

    /// Minor axis of the object in arcminutes
    #[serde(rename = "MinAx", alias = "minax", default)]
    pub minor_axis_arcmin: Option<ArcMin>,

    /// Visual magnitude (lower = brighter)
    #[serde(rename = "V-Mag", alias = "v_mag", default)]
    pub magnitude: Option<f64>,

    /// Right ascension, sexagesimal hours `H:M:S`
    #[serde(rename = "RA", alias = "ra", default)]
    pub ra: Option<String>,

    /// Declination, signed sexagesimal degrees `±D:M:S`
    #[serde(rename = "Dec", alias = "dec", default)]
    pub dec: Option<String>,

    /// Source catalog of the row: "Messier", "NGC" or "IC"
    #[serde(rename = "catalog", default)]
    pub catalog_id: Option<String>,
}

impl CatalogRecord {
    /// Display name of the record: the first present identifier in priority
    /// order proper name → Messier → NGC → IC.
    ///
    /// Return
    /// ------
    /// * `Option<&str>`: the display name, or `None` for an unnamed record
    ///   (excluded from results).
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or(self.messier.as_deref())
            .or(self.ngc.as_deref())
            .or(self.ic.as_deref())
    }
}

#[cfg(test)]
mod record_test {
    use super::*;

    #[test]
    fn test_display_name_priority() {
        let record = CatalogRecord {
            name: Some("Orion Nebula".into()),
            messier: Some("M 42".into()),
            ngc: Some("NGC 1976".into()),
            ..Default::default()
        };
        assert_eq!(record.display_name(), Some("Orion Nebula"));

        let record = CatalogRecord {
            messier: Some("M 42".into()),
            ngc: Some("NGC 1976".into()),
            ..Default::default()
        };
        assert_eq!(record.display_name(), Some("M 42"));

        let record = CatalogRecord {
            ngc: Some("NGC 1976".into()),
            ic: Some("IC 434".into()),
            ..Default::default()
        };
        assert_eq!(record.display_name(), Some("NGC 1976"));

        let record = CatalogRecord {
            ic: Some("IC 434".into()),
            ..Default::default()
        };
        assert_eq!(record.display_name(), Some("IC 434"));

        assert_eq!(CatalogRecord::default().display_name(), None);
    }

    #[test]
    fn test_deserialize_dataset_row() {
        let row = r#"{
            "Name": "Orion Nebula",
            "M": "M 42",
            "NGC": "NGC 1976",
            "Type": "Neb",
            "MajAx": 65.0,
            "MinAx": 60.0,
            "V-Mag": 4.0,
            "RA": "05:35:17",
            "Dec": "-05:23:28",
            "catalog": "Messier"
        }"#;

        let record: CatalogRecord = serde_json::from_str(row).unwrap();
        assert_eq!(record.display_name(), Some("Orion Nebula"));
        assert_eq!(record.magnitude, Some(4.0));
        assert_eq!(record.ra.as_deref(), Some("05:35:17"));
        assert_eq!(record.catalog_id.as_deref(), Some("Messier"));
        assert_eq!(record.ic, None);
    }

    #[test]
    fn test_deserialize_lowercase_aliases() {
        let row = r#"{
            "ngc": "NGC 7023",
            "type": "Neb",
            "majax": 18.0,
            "v_mag": 6.8,
            "ra": "21:01:36",
            "dec": "+68:10:10",
            "catalog": "NGC"
        }"#;

        let record: CatalogRecord = serde_json::from_str(row).unwrap();
        assert_eq!(record.display_name(), Some("NGC 7023"));
        assert_eq!(record.dec.as_deref(), Some("+68:10:10"));
    }
}
