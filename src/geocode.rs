//! ZIP-code geocoding collaborator (Zippopotam.us).
//!
//! Zippopotam serves latitude/longitude as JSON **strings**; they are parsed
//! to floats here so the core only ever sees numeric coordinates.

use serde::Deserialize;

use crate::constants::ZIPPOPOTAM_US_URL;
use crate::env_state::SkywatchEnv;
use crate::skywatch_errors::SkywatchError;
use crate::visibility::ObserverLocation;

#[derive(Debug, Deserialize)]
struct ZippopotamResponse {
    #[serde(default)]
    places: Vec<ZippopotamPlace>,
}

#[derive(Debug, Deserialize)]
struct ZippopotamPlace {
    latitude: String,
    longitude: String,
}

/// Resolve a US ZIP code to observer coordinates.
///
/// Arguments
/// ---------
/// * `env`: shared environment holding the HTTP client
/// * `zip`: the US ZIP code to resolve
///
/// Return
/// ------
/// * `Result<ObserverLocation, SkywatchError>`: the coordinates of the first
///   place for the ZIP, or [`SkywatchError::UpstreamData`] if the geocoder
///   returned no usable place.
pub fn resolve_us_zip(env: &SkywatchEnv, zip: &str) -> Result<ObserverLocation, SkywatchError> {
    let body = env.get_from_url(format!("{ZIPPOPOTAM_US_URL}/{zip}"))?;
    parse_geocode_response(&body, zip)
}

fn parse_geocode_response(body: &str, zip: &str) -> Result<ObserverLocation, SkywatchError> {
    let response: ZippopotamResponse = serde_json::from_str(body)?;

    let place = response.places.first().ok_or_else(|| {
        SkywatchError::UpstreamData(format!("no place found for ZIP code {zip}"))
    })?;

    let coordinate = |label: &str, value: &str| -> Result<f64, SkywatchError> {
        value.parse::<f64>().map_err(|_| {
            SkywatchError::UpstreamData(format!(
                "geocoder returned a non-numeric {label} for ZIP code {zip}: {value}"
            ))
        })
    };

    Ok(ObserverLocation {
        latitude_deg: coordinate("latitude", &place.latitude)?,
        longitude_deg: coordinate("longitude", &place.longitude)?,
    })
}

#[cfg(test)]
mod geocode_test {
    use super::*;

    #[test]
    fn test_parse_geocode_response() {
        // Captured shape of the Zippopotam payload: coordinates as strings
        let body = r#"{
            "post code": "08540",
            "country": "United States",
            "places": [
                { "place name": "Princeton", "state": "New Jersey",
                  "latitude": "40.3664", "longitude": "-74.6405" }
            ]
        }"#;

        let location = parse_geocode_response(body, "08540").unwrap();
        assert_eq!(location.latitude_deg, 40.3664);
        assert_eq!(location.longitude_deg, -74.6405);
    }

    #[test]
    fn test_no_places_is_upstream_error() {
        let result = parse_geocode_response(r#"{"places": []}"#, "00000");
        assert_eq!(
            result,
            Err(SkywatchError::UpstreamData(
                "no place found for ZIP code 00000".to_string()
            ))
        );

        let result = parse_geocode_response(r#"{}"#, "00000");
        assert!(matches!(result, Err(SkywatchError::UpstreamData(_))));
    }

    #[test]
    fn test_non_numeric_coordinate_is_upstream_error() {
        let body = r#"{"places": [{"latitude": "north", "longitude": "-74.6"}]}"#;
        assert!(matches!(
            parse_geocode_response(body, "08540"),
            Err(SkywatchError::UpstreamData(_))
        ));
    }
}
