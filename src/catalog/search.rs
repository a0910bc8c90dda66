//! Remote dataset search collaborator (OpenDataSoft records API).
//!
//! The search is deliberately **unfiltered**: one request pulls the whole
//! combined NGC/IC/Messier dataset and catalog selection happens locally in
//! [`Catalog::filter`](crate::catalog::Catalog::filter), the single filtering
//! authority.

use serde::Deserialize;

use crate::catalog::CatalogRecord;
use crate::constants::{CATALOG_DATASET, CATALOG_ROW_LIMIT, OPENDATASOFT_SEARCH_URL};
use crate::env_state::SkywatchEnv;
use crate::skywatch_errors::SkywatchError;

/// Response envelope of the records API.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    records: Vec<SearchRecord>,
}

#[derive(Debug, Deserialize)]
struct SearchRecord {
    fields: CatalogRecord,
}

/// URL of the full-dataset search request.
fn search_url() -> String {
    format!(
        "{OPENDATASOFT_SEARCH_URL}?dataset={}&rows={CATALOG_ROW_LIMIT}&format=json",
        urlencoding::encode(CATALOG_DATASET)
    )
}

/// Fetch the full NGC/IC/Messier record set.
///
/// Arguments
/// ---------
/// * `env`: shared environment holding the HTTP client
///
/// Return
/// ------
/// * `Result<Vec<CatalogRecord>, SkywatchError>`: every dataset row, or
///   [`SkywatchError::UpstreamData`] if the collaborator returned an empty
///   record set (a planner with no catalog has nothing to rank).
pub fn fetch_catalog(env: &SkywatchEnv) -> Result<Vec<CatalogRecord>, SkywatchError> {
    let body = env.get_from_url(search_url())?;
    let records = parse_search_response(&body)?;
    if records.is_empty() {
        return Err(SkywatchError::UpstreamData(
            "catalog search returned no records".to_string(),
        ));
    }
    Ok(records)
}

fn parse_search_response(body: &str) -> Result<Vec<CatalogRecord>, SkywatchError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response
        .records
        .into_iter()
        .map(|record| record.fields)
        .collect())
}
