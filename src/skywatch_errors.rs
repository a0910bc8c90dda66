use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkywatchError {
    #[error("Invalid sexagesimal angle: {0}")]
    InvalidAngle(String),

    #[error("Invalid optical parameter: {0}")]
    InvalidOptics(String),

    #[error("Unknown catalog selector: {0}")]
    UnknownCatalog(String),

    #[error("Upstream data error: {0}")]
    UpstreamData(String),

    #[error("HTTP ureq error: {0}")]
    UreqHttpError(#[from] ureq::Error),

    #[error("JSON decoding error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("System clock error: {0}")]
    ClockError(#[from] hifitime::HifitimeError),
}

impl PartialEq for SkywatchError {
    fn eq(&self, other: &Self) -> bool {
        use SkywatchError::*;
        match (self, other) {
            (InvalidAngle(a), InvalidAngle(b)) => a == b,
            (InvalidOptics(a), InvalidOptics(b)) => a == b,
            (UnknownCatalog(a), UnknownCatalog(b)) => a == b,
            (UpstreamData(a), UpstreamData(b)) => a == b,

            // These errors carry non-comparable payloads: equal if same variant
            (UreqHttpError(_), UreqHttpError(_)) => true,
            (JsonError(_), JsonError(_)) => true,
            (ClockError(_), ClockError(_)) => true,

            _ => false,
        }
    }
}
