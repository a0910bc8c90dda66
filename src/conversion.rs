use crate::constants::{Degree, DEG_PER_HOUR};
use crate::skywatch_errors::SkywatchError;

/// Split a colon-separated sexagesimal string into its three numeric components.
///
/// Arguments
/// ---------
/// * `angle`: the sign-stripped angle string in the format `A:B:C`
/// * `original`: the original input string, reported verbatim on error
///
/// Return
/// ------
/// * `Result<(f64, f64, f64), SkywatchError>`: the three parsed components, or
///   [`SkywatchError::InvalidAngle`] if the string does not have exactly three
///   components or any component is not numeric.
fn split_sexagesimal(angle: &str, original: &str) -> Result<(f64, f64, f64), SkywatchError> {
    let parts: Vec<&str> = angle.split(':').collect();
    if parts.len() != 3 {
        return Err(SkywatchError::InvalidAngle(original.to_string()));
    }

    // Components after the leading sign are unsigned by construction
    let component = |field: &str| -> Result<f64, SkywatchError> {
        let field = field.trim();
        if field.starts_with(['-', '+']) {
            return Err(SkywatchError::InvalidAngle(original.to_string()));
        }
        field
            .parse::<f64>()
            .map_err(|_| SkywatchError::InvalidAngle(original.to_string()))
    };

    Ok((component(parts[0])?, component(parts[1])?, component(parts[2])?))
}

/// Parse a right ascension string to degrees
///
/// Arguments
/// ---------
/// * `hms`: a string representing the right ascension in the format `H:M:S`
///
/// Return
/// ------
/// * `Result<Degree, SkywatchError>`: the right ascension in degrees, or
///   [`SkywatchError::InvalidAngle`] if the input format is invalid.
pub fn hms_to_deg(hms: &str) -> Result<Degree, SkywatchError> {
    let (h, m, s) = split_sexagesimal(hms.trim(), hms)?;
    Ok((h + m / 60.0 + s / 3600.0) * DEG_PER_HOUR)
}

/// Parse a declination string to degrees
///
/// The sign is read from the leading character of the trimmed input, not from
/// the numeric degree component: `-0:30:00` must stay negative even though its
/// degree component parses to zero.
///
/// Arguments
/// ---------
/// * `dms`: a string representing the declination in the format `±D:M:S`
///
/// Return
/// ------
/// * `Result<Degree, SkywatchError>`: the declination in degrees, or
///   [`SkywatchError::InvalidAngle`] if the input format is invalid.
pub fn dms_to_deg(dms: &str) -> Result<Degree, SkywatchError> {
    let trimmed = dms.trim();
    let (sign, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
        (-1.0, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (1.0, rest)
    } else {
        (1.0, trimmed)
    };

    let (d, m, s) = split_sexagesimal(unsigned, dms)?;
    Ok(sign * (d + m / 60.0 + s / 3600.0))
}
