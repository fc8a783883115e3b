//! Conversion from SL DTOs to domain types.

use crate::domain::{Departure, Direction};

use super::types::{RawDeparture, RawRecord};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// A field the pipeline depends on is absent
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The record could not be decoded at all
    #[error("malformed departure record: {0}")]
    Malformed(String),
}

/// Convert one element of the provider's `departures` array.
pub fn normalize_record(record: &RawRecord) -> Result<Departure, NormalizeError> {
    match record {
        RawRecord::Departure(raw) => normalize(raw),
        RawRecord::Malformed(e) => Err(NormalizeError::Malformed(e.clone())),
    }
}

/// Convert a raw provider departure into a [`Departure`].
///
/// Line id, direction code and expected time are required; other fields
/// default to empty strings. No further validation is done.
pub fn normalize(raw: &RawDeparture) -> Result<Departure, NormalizeError> {
    let line = raw.line.as_ref();

    let line_id = line
        .and_then(|l| l.id.clone())
        .ok_or(NormalizeError::MissingField("line.id"))?;

    let direction = raw
        .direction_code
        .map(Direction::new)
        .ok_or(NormalizeError::MissingField("direction_code"))?;

    let expected = raw
        .expected
        .clone()
        .ok_or(NormalizeError::MissingField("expected"))?;

    Ok(Departure {
        transport_mode: line
            .and_then(|l| l.transport_mode.clone())
            .unwrap_or_default(),
        designation: line
            .and_then(|l| l.designation.clone())
            .unwrap_or_else(|| line_id.to_string()),
        line: line_id,
        destination: raw.destination.clone().unwrap_or_default(),
        expected,
        direction,
        display: raw.display.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineId;
    use crate::sl::types::RawLine;

    fn raw(line: Option<i64>, direction: Option<u8>, expected: Option<&str>) -> RawDeparture {
        RawDeparture {
            destination: Some("Skarpnäck".to_string()),
            direction_code: direction,
            display: Some("Nu".to_string()),
            expected: expected.map(str::to_string),
            line: Some(RawLine {
                id: line.map(LineId::from),
                designation: line.map(|n| n.to_string()),
                transport_mode: Some("METRO".to_string()),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn maps_fields() {
        let dep = normalize(&raw(Some(19), Some(2), Some("2024-03-15T10:00:00"))).unwrap();
        assert_eq!(dep.transport_mode, "METRO");
        assert_eq!(dep.line, LineId::from(19));
        assert_eq!(dep.designation, "19");
        assert_eq!(dep.destination, "Skarpnäck");
        assert_eq!(dep.expected, "2024-03-15T10:00:00");
        assert_eq!(dep.direction, Direction::new(2));
        assert_eq!(dep.display, "Nu");
    }

    #[test]
    fn missing_line_id() {
        let result = normalize(&raw(None, Some(1), Some("2024-03-15T10:00:00")));
        assert_eq!(result, Err(NormalizeError::MissingField("line.id")));

        let no_line = RawDeparture {
            line: None,
            ..raw(Some(1), Some(1), Some("2024-03-15T10:00:00"))
        };
        assert_eq!(normalize(&no_line), Err(NormalizeError::MissingField("line.id")));
    }

    #[test]
    fn missing_direction() {
        let result = normalize(&raw(Some(19), None, Some("2024-03-15T10:00:00")));
        assert_eq!(result, Err(NormalizeError::MissingField("direction_code")));
    }

    #[test]
    fn missing_expected() {
        let result = normalize(&raw(Some(19), Some(1), None));
        assert_eq!(result, Err(NormalizeError::MissingField("expected")));
    }

    #[test]
    fn optional_fields_default() {
        let sparse = RawDeparture {
            direction_code: Some(0),
            expected: Some("2024-03-15T10:00:00".to_string()),
            line: Some(RawLine {
                id: Some(LineId::from("7")),
                ..Default::default()
            }),
            ..Default::default()
        };
        let dep = normalize(&sparse).unwrap();
        assert_eq!(dep.transport_mode, "");
        assert_eq!(dep.destination, "");
        assert_eq!(dep.display, "");
        assert_eq!(dep.designation, "7");
    }

    #[test]
    fn malformed_record() {
        let record = RawRecord::Malformed("invalid value: integer `-1`".to_string());
        assert_eq!(
            normalize_record(&record),
            Err(NormalizeError::Malformed("invalid value: integer `-1`".to_string()))
        );

        let good = RawRecord::from(raw(Some(4), Some(1), Some("2024-03-15T10:00:00")));
        assert_eq!(normalize_record(&good).unwrap().line, LineId::from(4));
    }
}
