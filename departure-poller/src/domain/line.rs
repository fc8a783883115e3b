//! Line identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A transit line identifier.
///
/// The provider sends numeric line ids, while configuration files may use
/// either numbers or strings (`17`, `"17"`, `"17x"`). Matching rules:
///
/// - two numbers match when they are equal
/// - two strings match case-insensitively
/// - a number and a string match when the trimmed string parses as that number
///
/// # Examples
///
/// ```
/// use departure_poller::domain::LineId;
///
/// assert!(LineId::from("17x").matches(&LineId::from("17X")));
/// assert!(LineId::from(17).matches(&LineId::from("17")));
/// assert!(!LineId::from(17).matches(&LineId::from(71)));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineId {
    Numeric(i64),
    Text(String),
}

impl LineId {
    /// Whether two line ids refer to the same line.
    pub fn matches(&self, other: &LineId) -> bool {
        match (self, other) {
            (LineId::Numeric(a), LineId::Numeric(b)) => a == b,
            (LineId::Text(a), LineId::Text(b)) => a.to_uppercase() == b.to_uppercase(),
            (LineId::Numeric(n), LineId::Text(s)) | (LineId::Text(s), LineId::Numeric(n)) => {
                s.trim().parse::<i64>().is_ok_and(|parsed| parsed == *n)
            }
        }
    }
}

impl From<i64> for LineId {
    fn from(n: i64) -> Self {
        LineId::Numeric(n)
    }
}

impl From<i32> for LineId {
    fn from(n: i32) -> Self {
        LineId::Numeric(i64::from(n))
    }
}

impl From<&str> for LineId {
    fn from(s: &str) -> Self {
        LineId::Text(s.to_string())
    }
}

impl From<String> for LineId {
    fn from(s: String) -> Self {
        LineId::Text(s)
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({self})")
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineId::Numeric(n) => write!(f, "{n}"),
            LineId::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_exact_match() {
        assert!(LineId::from(17).matches(&LineId::from(17)));
        assert!(!LineId::from(17).matches(&LineId::from(18)));
    }

    #[test]
    fn text_case_insensitive() {
        assert!(LineId::from("17x").matches(&LineId::from("17X")));
        assert!(LineId::from("Blue").matches(&LineId::from("BLUE")));
        assert!(!LineId::from("17x").matches(&LineId::from("17")));
    }

    #[test]
    fn mixed_numeric_and_text() {
        assert!(LineId::from(17).matches(&LineId::from("17")));
        assert!(LineId::from(" 17 ").matches(&LineId::from(17)));
        assert!(!LineId::from(17).matches(&LineId::from("17x")));
        assert!(!LineId::from(17).matches(&LineId::from("")));
    }

    #[test]
    fn deserialize_number_or_string() {
        let n: LineId = serde_json::from_str("17").unwrap();
        assert_eq!(n, LineId::Numeric(17));

        let s: LineId = serde_json::from_str("\"17x\"").unwrap();
        assert_eq!(s, LineId::Text("17x".to_string()));
    }

    #[test]
    fn serialize_keeps_shape() {
        assert_eq!(serde_json::to_string(&LineId::from(4)).unwrap(), "4");
        assert_eq!(serde_json::to_string(&LineId::from("4b")).unwrap(), "\"4b\"");
    }

    #[test]
    fn display() {
        assert_eq!(LineId::from(17).to_string(), "17");
        assert_eq!(LineId::from("17x").to_string(), "17x");
        assert_eq!(format!("{:?}", LineId::from(3)), "LineId(3)");
    }
}
