//! Journey direction codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Swap table for lines whose provider direction codes are reversed.
/// Index is the incoming code, value the outgoing one.
const SWAP_TABLE: [u8; 3] = [0, 2, 1];

/// Error returned when a direction code falls outside the swap table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("direction code {0} cannot be swapped (expected 0, 1 or 2)")]
pub struct RemapOutOfRange(pub u8);

/// A journey direction code as reported by the provider.
///
/// The provider uses a small fixed set of codes (0, 1 and 2 in practice).
/// Codes are kept as reported; only [`Direction::swapped`] checks the range.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Direction(u8);

impl Direction {
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Returns the raw direction code.
    pub fn code(&self) -> u8 {
        self.0
    }

    /// Swap directions 1 and 2, leaving 0 unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use departure_poller::domain::Direction;
    ///
    /// assert_eq!(Direction::new(1).swapped().unwrap(), Direction::new(2));
    /// assert_eq!(Direction::new(0).swapped().unwrap(), Direction::new(0));
    /// assert!(Direction::new(3).swapped().is_err());
    /// ```
    pub fn swapped(self) -> Result<Self, RemapOutOfRange> {
        SWAP_TABLE
            .get(self.0 as usize)
            .map(|&code| Self(code))
            .ok_or(RemapOutOfRange(self.0))
    }
}

impl From<u8> for Direction {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl fmt::Debug for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Direction({})", self.0)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
