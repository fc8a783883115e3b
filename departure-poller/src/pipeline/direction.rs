//! Per-line direction swapping.

use crate::config::StationConfig;
use crate::domain::{Departure, RemapOutOfRange};

/// Apply the station's `swapDir` rules to a departure.
///
/// Every matching rule is applied in list order, so two matching swap rules
/// cancel each other out. Only rules with `swapDir` set change anything.
pub fn fix_direction(
    station: &StationConfig,
    mut departure: Departure,
) -> Result<Departure, RemapOutOfRange> {
    for rule in station.rules() {
        if rule.swap_dir && rule.line.matches(&departure.line) {
            departure.direction = departure.direction.swapped()?;
        }
    }
    Ok(departure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineRule;
    use crate::domain::{Direction, LineId};

    fn departure(line: impl Into<LineId>, direction: u8) -> Departure {
        Departure {
            transport_mode: "BUS".to_string(),
            line: line.into(),
            designation: String::new(),
            destination: "Centrum".to_string(),
            expected: "2024-03-15T10:00:00".to_string(),
            direction: Direction::new(direction),
            display: "5 min".to_string(),
        }
    }

    #[test]
    fn swaps_matching_line() {
        let station = StationConfig::new("2322").with_lines(vec![LineRule::new("17").swapped()]);
        let fixed = fix_direction(&station, departure("17", 1)).unwrap();
        assert_eq!(fixed.direction, Direction::new(2));

        let fixed = fix_direction(&station, departure(17, 2)).unwrap();
        assert_eq!(fixed.direction, Direction::new(1));

        let fixed = fix_direction(&station, departure("17", 0)).unwrap();
        assert_eq!(fixed.direction, Direction::new(0));
    }

    #[test]
    fn leaves_other_lines_alone() {
        let station = StationConfig::new("2322").with_lines(vec![LineRule::new("17").swapped()]);
        let fixed = fix_direction(&station, departure("18", 1)).unwrap();
        assert_eq!(fixed.direction, Direction::new(1));
    }

    #[test]
    fn rule_without_swap_is_noop() {
        let station =
            StationConfig::new("2322").with_lines(vec![LineRule::new("17").with_direction(2)]);
        let fixed = fix_direction(&station, departure("17", 1)).unwrap();
        assert_eq!(fixed.direction, Direction::new(1));
    }

    #[test]
    fn no_rules_is_noop() {
        let station = StationConfig::new("2322");
        let dep = departure("17", 1);
        assert_eq!(fix_direction(&station, dep.clone()).unwrap(), dep);
    }

    #[test]
    fn every_matching_rule_applies() {
        // Two swap rules for the same line: the second undoes the first.
        let station = StationConfig::new("2322").with_lines(vec![
            LineRule::new("17").swapped(),
            LineRule::new(17).swapped(),
        ]);
        let fixed = fix_direction(&station, departure("17", 1)).unwrap();
        assert_eq!(fixed.direction, Direction::new(1));

        // A non-swapping rule in between changes nothing.
        let station = StationConfig::new("2322").with_lines(vec![
            LineRule::new("17").with_direction(1),
            LineRule::new("17").swapped(),
        ]);
        let fixed = fix_direction(&station, departure("17", 1)).unwrap();
        assert_eq!(fixed.direction, Direction::new(2));
    }

    #[test]
    fn out_of_range_code() {
        let station = StationConfig::new("2322").with_lines(vec![LineRule::new("17").swapped()]);
        assert_eq!(
            fix_direction(&station, departure("17", 5)),
            Err(RemapOutOfRange(5))
        );

        // Out-of-range codes on lines without a swap rule pass through.
        let fixed = fix_direction(&station, departure("4", 5)).unwrap();
        assert_eq!(fixed.direction, Direction::new(5));
    }
}
