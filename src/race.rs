//! Race parameters and command-line argument resolution
//!
//! A race is an ordered roster of horse names plus a lap count. Both become
//! parameters of the remote workflow execution. [`LaunchParameters`] can only
//! be built through [`LaunchParameters::new`], so every value in circulation
//! has already been validated.

use serde::Serialize;
use snafu::prelude::*;

/// Default horse names, taken from "Mr. Magoo and the Seven Dwarfs"
pub const DEFAULT_HORSES: [&str; 7] = [
    "Axlerod",
    "Bartholomew",
    "Cornelius",
    "Dexter",
    "Eustace",
    "Ferdinand",
    "George",
];

pub const DEFAULT_LAPS: u32 = 10;

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum Error {
    #[snafu(display("The race needs at least one horse"))]
    EmptyRoster,

    #[snafu(display("Horse name at position {index} is blank"))]
    BlankParticipant { index: usize },

    #[snafu(display("Lap count '{value}' is not a valid integer"))]
    InvalidLaps { value: String },

    #[snafu(display("Lap count must be at least 1, got {laps}"))]
    NonPositiveLaps { laps: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Validated parameters for a single race workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchParameters {
    participants: Vec<String>,
    laps: u32,
}

impl LaunchParameters {
    /// Validate and build race parameters
    ///
    /// The roster must contain at least one non-blank name. Duplicate names
    /// are allowed. `laps` must be positive and fit the 32-bit signed integer
    /// the remote workflow declares.
    ///
    /// # Errors
    /// Returns an error if the roster is empty, a name is blank, or the lap
    /// count is out of range.
    pub fn new(participants: Vec<String>, laps: i64) -> Result<Self> {
        ensure!(!participants.is_empty(), EmptyRosterSnafu);

        if let Some(index) = participants.iter().position(|name| name.trim().is_empty()) {
            return BlankParticipantSnafu { index }.fail();
        }

        ensure!(laps >= 1, NonPositiveLapsSnafu { laps });
        let laps = i32::try_from(laps)
            .ok()
            .and_then(|laps| u32::try_from(laps).ok())
            .context(InvalidLapsSnafu {
                value: laps.to_string(),
            })?;

        Ok(Self { participants, laps })
    }

    /// The default seven-horse roster running the default number of laps
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            participants: default_roster(),
            laps: DEFAULT_LAPS,
        }
    }

    #[must_use]
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    #[must_use]
    pub fn laps(&self) -> u32 {
        self.laps
    }
}

#[must_use]
pub fn default_roster() -> Vec<String> {
    DEFAULT_HORSES.iter().map(ToString::to_string).collect()
}

/// Resolve positional command-line arguments into race parameters
///
/// - no arguments: default roster, default laps
/// - one argument: default roster, the argument is the lap count
/// - two or more: every argument but the last is a horse, the last is the lap count
///
/// This performs no I/O.
///
/// # Errors
/// Returns an error if the lap count does not parse or the resulting
/// parameters fail validation.
pub fn resolve_args<S: AsRef<str>>(args: &[S]) -> Result<LaunchParameters> {
    let Some((last, names)) = args.split_last() else {
        return Ok(LaunchParameters::defaults());
    };

    let laps = parse_laps(last.as_ref())?;
    let participants = if names.is_empty() {
        default_roster()
    } else {
        names.iter().map(|name| name.as_ref().to_string()).collect()
    };

    LaunchParameters::new(participants, laps)
}

/// Parse a lap count the way the remote workflow's integer parameter does:
/// optional sign, decimal digits, 32-bit signed range.
fn parse_laps(value: &str) -> Result<i64> {
    value
        .parse::<i32>()
        .map(i64::from)
        .ok()
        .context(InvalidLapsSnafu { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_no_args_uses_defaults() {
        let params = resolve_args::<&str>(&[]).unwrap();
        assert_eq!(
            params.participants(),
            [
                "Axlerod",
                "Bartholomew",
                "Cornelius",
                "Dexter",
                "Eustace",
                "Ferdinand",
                "George"
            ]
        );
        assert_eq!(params.laps(), 10);
    }

    #[test]
    fn test_resolve_single_arg_is_lap_count() {
        let params = resolve_args(&["5"]).unwrap();
        assert_eq!(params.participants(), default_roster().as_slice());
        assert_eq!(params.laps(), 5);
    }

    #[test]
    fn test_resolve_names_then_laps() {
        let params = resolve_args(&["Alpha", "Beta", "3"]).unwrap();
        assert_eq!(params.participants(), ["Alpha", "Beta"]);
        assert_eq!(params.laps(), 3);
    }

    #[test]
    fn test_resolve_keeps_duplicates_in_order() {
        let params = resolve_args(&["Zed", "Alpha", "Zed", "1"]).unwrap();
        assert_eq!(params.participants(), ["Zed", "Alpha", "Zed"]);
    }

    #[test]
    fn test_resolve_accepts_explicit_plus_sign() {
        let params = resolve_args(&["+7"]).unwrap();
        assert_eq!(params.laps(), 7);
    }

    #[test]
    fn test_resolve_rejects_non_numeric_laps() {
        assert_eq!(
            resolve_args(&["Alpha", "Beta"]),
            Err(Error::InvalidLaps {
                value: "Beta".to_string()
            })
        );
        assert!(matches!(
            resolve_args(&["2.5"]),
            Err(Error::InvalidLaps { .. })
        ));
    }

    #[test]
    fn test_resolve_rejects_out_of_range_laps() {
        assert!(matches!(
            resolve_args(&["2147483648"]),
            Err(Error::InvalidLaps { .. })
        ));
    }

    #[test]
    fn test_resolve_rejects_non_positive_laps() {
        assert_eq!(
            resolve_args(&["0"]),
            Err(Error::NonPositiveLaps { laps: 0 })
        );
        assert_eq!(
            resolve_args(&["Alpha", "-4"]),
            Err(Error::NonPositiveLaps { laps: -4 })
        );
    }

    #[test]
    fn test_resolve_rejects_blank_name() {
        assert_eq!(
            resolve_args(&["Alpha", "  ", "3"]),
            Err(Error::BlankParticipant { index: 1 })
        );
    }

    #[test]
    fn test_new_rejects_empty_roster() {
        assert_eq!(LaunchParameters::new(vec![], 3), Err(Error::EmptyRoster));
    }

    #[test]
    fn test_new_rejects_laps_beyond_i32() {
        assert!(matches!(
            LaunchParameters::new(vec!["Alpha".into()], i64::from(i32::MAX) + 1),
            Err(Error::InvalidLaps { .. })
        ));
        assert!(LaunchParameters::new(vec!["Alpha".into()], i64::from(i32::MAX)).is_ok());
    }
}
