//! Day Status
//!
//! The four fill states of a day cell and the click cycle between them.

use serde::{Deserialize, Serialize};

/// Fill state of one day cell, stored as its number (0..=3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Status {
    /// Nothing filled
    #[default]
    Blank = 0,
    /// Lower half filled
    Lower = 1,
    /// Upper half filled
    Upper = 2,
    /// Both halves filled
    Checked = 3,
}

impl Status {
    pub const ALL: [Status; 4] = [Status::Blank, Status::Lower, Status::Upper, Status::Checked];

    /// Successor in the click cycle, wrapping from `Checked` to `Blank`
    pub fn next(self) -> Self {
        match self {
            Status::Blank => Status::Lower,
            Status::Lower => Status::Upper,
            Status::Upper => Status::Checked,
            Status::Checked => Status::Blank,
        }
    }

    pub fn fills_upper(self) -> bool {
        matches!(self, Status::Upper | Status::Checked)
    }

    pub fn fills_lower(self) -> bool {
        matches!(self, Status::Lower | Status::Checked)
    }
}

impl TryFrom<u8> for Status {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Status::Blank),
            1 => Ok(Status::Lower),
            2 => Ok(Status::Upper),
            3 => Ok(Status::Checked),
            other => Err(format!("invalid day status {}", other)),
        }
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> u8 {
        status as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_next_follows_numeric_cycle() {
        assert_eq!(Status::Blank.next(), Status::Lower);
        assert_eq!(Status::Lower.next(), Status::Upper);
        assert_eq!(Status::Upper.next(), Status::Checked);
        assert_eq!(Status::Checked.next(), Status::Blank);
    }

    #[test]
    fn test_fill_halves() {
        assert!(!Status::Blank.fills_upper() && !Status::Blank.fills_lower());
        assert!(Status::Lower.fills_lower() && !Status::Lower.fills_upper());
        assert!(Status::Upper.fills_upper() && !Status::Upper.fills_lower());
        assert!(Status::Checked.fills_upper() && Status::Checked.fills_lower());
    }

    #[test]
    fn test_numeric_wire_form() {
        assert_eq!(serde_json::to_string(&Status::Upper).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Status>("3").unwrap(), Status::Checked);
        assert!(serde_json::from_str::<Status>("4").is_err());
    }

    proptest! {
        #[test]
        fn next_has_period_four(index in 0usize..4) {
            let status = Status::ALL[index];
            prop_assert_eq!(status.next().next().next().next(), status);
        }

        #[test]
        fn next_advances_numeric_value_by_one(index in 0usize..4) {
            let status = Status::ALL[index];
            prop_assert_eq!(u8::from(status.next()), (u8::from(status) + 1) % 4);
        }
    }
}
