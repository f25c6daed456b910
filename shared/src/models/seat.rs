//! Seat Model

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of seats a waiter can order for
pub const SEAT_CAPACITY: u8 = 20;

/// Seat number outside `[1, SEAT_CAPACITY]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("seat {0} is outside 1..={max}", max = SEAT_CAPACITY)]
pub struct InvalidSeat(pub u8);

/// Validated seat number (座位号)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SeatNumber(u8);

impl SeatNumber {
    pub fn new(seat: u8) -> Result<Self, InvalidSeat> {
        if (1..=SEAT_CAPACITY).contains(&seat) {
            Ok(Self(seat))
        } else {
            Err(InvalidSeat(seat))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Display label, e.g. "Seat 3"
    pub fn label(self) -> String {
        format!("Seat {}", self.0)
    }

    /// All seats in ascending order
    pub fn all() -> impl Iterator<Item = SeatNumber> {
        (1..=SEAT_CAPACITY).map(SeatNumber)
    }
}

impl TryFrom<u8> for SeatNumber {
    type Error = InvalidSeat;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SeatNumber> for u8 {
    fn from(seat: SeatNumber) -> Self {
        seat.0
    }
}

impl std::fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Labels shown by the seat picker, "Seat 1".."Seat 20"
pub fn seat_labels() -> Vec<String> {
    SeatNumber::all().map(SeatNumber::label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_bounds() {
        assert!(SeatNumber::new(0).is_err());
        assert_eq!(SeatNumber::new(1).unwrap().get(), 1);
        assert_eq!(SeatNumber::new(20).unwrap().get(), 20);
        assert_eq!(SeatNumber::new(21), Err(InvalidSeat(21)));
    }

    #[test]
    fn test_seat_labels() {
        let labels = seat_labels();
        assert_eq!(labels.len(), SEAT_CAPACITY as usize);
        assert_eq!(labels.first().map(String::as_str), Some("Seat 1"));
        assert_eq!(labels.last().map(String::as_str), Some("Seat 20"));
    }

    #[test]
    fn test_seat_serde() {
        let seat = SeatNumber::new(7).unwrap();
        assert_eq!(serde_json::to_string(&seat).unwrap(), "7");
        assert!(serde_json::from_str::<SeatNumber>("25").is_err());
    }
}
