//! # Social Security Numbers
//!
//! Defines `Ssn`, a United States Social Security Number: nine digits
//! composed of a three-digit area number, a two-digit group number, and a
//! four-digit serial number.
//!
//! Accepted textual forms are `"AAAGGSSSS"` and `"AAA-GG-SSSS"`; the two
//! are equivalent representations of the same value. No component may be
//! zero. Only the structural self-consistency of the number is checked —
//! no registry of issued numbers is consulted.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::UsIdError;
use crate::rtn::digits_to_u32;

/// A United States Social Security Number.
///
/// Equality, ordering, and hashing are keyed by the combined nine-digit
/// value (`value` is declared first so the derived `Ord` compares it
/// first; the components are a function of the value, so the derives
/// remain consistent).
///
/// # Construction
///
/// - [`Ssn::parse()`] / `FromStr` — from `"AAAGGSSSS"` or `"AAA-GG-SSSS"`.
/// - [`Ssn::from_value()`] / `TryFrom<u32>` — from an integer in
///   `0..=999_999_999`, zero-padded to nine digits before decomposition.
///   Zero is not rejected by the range check itself; it fails through the
///   area-number check, same as the string `"000000000"` would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ssn {
    value: u32,
    area: u16,
    group: u8,
    serial: u16,
}

impl Ssn {
    /// The number of digits in the area number.
    pub const AREA_LENGTH: usize = 3;

    /// The number of digits in the group number.
    pub const GROUP_LENGTH: usize = 2;

    /// The number of digits in the serial number.
    pub const SERIAL_LENGTH: usize = 4;

    /// The delimiter used in the canonical hyphenated form.
    pub const DELIMITER: char = '-';

    /// Largest representable social security number value.
    pub const MAX_VALUE: u32 = 999_999_999;

    /// Parse a social security number from either accepted textual form.
    ///
    /// Accepts exactly `"AAAGGSSSS"` (nine digits) or `"AAA-GG-SSSS"`
    /// (hyphens at fixed positions). After decomposition, each component
    /// is checked against zero in area, group, serial order; the first
    /// failing check is reported.
    ///
    /// # Errors
    ///
    /// [`UsIdError::Syntax`] if the input matches neither form;
    /// [`UsIdError::Invalid`] if the area is 000, the group is 00, or the
    /// serial is 0000.
    pub fn parse(s: &str) -> Result<Ssn, UsIdError> {
        let bytes = s.as_bytes();
        let all_digits = |range: std::ops::Range<usize>| {
            bytes[range].iter().all(|b| b.is_ascii_digit())
        };
        let (area_digits, group_digits, serial_digits) =
            if bytes.len() == 9 && all_digits(0..9) {
                (&s[0..3], &s[3..5], &s[5..9])
            } else if bytes.len() == 11
                && bytes[3] == b'-'
                && bytes[6] == b'-'
                && all_digits(0..3)
                && all_digits(4..6)
                && all_digits(7..11)
            {
                (&s[0..3], &s[4..6], &s[7..11])
            } else {
                return Err(UsIdError::Syntax(format!(
                    "social security number {s:?} is not in the form \"AAAGGSSSS\" or \"AAA-GG-SSSS\""
                )));
            };
        let area = digits_to_u32(area_digits) as u16;
        if area == 0 {
            return Err(UsIdError::Invalid("area number cannot be 000".to_string()));
        }
        let group = digits_to_u32(group_digits) as u8;
        if group == 0 {
            return Err(UsIdError::Invalid("group number cannot be 00".to_string()));
        }
        let serial = digits_to_u32(serial_digits) as u16;
        if serial == 0 {
            return Err(UsIdError::Invalid("serial number cannot be 0000".to_string()));
        }
        let value = u32::from(area) * 1_000_000 + u32::from(group) * 10_000 + u32::from(serial);
        Ok(Ssn { value, area, group, serial })
    }

    /// Construct a social security number from its integer value.
    ///
    /// The value is zero-padded to nine digits and decomposed exactly as
    /// by [`Ssn::parse()`]. Zero passes the range check and fails through
    /// the area-number check instead; that asymmetry with
    /// [`Rtn::from_value()`](crate::Rtn::from_value) is observable
    /// behavior and deliberate.
    ///
    /// # Errors
    ///
    /// [`UsIdError::Range`] if `value` exceeds `999_999_999`, plus
    /// everything [`Ssn::parse()`] can return.
    pub fn from_value(value: u32) -> Result<Ssn, UsIdError> {
        if value > Self::MAX_VALUE {
            return Err(UsIdError::Range {
                value: i64::from(value),
                min: 0,
                max: i64::from(Self::MAX_VALUE),
            });
        }
        Self::parse(&format!("{value:09}"))
    }

    /// Returns the combined nine-digit value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns the area number (the first three digits).
    pub fn area_number(&self) -> u16 {
        self.area
    }

    /// Returns the group number (the middle two digits).
    pub fn group_number(&self) -> u8 {
        self.group
    }

    /// Returns the serial number (the final four digits).
    pub fn serial_number(&self) -> u16 {
        self.serial
    }

    /// Returns the three-digit zero-padded area number string.
    pub fn area_string(&self) -> String {
        format!("{:03}", self.area)
    }

    /// Returns the two-digit zero-padded group number string.
    pub fn group_string(&self) -> String {
        format!("{:02}", self.group)
    }

    /// Returns the four-digit zero-padded serial number string.
    pub fn serial_string(&self) -> String {
        format!("{:04}", self.serial)
    }

    /// Renders the plain, undelimited form `"AAAGGSSSS"`.
    pub fn plain(&self) -> String {
        format!("{:03}{:02}{:04}", self.area, self.group, self.serial)
    }

    /// Renders the canonical hyphenated form `"AAA-GG-SSSS"`.
    pub fn canonical(&self) -> String {
        format!(
            "{:03}{delim}{:02}{delim}{:04}",
            self.area,
            self.group,
            self.serial,
            delim = Self::DELIMITER
        )
    }
}

impl std::fmt::Display for Ssn {
    /// The canonical hyphenated form; round-trips with [`Ssn::parse()`].
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl FromStr for Ssn {
    type Err = UsIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<u32> for Ssn {
    type Error = UsIdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}
