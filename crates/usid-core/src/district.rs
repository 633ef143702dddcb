//! # Federal Reserve Districts — Single Source of Truth
//!
//! Defines the `FederalReserveDistrict` enum with all 12 districts.
//! This is the ONE definition used across the crate. Every `match` on
//! `FederalReserveDistrict` must be exhaustive — adding a variant (which
//! should never happen; the districts were fixed in 1913) would force
//! every consumer to handle it at compile time.
//!
//! ## Ordering Invariant
//!
//! Declaration order is frozen. The district number (`1..=12`) and letter
//! code (`'A'..='L'`) are derived from ordinal position, and ranged routing
//! transit number categories decode their district as an offset into this
//! order. Reordering variants would silently change the decoded district of
//! historical routing numbers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::UsIdError;

/// The twelve Federal Reserve Bank districts, in charter order.
///
/// Each district has a 1-based number and an 'A'-based letter code, both
/// derived from its position in this declaration:
///
/// | # | Letter | District |
/// |---|--------|----------|
/// |  1 | A | Boston |
/// |  2 | B | New York |
/// |  3 | C | Philadelphia |
/// |  4 | D | Cleveland |
/// |  5 | E | Richmond |
/// |  6 | F | Atlanta |
/// |  7 | G | Chicago |
/// |  8 | H | St. Louis |
/// |  9 | I | Minneapolis |
/// | 10 | J | Kansas City |
/// | 11 | K | Dallas |
/// | 12 | L | San Francisco |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FederalReserveDistrict {
    /// District 1 (A) — Boston.
    Boston,
    /// District 2 (B) — New York.
    NewYork,
    /// District 3 (C) — Philadelphia.
    Philadelphia,
    /// District 4 (D) — Cleveland.
    Cleveland,
    /// District 5 (E) — Richmond.
    Richmond,
    /// District 6 (F) — Atlanta.
    Atlanta,
    /// District 7 (G) — Chicago.
    Chicago,
    /// District 8 (H) — St. Louis.
    StLouis,
    /// District 9 (I) — Minneapolis.
    Minneapolis,
    /// District 10 (J) — Kansas City.
    KansasCity,
    /// District 11 (K) — Dallas.
    Dallas,
    /// District 12 (L) — San Francisco.
    SanFrancisco,
}

/// Total number of Federal Reserve districts. Ranged routing number
/// categories span exactly this many category IDs.
pub const DISTRICT_COUNT: usize = 12;

impl FederalReserveDistrict {
    /// Returns all 12 districts in canonical (charter) order.
    pub fn all_districts() -> &'static [FederalReserveDistrict] {
        &[
            Self::Boston,
            Self::NewYork,
            Self::Philadelphia,
            Self::Cleveland,
            Self::Richmond,
            Self::Atlanta,
            Self::Chicago,
            Self::StLouis,
            Self::Minneapolis,
            Self::KansasCity,
            Self::Dallas,
            Self::SanFrancisco,
        ]
    }

    /// Returns the 1-based district number (Boston = 1, San Francisco = 12).
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    /// Returns the district letter code (Boston = 'A', San Francisco = 'L').
    pub fn letter(&self) -> char {
        (b'A' + *self as u8) as char
    }

    /// Looks up a district by its 1-based number.
    ///
    /// Returns `None` if `number` is outside `1..=12`.
    pub fn from_number(number: u8) -> Option<FederalReserveDistrict> {
        Self::all_districts()
            .get((number as usize).wrapping_sub(1))
            .copied()
    }

    /// Returns the snake_case string identifier for this district.
    ///
    /// This matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boston => "boston",
            Self::NewYork => "new_york",
            Self::Philadelphia => "philadelphia",
            Self::Cleveland => "cleveland",
            Self::Richmond => "richmond",
            Self::Atlanta => "atlanta",
            Self::Chicago => "chicago",
            Self::StLouis => "st_louis",
            Self::Minneapolis => "minneapolis",
            Self::KansasCity => "kansas_city",
            Self::Dallas => "dallas",
            Self::SanFrancisco => "san_francisco",
        }
    }
}

impl std::fmt::Display for FederalReserveDistrict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FederalReserveDistrict {
    type Err = UsIdError;

    /// Parse a district from its snake_case string identifier.
    ///
    /// Accepts the same identifiers produced by
    /// [`FederalReserveDistrict::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boston" => Ok(Self::Boston),
            "new_york" => Ok(Self::NewYork),
            "philadelphia" => Ok(Self::Philadelphia),
            "cleveland" => Ok(Self::Cleveland),
            "richmond" => Ok(Self::Richmond),
            "atlanta" => Ok(Self::Atlanta),
            "chicago" => Ok(Self::Chicago),
            "st_louis" => Ok(Self::StLouis),
            "minneapolis" => Ok(Self::Minneapolis),
            "kansas_city" => Ok(Self::KansasCity),
            "dallas" => Ok(Self::Dallas),
            "san_francisco" => Ok(Self::SanFrancisco),
            other => Err(UsIdError::Invalid(format!(
                "unknown federal reserve district: {other:?}"
            ))),
        }
    }
}
