//! # Routing Transit Numbers
//!
//! Defines `Rtn`, an ABA routing transit number identifying a financial
//! institution within the United States, and `Category`, the institution
//! classification encoded in its first two digits.
//!
//! ## Validation Invariant
//!
//! Every `Rtn` is fully validated at construction: nine decimal digits, a
//! recognized category prefix, a non-zero value, and a weighted checksum
//! divisible by 10. A constructed `Rtn` is valid for its lifetime; there
//! is no deferred validation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::district::{FederalReserveDistrict, DISTRICT_COUNT};
use crate::error::UsIdError;

/// The institution category of a routing transit number, determined by its
/// first two digits (the category ID).
///
/// A category is either a single fixed ID or a contiguous range of IDs,
/// one per Federal Reserve district:
///
/// | Category | Base ID | IDs |
/// |----------|---------|-----|
/// | UsGovernment | 00 | 00 |
/// | Primary | 01 | 01–12 |
/// | Thrift | 21 | 21–32 |
/// | Electronic | 61 | 61–72 |
/// | TravelersCheque | 80 | 80 |
///
/// Base IDs must not overlap once widened to their ranges. That is a
/// precondition maintained by this table's author, not a runtime check;
/// [`Category::resolve`] assumes it and returns the first match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// United States Government institutions.
    UsGovernment,
    /// Primary institutions, one ID per Federal Reserve district.
    Primary,
    /// Thrift institutions, one ID per Federal Reserve district.
    Thrift,
    /// Electronic transaction institutions, one ID per Federal Reserve district.
    Electronic,
    /// Traveler's cheque issuers.
    TravelersCheque,
}

impl Category {
    /// Returns all categories in base ID order.
    pub fn all_categories() -> &'static [Category] {
        &[
            Self::UsGovernment,
            Self::Primary,
            Self::Thrift,
            Self::Electronic,
            Self::TravelersCheque,
        ]
    }

    /// Returns the base (lowest) category ID of this category.
    pub fn base_id(&self) -> u8 {
        match self {
            Self::UsGovernment => 0,
            Self::Primary => 1,
            Self::Thrift => 21,
            Self::Electronic => 61,
            Self::TravelersCheque => 80,
        }
    }

    /// Whether this category spans a range of category IDs, one per
    /// Federal Reserve district.
    ///
    /// Ranged categories cover `base_id()..base_id() + 12`; the offset
    /// within the range identifies the district.
    pub fn is_ranged(&self) -> bool {
        matches!(self, Self::Primary | Self::Thrift | Self::Electronic)
    }

    /// Resolves a two-digit category ID to its category.
    ///
    /// A ranged category matches any ID in `[base, base + 12)`; a fixed
    /// category matches its base ID only. Returns `None` for IDs outside
    /// every category (e.g. 13–20, 33–60, 73–79, 81–99).
    pub fn resolve(category_id: u8) -> Option<Category> {
        let width = DISTRICT_COUNT as u8;
        Self::all_categories().iter().copied().find(|category| {
            let base = category.base_id();
            if category.is_ranged() {
                category_id >= base && category_id < base + width
            } else {
                category_id == base
            }
        })
    }

    /// Returns the snake_case string identifier for this category.
    ///
    /// This matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UsGovernment => "us_government",
            Self::Primary => "primary",
            Self::Thrift => "thrift",
            Self::Electronic => "electronic",
            Self::TravelersCheque => "travelers_cheque",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ABA routing transit number.
///
/// Nine decimal digits identifying a US financial institution. The first
/// two digits encode the institution [`Category`] and, for ranged
/// categories, the [`FederalReserveDistrict`].
///
/// Equality, ordering, and hashing are keyed by the raw nine-digit value
/// (`value` is declared first so the derived `Ord` compares it first; the
/// stored category ID is a function of the value, so the derives remain
/// consistent).
///
/// # Construction
///
/// - [`Rtn::parse()`] / `FromStr` — from a nine-digit string.
/// - [`Rtn::from_value()`] / `TryFrom<u32>` — from an integer in
///   `1..=999_999_999`, zero-padded to nine digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rtn {
    value: u32,
    category_id: u8,
}

impl Rtn {
    /// The number of digits in a routing transit number.
    pub const LENGTH: usize = 9;

    /// Per-digit weights for the checksum, applied left to right.
    /// The weighted digit sum of a valid number is divisible by 10.
    pub const CHECKSUM_WEIGHTS: [u32; 9] = [3, 7, 1, 3, 7, 1, 3, 7, 1];

    /// Largest representable routing transit number value.
    pub const MAX_VALUE: u32 = 999_999_999;

    /// Parse a routing transit number from its nine-digit string form.
    ///
    /// Validation runs in a fixed fail-fast order:
    ///
    /// 1. exactly nine ASCII decimal digits;
    /// 2. the first two digits resolve to a known [`Category`];
    /// 3. the value is not zero;
    /// 4. the weighted checksum is divisible by 10.
    ///
    /// # Errors
    ///
    /// [`UsIdError::Syntax`] for step 1, [`UsIdError::Invalid`] for the rest.
    pub fn parse(s: &str) -> Result<Rtn, UsIdError> {
        let bytes = s.as_bytes();
        if bytes.len() != Self::LENGTH || !bytes.iter().all(|b| b.is_ascii_digit()) {
            return Err(UsIdError::Syntax(format!(
                "routing transit number {s:?} is not nine decimal digits"
            )));
        }
        let category_id = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        if Category::resolve(category_id).is_none() {
            return Err(UsIdError::Invalid(format!(
                "unknown category ID: {category_id:02}"
            )));
        }
        let value = digits_to_u32(s);
        if value == 0 {
            return Err(UsIdError::Invalid(
                "routing transit number cannot be zero".to_string(),
            ));
        }
        let checksum: u32 = Self::CHECKSUM_WEIGHTS
            .iter()
            .zip(bytes)
            .map(|(weight, digit)| weight * u32::from(digit - b'0'))
            .sum();
        if checksum % 10 != 0 {
            return Err(UsIdError::Invalid(format!(
                "routing transit number {s} has an invalid checksum"
            )));
        }
        Ok(Rtn { value, category_id })
    }

    /// Construct a routing transit number from its integer value.
    ///
    /// The value is zero-padded to nine digits and validated exactly as by
    /// [`Rtn::parse()`]. Unlike the string form, zero is rejected here as a
    /// range error before padding.
    ///
    /// # Errors
    ///
    /// [`UsIdError::Range`] if `value` is outside `1..=999_999_999`, plus
    /// everything [`Rtn::parse()`] can return.
    pub fn from_value(value: u32) -> Result<Rtn, UsIdError> {
        if value == 0 || value > Self::MAX_VALUE {
            return Err(UsIdError::Range {
                value: i64::from(value),
                min: 1,
                max: i64::from(Self::MAX_VALUE),
            });
        }
        Self::parse(&format!("{value:09}"))
    }

    /// Returns the raw nine-digit value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns the two-digit category ID (the first two digits).
    pub fn category_id(&self) -> u8 {
        self.category_id
    }

    /// Returns the institution category.
    ///
    /// Construction guarantees the stored category ID resolves; a failure
    /// here is a defect in this library, not bad caller input.
    pub fn category(&self) -> Category {
        Category::resolve(self.category_id)
            .expect("stored category ID must always resolve")
    }

    /// Returns the Federal Reserve district encoded by this number, or
    /// `None` when the category is not district-ranged.
    pub fn federal_reserve_district(&self) -> Option<FederalReserveDistrict> {
        let category = self.category();
        if category.is_ranged() {
            let offset = usize::from(self.category_id - category.base_id());
            FederalReserveDistrict::all_districts().get(offset).copied()
        } else {
            None
        }
    }
}

impl std::fmt::Display for Rtn {
    /// Canonical zero-padded nine-digit form; round-trips with [`Rtn::parse()`].
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:09}", self.value)
    }
}

impl FromStr for Rtn {
    type Err = UsIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<u32> for Rtn {
    type Error = UsIdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

/// Fold an all-digit string into its integer value.
///
/// Callers must have verified the input is ASCII digits; nine digits fit
/// a `u32` without overflow.
pub(crate) fn digits_to_u32(s: &str) -> u32 {
    s.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Category::resolve ----

    #[test]
    fn test_resolve_fixed_categories() {
        assert_eq!(Category::resolve(0), Some(Category::UsGovernment));
        assert_eq!(Category::resolve(80), Some(Category::TravelersCheque));
    }

    #[test]
    fn test_resolve_ranged_boundaries() {
        assert_eq!(Category::resolve(1), Some(Category::Primary));
        assert_eq!(Category::resolve(12), Some(Category::Primary));
        assert_eq!(Category::resolve(21), Some(Category::Thrift));
        assert_eq!(Category::resolve(32), Some(Category::Thrift));
        assert_eq!(Category::resolve(61), Some(Category::Electronic));
        assert_eq!(Category::resolve(72), Some(Category::Electronic));
    }

    #[test]
    fn test_resolve_gaps_unmatched() {
        for id in [13, 20, 33, 60, 73, 79, 81, 99] {
            assert_eq!(Category::resolve(id), None, "ID {id} should not resolve");
        }
    }

    #[test]
    fn test_ranged_width_matches_district_count() {
        // Every ranged category covers exactly one ID per district.
        for category in Category::all_categories() {
            if category.is_ranged() {
                let base = category.base_id();
                for offset in 0..DISTRICT_COUNT as u8 {
                    assert_eq!(Category::resolve(base + offset), Some(*category));
                }
                assert_ne!(Category::resolve(base + DISTRICT_COUNT as u8), Some(*category));
            }
        }
    }

    #[test]
    fn test_category_bases_do_not_overlap() {
        // The design precondition behind resolve(): at most one category
        // claims any given ID.
        for id in 0..=99u8 {
            let claimants = Category::all_categories()
                .iter()
                .filter(|c| {
                    let base = c.base_id();
                    if c.is_ranged() {
                        id >= base && id < base + DISTRICT_COUNT as u8
                    } else {
                        id == base
                    }
                })
                .count();
            assert!(claimants <= 1, "ID {id} claimed by {claimants} categories");
        }
    }

    #[test]
    fn test_category_display_matches_as_str() {
        for category in Category::all_categories() {
            assert_eq!(category.to_string(), category.as_str());
        }
    }

    // ---- Rtn::parse ----

    #[test]
    fn test_parse_valid_primary() {
        let rtn = Rtn::parse("021000021").unwrap();
        assert_eq!(rtn.value(), 21_000_021);
        assert_eq!(rtn.category_id(), 2);
        assert_eq!(rtn.category(), Category::Primary);
        assert_eq!(
            rtn.federal_reserve_district(),
            Some(FederalReserveDistrict::NewYork)
        );
    }

    #[test]
    fn test_parse_primary_range_extremes() {
        let boston = Rtn::parse("011000015").unwrap();
        assert_eq!(
            boston.federal_reserve_district(),
            Some(FederalReserveDistrict::Boston)
        );
        let san_francisco = Rtn::parse("122105278").unwrap();
        assert_eq!(
            san_francisco.federal_reserve_district(),
            Some(FederalReserveDistrict::SanFrancisco)
        );
    }

    #[test]
    fn test_parse_thrift_and_electronic() {
        let thrift = Rtn::parse("211274450").unwrap();
        assert_eq!(thrift.category(), Category::Thrift);
        assert_eq!(
            thrift.federal_reserve_district(),
            Some(FederalReserveDistrict::Boston)
        );
        let electronic = Rtn::parse("611000004").unwrap();
        assert_eq!(electronic.category(), Category::Electronic);
        assert_eq!(
            electronic.federal_reserve_district(),
            Some(FederalReserveDistrict::Boston)
        );
    }

    #[test]
    fn test_parse_fixed_categories_have_no_district() {
        let government = Rtn::parse("000000013").unwrap();
        assert_eq!(government.category(), Category::UsGovernment);
        assert_eq!(government.federal_reserve_district(), None);
        let cheque = Rtn::parse("800000006").unwrap();
        assert_eq!(cheque.category(), Category::TravelersCheque);
        assert_eq!(cheque.federal_reserve_district(), None);
    }

    #[test]
    fn test_parse_rejects_bad_syntax() {
        for input in ["", "02100002", "0210000211", "02100002a", "021-000021", " 21000021"] {
            assert!(
                matches!(Rtn::parse(input), Err(UsIdError::Syntax(_))),
                "expected syntax error for {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let err = Rtn::parse("991234567").unwrap_err();
        assert_eq!(err, UsIdError::Invalid("unknown category ID: 99".to_string()));
    }

    #[test]
    fn test_category_checked_before_checksum() {
        // 990000004 would pass the checksum; the category check fires first.
        let err = Rtn::parse("990000004").unwrap_err();
        assert_eq!(err, UsIdError::Invalid("unknown category ID: 99".to_string()));
    }

    #[test]
    fn test_parse_rejects_zero_value() {
        // "000000000" has a recognized prefix (00) and a valid checksum,
        // so the zero check is load-bearing.
        let err = Rtn::parse("000000000").unwrap_err();
        assert_eq!(
            err,
            UsIdError::Invalid("routing transit number cannot be zero".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_bad_checksum() {
        let err = Rtn::parse("021000022").unwrap_err();
        assert!(
            matches!(&err, UsIdError::Invalid(msg) if msg.contains("checksum")),
            "unexpected error: {err}"
        );
    }

    // ---- Rtn::from_value ----

    #[test]
    fn test_from_value_matches_parse() {
        assert_eq!(Rtn::from_value(21_000_021).unwrap(), Rtn::parse("021000021").unwrap());
        // Short values are zero-padded before validation.
        assert_eq!(Rtn::from_value(13).unwrap(), Rtn::parse("000000013").unwrap());
    }

    #[test]
    fn test_from_value_rejects_out_of_range() {
        assert_eq!(
            Rtn::from_value(0).unwrap_err(),
            UsIdError::Range { value: 0, min: 1, max: 999_999_999 }
        );
        assert_eq!(
            Rtn::from_value(1_000_000_000).unwrap_err(),
            UsIdError::Range { value: 1_000_000_000, min: 1, max: 999_999_999 }
        );
    }

    #[test]
    fn test_try_from_delegates() {
        assert_eq!(Rtn::try_from(21_000_021).unwrap(), Rtn::parse("021000021").unwrap());
        assert!(Rtn::try_from(0).is_err());
    }

    // ---- formatting / equality / ordering ----

    #[test]
    fn test_display_roundtrip() {
        for s in ["021000021", "011000015", "122105278", "000000013", "800000006"] {
            assert_eq!(Rtn::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_from_str_matches_parse() {
        let parsed: Rtn = "021000021".parse().unwrap();
        assert_eq!(parsed, Rtn::parse("021000021").unwrap());
    }

    #[test]
    fn test_ordering_by_value() {
        let a = Rtn::parse("011000015").unwrap();
        let b = Rtn::parse("021000021").unwrap();
        assert!(a < b);
        assert_eq!(a.cmp(&b), a.value().cmp(&b.value()));
    }

    #[test]
    fn test_usable_as_map_key() {
        let mut set = std::collections::HashSet::new();
        assert!(set.insert(Rtn::parse("021000021").unwrap()));
        assert!(!set.insert(Rtn::from_value(21_000_021).unwrap()));
    }

    #[test]
    fn test_serde_roundtrip() {
        let rtn = Rtn::parse("021000021").unwrap();
        let json = serde_json::to_string(&rtn).unwrap();
        let parsed: Rtn = serde_json::from_str(&json).unwrap();
        assert_eq!(rtn, parsed);
    }
}
