//! Subset-Sum instances over fixed-length decimal digit vectors.
//!
//! Numbers produced by the 3-CNF-SAT reduction have one digit per variable and
//! per clause, which quickly exceeds the range of any machine integer. Values
//! are therefore converted to [`BigUint`] whenever arithmetic is needed.

use std::collections::HashSet;
use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::InvalidInstance;
use crate::id::NumberId;

/// Radix of the digit vectors.
pub const RADIX: u8 = 10;

/// Converts a most-significant-first digit vector into its exact value.
///
/// # Panics
///
/// Panics if some digit is not below [`RADIX`].
pub fn digits_to_biguint(digits: &[u8]) -> BigUint {
    assert!(
        digits.iter().all(|&d| d < RADIX),
        "Digits must be in 0..=9: {:?}",
        digits
    );
    if digits.is_empty() {
        return BigUint::ZERO;
    }
    BigUint::from_radix_be(digits, RADIX as u32).expect("digits were checked against the radix")
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SspNumber {
    pub id: NumberId,
    /// Decimal digits, most significant first.
    pub digits: Vec<u8>,
}

impl SspNumber {
    pub fn new(id: NumberId, digits: Vec<u8>) -> Self {
        Self { id, digits }
    }

    /// Builds a named number from its value, zero-padded to `len` digits.
    pub fn from_value(id: NumberId, value: u64, len: usize) -> Self {
        let mut digits: Vec<u8> = value.to_string().bytes().map(|b| b - b'0').collect();
        assert!(digits.len() <= len, "{} does not fit in {} digits", value, len);
        let mut padded = vec![0; len - digits.len()];
        padded.append(&mut digits);
        Self::new(id, padded)
    }

    pub fn value(&self) -> BigUint {
        digits_to_biguint(&self.digits)
    }
}

impl fmt::Display for SspNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// A Subset-Sum instance: ordered numbers and a target, all `k` digits long.
///
/// # Invariants
///
/// - Every number and the target have the same digit count.
/// - Every digit is in `0..=9`.
/// - Number ids are unique.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SubsetSumData")]
pub struct SubsetSum {
    numbers: Vec<SspNumber>,
    target: Vec<u8>,
}

#[derive(Deserialize)]
struct SubsetSumData {
    numbers: Vec<SspNumber>,
    target: Vec<u8>,
}

impl TryFrom<SubsetSumData> for SubsetSum {
    type Error = InvalidInstance;

    fn try_from(data: SubsetSumData) -> Result<Self, Self::Error> {
        if let Some(&digit) = data.target.iter().find(|&&d| d >= RADIX) {
            return Err(InvalidInstance::DigitRange {
                owner: "target".to_string(),
                digit,
            });
        }
        let mut seen = HashSet::new();
        for number in &data.numbers {
            if !seen.insert(&number.id) {
                return Err(InvalidInstance::DuplicateNumber(number.id.clone()));
            }
            if number.digits.len() != data.target.len() {
                return Err(InvalidInstance::DigitCount {
                    id: number.id.clone(),
                    found: number.digits.len(),
                    expected: data.target.len(),
                });
            }
            if let Some(&digit) = number.digits.iter().find(|&&d| d >= RADIX) {
                return Err(InvalidInstance::DigitRange {
                    owner: number.id.to_string(),
                    digit,
                });
            }
        }
        Ok(Self {
            numbers: data.numbers,
            target: data.target,
        })
    }
}

impl SubsetSum {
    /// Creates an empty instance with the given target.
    ///
    /// # Panics
    ///
    /// Panics if some target digit is out of range.
    pub fn new(target: Vec<u8>) -> Self {
        assert!(target.iter().all(|&d| d < RADIX), "Target digits must be in 0..=9");
        Self {
            numbers: Vec::new(),
            target,
        }
    }

    /// Appends a number.
    ///
    /// # Panics
    ///
    /// Panics if its length differs from the target's or a digit is out of range.
    pub fn add_number(&mut self, number: SspNumber) {
        assert_eq!(
            number.digits.len(),
            self.target.len(),
            "Number {} must have {} digits",
            number.id,
            self.target.len()
        );
        assert!(
            number.digits.iter().all(|&d| d < RADIX),
            "Digits of {} must be in 0..=9",
            number.id
        );
        self.numbers.push(number);
    }

    /// Builds an instance from plain integers, padding all to a common width.
    pub fn from_values(values: &[u64], target: u64) -> Self {
        let width = values
            .iter()
            .chain(std::iter::once(&target))
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);
        let target = SspNumber::from_value(NumberId::named("target"), target, width).digits;
        let mut ssp = Self::new(target);
        for (i, &v) in values.iter().enumerate() {
            ssp.add_number(SspNumber::from_value(NumberId::named(i.to_string()), v, width));
        }
        ssp
    }

    pub fn numbers(&self) -> &[SspNumber] {
        &self.numbers
    }

    pub fn target(&self) -> &[u8] {
        &self.target
    }

    pub fn target_value(&self) -> BigUint {
        digits_to_biguint(&self.target)
    }

    /// Number of digits `k` shared by every vector.
    pub fn width(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Returns `true` iff the numbers selected by `used` sum to the target.
    pub fn is_solved_by(&self, used: &[bool]) -> bool {
        if used.len() != self.numbers.len() {
            return false;
        }
        let sum: BigUint = self
            .numbers
            .iter()
            .zip(used)
            .filter(|&(_, &u)| u)
            .map(|(n, _)| n.value())
            .sum();
        sum == self.target_value()
    }
}
