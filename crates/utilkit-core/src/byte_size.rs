//! Human-readable byte sizes.
//!
//! Parses strings such as `"1.50KB"` or `"82GiB"` into exact byte counts and
//! formats byte counts back into decimal units. Parsing truncates fractional
//! bytes; formatting rounds to two fractional digits, so the two are not exact
//! inverses of each other.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::SizeError;
use crate::{Error, Result};

/// Byte-size unit suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteUnit {
    B,
    KB,
    MB,
    GB,
    TB,
    PB,
    EB,
    KiB,
    MiB,
    GiB,
    TiB,
    PiB,
    EiB,
}

/// Units emitted by [`from_bytes`], smallest first.
const FORMAT_UNITS: [ByteUnit; 6] = [
    ByteUnit::B,
    ByteUnit::KB,
    ByteUnit::MB,
    ByteUnit::GB,
    ByteUnit::TB,
    ByteUnit::PB,
];

impl ByteUnit {
    /// Number of bytes in one unit
    pub const fn scale(self) -> u64 {
        match self {
            ByteUnit::B => 1,
            ByteUnit::KB => 1000,
            ByteUnit::MB => 1000 * 1000,
            ByteUnit::GB => 1000 * 1000 * 1000,
            ByteUnit::TB => 1000 * 1000 * 1000 * 1000,
            ByteUnit::PB => 1000 * 1000 * 1000 * 1000 * 1000,
            ByteUnit::EB => 1000 * 1000 * 1000 * 1000 * 1000 * 1000,
            ByteUnit::KiB => 1 << 10,
            ByteUnit::MiB => 1 << 20,
            ByteUnit::GiB => 1 << 30,
            ByteUnit::TiB => 1 << 40,
            ByteUnit::PiB => 1 << 50,
            ByteUnit::EiB => 1 << 60,
        }
    }

    /// Canonical suffix, e.g. `"KB"` or `"GiB"`
    pub const fn symbol(self) -> &'static str {
        match self {
            ByteUnit::B => "B",
            ByteUnit::KB => "KB",
            ByteUnit::MB => "MB",
            ByteUnit::GB => "GB",
            ByteUnit::TB => "TB",
            ByteUnit::PB => "PB",
            ByteUnit::EB => "EB",
            ByteUnit::KiB => "KiB",
            ByteUnit::MiB => "MiB",
            ByteUnit::GiB => "GiB",
            ByteUnit::TiB => "TiB",
            ByteUnit::PiB => "PiB",
            ByteUnit::EiB => "EiB",
        }
    }

    /// Look up a unit by suffix, ignoring case
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let unit = match symbol.to_ascii_uppercase().as_str() {
            "B" => ByteUnit::B,
            "KB" => ByteUnit::KB,
            "MB" => ByteUnit::MB,
            "GB" => ByteUnit::GB,
            "TB" => ByteUnit::TB,
            "PB" => ByteUnit::PB,
            "EB" => ByteUnit::EB,
            "KIB" => ByteUnit::KiB,
            "MIB" => ByteUnit::MiB,
            "GIB" => ByteUnit::GiB,
            "TIB" => ByteUnit::TiB,
            "PIB" => ByteUnit::PiB,
            "EIB" => ByteUnit::EiB,
            _ => return None,
        };
        Some(unit)
    }
}

impl fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parse a size string such as `"100MB"`, `"1.5KiB"` or `"51pib"` into bytes.
///
/// Fractional bytes are truncated: `"23.9999GB"` is `23_999_900_000`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for an empty string, a missing unit or
/// number, a number that is not `digits[.digits]`, an unknown unit, or a
/// value beyond `u64::MAX`.
pub fn to_bytes(input: &str) -> Result<u64> {
    parse(input).map_err(|err| {
        debug!("Rejected size string {:?}: {}", input, err);
        Error::from(err)
    })
}

fn parse(input: &str) -> std::result::Result<u64, SizeError> {
    if input.is_empty() {
        return Err(SizeError::Empty);
    }

    let number_len = input
        .trim_end_matches(|c: char| c.is_ascii_alphabetic())
        .len();
    let (number, symbol) = input.split_at(number_len);

    if symbol.is_empty() {
        return Err(SizeError::MissingUnit(input.to_string()));
    }
    if number.is_empty() {
        return Err(SizeError::MissingNumber(input.to_string()));
    }

    let unit = ByteUnit::from_symbol(symbol).ok_or_else(|| SizeError::UnknownUnit {
        input: input.to_string(),
        unit: symbol.to_string(),
    })?;

    let (integer, fraction) = number.split_once('.').unwrap_or((number, ""));
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(integer) || (number.contains('.') && !is_digits(fraction)) {
        return Err(SizeError::InvalidNumber(input.to_string()));
    }

    let overflow = || SizeError::Overflow(input.to_string());
    let scale = unit.scale();

    let whole = integer
        .bytes()
        .try_fold(0u64, |acc, b| {
            acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
        })
        .ok_or_else(overflow)?;

    whole
        .checked_mul(scale)
        .and_then(|bytes| bytes.checked_add(scale_fraction(fraction, scale)))
        .ok_or_else(overflow)
}

/// `floor(0.<digits> * scale)`, exact for any number of digits.
///
/// Folds from the least significant digit so each step is
/// `(digit * scale + carry) / 10`; nested floor divisions by 10 equal one
/// floor division by `10^len`. The result is always below `scale`.
fn scale_fraction(digits: &str, scale: u64) -> u64 {
    let scale = u128::from(scale);
    let bytes = digits
        .bytes()
        .rev()
        .fold(0u128, |carry, b| (u128::from(b - b'0') * scale + carry) / 10);
    bytes as u64
}

/// Format a byte count using decimal units up to `PB`.
///
/// Exact multiples of a unit print without a fraction (`"82GB"`); everything
/// else prints two fractional digits rounded half-up (`"555.56KB"`).
/// `u64::MAX` formats as `"18446.74PB"`.
pub fn from_bytes(bytes: u64) -> String {
    let mut index = 0;
    let mut divisor = 1u64;
    while index + 1 < FORMAT_UNITS.len() && bytes / divisor >= 1000 {
        divisor *= 1000;
        index += 1;
    }

    let mut whole = bytes / divisor;
    let remainder = bytes % divisor;
    if remainder == 0 {
        return format!("{}{}", whole, FORMAT_UNITS[index]);
    }

    let divisor_wide = u128::from(divisor);
    let mut hundredths = (u128::from(remainder) * 100 + divisor_wide / 2) / divisor_wide;
    if hundredths == 100 {
        whole += 1;
        hundredths = 0;
        // 999.995KB and up renders in the next unit
        if whole == 1000 && index + 1 < FORMAT_UNITS.len() {
            whole = 1;
            index += 1;
        }
    }

    format!("{}.{:02}{}", whole, hundredths, FORMAT_UNITS[index])
}

/// A byte count that parses from and displays as a human-readable size.
///
/// Deserializes from either a size string (`"64MB"`) or a non-negative
/// integer, and serializes as the exact integer so values survive a round
/// trip through configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSize(pub u64);

impl ByteSize {
    /// Create a size from a raw byte count
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Number of bytes
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl From<ByteSize> for u64 {
    fn from(size: ByteSize) -> Self {
        size.0
    }
}

impl FromStr for ByteSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        to_bytes(s).map(Self)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&from_bytes(self.0))
    }
}

impl Serialize for ByteSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for ByteSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ByteSizeVisitor)
    }
}

struct ByteSizeVisitor;

impl<'de> Visitor<'de> for ByteSizeVisitor {
    type Value = ByteSize;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a byte count or a size string such as \"64MB\"")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<ByteSize, E> {
        Ok(ByteSize(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<ByteSize, E> {
        u64::try_from(value)
            .map(ByteSize)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<ByteSize, E> {
        value.parse().map_err(E::custom)
    }
}
