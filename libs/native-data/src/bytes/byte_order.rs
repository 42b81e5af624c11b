//! Byte order selection for typed buffer conversion
//!
//! A conversion either keeps the host layout of each element or reverses it.
//! `ByteOrder` names the layout the byte buffer should have; whether that means
//! reversing is decided against the host at call time by [`ByteOrder::requires_swap`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Returns `true` if the host stores multi-byte scalars least significant byte first
pub const fn is_host_little_endian() -> bool {
    cfg!(target_endian = "little")
}

/// Byte order of the elements inside a byte buffer
///
/// For the 32-bit value `0x01020304`:
/// - `BigEndian`: [0x01, 0x02, 0x03, 0x04]
/// - `LittleEndian`: [0x04, 0x03, 0x02, 0x01]
/// - `Native`: whichever of the two the host uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ByteOrder {
    /// Host layout, bytes are copied as they are in memory
    #[default]
    Native,

    /// Least significant byte first (x86, most ARM targets)
    LittleEndian,

    /// Most significant byte first (network byte order)
    BigEndian,
}

impl ByteOrder {
    /// The concrete order of the host
    pub const fn host() -> Self {
        if is_host_little_endian() {
            Self::LittleEndian
        } else {
            Self::BigEndian
        }
    }

    /// The concrete order that is not the host's
    pub const fn swapped() -> Self {
        if is_host_little_endian() {
            Self::BigEndian
        } else {
            Self::LittleEndian
        }
    }

    /// Replace `Native` by the host's concrete order
    pub const fn resolve(self) -> Self {
        match self {
            Self::Native => Self::host(),
            other => other,
        }
    }

    /// Whether each element's bytes have to be reversed relative to host memory
    pub fn requires_swap(self) -> bool {
        self.resolve() != Self::host()
    }

    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::LittleEndian => "little_endian",
            Self::BigEndian => "big_endian",
        }
    }
}

impl FromStr for ByteOrder {
    type Err = ConvertError;

    /// Accepts the common spellings:
    /// - "NATIVE", "NE", "HOST" -> Native
    /// - "LE", "LITTLE_ENDIAN", "DCBA" -> LittleEndian
    /// - "BE", "BIG_ENDIAN", "ABCD", "NETWORK" -> BigEndian
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        match normalized.as_str() {
            "NATIVE" | "NE" | "HOST" => Ok(Self::Native),
            "LE" | "LITTLE" | "LITTLE_ENDIAN" | "LITTLEENDIAN" | "DCBA" => Ok(Self::LittleEndian),
            "BE" | "BIG" | "BIG_ENDIAN" | "BIGENDIAN" | "ABCD" | "NETWORK" => Ok(Self::BigEndian),
            _ => Err(ConvertError::invalid_byte_order(s)),
        }
    }
}

impl TryFrom<String> for ByteOrder {
    type Error = ConvertError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
