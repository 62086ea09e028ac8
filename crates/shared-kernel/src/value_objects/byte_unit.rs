// crates/shared-kernel/src/value_objects/byte_unit.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Multiplier between two consecutive units.
pub const KILOBYTE: u64 = 1024;

/// One step of the byte-scale ladder. Every unit is 1024 times its predecessor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum ByteUnit {
    #[default]
    #[serde(rename = "B")]
    B,
    #[serde(rename = "kB")]
    KB,
    #[serde(rename = "MB")]
    MB,
    #[serde(rename = "GB")]
    GB,
    #[serde(rename = "TB")]
    TB,
}

impl ByteUnit {
    /// All units in ascending order.
    pub const ALL: [Self; 5] = [Self::B, Self::KB, Self::MB, Self::GB, Self::TB];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::B => "B",
            Self::KB => "kB",
            Self::MB => "MB",
            Self::GB => "GB",
            Self::TB => "TB",
        }
    }

    /// Number of bytes in one unit.
    #[must_use]
    pub const fn scale(self) -> u64 {
        KILOBYTE.pow(self.exponent())
    }

    /// Unit one step down the ladder; `None` for the base unit.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::B => None,
            Self::KB => Some(Self::B),
            Self::MB => Some(Self::KB),
            Self::GB => Some(Self::MB),
            Self::TB => Some(Self::GB),
        }
    }

    /// Exclusive upper bound, in bytes, of the band this unit is auto-selected for.
    /// `None` for the top unit, which has no upper bound.
    #[must_use]
    pub const fn threshold(self) -> Option<u64> {
        match self {
            Self::TB => None,
            unit => Some(KILOBYTE.pow(unit.exponent() + 1)),
        }
    }

    const fn exponent(self) -> u32 {
        match self {
            Self::B => 0,
            Self::KB => 1,
            Self::MB => 2,
            Self::GB => 3,
            Self::TB => 4,
        }
    }
}

impl fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ByteUnit {
    type Err = DomainError;

    /// Labels are matched exactly; `kb` or `Mb` are not units.
    fn from_str(s: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.label() == s)
            .ok_or_else(|| DomainError::UnknownUnit { unit: s.to_string() })
    }
}
