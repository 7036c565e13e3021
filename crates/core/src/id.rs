//! Strongly-typed identifiers and the sequence that mints them.

use core::num::NonZeroU64;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product within a catalog.
///
/// Serializes as a bare integer (`1`, not `{"0":1}`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

macro_rules! impl_sequence_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl From<NonZeroU64> for $t {
            fn from(value: NonZeroU64) -> Self {
                Self(value.get())
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = u64::from_str(s.trim())
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_sequence_newtype!(ProductId, "ProductId");

/// Monotonic id counter.
///
/// Hands out 1, 2, 3, ... and never the same value twice until it is
/// explicitly reset. Once `u64::MAX` has been observed the sequence is
/// exhausted and `peek` returns `None` for good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: Option<NonZeroU64>,
}

impl IdSequence {
    pub const fn new() -> Self {
        Self {
            next: Some(NonZeroU64::MIN),
        }
    }

    /// The next unissued value, or `None` when the sequence is exhausted.
    pub fn peek(&self) -> Option<NonZeroU64> {
        self.next
    }

    /// Record `issued` as handed out, moving the counter past it if it is not
    /// already beyond it.
    pub fn observe(&mut self, issued: u64) {
        let Some(next) = self.next else {
            return;
        };
        if issued >= next.get() {
            self.next = issued.checked_add(1).and_then(NonZeroU64::new);
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }

    pub fn reset(&mut self) {
        self.next = Some(NonZeroU64::MIN);
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
