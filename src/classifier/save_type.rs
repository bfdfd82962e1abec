use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Categories of data a later save event should persist.
///
/// Flag values match the platform's save-data types so the mask can be handed
/// straight back through the fill response's client state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaveTypeMask(u32);

impl SaveTypeMask {
    pub const GENERIC: Self = Self(0x0);
    pub const PASSWORD: Self = Self(0x1);
    pub const ADDRESS: Self = Self(0x2);
    pub const CREDIT_CARD: Self = Self(0x4);
    pub const USERNAME: Self = Self(0x8);
    pub const EMAIL_ADDRESS: Self = Self(0x10);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// GENERIC is the empty set, so every mask contains it.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_generic(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for SaveTypeMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SaveTypeMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for SaveTypeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_generic() {
            return write!(f, "GENERIC");
        }

        let names = [
            (Self::PASSWORD, "PASSWORD"),
            (Self::ADDRESS, "ADDRESS"),
            (Self::CREDIT_CARD, "CREDIT_CARD"),
            (Self::USERNAME, "USERNAME"),
            (Self::EMAIL_ADDRESS, "EMAIL_ADDRESS"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();

        write!(f, "{}", set.join("|"))
    }
}
