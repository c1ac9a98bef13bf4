//! Strength rating types.

use std::fmt;

/// Entropy below this many bits is rated [`PasswordStrength::Weak`].
pub const WEAK_BELOW_BITS: f64 = 40.0;

/// Entropy at or above this many bits is rated [`PasswordStrength::Strong`].
pub const STRONG_FROM_BITS: f64 = 60.0;

/// Qualitative password rating, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    Weak,
    Basic,
    Strong,
}

impl PasswordStrength {
    /// Maps an entropy estimate onto a rating.
    ///
    /// Each band includes its lower bound: exactly 40.0 bits is `Basic`,
    /// exactly 60.0 bits is `Strong`.
    pub fn from_entropy(bits: f64) -> Self {
        if bits < WEAK_BELOW_BITS {
            PasswordStrength::Weak
        } else if bits < STRONG_FROM_BITS {
            PasswordStrength::Basic
        } else {
            PasswordStrength::Strong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Basic => "Basic",
            PasswordStrength::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Entropy estimate and rating for one password.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PasswordStrengthResult {
    pub entropy_bits: f64,
    pub strength: PasswordStrength,
}

impl PasswordStrengthResult {
    /// Result for the empty password.
    pub const EMPTY: PasswordStrengthResult = PasswordStrengthResult {
        entropy_bits: 0.0,
        strength: PasswordStrength::Weak,
    };

    pub fn from_entropy(entropy_bits: f64) -> Self {
        Self {
            entropy_bits,
            strength: PasswordStrength::from_entropy(entropy_bits),
        }
    }
}
