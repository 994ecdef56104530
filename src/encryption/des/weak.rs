//! DES weak-key classification and policy.
//!
//! Classification is pure: [`check_key`] only reports a [`KeyStrength`].
//! What happens with a weak key is decided by a [`WeakKeyPolicy`], whose
//! compiled-in default is selected with Cargo features:
//!
//! | Feature            | weak   | semi-weak | possibly weak |
//! |--------------------|--------|-----------|---------------|
//! | (none)             | Reject | Reject    | Warn          |
//! | `warn-weak-keys`   | Warn   | Warn      | Warn          |
//! | `allow-weak-keys`  | Allow  | Allow     | Allow         |
//!
//! `allow-weak-keys` wins if both features are enabled.

use std::fmt;

use log::warn;

use crate::error::CipherError;

/// Keys whose 16 subkeys are all identical: encryption is an involution.
pub const WEAK_KEYS: [u64; 4] = [
    0x0101_0101_0101_0101,
    0x1F1F_1F1F_0E0E_0E0E,
    0xE0E0_E0E0_F1F1_F1F1,
    0xFEFE_FEFE_FEFE_FEFE,
];

/// Six pairs of keys where one key decrypts what the other encrypts.
pub const SEMI_WEAK_KEYS: [u64; 12] = [
    0x01FE_01FE_01FE_01FE,
    0xFE01_FE01_FE01_FE01,
    0x1FE0_1FE0_0EF1_0EF1,
    0xE01F_E01F_F10E_F10E,
    0x01E0_01E0_01F1_01F1,
    0xE001_E001_F101_F101,
    0x1FFE_1FFE_0EFE_0EFE,
    0xFE1F_FE1F_FE0E_FE0E,
    0x011F_011F_010E_010E,
    0x1F01_1F01_0E01_0E01,
    0xE0FE_E0FE_F1FE_F1FE,
    0xFEE0_FEE0_FEF1_FEF1,
];

/// Keys that produce only four distinct subkeys.
pub const POSSIBLY_WEAK_KEYS: [u64; 48] = [
    0x1F1F_0101_0E0E_0101,
    0xFEE0_1F01_FEF1_0E01,
    0xFE1F_E001_FE0E_F101,
    0x1FE0_FE01_0EF1_FE01,
    0xE001_01E0_F101_01F1,
    0xE001_1FFE_F101_0EFE,
    0x0101_E0E0_0101_F1F1,
    0x0101_FEFE_0101_FEFE,
    0x011F_1F01_010E_0E01,
    0xE0FE_1F01_F1FE_0E01,
    0xE01F_FE01_F10E_FE01,
    0x01FE_FE01_01FE_FE01,
    0xFE1F_01E0_FE0E_01F1,
    0xFE1F_1FFE_FE0E_0EFE,
    0x1F1F_E0E0_0E0E_F1F1,
    0x1F1F_FEFE_0E0E_FEFE,
    0x1F01_011F_0E01_010E,
    0xFEE0_011F_FEF1_010E,
    0xFE01_E01F_FE01_F10E,
    0x1FE0_E01F_0EF1_F10E,
    0xFE01_1FE0_FE01_0EF1,
    0x1FFE_01E0_0EFE_01F1,
    0x1F01_FEE0_0E01_FEF1,
    0xFEFE_E0E0_FEFE_F1F1,
    0x0101_1F1F_0101_0E0E,
    0xE0FE_011F_F1FE_010E,
    0xE001_FE1F_F101_FE0E,
    0x01FE_E01F_01FE_F10E,
    0xE01F_1FE0_F10E_0EF1,
    0x01FE_1FE0_01FE_0EF1,
    0x011F_FEE0_010E_FEF1,
    0xE0FE_FEE0_F1FE_FEF1,
    0xE0E0_0101_F1F1_0101,
    0xE0E0_1F1F_F1F1_0E0E,
    0x01E0_E001_01F1_F101,
    0x01E0_FE1F_01F1_FE0E,
    0xFE01_01FE_FE01_01FE,
    0x1FE0_01FE_0EF1_01FE,
    0x1F01_E0FE_0E01_F1FE,
    0xFEE0_E0FE_FEF1_F1FE,
    0xFEFE_0101_FEFE_0101,
    0xFEFE_1F1F_FEFE_0E0E,
    0x1FFE_E001_0EFE_F101,
    0x1FFE_FE1F_0EFE_FE0E,
    0xE01F_01FE_F10E_01FE,
    0x01E0_1FFE_01F1_0EFE,
    0x011F_E0FE_010E_F1FE,
    0xE0E0_FEFE_F1F1_FEFE,
];

/// How strong a DES key is, as far as the weak-key tables can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyStrength {
    NotWeak,
    Weak,
    SemiWeak,
    PossiblyWeak,
}

impl fmt::Display for KeyStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyStrength::NotWeak => "not weak",
            KeyStrength::Weak => "weak",
            KeyStrength::SemiWeak => "semi-weak",
            KeyStrength::PossiblyWeak => "possibly-weak",
        })
    }
}

/// Classifies a raw 64-bit key (parity bits included) against the tables.
pub fn check_key(key: u64) -> KeyStrength {
    if WEAK_KEYS.contains(&key) {
        KeyStrength::Weak
    } else if SEMI_WEAK_KEYS.contains(&key) {
        KeyStrength::SemiWeak
    } else if POSSIBLY_WEAK_KEYS.contains(&key) {
        KeyStrength::PossiblyWeak
    } else {
        KeyStrength::NotWeak
    }
}

/// What to do with a key of a given strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enforcement {
    /// Fail with [`CipherError::KeyTooWeak`].
    Reject,
    /// Log a warning and continue.
    Warn,
    /// Continue silently.
    Allow,
}

/// Per-class weak-key enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeakKeyPolicy {
    pub weak: Enforcement,
    pub semi_weak: Enforcement,
    pub possibly_weak: Enforcement,
}

impl WeakKeyPolicy {
    /// Rejects weak and semi-weak keys, warns on possibly-weak ones.
    pub const STRICT: Self = Self {
        weak: Enforcement::Reject,
        semi_weak: Enforcement::Reject,
        possibly_weak: Enforcement::Warn,
    };

    pub const WARN: Self = Self {
        weak: Enforcement::Warn,
        semi_weak: Enforcement::Warn,
        possibly_weak: Enforcement::Warn,
    };

    pub const ALLOW: Self = Self {
        weak: Enforcement::Allow,
        semi_weak: Enforcement::Allow,
        possibly_weak: Enforcement::Allow,
    };

    /// The policy selected by the enabled Cargo features.
    pub const fn compiled() -> Self {
        if cfg!(feature = "allow-weak-keys") {
            Self::ALLOW
        } else if cfg!(feature = "warn-weak-keys") {
            Self::WARN
        } else {
            Self::STRICT
        }
    }

    fn enforcement(&self, strength: KeyStrength) -> Enforcement {
        match strength {
            KeyStrength::NotWeak => Enforcement::Allow,
            KeyStrength::Weak => self.weak,
            KeyStrength::SemiWeak => self.semi_weak,
            KeyStrength::PossiblyWeak => self.possibly_weak,
        }
    }

    /// Classifies `key` and applies the policy to it.
    ///
    /// Returns the strength when the key may be used.
    pub fn evaluate(&self, key: u64) -> Result<KeyStrength, CipherError> {
        let strength = check_key(key);

        match self.enforcement(strength) {
            Enforcement::Reject => Err(CipherError::KeyTooWeak(strength)),
            Enforcement::Warn => {
                warn!("DES key is {strength}; continuing anyway");
                Ok(strength)
            }
            Enforcement::Allow => Ok(strength),
        }
    }
}

impl Default for WeakKeyPolicy {
    fn default() -> Self {
        Self::compiled()
    }
}
