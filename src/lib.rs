// src/lib.rs
//
// Fractions exactes Q-pur
// -----------------------
// Valeur rationnelle canonique (BigInt), lecture de littéraux
// ("2/3", "-4.25", "0.3...", "0.1_6..."), développement décimal périodique exact,
// approximation f64 bornée.

pub mod noyau;

pub use noyau::{
    approximer, coerce_to_value, lire, max_repeating_digits, set_max_repeating_digits,
    CacheCanonique, Expansion, Frac, FracError, Litteral, Operande, PrecisionTruncated, Reglages,
    Result,
};
