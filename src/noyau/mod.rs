//! Noyau exact Q-pur : fractions canoniques
//!
//! Organisation interne :
//! - fraction.rs : valeur canonique (reduce, reciprocal, accès, caches par valeur)
//! - jetons.rs   : lecture des littéraux (ratio, décimal, 0.3..., 0.1_6...)
//! - operande.rs : constructeur / combinateur (entier, flottant, chaîne, Frac)
//! - periode.rs  : pré-période + période (ordre multiplicatif de 10)
//! - format.rs   : affichage "0.1_6...", "n/d"
//! - lecture.rs  : approximation f64 (≥ 16 chiffres) + lecture tronquée
//! - arith.rs    : + - * / pow, ordre, coercition
//! - cache.rs    : partage des valeurs canoniques
//! - reglages.rs : max_repeating_digits
//! - erreur.rs   : FracError + avis PrecisionTruncated

pub mod arith;
pub mod cache;
pub mod erreur;
pub mod format;
pub mod fraction;
pub mod jetons;
pub mod lecture;
pub mod operande;
pub mod periode;
pub mod reglages;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique
pub use cache::CacheCanonique;
pub use erreur::{FracError, PrecisionTruncated, Result};
pub use fraction::Frac;
pub use jetons::{lire, Litteral};
pub use lecture::approximer;
pub use operande::{coerce_to_value, Operande};
pub use periode::Expansion;
pub use reglages::{max_repeating_digits, set_max_repeating_digits, Reglages};
