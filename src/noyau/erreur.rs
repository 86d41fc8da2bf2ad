// src/noyau/erreur.rs
//
// Erreurs du noyau.
// - FracError : toute erreur qui interrompt l’opération (pas de valeur par défaut silencieuse)
// - PrecisionTruncated : simple avis, voyage avec un résultat utilisable

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FracError {
    /// La chaîne ne correspond (en entier) à aucune des quatre grammaires.
    #[error("format invalide: {0}")]
    Format(String),

    /// Un dénominateur vaut zéro (y compris l’inverse de zéro).
    #[error("fraction invalide: {0}")]
    InvalidFraction(String),

    /// Un opérande ne peut pas être interprété comme une fraction.
    #[error("opérande non supporté: {0}")]
    UnsupportedOperand(String),
}

pub type Result<T> = std::result::Result<T, FracError>;

/// Avis non bloquant : la recherche de période a atteint `limite`.
/// Les chiffres répétés rendus sont alors une approximation de la vraie période.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("période tronquée à {limite} chiffres (max_repeating_digits)")]
pub struct PrecisionTruncated {
    pub limite: usize,
}

impl FracError {
    pub(crate) fn denominateur_nul() -> Self {
        FracError::InvalidFraction("le dénominateur ne peut pas être zéro".into())
    }
}
