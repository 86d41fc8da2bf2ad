//! src/noyau/reglages.rs
//!
//! Réglages du noyau (sans calcul).
//!
//! Un seul réglage pour l’instant : `max_repeating_digits`, la borne de la recherche
//! de période (anti-gel pour les dénominateurs pathologiques).
//! - valeur processus (atomique) lue par `Frac::decimal()`
//! - valeur explicite (`Reglages`) pour un calcul ponctuel

use std::sync::atomic::{AtomicUsize, Ordering};

/// Borne par défaut de la période.
pub const MAX_REPETES_DEFAUT: usize = 2000;

/// Garde-fou : au-delà, la recherche devient déraisonnable.
pub const MAX_REPETES_PLAFOND: usize = 1_000_000;

static MAX_REPETES: AtomicUsize = AtomicUsize::new(MAX_REPETES_DEFAUT);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub max_repeating_digits: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            max_repeating_digits: MAX_REPETES_DEFAUT,
        }
    }
}

impl Reglages {
    /// Instantané des réglages processus.
    pub fn courants() -> Self {
        Self {
            max_repeating_digits: max_repeating_digits(),
        }
    }

    pub fn avec_max_repeating_digits(mut self, n: usize) -> Self {
        self.max_repeating_digits = borne(n);
        self
    }
}

fn borne(n: usize) -> usize {
    n.clamp(1, MAX_REPETES_PLAFOND)
}

pub fn max_repeating_digits() -> usize {
    MAX_REPETES.load(Ordering::Relaxed)
}

/// Change la borne processus. Les développements déjà mis en cache ne sont pas recalculés.
pub fn set_max_repeating_digits(n: usize) {
    MAX_REPETES.store(borne(n), Ordering::Relaxed);
}
