// src/noyau/periode.rs
//
// Développement décimal exact d’un rationnel n/d (d > 0).
//
// Après la virgule : `pre` chiffres non répétés, puis une période de `k` chiffres.
// - pre = max(nb de 2, nb de 5) dans d
// - d' = d sans ses facteurs 2 et 5
// - k  = ordre multiplicatif de 10 modulo d' (plus petit k > 0 tel que 10^k ≡ 1 mod d')
//
// Le signe est traité à part : on développe |n|/d puis on préfixe "-".

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use tracing::{debug, warn};

use super::erreur::PrecisionTruncated;
use super::lecture::{chiffres_completes, pow10};
use super::reglages::Reglages;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expansion {
    pub negatif: bool,
    /// Partie entière de |n/d|.
    pub entier: BigInt,
    /// Chiffres non répétés (vide si aucun).
    pub fixes: String,
    /// Période (vide si le développement est fini).
    pub repetes: String,
    /// Présent si la période a été coupée à `max_repeating_digits`.
    pub tronque: Option<PrecisionTruncated>,
}

/// (pre, k, avis) pour le dénominateur `d` > 0.
/// k = 0 : pas de période (d = 2^a * 5^b).
pub fn longueurs(d: &BigInt, max_repetes: usize) -> (usize, usize, Option<PrecisionTruncated>) {
    let deux = BigInt::from(2);
    let cinq = BigInt::from(5);

    let mut reste = d.clone();
    let mut n2 = 0usize;
    let mut n5 = 0usize;

    while reste.is_even() {
        reste /= &deux;
        n2 += 1;
    }
    while (&reste % &cinq).is_zero() {
        reste /= &cinq;
        n5 += 1;
    }

    let pre = n2.max(n5);

    if reste.is_one() {
        return (pre, 0, None);
    }

    // Ordre de 10 modulo reste, par résidus successifs (pas de 10^k complet).
    let dix = BigInt::from(10);
    let mut r = &dix % &reste;
    for k in 1..=max_repetes {
        if r.is_one() {
            return (pre, k, None);
        }
        r = (r * &dix) % &reste;
    }

    warn!(
        limite = max_repetes,
        denominateur = %d,
        "période tronquée (max_repeating_digits)"
    );
    (
        pre,
        max_repetes,
        Some(PrecisionTruncated {
            limite: max_repetes,
        }),
    )
}

impl Expansion {
    pub fn calculer(numer: &BigInt, denom: &BigInt, reglages: &Reglages) -> Expansion {
        debug_assert!(denom.is_positive());

        let negatif = numer.is_negative();
        let (entier, a) = numer.abs().div_rem(denom);

        if a.is_zero() {
            return Expansion {
                negatif,
                entier,
                fixes: String::new(),
                repetes: String::new(),
                tronque: None,
            };
        }

        let (pre, k, tronque) = longueurs(denom, reglages.max_repeating_digits);
        debug!(pre, periode = k, "développement décimal");

        // a * 10^pre = fixes * d + résidu ; le résidu / d est purement périodique
        let n = a * pow10(pre);
        let (q, residu) = n.div_rem(denom);

        let fixes = if pre > 0 {
            chiffres_completes(&q, pre)
        } else {
            String::new()
        };
        let repetes = if k > 0 {
            chiffres_completes(&((residu * pow10(k)) / denom), k)
        } else {
            String::new()
        };

        Expansion {
            negatif,
            entier,
            fixes,
            repetes,
            tronque,
        }
    }

    /// Valeur entière exacte (affichée "x.0").
    pub fn est_entiere(&self) -> bool {
        self.fixes.is_empty() && self.repetes.is_empty()
    }

    pub fn est_periodique(&self) -> bool {
        !self.repetes.is_empty()
    }

    pub fn pre_periode(&self) -> usize {
        self.fixes.len()
    }

    pub fn periode(&self) -> usize {
        self.repetes.len()
    }
}
