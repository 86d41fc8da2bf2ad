// src/noyau/lecture.rs

use num_bigint::BigInt;
use num_traits::Signed;

use super::erreur::{FracError, Result};
use super::periode::Expansion;

/// Nombre de chiffres décimaux garantis dans le littéral passé au parseur f64.
pub const CHIFFRES_FLOTTANT: usize = 16;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

/// `n` est une longueur de chiffres déjà en mémoire (bornée bien avant u32::MAX).
pub fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Entier positif -> texte complété à gauche par des zéros jusqu’à `largeur`.
pub(crate) fn chiffres_completes(n: &BigInt, largeur: usize) -> String {
    let mut s = n.to_str_radix(10);
    while s.len() < largeur {
        s.insert(0, '0');
    }
    s
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    if digits == 0 {
        return if neg {
            format!("-{int_part}")
        } else {
            format!("{int_part}")
        };
    }

    let frac = chiffres_completes(&frac_part, digits);

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/// n/d -> entier “scalé” = trunc(n/d * 10^digits)
pub(crate) fn rational_scaled(n: &BigInt, d: &BigInt, digits: usize) -> BigInt {
    (n * pow10(digits)) / d
}

/* ------------------------ Approximation flottante ------------------------ */

/// Répète la période jusqu’à au moins 16 chiffres après la virgule (une période minimum).
fn etendre(entier: &str, fixes: &str, repetes: &str) -> String {
    let manque = CHIFFRES_FLOTTANT.saturating_sub(fixes.len());
    let cycles = manque.div_ceil(repetes.len()).max(1);
    format!("{entier}.{fixes}{}", repetes.repeat(cycles))
}

/// Littéral décimal prêt pour `f64::from_str`.
pub(crate) fn litteral_etendu(e: &Expansion) -> String {
    if e.repetes.is_empty() {
        return e.to_string();
    }
    let entier = if e.negatif {
        format!("-{}", e.entier)
    } else {
        e.entier.to_string()
    };
    etendre(&entier, &e.fixes, &e.repetes)
}

fn est_chiffres(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Approxime un développement textuel ("0.3...", "0.1_6...", "2.25") par le f64 le plus proche.
pub fn approximer(decimal: &str) -> Result<f64> {
    let refus = || FracError::Format(format!("{decimal:?} n’est pas un développement décimal"));

    let Some(corps) = decimal.strip_suffix("...") else {
        let (entier, fixes) = decimal.split_once('.').unwrap_or((decimal, "0"));
        if !est_chiffres(entier.strip_prefix('-').unwrap_or(entier)) || !est_chiffres(fixes) {
            return Err(refus());
        }
        return decimal.parse::<f64>().map_err(|_| refus());
    };

    let (entier, apres) = corps.split_once('.').ok_or_else(refus)?;
    let (fixes, repetes, fixes_ok) = match apres.split_once('_') {
        Some((f, r)) => (f, r, est_chiffres(f)),
        None => ("", apres, true),
    };

    let entier_ok = est_chiffres(entier.strip_prefix('-').unwrap_or(entier));
    if !entier_ok || !fixes_ok || !est_chiffres(repetes) {
        return Err(refus());
    }

    etendre(entier, fixes, repetes)
        .parse::<f64>()
        .map_err(|_| refus())
}
