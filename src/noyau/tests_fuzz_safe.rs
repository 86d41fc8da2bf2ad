//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la lecture et l’arithmétique sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées (chiffres, dénominateurs)
//! - budget temps global
//! - on accepte les erreurs attendues (format, division par zéro)
//! - invariants clés : forme canonique, aller-retour decimal() -> Frac

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};

use super::erreur::FracError;
use super::Frac;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &FracError) -> bool {
    // Liste blanche : le générateur produit volontairement du texte invalide et des zéros.
    matches!(e, FracError::Format(_) | FracError::InvalidFraction(_))
}

fn check_canonique(v: &Frac) {
    assert!(v.denominator().is_positive(), "dénominateur <= 0: {v:?}");
    assert!(
        v.numerator().gcd(v.denominator()).is_one(),
        "non réduit: {v:?}"
    );
}

/* ------------------------ Génération de littéraux (bornée) ------------------------ */

fn gen_chiffres(rng: &mut Rng, max: u32) -> String {
    let n = 1 + rng.pick(max);
    (0..n)
        .map(|_| char::from(b'0' + rng.pick(10) as u8))
        .collect()
}

fn gen_signe(rng: &mut Rng) -> &'static str {
    if rng.coin() {
        "-"
    } else {
        ""
    }
}

/// Littéral valide dans l’une des quatre grammaires.
fn gen_litteral(rng: &mut Rng) -> String {
    let s = gen_signe(rng);
    let i = gen_chiffres(rng, 4);
    match rng.pick(5) {
        0 => format!("{s}{i}/{}{}", gen_signe(rng), gen_chiffres(rng, 3)),
        1 => format!("{s}{i}"),
        2 => format!("{s}{i}.{}", gen_chiffres(rng, 5)),
        3 => format!("{s}{i}.{}...", gen_chiffres(rng, 5)),
        _ => format!("{s}{i}.{}_{}...", gen_chiffres(rng, 4), gen_chiffres(rng, 4)),
    }
}

/// Littéral abîmé : un caractère inséré au hasard.
fn gen_abime(rng: &mut Rng) -> String {
    const PARASITES: [char; 7] = ['.', '_', '/', '-', ' ', 'x', '+'];
    let mut chars: Vec<char> = gen_litteral(rng).chars().collect();
    let pos = rng.pick(chars.len() as u32 + 1) as usize;
    chars.insert(pos, PARASITES[rng.pick(PARASITES.len() as u32) as usize]);
    chars.into_iter().collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_litteraux_valides() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let lit = gen_litteral(&mut rng);
        match Frac::new(lit.as_str()) {
            Ok(v) => {
                check_canonique(&v);
                let relu = Frac::new(v.decimal()).unwrap_or_else(|e| panic!("{lit}: {e}"));
                assert_eq!(relu, v, "lit={lit:?} decimal={:?}", v.decimal());
                seen_ok += 1;
            }
            Err(e) => {
                // seul cas possible : ratio de dénominateur nul
                assert!(
                    matches!(e, FracError::InvalidFraction(_)),
                    "erreur non attendue: lit={lit:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    assert!(seen_ok > 250, "trop peu de succès: {seen_ok} (erreurs: {seen_err})");
}

#[test]
fn fuzz_safe_litteraux_abimes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let lit = gen_abime(&mut rng);
        match Frac::new(lit.as_str()) {
            // une insertion peut retomber sur une grammaire valide ("1.5" -> "-1.5", "1/2" -> "1/-2")
            Ok(v) => check_canonique(&v),
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: lit={lit:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    assert!(seen_err > 100, "fuzz trop “sage”: {seen_err} erreurs");
}

#[test]
fn fuzz_safe_arithmetique_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    // Même seed => mêmes opérations => mêmes résultats
    let run = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        let mut acc = Frac::zero();
        let mut sorties = Vec::new();

        for _ in 0..150 {
            budget(t0, max);

            let n = rng.pick(41) as i64 - 20;
            let d = 1 + rng.pick(30) as i64;
            let x = Frac::ratio(n, d).unwrap_or_else(|e| panic!("{n}/{d}: {e}"));

            acc = match rng.pick(4) {
                0 => &acc + &x,
                1 => &acc - &x,
                2 => &acc * &x,
                _ => match &acc / &x {
                    Ok(q) => q,
                    Err(e) => {
                        assert!(is_erreur_attendue(&e), "err={e}");
                        acc
                    }
                },
            };

            // garder des tailles raisonnables
            if acc.denominator().bits() > 256 || acc.numerator().bits() > 256 {
                acc = Frac::from(BigInt::from(n));
            }

            check_canonique(&acc);
            sorties.push(acc.decimal().to_string());
        }
        sorties
    };

    assert_eq!(run(0xFEED_u64), run(0xFEED_u64));
}

#[test]
fn fuzz_safe_ordre_coherent_avec_flottants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..400 {
        budget(t0, max);

        let a = Frac::ratio(rng.pick(2001) as i64 - 1000, 1 + rng.pick(999) as i64).unwrap();
        let b = Frac::ratio(rng.pick(2001) as i64 - 1000, 1 + rng.pick(999) as i64).unwrap();

        let (fa, fb) = (a.to_f64(), b.to_f64());
        let (lt, eq, gt) = (a < b, a == b, a > b);
        assert_eq!([lt, eq, gt].iter().filter(|x| **x).count(), 1);

        // deux valeurs distinctes de dénominateurs < 1000 diffèrent d’au moins 1e-6
        if lt {
            assert!(fa < fb, "{a} < {b} mais {fa} >= {fb}");
        } else if gt {
            assert!(fa > fb, "{a} > {b} mais {fa} <= {fb}");
        } else {
            assert_eq!(fa, fb);
        }
    }
}
