//! Tests scientifiques (campagne) : valeurs limites + scénarios de bout en bout.
//!
//! But : vérifier les formes décimales de référence, les allers-retours exacts
//! et le comportement aux bornes, sans faire chauffer la machine.
//! - budget temps global
//! - dénominateurs bornés
//! - borne de période explicite (jamais la borne processus, partagée entre tests)

use std::time::{Duration, Instant};

use num_bigint::BigInt;

use super::erreur::{FracError, PrecisionTruncated};
use super::lecture::approximer;
use super::reglages::Reglages;
use super::Frac;

fn f(n: i64, d: i64) -> Frac {
    Frac::ratio(n, d).unwrap_or_else(|e| panic!("{n}/{d}: {e}"))
}

fn assert_decimal(n: i64, d: i64, attendu: &str) {
    assert_eq!(f(n, d).decimal(), attendu, "valeur={n}/{d}");
}

/// Aller-retour : decimal() relu par le constructeur chaîne redonne la valeur.
fn assert_aller_retour(v: &Frac) {
    let relu = Frac::new(v.decimal()).unwrap_or_else(|e| panic!("{v}: {e}"));
    assert_eq!(&relu, v, "decimal={:?}", v.decimal());
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Formes de référence ------------------------ */

#[test]
fn sci_formes_de_reference() {
    assert_decimal(1, 3, "0.3...");
    assert_decimal(1, 6, "0.1_6...");
    assert_decimal(22, 7, "3.142857...");
    assert_decimal(4, 2, "2.0");
    assert_decimal(22, 700, "0.03_142857...");
    assert_decimal(1, 5, "0.2");
    assert_decimal(0, 9, "0.0");
}

#[test]
fn sci_formes_negatives() {
    assert_decimal(-1, 3, "-0.3...");
    assert_decimal(-7, 6, "-1.1_6...");
    assert_decimal(-5, 4, "-1.25");
    assert_decimal(-6, 3, "-2.0");
}

/* ------------------------ Scénarios ------------------------ */

#[test]
fn sci_scenario_repetition_mixte_divisee() {
    // 0.1_6... = 1/6, divisé par 6
    assert_eq!(Frac::ratio("0.1_6...", "6").unwrap(), f(1, 36));
}

#[test]
fn sci_scenario_un_tiers_flottant() {
    let x = f(1, 3).to_f64();
    assert_eq!(x, 0.3333333333333333);
    assert_eq!(format!("{x}"), "0.3333333333333333");
}

#[test]
fn sci_scenario_demi_plus_demi() {
    assert_eq!(f(1, 2) + f(1, 2), Frac::new(1).unwrap());
}

#[test]
fn sci_identite_algebrique() {
    let entrees: [(&str, &str); 5] = [
        ("2/3", "-4/5"),
        ("0.3...", "0.1_6..."),
        ("-1.25", "7"),
        ("22/7", "0.03_142857..."),
        ("-0.5", "-0.25"),
    ];
    for (a, b) in entrees {
        let direct = Frac::ratio(a, b).unwrap();
        let separe = (Frac::new(a).unwrap() / Frac::new(b).unwrap()).unwrap();
        assert_eq!(direct, separe, "a={a} b={b}");
    }
}

/* ------------------------ Allers-retours ------------------------ */

#[test]
fn sci_aller_retour_petits_denominateurs() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    for d in 1..=60i64 {
        budget(t0, max);
        for n in -d..=2 * d {
            assert_aller_retour(&f(n, d));
        }
    }
}

#[test]
fn sci_aller_retour_affichage_ratio() {
    for (n, d) in [(3, 4), (-7, 2), (5, 1), (0, 3), (-1, 1)] {
        let v = f(n, d);
        assert_eq!(v.to_string().parse::<Frac>().unwrap(), v);
    }
}

#[test]
fn sci_inverse_idempotent() {
    for (n, d) in [(3, 4), (-7, 2), (5, 1), (-1, 9), (123456, 789)] {
        let v = f(n, d);
        assert_eq!(v.reciprocal().unwrap().reciprocal().unwrap(), v);
    }
}

/* ------------------------ Bornes de période ------------------------ */

#[test]
fn sci_periode_tronquee_non_bloquante() {
    // 1/7 : période 6 ; borne 4 => avis + résultat utilisable
    let r = Reglages::default().avec_max_repeating_digits(4);
    let e = f(1, 7).decimal_avec(&r);
    assert_eq!(e.tronque, Some(PrecisionTruncated { limite: 4 }));
    assert_eq!(e.repetes, "1428");
    assert_eq!(e.to_string(), "0.1428...");

    // la valeur elle-même n’est pas touchée
    assert_eq!(f(1, 7).decimal(), "0.142857...");
    assert!(f(1, 7).expansion().tronque.is_none());
}

#[test]
fn sci_grande_periode() {
    let t0 = Instant::now();

    // 1/983 : 10 est racine primitive modulo 983 => période 982
    let v = f(1, 983);
    let e = v.expansion();
    assert_eq!(e.periode(), 982);
    assert!(e.tronque.is_none());
    assert_aller_retour(&v);

    budget(t0, Duration::from_millis(1000));
}

#[test]
fn sci_grands_entiers() {
    let n: BigInt = "123456789012345678901234567890".parse().unwrap();
    let v = Frac::ratio(n.clone(), 7).unwrap();
    assert_aller_retour(&v);
    assert_eq!(v.to_integer(), &n / BigInt::from(7));
}

/* ------------------------ Flottants ------------------------ */

#[test]
fn sci_flottant_seize_chiffres() {
    for (n, d) in [(1, 3), (2, 7), (1, 6), (22, 700), (-5, 12), (1, 97)] {
        let v = f(n, d);
        let attendu = n as f64 / d as f64;
        let ecart = (v.to_f64() - attendu).abs();
        assert!(ecart <= attendu.abs() * 1e-15, "{n}/{d}: {} vs {attendu}", v.to_f64());
        assert_eq!(approximer(v.decimal()).unwrap(), v.to_f64());
    }
}

#[test]
fn sci_erreurs_attendues() {
    assert!(matches!(Frac::new("0.1_6"), Err(FracError::Format(_))));
    assert!(matches!(Frac::ratio(1, 0), Err(FracError::InvalidFraction(_))));
    assert!(matches!(f(0, 1).reciprocal(), Err(FracError::InvalidFraction(_))));
    assert!(matches!(
        f(1, 2).try_add("n/a"),
        Err(FracError::UnsupportedOperand(_))
    ));
}
