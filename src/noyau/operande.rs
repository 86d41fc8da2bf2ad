// src/noyau/operande.rs
//
// Constructeur / combinateur.
// Une entrée est un entier, un flottant, une chaîne ou une Frac déjà construite ;
// elle est aiguillée une seule fois ici, puis réduite par Frac::reduce.
//
//   Frac::zero()        -> 0
//   Frac::new(a)        -> a canonique
//   Frac::ratio(a, b)   -> a / b (produit en croix, pas de re-lecture)

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::erreur::{FracError, Result};
use super::fraction::Frac;
use super::jetons::lire;

#[derive(Clone, Debug)]
pub enum Operande {
    Entier(BigInt),
    Flottant(f64),
    Texte(String),
    Valeur(Frac),
}

impl Operande {
    /// Paire (n, d) non réduite ; d peut valoir zéro (ratio littéral "1/0").
    fn paire(self) -> Result<(BigInt, BigInt)> {
        match self {
            Operande::Entier(n) => Ok((n, BigInt::one())),

            // On garde l’écriture décimale affichée (0.1 -> 1/10), pas la valeur binaire.
            // Display de f64 : plus courte forme relisible, jamais d’exposant.
            Operande::Flottant(x) => {
                if !x.is_finite() {
                    return Err(FracError::InvalidFraction(format!(
                        "flottant non fini: {x}"
                    )));
                }
                Ok(lire(&format!("{x}"))?.en_paire())
            }

            Operande::Texte(s) => Ok(lire(&s)?.en_paire()),

            Operande::Valeur(v) => Ok((v.numerator().clone(), v.denominator().clone())),
        }
    }

    pub(crate) fn decrire(&self) -> String {
        match self {
            Operande::Entier(n) => format!("entier {n}"),
            Operande::Flottant(x) => format!("flottant {x}"),
            Operande::Texte(s) => format!("chaîne {s:?}"),
            Operande::Valeur(v) => format!("fraction {v}"),
        }
    }
}

/// Seule conversion utilisée par les opérations binaires faillibles.
pub fn coerce_to_value(entree: impl Into<Operande>) -> Result<Frac> {
    match entree.into() {
        Operande::Valeur(v) => Ok(v),
        autre => {
            let description = autre.decrire();
            Frac::new(autre).map_err(|e| {
                FracError::UnsupportedOperand(format!(
                    "{description} ne peut pas être interprété comme une fraction ({e})"
                ))
            })
        }
    }
}

impl Frac {
    pub fn new(a: impl Into<Operande>) -> Result<Frac> {
        let (n, d) = a.into().paire()?;
        Frac::reduce(n, d)
    }

    /// a / b : (an * bd) / (ad * bn).
    pub fn ratio(a: impl Into<Operande>, b: impl Into<Operande>) -> Result<Frac> {
        let (an, ad) = a.into().paire()?;
        if ad.is_zero() {
            return Err(FracError::denominateur_nul());
        }

        let b = Frac::new(b)?;
        if b.is_zero() {
            return Err(FracError::InvalidFraction(
                "division par zéro (inverse de zéro)".into(),
            ));
        }

        Frac::reduce(an * b.denominator(), ad * b.numerator())
    }
}

/* ------------------------ Conversions vers Operande ------------------------ */

macro_rules! depuis_entier {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operande {
                fn from(n: $t) -> Self {
                    Operande::Entier(BigInt::from(n))
                }
            }
        )*
    };
}

depuis_entier!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Operande {
    fn from(n: BigInt) -> Self {
        Operande::Entier(n)
    }
}

impl From<&BigInt> for Operande {
    fn from(n: &BigInt) -> Self {
        Operande::Entier(n.clone())
    }
}

impl From<f64> for Operande {
    fn from(x: f64) -> Self {
        Operande::Flottant(x)
    }
}

impl From<&str> for Operande {
    fn from(s: &str) -> Self {
        Operande::Texte(s.to_string())
    }
}

impl From<String> for Operande {
    fn from(s: String) -> Self {
        Operande::Texte(s)
    }
}

impl From<Frac> for Operande {
    fn from(v: Frac) -> Self {
        Operande::Valeur(v)
    }
}

impl From<&Frac> for Operande {
    fn from(v: &Frac) -> Self {
        Operande::Valeur(v.clone())
    }
}
