// src/noyau/fraction.rs
//
// Valeur rationnelle canonique.
// Invariants (vrais dès la construction, jamais violés ensuite) :
// - dénominateur > 0
// - pgcd(|numérateur|, dénominateur) = 1 (zéro = 0/1)
// - égalité = égalité structurelle de la paire
//
// Aucune méthode ne mute une Frac : toute opération produit une nouvelle valeur via reduce.
// Le développement décimal et le flottant sont calculés une seule fois (OnceLock).

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use super::erreur::{FracError, Result};
use super::format::format_rat_pretty;
use super::jetons::lire;
use super::lecture::{litteral_etendu, rational_scaled, scaled_to_decimal, CHIFFRES_FLOTTANT};
use super::periode::Expansion;
use super::reglages::Reglages;

struct Canon {
    numer: BigInt,
    denom: BigInt,
    expansion: OnceLock<Expansion>,
    decimal: OnceLock<String>,
    flottant: OnceLock<f64>,
}

/// Fraction exacte, toujours réduite et de dénominateur positif.
#[derive(Clone)]
pub struct Frac {
    inner: Arc<Canon>,
}

impl Frac {
    /* ------------------------ Construction canonique ------------------------ */

    /// Réduit (n, d) : signe porté par le numérateur, division par le pgcd.
    pub fn reduce(numerateur: BigInt, denominateur: BigInt) -> Result<Frac> {
        if denominateur.is_zero() {
            return Err(FracError::denominateur_nul());
        }
        Ok(Self::canonise(numerateur, denominateur))
    }

    /// Même chose que `reduce`, pour un dénominateur déjà connu non nul.
    pub(crate) fn canonise(numerateur: BigInt, denominateur: BigInt) -> Frac {
        debug_assert!(!denominateur.is_zero());

        let (mut n, mut d) = (numerateur, denominateur);
        if d.is_negative() {
            n = -n;
            d = -d;
        }

        // pgcd(0, d) = d => 0/1
        let g = n.gcd(&d);
        if !g.is_one() {
            n /= &g;
            d /= &g;
        }

        Self::depuis_canon(n, d)
    }

    fn depuis_canon(numer: BigInt, denom: BigInt) -> Frac {
        Frac {
            inner: Arc::new(Canon {
                numer,
                denom,
                expansion: OnceLock::new(),
                decimal: OnceLock::new(),
                flottant: OnceLock::new(),
            }),
        }
    }

    pub fn zero() -> Frac {
        Self::depuis_canon(BigInt::zero(), BigInt::one())
    }

    pub fn from_integer(n: BigInt) -> Frac {
        Self::depuis_canon(n, BigInt::one())
    }

    /// Inverse d/n ; indéfini pour zéro.
    pub fn reciprocal(&self) -> Result<Frac> {
        if self.is_zero() {
            return Err(FracError::InvalidFraction(
                "l’inverse de zéro n’existe pas".into(),
            ));
        }
        Ok(Self::canonise(self.denom().clone(), self.numer().clone()))
    }

    /* ------------------------ Accès ------------------------ */

    pub fn numerator(&self) -> &BigInt {
        &self.inner.numer
    }

    pub fn denominator(&self) -> &BigInt {
        &self.inner.denom
    }

    pub(crate) fn numer(&self) -> &BigInt {
        &self.inner.numer
    }

    pub(crate) fn denom(&self) -> &BigInt {
        &self.inner.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer().is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.denom().is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.numer().is_negative()
    }

    pub fn abs(&self) -> Frac {
        if self.is_negative() {
            Self::depuis_canon(-self.numer(), self.denom().clone())
        } else {
            self.clone()
        }
    }

    /// -1, 0 ou 1.
    pub fn signum(&self) -> Frac {
        Self::from_integer(self.numer().signum())
    }

    /// Vrai si les deux valeurs partagent le même stockage (valeurs internées).
    pub fn partage(a: &Frac, b: &Frac) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /* ------------------------ Conversions ------------------------ */

    /// Partie entière par division plancher : ⌊n/d⌋.
    pub fn to_integer(&self) -> BigInt {
        self.numer().div_floor(self.denom())
    }

    /// Développement décimal structuré (calculé au premier appel, borne processus).
    pub fn expansion(&self) -> &Expansion {
        self.inner
            .expansion
            .get_or_init(|| Expansion::calculer(self.numer(), self.denom(), &Reglages::courants()))
    }

    /// "0.3...", "0.1_6...", "3.142857...", "2.0"
    pub fn decimal(&self) -> &str {
        self.inner
            .decimal
            .get_or_init(|| self.expansion().to_string())
    }

    /// Développement sous réglages explicites (non mis en cache).
    pub fn decimal_avec(&self, reglages: &Reglages) -> Expansion {
        Expansion::calculer(self.numer(), self.denom(), reglages)
    }

    /// Approximation flottante (au moins 16 chiffres décimaux passés au parseur).
    ///
    /// Période tronquée par la borne : le bloc tronqué répété donnerait une valeur
    /// fausse dès le chiffre `limite`, on repart alors des chiffres exacts de n/d.
    pub fn to_f64(&self) -> f64 {
        *self.inner.flottant.get_or_init(|| {
            let expansion = self.expansion();
            // littéral construit chiffre par chiffre : toujours accepté par le parseur f64
            let litteral = if expansion.tronque.is_some() {
                self.lecture_tronquee(CHIFFRES_FLOTTANT as u32 + 2)
            } else {
                litteral_etendu(expansion)
            };
            litteral.parse::<f64>().unwrap_or(f64::NAN)
        })
    }

    /// Lecture décimale tronquée (vers zéro) à `digits` chiffres après la virgule.
    pub fn lecture_tronquee(&self, digits: u32) -> String {
        let digits = digits as usize;
        scaled_to_decimal(rational_scaled(self.numer(), self.denom(), digits), digits)
    }
}

/* ------------------------ Traits standard ------------------------ */

impl Default for Frac {
    fn default() -> Self {
        Frac::zero()
    }
}

impl PartialEq for Frac {
    fn eq(&self, other: &Self) -> bool {
        Frac::partage(self, other)
            || (self.numer() == other.numer() && self.denom() == other.denom())
    }
}

impl Eq for Frac {}

impl Hash for Frac {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numer().hash(state);
        self.denom().hash(state);
    }
}

impl fmt::Display for Frac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_rat_pretty(self.numer(), self.denom()))
    }
}

impl fmt::Debug for Frac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frac({}/{})", self.numer(), self.denom())
    }
}

impl FromStr for Frac {
    type Err = FracError;

    fn from_str(s: &str) -> Result<Frac> {
        let (n, d) = lire(s)?.en_paire();
        Frac::reduce(n, d)
    }
}

impl From<BigInt> for Frac {
    fn from(n: BigInt) -> Self {
        Frac::from_integer(n)
    }
}

impl From<i64> for Frac {
    fn from(n: i64) -> Self {
        Frac::from_integer(BigInt::from(n))
    }
}

/// Un Ratio construit par `new_raw` peut porter un dénominateur nul : on repasse par reduce.
impl TryFrom<BigRational> for Frac {
    type Error = FracError;

    fn try_from(r: BigRational) -> Result<Frac> {
        let (n, d) = r.into_raw();
        Frac::reduce(n, d)
    }
}

impl From<&Frac> for BigRational {
    fn from(v: &Frac) -> Self {
        BigRational::new_raw(v.numer().clone(), v.denom().clone())
    }
}

impl From<Frac> for BigRational {
    fn from(v: Frac) -> Self {
        BigRational::from(&v)
    }
}
