// src/noyau/arith.rs
//
// Arithmétique et comparaisons sur Frac.
// x = xn/xd, y = yn/yd (canoniques, xd, yd > 0)
// - égalité : paires identiques (voir fraction.rs)
// - ordre   : xn*yd vs yn*xd
// - x + y   : reduce(xn*yd + yn*xd, xd*yd)
// - x * y   : reduce(xn*yn, xd*yd)
// - x / y   : x * reciprocal(y)   (faillible : y = 0)
// Les formes try_* acceptent n’importe quel opérande et passent d’abord par coerce_to_value.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::erreur::Result;
use super::fraction::Frac;
use super::operande::{coerce_to_value, Operande};

/* ------------------------ Noyau des opérations ------------------------ */

impl Frac {
    fn somme(&self, y: &Frac) -> Frac {
        let n = self.numer() * y.denom() + y.numer() * self.denom();
        Frac::canonise(n, self.denom() * y.denom())
    }

    fn difference(&self, y: &Frac) -> Frac {
        let n = self.numer() * y.denom() - y.numer() * self.denom();
        Frac::canonise(n, self.denom() * y.denom())
    }

    fn produit(&self, y: &Frac) -> Frac {
        Frac::canonise(self.numer() * y.numer(), self.denom() * y.denom())
    }

    fn quotient(&self, y: &Frac) -> Result<Frac> {
        Ok(self.produit(&y.reciprocal()?))
    }

    fn oppose(&self) -> Frac {
        Frac::canonise(-self.numer(), self.denom().clone())
    }

    /// x^e exact ; e < 0 passe par l’inverse (0^e indéfini).
    pub fn pow(&self, e: i32) -> Result<Frac> {
        let base = if e < 0 {
            self.reciprocal()?
        } else {
            self.clone()
        };
        let k = e.unsigned_abs();
        // puissances de premiers entre eux : déjà réduit
        Ok(Frac::canonise(base.numer().pow(k), base.denom().pow(k)))
    }

    /// base^self en flottant.
    ///
    /// Un rationnel élevé à une puissance rationnelle n’est en général pas rationnel :
    /// le résultat est une approximation f64 (précision de `to_f64`, puis de `powf`).
    pub fn en_exposant(&self, base: f64) -> f64 {
        base.powf(self.to_f64())
    }

    /* ------------------------ Formes coercitives ------------------------ */

    pub fn try_add(&self, y: impl Into<Operande>) -> Result<Frac> {
        Ok(self.somme(&coerce_to_value(y)?))
    }

    pub fn try_sub(&self, y: impl Into<Operande>) -> Result<Frac> {
        Ok(self.difference(&coerce_to_value(y)?))
    }

    pub fn try_mul(&self, y: impl Into<Operande>) -> Result<Frac> {
        Ok(self.produit(&coerce_to_value(y)?))
    }

    pub fn try_div(&self, y: impl Into<Operande>) -> Result<Frac> {
        self.quotient(&coerce_to_value(y)?)
    }

    pub fn try_cmp(&self, y: impl Into<Operande>) -> Result<Ordering> {
        Ok(self.cmp(&coerce_to_value(y)?))
    }

    pub fn try_eq(&self, y: impl Into<Operande>) -> Result<bool> {
        Ok(*self == coerce_to_value(y)?)
    }
}

/* ------------------------ Ordre ------------------------ */

impl Ord for Frac {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        (self.numer() * other.denom()).cmp(&(other.numer() * self.denom()))
    }
}

impl PartialOrd for Frac {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<i64> for Frac {
    fn eq(&self, other: &i64) -> bool {
        self.is_integer() && *self.numer() == BigInt::from(*other)
    }
}

impl PartialOrd<i64> for Frac {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp(&Frac::from(*other)))
    }
}

/* ------------------------ Opérateurs ------------------------ */

macro_rules! operateur {
    ($Trait:ident, $methode:ident, $noyau:ident, $Sortie:ty) => {
        impl $Trait<&Frac> for &Frac {
            type Output = $Sortie;
            fn $methode(self, y: &Frac) -> $Sortie {
                self.$noyau(y)
            }
        }

        impl $Trait<Frac> for Frac {
            type Output = $Sortie;
            fn $methode(self, y: Frac) -> $Sortie {
                self.$noyau(&y)
            }
        }

        impl $Trait<&Frac> for Frac {
            type Output = $Sortie;
            fn $methode(self, y: &Frac) -> $Sortie {
                self.$noyau(y)
            }
        }

        impl $Trait<Frac> for &Frac {
            type Output = $Sortie;
            fn $methode(self, y: Frac) -> $Sortie {
                self.$noyau(&y)
            }
        }

        impl $Trait<i64> for Frac {
            type Output = $Sortie;
            fn $methode(self, y: i64) -> $Sortie {
                self.$noyau(&Frac::from(y))
            }
        }

        impl $Trait<i64> for &Frac {
            type Output = $Sortie;
            fn $methode(self, y: i64) -> $Sortie {
                self.$noyau(&Frac::from(y))
            }
        }

        impl $Trait<Frac> for i64 {
            type Output = $Sortie;
            fn $methode(self, y: Frac) -> $Sortie {
                Frac::from(self).$noyau(&y)
            }
        }

        impl $Trait<&Frac> for i64 {
            type Output = $Sortie;
            fn $methode(self, y: &Frac) -> $Sortie {
                Frac::from(self).$noyau(y)
            }
        }
    };
}

operateur!(Add, add, somme, Frac);
operateur!(Sub, sub, difference, Frac);
operateur!(Mul, mul, produit, Frac);
// division par zéro : erreur explicite, jamais de panique
operateur!(Div, div, quotient, Result<Frac>);

impl Neg for Frac {
    type Output = Frac;
    fn neg(self) -> Frac {
        self.oppose()
    }
}

impl Neg for &Frac {
    type Output = Frac;
    fn neg(self) -> Frac {
        self.oppose()
    }
}

impl Zero for Frac {
    fn zero() -> Self {
        Frac::zero()
    }

    fn is_zero(&self) -> bool {
        Frac::is_zero(self)
    }
}

impl One for Frac {
    fn one() -> Self {
        Frac::from_integer(BigInt::one())
    }
}

impl Sum for Frac {
    fn sum<I: Iterator<Item = Frac>>(iter: I) -> Self {
        iter.fold(Frac::zero(), |acc, x| acc.somme(&x))
    }
}

impl<'a> Sum<&'a Frac> for Frac {
    fn sum<I: Iterator<Item = &'a Frac>>(iter: I) -> Self {
        iter.fold(Frac::zero(), |acc, x| acc.somme(x))
    }
}

impl Product for Frac {
    fn product<I: Iterator<Item = Frac>>(iter: I) -> Self {
        iter.fold(Frac::from_integer(BigInt::one()), |acc, x| acc.produit(&x))
    }
}
