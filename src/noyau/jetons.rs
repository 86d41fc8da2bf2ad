// src/noyau/jetons.rs
//
// Lecture d’un littéral numérique (chaîne entière, sans espaces).
// Quatre grammaires, essayées dans cet ordre (la première qui couvre TOUTE la chaîne gagne) :
//   1. ratio              [-]chiffres/[-]chiffres        ex: 40/-50
//   2. décimal            [-]chiffres[.chiffres]         ex: -3.25, 4
//   3. répétition simple  [-]chiffres.chiffres...        ex: 0.3...   (= 1/3)
//   4. répétition mixte   [-]chiffres.chiffres_chiffres... ex: 0.1_6... (= 1/6)

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::trace;

use super::erreur::{FracError, Result};
use super::lecture::pow10;

/// Littéral reconnu, pas encore réduit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Litteral {
    Ratio {
        numerateur: BigInt,
        denominateur: BigInt,
    },
    /// `fixes` : chiffres non répétés ; `repetes` : période (vide si décimal fini).
    Decimal {
        negatif: bool,
        entier: String,
        fixes: String,
        repetes: String,
    },
}

impl Litteral {
    /// Paire (numérateur, dénominateur) non réduite.
    /// Le dénominateur d’un ratio peut valoir zéro : le contrôle est fait par reduce.
    pub fn en_paire(&self) -> (BigInt, BigInt) {
        match self {
            Litteral::Ratio {
                numerateur,
                denominateur,
            } => (numerateur.clone(), denominateur.clone()),

            Litteral::Decimal {
                negatif,
                entier,
                fixes,
                repetes,
            } => {
                let i = entier_de(entier);
                let p = entier_de(fixes);
                let r = entier_de(repetes);

                let echelle = pow10(fixes.len());
                let (num, den) = if repetes.is_empty() {
                    (i * &echelle + p, echelle)
                } else {
                    // 10^r - 1 : une période complète
                    let neufs = pow10(repetes.len()) - BigInt::one();
                    let den = &echelle * &neufs;
                    (i * &den + p * neufs + r, den)
                };

                if *negatif {
                    (-num, den)
                } else {
                    (num, den)
                }
            }
        }
    }
}

/// Chaîne de chiffres ASCII (déjà validée) -> entier ; vide -> 0.
fn entier_de(chiffres: &str) -> BigInt {
    if chiffres.is_empty() {
        return BigInt::zero();
    }
    BigInt::parse_bytes(chiffres.as_bytes(), 10).unwrap_or_default()
}

/* ------------------------ Curseur ------------------------ */

struct Curseur {
    chars: Vec<char>,
    i: usize,
}

impl Curseur {
    fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
            i: 0,
        }
    }

    fn fin(&self) -> bool {
        self.i >= self.chars.len()
    }

    /// Consomme `c` s’il est là.
    fn car(&mut self, c: char) -> bool {
        if self.i < self.chars.len() && self.chars[self.i] == c {
            self.i += 1;
            true
        } else {
            false
        }
    }

    /// Signe moins optionnel (au plus un).
    fn signe(&mut self) -> bool {
        self.car('-')
    }

    /// Au moins un chiffre ASCII.
    fn chiffres(&mut self) -> Option<String> {
        let start = self.i;
        while self.i < self.chars.len() && self.chars[self.i].is_ascii_digit() {
            self.i += 1;
        }
        if self.i == start {
            return None;
        }
        Some(self.chars[start..self.i].iter().collect())
    }

    fn ellipse(&mut self) -> bool {
        self.car('.') && self.car('.') && self.car('.')
    }
}

/* ------------------------ Grammaires ------------------------ */

type Grammaire = fn(&mut Curseur) -> Option<Litteral>;

const GRAMMAIRES: [(&str, Grammaire); 4] = [
    ("ratio", ratio),
    ("décimal", decimal),
    ("répétition simple", repetition_simple),
    ("répétition mixte", repetition_mixte),
];

fn signe_chiffres(c: &mut Curseur) -> Option<BigInt> {
    let negatif = c.signe();
    let n = entier_de(&c.chiffres()?);
    Some(if negatif { -n } else { n })
}

fn ratio(c: &mut Curseur) -> Option<Litteral> {
    let numerateur = signe_chiffres(c)?;
    if !c.car('/') {
        return None;
    }
    let denominateur = signe_chiffres(c)?;
    Some(Litteral::Ratio {
        numerateur,
        denominateur,
    })
}

fn decimal(c: &mut Curseur) -> Option<Litteral> {
    let negatif = c.signe();
    let entier = c.chiffres()?;
    let fixes = if c.car('.') {
        c.chiffres()?
    } else {
        String::new()
    };
    Some(Litteral::Decimal {
        negatif,
        entier,
        fixes,
        repetes: String::new(),
    })
}

fn repetition_simple(c: &mut Curseur) -> Option<Litteral> {
    let negatif = c.signe();
    let entier = c.chiffres()?;
    if !c.car('.') {
        return None;
    }
    let repetes = c.chiffres()?;
    if !c.ellipse() {
        return None;
    }
    Some(Litteral::Decimal {
        negatif,
        entier,
        fixes: String::new(),
        repetes,
    })
}

fn repetition_mixte(c: &mut Curseur) -> Option<Litteral> {
    let negatif = c.signe();
    let entier = c.chiffres()?;
    if !c.car('.') {
        return None;
    }
    let fixes = c.chiffres()?;
    if !c.car('_') {
        return None;
    }
    let repetes = c.chiffres()?;
    if !c.ellipse() {
        return None;
    }
    Some(Litteral::Decimal {
        negatif,
        entier,
        fixes,
        repetes,
    })
}

/// Lit une chaîne selon les quatre grammaires ; correspondance partielle = erreur.
pub fn lire(s: &str) -> Result<Litteral> {
    for (nom, grammaire) in GRAMMAIRES {
        let mut c = Curseur::new(s);
        if let Some(lit) = grammaire(&mut c) {
            if c.fin() {
                return Ok(lit);
            }
            trace!(entree = s, grammaire = nom, "correspondance partielle");
        }
    }
    Err(FracError::Format(format!("{s:?} n’est pas un nombre reconnu")))
}
