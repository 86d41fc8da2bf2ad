// src/noyau/cache.rs
//
// Cache des valeurs canoniques : (n, d) réduit -> Frac déjà construite.
// Deux constructions de la même valeur partagent alors le même stockage
// (et donc le développement décimal / flottant déjà calculé).
//
// Pur confort : l’égalité reste structurelle, rien ne dépend de l’identité.
// - jamais vidé
// - lecture-vérification-insertion sous un seul verrou (pas d’entrées divergentes)
// - instance processus (global) ou instance possédée par l’appelant

use num_bigint::BigInt;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock};
use tracing::debug;

use super::erreur::Result;
use super::fraction::Frac;
use super::operande::Operande;

type Clef = (BigInt, BigInt);

#[derive(Default)]
pub struct CacheCanonique {
    table: Mutex<HashMap<Clef, Frac>>,
}

static CACHE_GLOBAL: OnceLock<CacheCanonique> = OnceLock::new();

impl CacheCanonique {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global() -> &'static CacheCanonique {
        CACHE_GLOBAL.get_or_init(CacheCanonique::new)
    }

    fn verrou(&self) -> MutexGuard<'_, HashMap<Clef, Frac>> {
        // la table reste cohérente entre deux instructions : un verrou empoisonné est récupérable
        self.table.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Renvoie la valeur déjà connue pour cette paire, sinon enregistre `v`.
    pub fn intern(&self, v: Frac) -> Frac {
        let clef = (v.numerator().clone(), v.denominator().clone());
        let mut table = self.verrou();
        match table.entry(clef) {
            Entry::Occupied(e) => e.get().clone(),
            Entry::Vacant(e) => {
                debug!(valeur = %v, "nouvelle valeur canonique");
                e.insert(v).clone()
            }
        }
    }

    pub fn reduce(&self, numerateur: BigInt, denominateur: BigInt) -> Result<Frac> {
        Ok(self.intern(Frac::reduce(numerateur, denominateur)?))
    }

    pub fn new_frac(&self, a: impl Into<Operande>) -> Result<Frac> {
        Ok(self.intern(Frac::new(a)?))
    }

    pub fn ratio(&self, a: impl Into<Operande>, b: impl Into<Operande>) -> Result<Frac> {
        Ok(self.intern(Frac::ratio(a, b)?))
    }

    pub fn len(&self) -> usize {
        self.verrou().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
