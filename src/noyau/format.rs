// src/noyau/format.rs

use num_bigint::BigInt;
use num_traits::One;
use std::fmt;

use super::periode::Expansion;

/* ------------------------ Helpers rationnels ------------------------ */

/// n si d = 1, sinon n/d (relisible par la grammaire ratio).
pub fn format_rat_pretty(n: &BigInt, d: &BigInt) -> String {
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/* ------------------------ Développement décimal ------------------------ */

/// 4/2    -> 2.0
/// 1/8    -> 0.125
/// 1/3    -> 0.3...
/// 1/6    -> 0.1_6...
/// 22/700 -> 0.03_142857...
/// -1/3   -> -0.3...
impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negatif {
            f.write_str("-")?;
        }
        write!(f, "{}.", self.entier)?;

        if self.est_entiere() {
            return f.write_str("0");
        }

        f.write_str(&self.fixes)?;
        if self.est_periodique() {
            if !self.fixes.is_empty() {
                f.write_str("_")?;
            }
            write!(f, "{}...", self.repetes)?;
        }
        Ok(())
    }
}
