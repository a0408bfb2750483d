// src/noyau/valeur.rs
//
// Valeur intermédiaire du calcul.
// - Exact  : rationnel exact (+ - * / et puissances entières bornées)
// - Approx : f64, seulement quand l’exact est impossible (exposant non entier)
//            ou trop coûteux (exposant énorme)
//
// IMPORTANT : une fois Approx, on reste Approx (pas de retour vers l’exact).

use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use super::erreur::ErreurEval;

/// Au-delà, la puissance exacte est calculée en f64 (anti-gel).
const EXPOSANT_EXACT_MAX: u64 = 4096;

/// Taille max (en bits) estimée pour un résultat de puissance exacte.
const BITS_PUISSANCE_MAX: u64 = 1 << 20;

#[derive(Clone, Debug, PartialEq)]
pub enum Valeur {
    Exact(BigRational),
    Approx(f64),
}

impl Valeur {
    pub fn to_f64(&self) -> f64 {
        match self {
            Valeur::Exact(r) => r.to_f64().unwrap_or(f64::NAN),
            Valeur::Approx(x) => *x,
        }
    }

    pub fn neg(self) -> Valeur {
        match self {
            Valeur::Exact(r) => Valeur::Exact(-r),
            Valeur::Approx(x) => Valeur::Approx(-x),
        }
    }

    pub fn add(self, b: Valeur) -> Valeur {
        match (self, b) {
            (Valeur::Exact(x), Valeur::Exact(y)) => Valeur::Exact(x + y),
            (a, b) => Valeur::Approx(a.to_f64() + b.to_f64()),
        }
    }

    pub fn sub(self, b: Valeur) -> Valeur {
        match (self, b) {
            (Valeur::Exact(x), Valeur::Exact(y)) => Valeur::Exact(x - y),
            (a, b) => Valeur::Approx(a.to_f64() - b.to_f64()),
        }
    }

    pub fn mul(self, b: Valeur) -> Valeur {
        match (self, b) {
            (Valeur::Exact(x), Valeur::Exact(y)) => Valeur::Exact(x * y),
            (a, b) => Valeur::Approx(a.to_f64() * b.to_f64()),
        }
    }

    /// Division : zéro exact au dénominateur => erreur immédiate.
    /// En Approx, on laisse f64 produire inf/NaN (refusé à la fin).
    pub fn div(self, b: Valeur) -> Result<Valeur, ErreurEval> {
        match (self, b) {
            (Valeur::Exact(_), Valeur::Exact(y)) if y.is_zero() => Err(ErreurEval::DivisionParZero),
            (Valeur::Exact(x), Valeur::Exact(y)) => Ok(Valeur::Exact(x / y)),
            (a, b) => Ok(Valeur::Approx(a.to_f64() / b.to_f64())),
        }
    }

    pub fn pow(self, e: Valeur) -> Result<Valeur, ErreurEval> {
        if let (Valeur::Exact(base), Valeur::Exact(exp)) = (&self, &e) {
            if let Some(n) = exposant_entier_borne(base, exp) {
                if n >= 0 {
                    return Ok(Valeur::Exact(base.pow(n)));
                }
                if base.is_zero() {
                    return Err(ErreurEval::DivisionParZero);
                }
                // recip() garde le dénominateur positif
                return Ok(Valeur::Exact(base.recip().pow(-n)));
            }
        }
        Ok(Valeur::Approx(self.to_f64().powf(e.to_f64())))
    }
}

/// Exposant utilisable en exact : entier, borné, et résultat de taille raisonnable.
fn exposant_entier_borne(base: &BigRational, exp: &BigRational) -> Option<i32> {
    if !exp.is_integer() {
        return None;
    }

    let n = exp.to_integer();
    let abs = n.abs().to_u64()?;
    if abs > EXPOSANT_EXACT_MAX {
        return None;
    }

    let bits = base.numer().bits().max(base.denom().bits());
    if bits.saturating_mul(abs) > BITS_PUISSANCE_MAX {
        return None;
    }

    n.to_i32()
}
