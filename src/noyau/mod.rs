//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - erreur.rs   : ErreurEval (affichée "Error")
//! - jetons.rs   : tokenisation (nombres décimaux exacts)
//! - rpn.rs      : shunting-yard + évaluation de la RPN
//! - valeur.rs   : arithmétique exacte (rationnels), repli f64
//! - eval.rs     : pipeline complet (normalisation + liste blanche)
//! - format.rs   : affichage (séparateurs de milliers)
//! - saisie.rs   : construction de l’expression touche par touche

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod saisie;
pub mod valeur;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::eval_expression;
pub use format::format_affichage;
pub use saisie::Saisie;
