//! Noyau — évaluation (pipeline réel)
//!
//! normalise -> liste blanche -> jetons -> RPN -> Valeur (exacte si possible) -> f64 fini
//!
//! Jamais de panique, jamais d’exception côté appelant : tout échec devient `ErreurEval`.

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

lazy_static! {
    /// Caractères admis APRÈS normalisation (× ÷ ^ % déjà substitués).
    static ref LISTE_BLANCHE: Regex = Regex::new(r"^[0-9+\-*/()%. ]*$").unwrap();
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub normalisee: String,
    pub jetons: String,
    pub rpn: String,
}

/// Remplace les glyphes d’affichage par leur forme canonique.
///
/// `%` est une substitution textuelle ("*0.01"), pas un opérateur :
/// "50+10%" devient "50+10*0.01" (= 50.1), "5%3" devient "5*0.013".
pub fn normalise(s: &str) -> String {
    s.replace('×', "*")
        .replace('÷', "/")
        .replace('^', "**")
        .replace('%', "*0.01")
}

/// API publique : évalue une expression et retourne un nombre fini.
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurEval> {
    eval_avec_demarche(expr_str).0
}

/// Comme `eval_expression`, mais conserve la démarche (pour le panneau “Démarche”).
/// La démarche est partielle si l’évaluation échoue en route.
pub fn eval_avec_demarche(expr_str: &str) -> (Result<f64, ErreurEval>, Demarche) {
    let mut d = Demarche::default();
    let res = pipeline(expr_str, &mut d);

    match &res {
        Ok(v) => trace!("eval {expr_str:?} -> {v}"),
        Err(e) => debug!("eval {expr_str:?} refusée: {e}"),
    }

    (res, d)
}

fn pipeline(expr_str: &str, d: &mut Demarche) -> Result<f64, ErreurEval> {
    // 1) Normalisation
    let normalisee = normalise(expr_str);
    let s = normalisee.trim();
    d.normalisee = s.to_string();

    // 2) Liste blanche (seule garde contre les entrées arbitraires)
    if !LISTE_BLANCHE.is_match(s) {
        let c = s
            .chars()
            .find(|c| !c.is_ascii_digit() && !"+-*/()%. ".contains(*c))
            .unwrap_or('?');
        return Err(ErreurEval::CaractereInterdit(c));
    }

    // 3) Vide => 0
    if s.is_empty() {
        return Ok(0.0);
    }

    // 4) Jetons + RPN
    let jetons = tokenize(s)?;
    d.jetons = format_tokens(&jetons);

    let rpn = to_rpn(&jetons)?;
    d.rpn = format_tokens(&rpn);

    // 5) Calcul puis contrôle de finitude
    let v = eval_rpn(&rpn)?.to_f64();
    if !v.is_finite() {
        return Err(ErreurEval::NonFini);
    }

    // -0 n’a pas de sens pour l’utilisateur
    Ok(if v == 0.0 { 0.0 } else { v })
}
