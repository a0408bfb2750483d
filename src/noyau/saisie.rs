//! Saisie : construction incrémentale de l’expression (touche par touche).
//!
//! Contrats :
//! - Aucune erreur levée à la saisie : la validation est entièrement faite par `eval`.
//! - Les règles d’édition empêchent seulement deux motifs mal formés :
//!   opérateurs consécutifs et double point décimal dans un même nombre.
//! - Le résultat est recalculé après CHAQUE mutation (affichage en direct).

use log::debug;

use super::erreur::ErreurEval;
use super::eval::{eval_avec_demarche, Demarche};
use super::format::nombre_en_texte;

/// Opérateurs binaires : un nouvel opérateur remplace le précédent.
const OPERATEURS: [char; 8] = ['+', '-', '*', '/', '×', '÷', '%', '^'];

/// Séparateurs utilisés pour isoler le nombre en cours (règle du point décimal).
const SEPARATEURS_NOMBRE: [char; 5] = ['+', '-', '*', '/', '^'];

fn est_operateur(jeton: &str) -> bool {
    let mut it = jeton.chars();
    matches!((it.next(), it.next()), (Some(c), None) if OPERATEURS.contains(&c))
}

#[derive(Clone, Debug)]
pub struct Saisie {
    expression: String,
    resultat: Result<f64, ErreurEval>,
    demarche: Demarche,
}

impl Default for Saisie {
    fn default() -> Self {
        Self {
            expression: String::new(),
            resultat: Ok(0.0),
            demarche: Demarche::default(),
        }
    }
}

impl Saisie {
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Résultat en direct de l’expression courante (0 si vide).
    pub fn resultat(&self) -> &Result<f64, ErreurEval> {
        &self.resultat
    }

    pub fn demarche(&self) -> &Demarche {
        &self.demarche
    }

    /// Ajoute un jeton (chiffre, opérateur, point, parenthèse, ou texte pré-composé).
    pub fn ajouter(&mut self, jeton: &str) {
        let dernier = self.expression.chars().last();

        // Opérateur après opérateur : le dernier écrit gagne
        if est_operateur(jeton) && dernier.is_some_and(|c| OPERATEURS.contains(&c)) {
            self.expression.pop();
            self.expression.push_str(jeton);
            self.reevaluer();
            return;
        }

        // Point décimal : refusé si le nombre en cours en contient déjà un
        if jeton == "." {
            let nombre_courant = self
                .expression
                .rsplit(|c: char| SEPARATEURS_NOMBRE.contains(&c))
                .next()
                .unwrap_or("");
            if nombre_courant.contains('.') {
                return;
            }
        }

        // '%' après un chiffre : ajout direct (sera lu "*0.01" à l’évaluation)
        self.expression.push_str(jeton);
        self.reevaluer();
    }

    /// Retire le dernier caractère (sans effet si l’expression est vide).
    pub fn effacer_dernier(&mut self) {
        if self.expression.pop().is_some() {
            self.reevaluer();
        }
    }

    /// C : vide l’expression.
    pub fn clear_entree(&mut self) {
        self.expression.clear();
        self.reevaluer();
    }

    /// Remplace l’expression entière (ex: rappel depuis l’historique).
    pub fn remplacer(&mut self, expression: impl Into<String>) {
        self.expression = expression.into();
        self.reevaluer();
    }

    /// "=" : en cas de succès, le résultat devient la nouvelle expression.
    /// En cas d’erreur, l’expression est conservée pour correction.
    pub fn calculer(&mut self) -> Result<f64, ErreurEval> {
        let (res, _d) = eval_avec_demarche(&self.expression);
        match &res {
            Ok(v) => {
                debug!("calcul {:?} = {v}", self.expression);
                self.expression = nombre_en_texte(*v);
                self.reevaluer();
            }
            Err(e) => debug!("calcul {:?} refusé: {e}", self.expression),
        }
        res
    }

    fn reevaluer(&mut self) {
        if self.expression.is_empty() {
            self.resultat = Ok(0.0);
            self.demarche = Demarche::default();
            return;
        }
        let (res, d) = eval_avec_demarche(&self.expression);
        self.resultat = res;
        self.demarche = d;
    }
}
