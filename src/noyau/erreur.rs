// src/noyau/erreur.rs
//
// Erreur d’évaluation unique côté appelant (affichée "Error"),
// mais typée côté Rust pour les tests et les journaux.

use thiserror::Error;

/// Texte affiché à la place d’un résultat quand l’évaluation échoue.
pub const MARQUEUR_ERREUR: &str = "Error";

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurEval {
    #[error("caractère interdit: '{0}'")]
    CaractereInterdit(char),

    #[error("jeton inattendu: {0}")]
    JetonInattendu(String),

    #[error("expression incomplète")]
    FinInattendue,

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseOrpheline,

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("résultat non fini")]
    NonFini,
}
