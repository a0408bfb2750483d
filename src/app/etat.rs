//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la saisie (unique propriétaire des mutations), l’historique
//! et les réglages d’affichage, et offrir les actions des touches.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `noyau::Saisie`.
//! - Un calcul refusé ne touche ni à l’entrée ni à l’historique.
//! - Historique sauvegardé après chaque ajout (si un chemin est fourni).

use std::path::PathBuf;

use super::clavier::Commande;
use super::config::Config;
use super::historique::Historique;
use crate::noyau::format::nombre_en_texte;
use crate::noyau::{ErreurEval, Saisie};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur + résultat en direct ---
    pub saisie: Saisie,

    // --- historique ---
    pub historique: Historique,
    /// None => pas de persistance (wasm, `--sans-historique`, ou config).
    pub chemin_historique: Option<PathBuf>,

    // --- affichage ---
    pub accent: [u8; 3],
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Config::default(), None)
    }
}

impl AppCalc {
    pub fn new(config: &Config, chemin_historique: Option<PathBuf>) -> Self {
        let chemin_historique = chemin_historique.filter(|_| config.historique_persistant);
        let historique = match &chemin_historique {
            Some(chemin) => Historique::charger(chemin, config.historique_max),
            None => Historique::new(config.historique_max),
        };

        Self {
            saisie: Saisie::default(),
            historique,
            chemin_historique,
            accent: config.accent_rgb(),
        }
    }

    /* ------------------------ Actions “touches” ------------------------ */

    pub fn executer(&mut self, cmd: Commande) {
        match cmd {
            Commande::Ajouter(c) => {
                let mut buf = [0u8; 4];
                self.saisie.ajouter(c.encode_utf8(&mut buf));
            }
            Commande::Calculer => {
                // l’erreur reste visible via saisie.resultat()
                let _ = self.calculer();
            }
            Commande::EffacerDernier => self.saisie.effacer_dernier(),
            Commande::Effacer => self.clear_entree(),
        }
    }

    /// "=" : calcule, et garde la trace si le calcul a réellement transformé l’entrée.
    pub fn calculer(&mut self) -> Result<f64, ErreurEval> {
        let expression = self.saisie.expression().to_string();
        let v = self.saisie.calculer()?;

        if !expression.is_empty() && expression != nombre_en_texte(v) {
            self.historique.ajouter(expression, v);
            if let Some(chemin) = &self.chemin_historique {
                self.historique.sauver(chemin);
            }
        }
        Ok(v)
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.saisie.clear_entree();
    }

    /// Remet une expression de l’historique dans l’entrée.
    pub fn rappeler(&mut self, index: usize) {
        if let Some(e) = self.historique.get(index) {
            let expression = e.expression.clone();
            self.saisie.remplacer(expression);
        }
    }

    pub fn vider_historique(&mut self) {
        self.historique.vider();
        if let Some(chemin) = &self.chemin_historique {
            self.historique.sauver(chemin);
        }
    }
}
