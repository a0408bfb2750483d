//! src/app/historique.rs
//!
//! Historique des calculs réussis (le plus récent en tête), borné.
//! Persistance “best effort” en JSON : un échec est journalisé puis ignoré.

use std::collections::VecDeque;
use std::path::Path;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entree {
    pub expression: String,
    pub resultat: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: VecDeque<Entree>,
    max: usize,
}

impl Historique {
    pub fn new(max: usize) -> Self {
        Self {
            entrees: VecDeque::with_capacity(max.min(64)),
            max,
        }
    }

    pub fn ajouter(&mut self, expression: impl Into<String>, resultat: f64) {
        if self.max == 0 {
            return;
        }
        self.entrees.push_front(Entree {
            expression: expression.into(),
            resultat,
        });
        self.entrees.truncate(self.max);
    }

    pub fn entrees(&self) -> impl Iterator<Item = &Entree> {
        self.entrees.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Entree> {
        self.entrees.get(index)
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    pub fn vers_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entrees)
    }

    /// Les entrées en trop (fichier écrit avec un `max` plus grand) sont coupées.
    pub fn depuis_json(texte: &str, max: usize) -> serde_json::Result<Self> {
        let mut entrees: VecDeque<Entree> = serde_json::from_str(texte)?;
        entrees.retain(|e| e.resultat.is_finite());
        entrees.truncate(max);
        Ok(Self { entrees, max })
    }

    /// Chargement “best effort” : fichier absent ou corrompu => historique vide.
    pub fn charger(chemin: &Path, max: usize) -> Self {
        let texte = match std::fs::read_to_string(chemin) {
            Ok(t) => t,
            Err(e) => {
                debug!("pas d’historique lu ({}): {e}", chemin.display());
                return Self::new(max);
            }
        };
        match Self::depuis_json(&texte, max) {
            Ok(h) => h,
            Err(e) => {
                warn!("historique corrompu ignoré ({}): {e}", chemin.display());
                Self::new(max)
            }
        }
    }

    pub fn sauver(&self, chemin: &Path) {
        let json = match self.vers_json() {
            Ok(j) => j,
            Err(e) => {
                warn!("historique non sérialisé: {e}");
                return;
            }
        };
        if let Some(dossier) = chemin.parent() {
            if let Err(e) = std::fs::create_dir_all(dossier) {
                warn!("dossier d’historique non créé ({}): {e}", dossier.display());
                return;
            }
        }
        if let Err(e) = std::fs::write(chemin, json) {
            warn!("historique non sauvegardé ({}): {e}", chemin.display());
        }
    }

    /// `<data_dir>/calculatrice-verre/historique.json`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn chemin_defaut() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("calculatrice-verre").join("historique.json"))
    }
}
