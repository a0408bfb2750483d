//! src/app/config.rs
//!
//! Configuration utilisateur (TOML), toujours optionnelle.
//!
//! Contrats :
//! - Fichier absent => valeurs par défaut, sans bruit.
//! - Fichier illisible / invalide => journal `warn` + valeurs par défaut (jamais fatal).
//! - Clés inconnues refusées (faute de frappe visible plutôt qu’ignorée).

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Couleur d’accent par défaut (violet “verre”).
pub const COULEUR_ACCENT_DEFAUT: &str = "#9d00ff";

const HISTORIQUE_MAX_DEFAUT: usize = 50;

/// Garde-fou : un historique énorme ralentirait l’affichage.
const HISTORIQUE_MAX_BORNE: usize = 1000;

#[derive(Error, Debug)]
pub enum ErreurConfig {
    #[error("lecture de {chemin}: {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML invalide: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Couleur hexadécimale "#rrggbb" (touche "=" + halo du résultat).
    pub couleur_accent: String,
    /// Nombre de calculs gardés (0 = pas d’historique).
    pub historique_max: usize,
    /// Sauvegarde de l’historique entre deux sessions.
    pub historique_persistant: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            couleur_accent: COULEUR_ACCENT_DEFAUT.to_string(),
            historique_max: HISTORIQUE_MAX_DEFAUT,
            historique_persistant: true,
        }
    }
}

impl Config {
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurConfig> {
        let mut c: Config = toml::from_str(texte)?;
        c.historique_max = c.historique_max.min(HISTORIQUE_MAX_BORNE);
        Ok(c)
    }

    pub fn lire(chemin: &Path) -> Result<Self, ErreurConfig> {
        let texte = std::fs::read_to_string(chemin).map_err(|source| ErreurConfig::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        Self::depuis_toml(&texte)
    }

    /// Chargement “best effort” : ne renvoie jamais d’erreur.
    pub fn charger(chemin: &Path) -> Self {
        if !chemin.exists() {
            return Self::default();
        }
        match Self::lire(chemin) {
            Ok(c) => {
                info!("config chargée depuis {}", chemin.display());
                c
            }
            Err(e) => {
                warn!("config ignorée ({e}), valeurs par défaut");
                Self::default()
            }
        }
    }

    /// `<config_dir>/calculatrice-verre/config.toml`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn chemin_defaut() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("calculatrice-verre").join("config.toml"))
    }

    /// Couleur d’accent en RGB ; valeur invalide => couleur par défaut.
    pub fn accent_rgb(&self) -> [u8; 3] {
        parse_hex(&self.couleur_accent)
            .or_else(|| parse_hex(COULEUR_ACCENT_DEFAUT))
            .unwrap_or([0x9d, 0x00, 0xff])
    }
}

/// "#rrggbb" ou "rrggbb" -> [r, g, b]
fn parse_hex(s: &str) -> Option<[u8; 3]> {
    let h = s.trim().strip_prefix('#').unwrap_or(s.trim());
    if h.len() != 6 || !h.is_ascii() {
        return None;
    }
    let canal = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).ok();
    Some([canal(0)?, canal(2)?, canal(4)?])
}
