//! src/app/clavier.rs
//!
//! Traduction clavier -> commandes de la calculatrice.
//! Même alphabet que le pavé à l’écran : tout le reste est ignoré.

use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Ajouter(char),
    Calculer,
    EffacerDernier,
    Effacer,
}

/// Caractère tapé -> commande ('=' évalue, comme Entrée).
pub fn commande_pour_caractere(c: char) -> Option<Commande> {
    match c {
        '0'..='9' | '+' | '-' | '*' | '/' | '.' | '%' | '^' => Some(Commande::Ajouter(c)),
        '=' => Some(Commande::Calculer),
        _ => None,
    }
}

/// Touche “non texte” -> commande.
pub fn commande_pour_touche(key: egui::Key) -> Option<Commande> {
    match key {
        egui::Key::Enter => Some(Commande::Calculer),
        egui::Key::Backspace | egui::Key::Delete => Some(Commande::EffacerDernier),
        egui::Key::Escape => Some(Commande::Effacer),
        _ => None,
    }
}

/// Commandes issues des événements d’une frame, dans l’ordre de frappe.
///
/// Les caractères passent par `Event::Text` (disposition clavier respectée),
/// les touches d’édition par `Event::Key` (appui seulement).
pub fn commandes_du_cadre(events: &[egui::Event]) -> Vec<Commande> {
    let mut out = Vec::new();
    for ev in events {
        match ev {
            egui::Event::Text(t) => out.extend(t.chars().filter_map(commande_pour_caractere)),
            egui::Event::Key {
                key, pressed: true, ..
            } => out.extend(commande_pour_touche(*key)),
            _ => {}
        }
    }
    out
}
